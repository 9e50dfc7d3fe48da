//! The fixed spending-category catalog
//!
//! Twelve categories with stable ids 1 through 12, created once at system
//! initialization and never mutated. The engine treats ids as opaque keys;
//! only display-name resolution goes through the catalog, and it does so by
//! keyed lookup rather than positional index arithmetic.

use std::fmt;

use super::ids::CategoryId;

/// One of the twelve fixed spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetCategory {
    Groceries,
    AlcoholTobacco,
    ClothingFootwear,
    HousingUtilities,
    HouseholdGoods,
    Healthcare,
    Transportation,
    Communication,
    RecreationCulture,
    Education,
    DiningLodging,
    Miscellaneous,
}

impl BudgetCategory {
    /// Number of catalog entries
    pub const COUNT: usize = 12;

    /// All categories in catalog order (ascending id)
    pub fn all() -> &'static [Self; Self::COUNT] {
        &[
            Self::Groceries,
            Self::AlcoholTobacco,
            Self::ClothingFootwear,
            Self::HousingUtilities,
            Self::HouseholdGoods,
            Self::Healthcare,
            Self::Transportation,
            Self::Communication,
            Self::RecreationCulture,
            Self::Education,
            Self::DiningLodging,
            Self::Miscellaneous,
        ]
    }

    /// The stable id for this category
    pub fn id(self) -> CategoryId {
        let raw = match self {
            Self::Groceries => 1,
            Self::AlcoholTobacco => 2,
            Self::ClothingFootwear => 3,
            Self::HousingUtilities => 4,
            Self::HouseholdGoods => 5,
            Self::Healthcare => 6,
            Self::Transportation => 7,
            Self::Communication => 8,
            Self::RecreationCulture => 9,
            Self::Education => 10,
            Self::DiningLodging => 11,
            Self::Miscellaneous => 12,
        };
        CategoryId::new(raw)
    }

    /// Resolve a category from its id
    ///
    /// Keyed lookup: unknown ids resolve to `None` instead of panicking or
    /// aliasing a neighbouring entry.
    pub fn from_id(id: CategoryId) -> Option<Self> {
        match id.raw() {
            1 => Some(Self::Groceries),
            2 => Some(Self::AlcoholTobacco),
            3 => Some(Self::ClothingFootwear),
            4 => Some(Self::HousingUtilities),
            5 => Some(Self::HouseholdGoods),
            6 => Some(Self::Healthcare),
            7 => Some(Self::Transportation),
            8 => Some(Self::Communication),
            9 => Some(Self::RecreationCulture),
            10 => Some(Self::Education),
            11 => Some(Self::DiningLodging),
            12 => Some(Self::Miscellaneous),
            _ => None,
        }
    }

    /// Display name for this category
    pub fn name(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::AlcoholTobacco => "Alcohol & Tobacco",
            Self::ClothingFootwear => "Clothing & Footwear",
            Self::HousingUtilities => "Housing & Utilities",
            Self::HouseholdGoods => "Household Goods & Services",
            Self::Healthcare => "Healthcare",
            Self::Transportation => "Transportation",
            Self::Communication => "Communication",
            Self::RecreationCulture => "Recreation & Culture",
            Self::Education => "Education",
            Self::DiningLodging => "Dining & Lodging",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// The last catalog entry (highest id); rounding residuals land here
    pub fn last() -> Self {
        Self::Miscellaneous
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
