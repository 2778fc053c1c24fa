//! Dietary filter flags passed to the recipe generator.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One dietary requirement a generated recipe should meet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietaryFilter {
    Vegetarian,
    Vegan,
    GlutenFree,
    Keto,
    LowCarb,
}

impl DietaryFilter {
    /// Every filter, in the order they are presented and prompted.
    pub const ALL: [DietaryFilter; 5] = [
        DietaryFilter::Vegetarian,
        DietaryFilter::Vegan,
        DietaryFilter::GlutenFree,
        DietaryFilter::Keto,
        DietaryFilter::LowCarb,
    ];

    /// Storage key, also accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryFilter::Vegetarian => "vegetarian",
            DietaryFilter::Vegan => "vegan",
            DietaryFilter::GlutenFree => "gluten_free",
            DietaryFilter::Keto => "keto",
            DietaryFilter::LowCarb => "low_carb",
        }
    }

    /// Title-cased name used in prompts and listings.
    pub fn label(&self) -> &'static str {
        match self {
            DietaryFilter::Vegetarian => "Vegetarian",
            DietaryFilter::Vegan => "Vegan",
            DietaryFilter::GlutenFree => "Gluten Free",
            DietaryFilter::Keto => "Keto",
            DietaryFilter::LowCarb => "Low Carb",
        }
    }
}

impl FromStr for DietaryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "vegetarian" => Ok(DietaryFilter::Vegetarian),
            "vegan" => Ok(DietaryFilter::Vegan),
            "gluten_free" | "glutenfree" => Ok(DietaryFilter::GlutenFree),
            "keto" => Ok(DietaryFilter::Keto),
            "low_carb" | "lowcarb" => Ok(DietaryFilter::LowCarb),
            _ => Err(format!("Invalid dietary filter: {s}")),
        }
    }
}

/// Set of dietary filters, one flag per [`DietaryFilter`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DietaryFilters {
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub keto: bool,
    #[serde(default)]
    pub low_carb: bool,
}

impl DietaryFilters {
    pub fn contains(&self, filter: DietaryFilter) -> bool {
        match filter {
            DietaryFilter::Vegetarian => self.vegetarian,
            DietaryFilter::Vegan => self.vegan,
            DietaryFilter::GlutenFree => self.gluten_free,
            DietaryFilter::Keto => self.keto,
            DietaryFilter::LowCarb => self.low_carb,
        }
    }

    pub fn set(&mut self, filter: DietaryFilter, enabled: bool) {
        let flag = match filter {
            DietaryFilter::Vegetarian => &mut self.vegetarian,
            DietaryFilter::Vegan => &mut self.vegan,
            DietaryFilter::GlutenFree => &mut self.gluten_free,
            DietaryFilter::Keto => &mut self.keto,
            DietaryFilter::LowCarb => &mut self.low_carb,
        };
        *flag = enabled;
    }

    /// Enabled filters in canonical order.
    pub fn active(&self) -> Vec<DietaryFilter> {
        DietaryFilter::ALL
            .into_iter()
            .filter(|filter| self.contains(*filter))
            .collect()
    }

    /// Labels of the enabled filters, e.g. `["Vegan", "Gluten Free"]`.
    pub fn labels(&self) -> Vec<&'static str> {
        self.active().iter().map(DietaryFilter::label).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }
}

impl FromIterator<DietaryFilter> for DietaryFilters {
    fn from_iter<I: IntoIterator<Item = DietaryFilter>>(iter: I) -> Self {
        let mut filters = DietaryFilters::default();
        for filter in iter {
            filters.set(filter, true);
        }
        filters
    }
}
