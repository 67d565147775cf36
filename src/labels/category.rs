//! Disaster categories.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Label assigned to a post.
///
/// [Category::NotRelevant] is the default label: it is what the classifier
/// returns when no keyword rule matches. The other eleven variants cover the
/// disaster types the annotation project cares about. Wire form is the
/// snake_case label (see [Category::label]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    NotRelevant,
    AutoAccident,
    Fire,
    Flood,
    Earthquake,
    SevereStorm,
    Shooting,
    Tornado,
    Hurricane,
    ExtremeHeat,
    TropicalStorm,
    OtherDisaster,
}

impl Category {
    /// snake_case label used in exports and quota files.
    pub fn label(&self) -> &'static str {
        match self {
            Category::NotRelevant => "not_relevant",
            Category::AutoAccident => "auto_accident",
            Category::Fire => "fire",
            Category::Flood => "flood",
            Category::Earthquake => "earthquake",
            Category::SevereStorm => "severe_storm",
            Category::Shooting => "shooting",
            Category::Tornado => "tornado",
            Category::Hurricane => "hurricane",
            Category::ExtremeHeat => "extreme_heat",
            Category::TropicalStorm => "tropical_storm",
            Category::OtherDisaster => "other_disaster",
        }
    }

    /// Human-readable description, used for documentation and annotation UIs
    /// only. Matching never looks at it.
    pub fn description(&self) -> &'static str {
        match self {
            Category::NotRelevant => {
                "General posts that don't relate to disasters or emergencies"
            }
            Category::AutoAccident => "Car crashes, vehicle collisions, traffic accidents",
            Category::Fire => "Fires, wildfires, building fires, structure fires, explosions",
            Category::Flood => "Flooding, flash floods, water inundation",
            Category::Earthquake => "Earthquakes, tremors, seismic activity",
            Category::SevereStorm => "Severe thunderstorms, hail, lightning, windstorms",
            Category::Shooting => "Mass shootings, gun violence, active shooter situations",
            Category::Tornado => "Tornadoes, funnel clouds, twisters",
            Category::Hurricane => "Hurricanes",
            Category::ExtremeHeat => "Heat waves, extreme temperatures, droughts",
            Category::TropicalStorm => "Tropical storms, tropical cyclones, monsoons, typhoons",
            Category::OtherDisaster => {
                "Other disasters like avalanches, landslides, volcanic eruptions, tsunamis"
            }
        }
    }

    /// Every category, in declaration order.
    pub fn all() -> &'static [Category] {
        &[
            Category::NotRelevant,
            Category::AutoAccident,
            Category::Fire,
            Category::Flood,
            Category::Earthquake,
            Category::SevereStorm,
            Category::Shooting,
            Category::Tornado,
            Category::Hurricane,
            Category::ExtremeHeat,
            Category::TropicalStorm,
            Category::OtherDisaster,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Category;

    #[test]
    fn label_roundtrip() {
        for category in Category::all() {
            let parsed = Category::from_str(category.label()).unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn unknown_label() {
        assert!(Category::from_str("volcano").is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Category::AutoAccident).unwrap();
        assert_eq!(json, "\"auto_accident\"");

        let back: Category = serde_json::from_str("\"severe_storm\"").unwrap();
        assert_eq!(back, Category::SevereStorm);
    }
}
