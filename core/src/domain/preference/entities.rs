use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::preference::value_objects::PreferencesInput;

/// Closed vocabulary of supported dietary restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    Vegetarian,
    Vegan,
    GlutenFree,
    Kosher,
    Halal,
    DiabeticFriendly,
    LowSodium,
}

impl DietaryRestriction {
    pub const ALL: [DietaryRestriction; 7] = [
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::GlutenFree,
        DietaryRestriction::Kosher,
        DietaryRestriction::Halal,
        DietaryRestriction::DiabeticFriendly,
        DietaryRestriction::LowSodium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::GlutenFree => "gluten_free",
            DietaryRestriction::Kosher => "kosher",
            DietaryRestriction::Halal => "halal",
            DietaryRestriction::DiabeticFriendly => "diabetic_friendly",
            DietaryRestriction::LowSodium => "low_sodium",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryRestriction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DietaryRestriction::ALL
            .into_iter()
            .find(|restriction| restriction.as_str() == s)
            .ok_or_else(|| {
                CoreError::validation(
                    "dietary_restrictions",
                    format!("unknown dietary restriction: {s}"),
                )
            })
    }
}

/// A user's validated constraints for one planning session.
///
/// Built only through [`UserPreferences::try_from`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserPreferences {
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub preferred_cuisines: Vec<String>,
    pub meal_types: Vec<String>,
    pub allergies: Vec<String>,
    pub max_calories: i32,
    pub min_protein: f64,
    pub max_fat: f64,
}

impl TryFrom<PreferencesInput> for UserPreferences {
    type Error = CoreError;

    fn try_from(input: PreferencesInput) -> Result<Self, Self::Error> {
        let dietary_restrictions = input
            .dietary_restrictions
            .iter()
            .map(|raw| raw.parse::<DietaryRestriction>())
            .collect::<Result<Vec<_>, _>>()?;

        for allergy in &input.allergies {
            if allergy.is_empty() || !allergy.chars().all(char::is_alphabetic) {
                return Err(CoreError::validation(
                    "allergies",
                    format!("allergy must be alphabetic: {allergy:?}"),
                ));
            }
        }

        tracing::debug!(
            restrictions = dietary_restrictions.len(),
            cuisines = input.preferred_cuisines.len(),
            "validated user preferences"
        );

        Ok(Self {
            dietary_restrictions,
            preferred_cuisines: input.preferred_cuisines,
            meal_types: input.meal_types,
            allergies: input.allergies,
            max_calories: input.max_calories,
            min_protein: input.min_protein,
            max_fat: input.max_fat,
        })
    }
}
