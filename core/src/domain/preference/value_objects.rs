use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw, caller-supplied preference data. Validated into
/// [`UserPreferences`](crate::domain::preference::entities::UserPreferences)
/// before it reaches the matcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreferencesInput {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    #[serde(default)]
    pub meal_types: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub max_calories: i32,
    pub min_protein: f64,
    pub max_fat: f64,
}
