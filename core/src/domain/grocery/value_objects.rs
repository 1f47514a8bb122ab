use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the fixed grocery-items table, e.g. Salmon / "1 kg" / Protein.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroceryCatalogEntry {
    pub name: String,
    pub quantity: String,
    pub category: String,
}
