use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::grocery::ports::GroceryCatalog;
use crate::domain::grocery::value_objects::GroceryCatalogEntry;

/// The fixed grocery-items table backing the catalog-driven list variant.
#[derive(Debug, Clone)]
pub struct InMemoryGroceryCatalog {
    entries: Vec<GroceryCatalogEntry>,
}

impl InMemoryGroceryCatalog {
    pub fn new() -> Self {
        let entries = vec![
            GroceryCatalogEntry {
                name: "Salmon".to_string(),
                quantity: "1 kg".to_string(),
                category: "Protein".to_string(),
            },
            GroceryCatalogEntry {
                name: "Mixed Vegetables".to_string(),
                quantity: "500g".to_string(),
                category: "Vegetables".to_string(),
            },
            GroceryCatalogEntry {
                name: "Quinoa".to_string(),
                quantity: "500g".to_string(),
                category: "Grains".to_string(),
            },
        ];

        Self { entries }
    }
}

impl Default for InMemoryGroceryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl GroceryCatalog for InMemoryGroceryCatalog {
    fn entries(&self) -> Result<Vec<GroceryCatalogEntry>, CoreError> {
        Ok(self.entries.clone())
    }
}
