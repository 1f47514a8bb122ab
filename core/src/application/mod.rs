use crate::domain::common::services::Service;
use crate::infrastructure::{
    grocery::in_memory::InMemoryGroceryCatalog, recipe::in_memory::InMemoryRecipeCatalog,
};

pub type RecipePlannerService = Service<InMemoryRecipeCatalog, InMemoryGroceryCatalog>;

/// Wires the domain service to the in-memory catalogs.
pub fn create_service() -> RecipePlannerService {
    Service::new(InMemoryRecipeCatalog::new(), InMemoryGroceryCatalog::new())
}
