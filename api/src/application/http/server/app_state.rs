use std::sync::Arc;

use recipe_planner_core::application::RecipePlannerService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<RecipePlannerService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipePlannerService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
