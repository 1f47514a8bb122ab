use utoipa::OpenApi;

use crate::application::http::{
    grocery::router::GroceryApiDoc, health::HealthApiDoc, process::router::ProcessApiDoc,
    recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Recipe Planner API",
        description = "Matches dietary preferences against a recipe catalog and derives grocery lists."
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "process", description = "Free-text processing"),
        (name = "recipes", description = "Recipe catalog and matching"),
        (name = "grocery", description = "Grocery list generation")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        doc.merge(HealthApiDoc::openapi());
        doc.merge(ProcessApiDoc::openapi());
        doc.merge(RecipeApiDoc::openapi());
        doc.merge(GroceryApiDoc::openapi());
        doc
    }
}
