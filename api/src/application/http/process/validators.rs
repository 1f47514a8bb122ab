use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProcessRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "input_text must be between 1 and 5000 characters"
    ))]
    pub input_text: String,
}
