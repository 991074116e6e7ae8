//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use nutri::FoodItem;

use super::root::{HealthCheck, RootMessage};
use crate::error::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::root::root,
        super::root::health_check,
        super::food::search_food,
    ),
    components(schemas(FoodItem, ErrorBody, HealthCheck, RootMessage)),
    tags(
        (name = "Root", description = "Banner and health"),
        (name = "Food", description = "Food search backed by the Edamam Food Database")
    ),
    info(
        title = "Nutri API",
        description = "Food search proxy returning normalized nutrition records"
    )
)]
pub struct ApiDoc;
