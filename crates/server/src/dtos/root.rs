use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AboutResponse {
    pub name: String,
    pub version: String,
    pub description: String,
}
