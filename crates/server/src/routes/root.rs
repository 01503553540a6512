use crate::dtos::root::AboutResponse;
use axum::Json;

/// About this service
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = AboutResponse)
    ),
    tag = "About"
)]
pub async fn root() -> Json<AboutResponse> {
    Json(AboutResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Degree programs, their courses, and the core learning outcomes \
                      each course satisfies"
            .to_string(),
    })
}
