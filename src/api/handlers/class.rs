use axum::{extract::{Query, State}, response::IntoResponse, Json};
use serde::Deserialize;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

use crate::api::dtos::responses::ClassResponse;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListClassesQuery {
    pub timezone: Option<String>,
}

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListClassesQuery>,
) -> Result<impl IntoResponse, AppError> {
    info!("Fetching upcoming classes with timezone: {:?}", params.timezone);

    let (tz, classes) = state
        .catalog
        .list_upcoming(Utc::now(), params.timezone.as_deref())
        .await?;

    let response: Vec<ClassResponse> = classes
        .iter()
        .map(|class| ClassResponse::in_zone(class, tz))
        .collect();

    Ok(Json(response))
}
