//! Visit HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
};

use crate::errors::AppResult;
use crate::models::{VisitCreateRequest, VisitUpdateRequest};
use crate::proto::{ProtoVisit, ProtoVisitAdd, ProtoVisits, WireFormat};
use crate::web::{
    extractors::{ApiPath, Wire},
    responses::{no_content, non_empty, Reply},
    AppState,
};

pub async fn list_visits(
    State(state): State<AppState>,
    format: WireFormat,
) -> AppResult<Reply<ProtoVisits>> {
    let visits = non_empty("visits", state.clinic.find_visits().await?)?;
    Ok(Reply::ok(format, ProtoVisits::from(visits.as_slice())))
}

pub async fn get_visit(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(visit_id): ApiPath<i32>,
) -> AppResult<Reply<ProtoVisit>> {
    let visit = state.clinic.find_visit(visit_id).await?;
    Ok(Reply::ok(format, ProtoVisit::from(&visit)))
}

pub async fn create_visit(
    State(state): State<AppState>,
    format: WireFormat,
    Wire(visit): Wire<ProtoVisitAdd>,
) -> AppResult<Reply<ProtoVisit>> {
    let visit = state
        .clinic
        .save_visit(VisitCreateRequest::try_from(visit)?)
        .await?;
    Ok(Reply::created(format, ProtoVisit::from(&visit)))
}

/// Overwrite date and description; the visit stays with its pet
pub async fn update_visit(
    State(state): State<AppState>,
    ApiPath(visit_id): ApiPath<i32>,
    Wire(visit): Wire<ProtoVisitAdd>,
) -> AppResult<StatusCode> {
    state
        .clinic
        .update_visit(visit_id, VisitUpdateRequest::try_from(visit)?)
        .await?;
    Ok(no_content())
}

pub async fn delete_visit(
    State(state): State<AppState>,
    ApiPath(visit_id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.clinic.delete_visit(visit_id).await?;
    Ok(no_content())
}
