//! Specialty HTTP handlers
//!
//! Specialties are served under two route sets: the action style
//! (`/listSpecialties`, `/addSpecialty`, ...) and the plain resource style
//! (`/specialties`). They share everything except the update response:
//! the action style echoes the updated specialty, the resource style answers
//! 204.

use axum::{
    extract::State,
    http::StatusCode,
};

use crate::errors::AppResult;
use crate::proto::{ProtoSpecialties, ProtoSpecialty, ProtoSpecialtyAdd, WireFormat};
use crate::web::{
    extractors::{ApiPath, Wire},
    responses::{no_content, non_empty, Reply},
    AppState,
};

pub async fn list_specialties(
    State(state): State<AppState>,
    format: WireFormat,
) -> AppResult<Reply<ProtoSpecialties>> {
    let specialties = non_empty("specialties", state.clinic.find_specialties().await?)?;
    Ok(Reply::ok(format, ProtoSpecialties::from(specialties.as_slice())))
}

pub async fn get_specialty(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(specialty_id): ApiPath<i32>,
) -> AppResult<Reply<ProtoSpecialty>> {
    let specialty = state.clinic.find_specialty(specialty_id).await?;
    Ok(Reply::ok(format, ProtoSpecialty::from(&specialty)))
}

pub async fn create_specialty(
    State(state): State<AppState>,
    format: WireFormat,
    Wire(specialty): Wire<ProtoSpecialtyAdd>,
) -> AppResult<Reply<ProtoSpecialty>> {
    let specialty = state.clinic.save_specialty(specialty.into()).await?;
    Ok(Reply::created(format, ProtoSpecialty::from(&specialty)))
}

/// Action-style update, answering with the updated specialty
pub async fn update_specialty_returning(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(specialty_id): ApiPath<i32>,
    Wire(specialty): Wire<ProtoSpecialtyAdd>,
) -> AppResult<Reply<ProtoSpecialty>> {
    let specialty = state
        .clinic
        .update_specialty(specialty_id, specialty.into())
        .await?;
    Ok(Reply::ok(format, ProtoSpecialty::from(&specialty)))
}

pub async fn update_specialty(
    State(state): State<AppState>,
    ApiPath(specialty_id): ApiPath<i32>,
    Wire(specialty): Wire<ProtoSpecialtyAdd>,
) -> AppResult<StatusCode> {
    state
        .clinic
        .update_specialty(specialty_id, specialty.into())
        .await?;
    Ok(no_content())
}

pub async fn delete_specialty(
    State(state): State<AppState>,
    ApiPath(specialty_id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.clinic.delete_specialty(specialty_id).await?;
    Ok(no_content())
}
