//! Vet HTTP handlers
//!
//! Vet messages name their specialties; the names are resolved against the
//! known specialties and names that match nothing are dropped.

use axum::{
    extract::State,
    http::StatusCode,
};

use crate::errors::AppResult;
use crate::models::{VetCreateRequest, VetUpdateRequest};
use crate::proto::{convert::specialty_names, ProtoVet, ProtoVetAdd, ProtoVets, WireFormat};
use crate::web::{
    extractors::{ApiPath, Wire},
    responses::{no_content, non_empty, Reply},
    AppState,
};

pub async fn list_vets(
    State(state): State<AppState>,
    format: WireFormat,
) -> AppResult<Reply<ProtoVets>> {
    let vets = non_empty("vets", state.clinic.find_vets().await?)?;
    Ok(Reply::ok(format, ProtoVets::from(vets.as_slice())))
}

pub async fn get_vet(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(vet_id): ApiPath<i32>,
) -> AppResult<Reply<ProtoVet>> {
    let vet = state.clinic.find_vet(vet_id).await?;
    Ok(Reply::ok(format, ProtoVet::from(&vet)))
}

pub async fn create_vet(
    State(state): State<AppState>,
    format: WireFormat,
    Wire(vet): Wire<ProtoVetAdd>,
) -> AppResult<Reply<ProtoVet>> {
    let specialty_ids = state
        .clinic
        .specialty_ids_by_name(&specialty_names(&vet.specialties))
        .await?;

    let vet = state
        .clinic
        .save_vet(VetCreateRequest {
            first_name: vet.first_name,
            last_name: vet.last_name,
            specialty_ids,
        })
        .await?;
    Ok(Reply::created(format, ProtoVet::from(&vet)))
}

/// Overwrite names and replace the specialty set
pub async fn update_vet(
    State(state): State<AppState>,
    ApiPath(vet_id): ApiPath<i32>,
    Wire(vet): Wire<ProtoVetAdd>,
) -> AppResult<StatusCode> {
    let specialty_ids = state
        .clinic
        .specialty_ids_by_name(&specialty_names(&vet.specialties))
        .await?;

    state
        .clinic
        .update_vet(
            vet_id,
            VetUpdateRequest {
                first_name: vet.first_name,
                last_name: vet.last_name,
                specialty_ids,
            },
        )
        .await?;
    Ok(no_content())
}

pub async fn delete_vet(
    State(state): State<AppState>,
    ApiPath(vet_id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.clinic.delete_vet(vet_id).await?;
    Ok(no_content())
}
