//! Pet HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
};

use crate::errors::AppResult;
use crate::models::{PetCreateRequest, PetUpdateRequest};
use crate::proto::{ProtoPet, ProtoPetAdd, ProtoPets, WireFormat};
use crate::web::{
    extractors::{ApiPath, Wire},
    responses::{no_content, non_empty, Reply},
    AppState,
};

pub async fn list_pets(
    State(state): State<AppState>,
    format: WireFormat,
) -> AppResult<Reply<ProtoPets>> {
    let pets = non_empty("pets", state.clinic.find_pets().await?)?;
    Ok(Reply::ok(format, ProtoPets::from(pets.as_slice())))
}

pub async fn get_pet(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(pet_id): ApiPath<i32>,
) -> AppResult<Reply<ProtoPet>> {
    let pet = state.clinic.find_pet(pet_id).await?;
    Ok(Reply::ok(format, ProtoPet::from(&pet)))
}

pub async fn create_pet(
    State(state): State<AppState>,
    format: WireFormat,
    Wire(pet): Wire<ProtoPetAdd>,
) -> AppResult<Reply<ProtoPet>> {
    let pet = state.clinic.save_pet(PetCreateRequest::try_from(pet)?).await?;
    Ok(Reply::created(format, ProtoPet::from(&pet)))
}

/// Overwrite name, birth date, type and owner
pub async fn update_pet(
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
    Wire(pet): Wire<ProtoPetAdd>,
) -> AppResult<StatusCode> {
    state
        .clinic
        .update_pet(pet_id, PetUpdateRequest::try_from(pet)?)
        .await?;
    Ok(no_content())
}

pub async fn delete_pet(
    State(state): State<AppState>,
    ApiPath(pet_id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.clinic.delete_pet(pet_id).await?;
    Ok(no_content())
}
