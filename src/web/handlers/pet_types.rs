//! Pet type HTTP handlers

use axum::{
    extract::State,
    http::StatusCode,
};

use crate::errors::AppResult;
use crate::proto::{ProtoPetType, ProtoPetTypeAdd, ProtoPetTypes, WireFormat};
use crate::web::{
    extractors::{ApiPath, Wire},
    responses::{no_content, non_empty, Reply},
    AppState,
};

pub async fn list_pet_types(
    State(state): State<AppState>,
    format: WireFormat,
) -> AppResult<Reply<ProtoPetTypes>> {
    let pet_types = non_empty("pet types", state.clinic.find_pet_types().await?)?;
    Ok(Reply::ok(format, ProtoPetTypes::from(pet_types.as_slice())))
}

pub async fn get_pet_type(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(pet_type_id): ApiPath<i32>,
) -> AppResult<Reply<ProtoPetType>> {
    let pet_type = state.clinic.find_pet_type(pet_type_id).await?;
    Ok(Reply::ok(format, ProtoPetType::from(&pet_type)))
}

/// Creating a pet type answers 200, not 201
pub async fn create_pet_type(
    State(state): State<AppState>,
    format: WireFormat,
    Wire(pet_type): Wire<ProtoPetTypeAdd>,
) -> AppResult<Reply<ProtoPetType>> {
    let pet_type = state.clinic.save_pet_type(pet_type.into()).await?;
    Ok(Reply::ok(format, ProtoPetType::from(&pet_type)))
}

/// Only the name of the submitted type is applied
pub async fn update_pet_type(
    State(state): State<AppState>,
    ApiPath(pet_type_id): ApiPath<i32>,
    Wire(pet_type): Wire<ProtoPetType>,
) -> AppResult<StatusCode> {
    state
        .clinic
        .update_pet_type(pet_type_id, pet_type.into())
        .await?;
    Ok(no_content())
}

pub async fn delete_pet_type(
    State(state): State<AppState>,
    ApiPath(pet_type_id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.clinic.delete_pet_type(pet_type_id).await?;
    Ok(no_content())
}
