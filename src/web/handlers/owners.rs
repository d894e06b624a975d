//! Owner HTTP handlers
//!
//! Besides the owner resource itself, owners expose their pets and the
//! pets' visits through nested routes.

use axum::{
    extract::State,
    http::StatusCode,
};

use crate::errors::AppResult;
use crate::proto::{
    convert::{owner_pet_request, pet_visit_request},
    ProtoOwner, ProtoOwnerAdd, ProtoOwnerAddPet, ProtoOwnerAddVisit, ProtoOwnerPet, ProtoOwners,
    ProtoPetVisit, WireFormat,
};
use crate::web::{
    extractors::{ApiPath, OwnerSearchParams, Wire},
    responses::{no_content, non_empty, Reply},
    AppState,
};

/// List owners, optionally by last name prefix
pub async fn list_owners(
    State(state): State<AppState>,
    format: WireFormat,
    params: OwnerSearchParams,
) -> AppResult<Reply<ProtoOwners>> {
    let owners = non_empty("owners", state.clinic.find_owners(params.last_name).await?)?;
    Ok(Reply::ok(format, ProtoOwners::from(owners.as_slice())))
}

pub async fn get_owner(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(owner_id): ApiPath<i32>,
) -> AppResult<Reply<ProtoOwner>> {
    let owner = state.clinic.find_owner(owner_id).await?;
    Ok(Reply::ok(format, ProtoOwner::from(&owner)))
}

pub async fn create_owner(
    State(state): State<AppState>,
    format: WireFormat,
    Wire(owner): Wire<ProtoOwner>,
) -> AppResult<Reply<ProtoOwner>> {
    let owner = state.clinic.save_owner(owner.into()).await?;
    Ok(Reply::created(format, ProtoOwner::from(&owner)))
}

pub async fn update_owner(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
    Wire(owner): Wire<ProtoOwnerAdd>,
) -> AppResult<StatusCode> {
    state.clinic.update_owner(owner_id, owner.into()).await?;
    Ok(no_content())
}

pub async fn delete_owner(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.clinic.delete_owner(owner_id).await?;
    Ok(no_content())
}

/// Add a pet to an owner
pub async fn add_pet_to_owner(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath(owner_id): ApiPath<i32>,
    Wire(pet): Wire<ProtoOwnerAddPet>,
) -> AppResult<Reply<ProtoOwnerPet>> {
    let pet = state.clinic.save_pet(owner_pet_request(owner_id, pet)?).await?;
    Ok(Reply::created(format, ProtoOwnerPet::from(&pet)))
}

/// One of an owner's pets; 404 unless the pet belongs to the owner
pub async fn get_owner_pet(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath((owner_id, pet_id)): ApiPath<(i32, i32)>,
) -> AppResult<Reply<ProtoOwnerPet>> {
    let pet = state.clinic.find_owner_pet(owner_id, pet_id).await?;
    Ok(Reply::ok(format, ProtoOwnerPet::from(&pet)))
}

/// Record a visit for one of an owner's pets
pub async fn add_visit_to_owner_pet(
    State(state): State<AppState>,
    format: WireFormat,
    ApiPath((owner_id, pet_id)): ApiPath<(i32, i32)>,
    Wire(visit): Wire<ProtoOwnerAddVisit>,
) -> AppResult<Reply<ProtoPetVisit>> {
    let pet = state.clinic.find_owner_pet(owner_id, pet_id).await?;
    let visit = state.clinic.save_visit(pet_visit_request(pet.id, visit)?).await?;
    Ok(Reply::created(format, ProtoPetVisit::from(&visit)))
}
