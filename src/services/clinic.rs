//! Clinic service implementation
//!
//! This module provides the business logic façade over the six clinic
//! repositories. It maps absent entities to [`AppError::NotFound`] and
//! resolves the references a write carries (pet type, owner, pet,
//! specialties) before anything is persisted.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::models::{
    Owner, OwnerCreateRequest, OwnerUpdateRequest, Pet, PetCreateRequest, PetType,
    PetTypeRequest, PetUpdateRequest, Specialty, SpecialtyRequest, Vet, VetCreateRequest,
    VetUpdateRequest, Visit, VisitCreateRequest, VisitUpdateRequest,
};
use crate::repositories::{
    OwnerQuery, OwnerRepository, PetRepository, PetTypeRepository, Repository,
    SpecialtyRepository, VetRepository, VisitQuery, VisitRepository,
};

/// Service for the whole clinic domain
///
/// Cheap to clone; every repository shares the same connection pool.
#[derive(Clone)]
pub struct ClinicService {
    owners: OwnerRepository,
    pets: PetRepository,
    pet_types: PetTypeRepository,
    specialties: SpecialtyRepository,
    vets: VetRepository,
    visits: VisitRepository,
}

impl ClinicService {
    /// Create a new clinic service over a connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            owners: OwnerRepository::new(pool.clone()),
            pets: PetRepository::new(pool.clone()),
            pet_types: PetTypeRepository::new(pool.clone()),
            specialties: SpecialtyRepository::new(pool.clone()),
            vets: VetRepository::new(pool.clone()),
            visits: VisitRepository::new(pool),
        }
    }

    // Owners

    /// Owners, optionally restricted to a last name prefix
    pub async fn find_owners(&self, last_name: Option<String>) -> AppResult<Vec<Owner>> {
        let query = match last_name {
            Some(prefix) => OwnerQuery::last_name(prefix),
            None => OwnerQuery::new(),
        };
        Ok(self.owners.find_all(query).await?)
    }

    pub async fn find_owner(&self, id: i32) -> AppResult<Owner> {
        self.owners
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("owner", id))
    }

    pub async fn save_owner(&self, request: OwnerCreateRequest) -> AppResult<Owner> {
        let owner = self.owners.create(request).await?;
        info!("Created owner {} ({} {})", owner.id, owner.first_name, owner.last_name);
        Ok(owner)
    }

    pub async fn update_owner(&self, id: i32, request: OwnerUpdateRequest) -> AppResult<Owner> {
        self.find_owner(id).await?;
        Ok(self.owners.update(id, request).await?)
    }

    /// Deletes the owner along with their pets and visits
    pub async fn delete_owner(&self, id: i32) -> AppResult<()> {
        self.find_owner(id).await?;
        self.owners.delete(id).await?;
        info!("Deleted owner {}", id);
        Ok(())
    }

    /// A pet addressed through its owner; the pet must belong to that owner
    pub async fn find_owner_pet(&self, owner_id: i32, pet_id: i32) -> AppResult<Pet> {
        let owner = self.find_owner(owner_id).await?;
        owner
            .pet(pet_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("pet", pet_id))
    }

    // Pets

    pub async fn find_pets(&self) -> AppResult<Vec<Pet>> {
        Ok(self.pets.find_all(()).await?)
    }

    pub async fn find_pet(&self, id: i32) -> AppResult<Pet> {
        self.pets
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("pet", id))
    }

    pub async fn save_pet(&self, request: PetCreateRequest) -> AppResult<Pet> {
        self.find_pet_type(request.pet_type_id).await?;
        self.ensure_owner(request.owner_id).await?;

        let pet = self.pets.create(request).await?;
        info!("Created pet {} for owner {}", pet.id, pet.owner_id);
        Ok(pet)
    }

    pub async fn update_pet(&self, id: i32, request: PetUpdateRequest) -> AppResult<Pet> {
        self.find_pet(id).await?;
        self.find_pet_type(request.pet_type_id).await?;
        self.ensure_owner(request.owner_id).await?;

        Ok(self.pets.update(id, request).await?)
    }

    pub async fn delete_pet(&self, id: i32) -> AppResult<()> {
        self.find_pet(id).await?;
        self.pets.delete(id).await?;
        info!("Deleted pet {}", id);
        Ok(())
    }

    async fn ensure_owner(&self, id: i32) -> AppResult<()> {
        if self.owners.exists(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("owner", id))
        }
    }

    // Pet types

    pub async fn find_pet_types(&self) -> AppResult<Vec<PetType>> {
        Ok(self.pet_types.find_all(()).await?)
    }

    pub async fn find_pet_type(&self, id: i32) -> AppResult<PetType> {
        self.pet_types
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("pet type", id))
    }

    pub async fn save_pet_type(&self, request: PetTypeRequest) -> AppResult<PetType> {
        let pet_type = self.pet_types.create(request).await?;
        info!("Created pet type {} ({})", pet_type.id, pet_type.name);
        Ok(pet_type)
    }

    pub async fn update_pet_type(&self, id: i32, request: PetTypeRequest) -> AppResult<PetType> {
        self.find_pet_type(id).await?;
        Ok(self.pet_types.update(id, request).await?)
    }

    /// Deleting a pet type also removes every pet of that type
    pub async fn delete_pet_type(&self, id: i32) -> AppResult<()> {
        self.find_pet_type(id).await?;
        self.pet_types.delete(id).await?;
        info!("Deleted pet type {}", id);
        Ok(())
    }

    // Specialties

    pub async fn find_specialties(&self) -> AppResult<Vec<Specialty>> {
        Ok(self.specialties.find_all(()).await?)
    }

    pub async fn find_specialty(&self, id: i32) -> AppResult<Specialty> {
        self.specialties
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("specialty", id))
    }

    pub async fn save_specialty(&self, request: SpecialtyRequest) -> AppResult<Specialty> {
        let specialty = self.specialties.create(request).await?;
        info!("Created specialty {} ({})", specialty.id, specialty.name);
        Ok(specialty)
    }

    pub async fn update_specialty(
        &self,
        id: i32,
        request: SpecialtyRequest,
    ) -> AppResult<Specialty> {
        self.find_specialty(id).await?;
        Ok(self.specialties.update(id, request).await?)
    }

    pub async fn delete_specialty(&self, id: i32) -> AppResult<()> {
        self.find_specialty(id).await?;
        self.specialties.delete(id).await?;
        info!("Deleted specialty {}", id);
        Ok(())
    }

    /// Ids of the known specialties carrying any of `names`
    ///
    /// Names that match no specialty are dropped without error.
    pub async fn specialty_ids_by_name(&self, names: &[String]) -> AppResult<Vec<i32>> {
        let matched = self.specialties.find_by_names(names).await?;
        if matched.len() < names.len() {
            debug!(
                "Resolved {} of {} specialty names, ignoring the rest",
                matched.len(),
                names.len()
            );
        }
        Ok(matched.into_iter().map(|specialty| specialty.id).collect())
    }

    // Vets

    pub async fn find_vets(&self) -> AppResult<Vec<Vet>> {
        Ok(self.vets.find_all(()).await?)
    }

    pub async fn find_vet(&self, id: i32) -> AppResult<Vet> {
        self.vets
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("vet", id))
    }

    pub async fn save_vet(&self, request: VetCreateRequest) -> AppResult<Vet> {
        let vet = self.vets.create(request).await?;
        info!("Created vet {} ({} {})", vet.id, vet.first_name, vet.last_name);
        Ok(vet)
    }

    pub async fn update_vet(&self, id: i32, request: VetUpdateRequest) -> AppResult<Vet> {
        self.find_vet(id).await?;
        Ok(self.vets.update(id, request).await?)
    }

    pub async fn delete_vet(&self, id: i32) -> AppResult<()> {
        self.find_vet(id).await?;
        self.vets.delete(id).await?;
        info!("Deleted vet {}", id);
        Ok(())
    }

    // Visits

    pub async fn find_visits(&self) -> AppResult<Vec<Visit>> {
        Ok(self.visits.find_all(VisitQuery::new()).await?)
    }

    pub async fn find_visits_by_pet(&self, pet_id: i32) -> AppResult<Vec<Visit>> {
        Ok(self.visits.find_all(VisitQuery::pet(pet_id)).await?)
    }

    pub async fn find_visit(&self, id: i32) -> AppResult<Visit> {
        self.visits
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("visit", id))
    }

    pub async fn save_visit(&self, request: VisitCreateRequest) -> AppResult<Visit> {
        self.find_pet(request.pet_id).await?;

        let visit = self.visits.create(request).await?;
        info!("Created visit {} for pet {}", visit.id, visit.pet_id);
        Ok(visit)
    }

    pub async fn update_visit(&self, id: i32, request: VisitUpdateRequest) -> AppResult<Visit> {
        self.find_visit(id).await?;
        Ok(self.visits.update(id, request).await?)
    }

    pub async fn delete_visit(&self, id: i32) -> AppResult<()> {
        self.find_visit(id).await?;
        self.visits.delete(id).await?;
        info!("Deleted visit {}", id);
        Ok(())
    }
}
