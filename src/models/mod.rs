use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<Pet>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
    pub owner_id: i32,
    pub visits: Vec<Visit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<Specialty>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Visit {
    pub id: i32,
    #[sqlx(rename = "visit_date")]
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerUpdateRequest {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetCreateRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type_id: i32,
    pub owner_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetUpdateRequest {
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type_id: i32,
    pub owner_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetTypeRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub specialty_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VetUpdateRequest {
    pub first_name: String,
    pub last_name: String,
    pub specialty_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitCreateRequest {
    pub date: NaiveDate,
    pub description: String,
    pub pet_id: i32,
}

/// Visits keep their pet; only the date and description are rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitUpdateRequest {
    pub date: NaiveDate,
    pub description: String,
}

impl Owner {
    /// Look up one of this owner's pets
    pub fn pet(&self, pet_id: i32) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == pet_id)
    }
}

impl Vet {
    pub fn has_specialty(&self, name: &str) -> bool {
        self.specialties.iter().any(|s| s.name == name)
    }
}
