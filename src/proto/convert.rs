//! Conversions between domain records and wire messages
//!
//! Outgoing conversions are infallible. Incoming messages carry dates as
//! ISO-8601 strings, so those conversions go through [`parse_date`] and fail
//! with a validation error on anything else.

use chrono::NaiveDate;

use super::*;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Owner, OwnerCreateRequest, OwnerUpdateRequest, Pet, PetCreateRequest, PetType,
    PetTypeRequest, PetUpdateRequest, Specialty, SpecialtyRequest, Vet, Visit,
    VisitCreateRequest, VisitUpdateRequest,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::validation(format!("{} must be a YYYY-MM-DD date, got '{}': {}", field, value, e))
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// Domain -> wire

impl From<&PetType> for ProtoPetType {
    fn from(pet_type: &PetType) -> Self {
        Self {
            id: pet_type.id,
            name: pet_type.name.clone(),
        }
    }
}

impl From<&Specialty> for ProtoSpecialty {
    fn from(specialty: &Specialty) -> Self {
        Self {
            id: specialty.id,
            name: specialty.name.clone(),
        }
    }
}

impl From<&Visit> for ProtoVisit {
    fn from(visit: &Visit) -> Self {
        Self {
            id: visit.id,
            date: format_date(visit.date),
            description: visit.description.clone(),
            pet_id: visit.pet_id,
        }
    }
}

impl From<&Visit> for ProtoPetVisit {
    fn from(visit: &Visit) -> Self {
        Self {
            id: visit.id,
            date: format_date(visit.date),
            description: visit.description.clone(),
            pet_id: visit.pet_id,
        }
    }
}

impl From<&Pet> for ProtoPet {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name.clone(),
            birth_date: format_date(pet.birth_date),
            r#type: Some(ProtoPetType::from(&pet.pet_type)),
            owner_id: pet.owner_id,
            visits: pet.visits.iter().map(ProtoPetVisit::from).collect(),
        }
    }
}

/// Flattened pet as seen through its owner; the type is reduced to its name
impl From<&Pet> for ProtoOwnerPet {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            name: pet.name.clone(),
            birth_date: format_date(pet.birth_date),
            pet_type: pet.pet_type.name.clone(),
        }
    }
}

impl From<&Owner> for ProtoOwner {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
            pets: owner.pets.iter().map(ProtoPet::from).collect(),
        }
    }
}

impl From<&Vet> for ProtoVet {
    fn from(vet: &Vet) -> Self {
        Self {
            id: vet.id,
            first_name: vet.first_name.clone(),
            last_name: vet.last_name.clone(),
            specialties: vet.specialties.iter().map(ProtoSpecialty::from).collect(),
        }
    }
}

impl From<&[Owner]> for ProtoOwners {
    fn from(owners: &[Owner]) -> Self {
        Self {
            owners: owners.iter().map(ProtoOwner::from).collect(),
        }
    }
}

impl From<&[Pet]> for ProtoPets {
    fn from(pets: &[Pet]) -> Self {
        Self {
            pets: pets.iter().map(ProtoPet::from).collect(),
        }
    }
}

impl From<&[PetType]> for ProtoPetTypes {
    fn from(pet_types: &[PetType]) -> Self {
        Self {
            pet_types: pet_types.iter().map(ProtoPetType::from).collect(),
        }
    }
}

impl From<&[Specialty]> for ProtoSpecialties {
    fn from(specialties: &[Specialty]) -> Self {
        Self {
            specialties: specialties.iter().map(ProtoSpecialty::from).collect(),
        }
    }
}

impl From<&[Vet]> for ProtoVets {
    fn from(vets: &[Vet]) -> Self {
        Self {
            vets: vets.iter().map(ProtoVet::from).collect(),
        }
    }
}

impl From<&[Visit]> for ProtoVisits {
    fn from(visits: &[Visit]) -> Self {
        Self {
            visits: visits.iter().map(ProtoVisit::from).collect(),
        }
    }
}

// Wire -> domain requests

/// Owners are created from the full owner message; `id` and `pets` are ignored
impl From<ProtoOwner> for OwnerCreateRequest {
    fn from(owner: ProtoOwner) -> Self {
        Self {
            first_name: owner.first_name,
            last_name: owner.last_name,
            address: owner.address,
            city: owner.city,
            telephone: owner.telephone,
        }
    }
}

impl From<ProtoOwnerAdd> for OwnerUpdateRequest {
    fn from(owner: ProtoOwnerAdd) -> Self {
        Self {
            first_name: owner.first_name,
            last_name: owner.last_name,
            address: owner.address,
            city: owner.city,
            telephone: owner.telephone,
        }
    }
}

impl TryFrom<ProtoPetAdd> for PetCreateRequest {
    type Error = AppError;

    fn try_from(pet: ProtoPetAdd) -> AppResult<Self> {
        Ok(Self {
            birth_date: parse_date("birthDate", &pet.birth_date)?,
            name: pet.name,
            pet_type_id: pet.pet_type_id,
            owner_id: pet.owner_id,
        })
    }
}

impl TryFrom<ProtoPetAdd> for PetUpdateRequest {
    type Error = AppError;

    fn try_from(pet: ProtoPetAdd) -> AppResult<Self> {
        Ok(Self {
            birth_date: parse_date("birthDate", &pet.birth_date)?,
            name: pet.name,
            pet_type_id: pet.pet_type_id,
            owner_id: pet.owner_id,
        })
    }
}

impl From<ProtoPetTypeAdd> for PetTypeRequest {
    fn from(pet_type: ProtoPetTypeAdd) -> Self {
        Self {
            name: pet_type.name,
        }
    }
}

/// Pet type updates carry the full message; only the name is applied
impl From<ProtoPetType> for PetTypeRequest {
    fn from(pet_type: ProtoPetType) -> Self {
        Self {
            name: pet_type.name,
        }
    }
}

impl From<ProtoSpecialtyAdd> for SpecialtyRequest {
    fn from(specialty: ProtoSpecialtyAdd) -> Self {
        Self {
            name: specialty.name,
        }
    }
}

impl TryFrom<ProtoVisitAdd> for VisitCreateRequest {
    type Error = AppError;

    fn try_from(visit: ProtoVisitAdd) -> AppResult<Self> {
        Ok(Self {
            date: parse_date("date", &visit.date)?,
            description: visit.description,
            pet_id: visit.pet_id,
        })
    }
}

/// `petId` is not part of a visit update
impl TryFrom<ProtoVisitAdd> for VisitUpdateRequest {
    type Error = AppError;

    fn try_from(visit: ProtoVisitAdd) -> AppResult<Self> {
        Ok(Self {
            date: parse_date("date", &visit.date)?,
            description: visit.description,
        })
    }
}

/// Request for a pet added through its owner
///
/// The nested type message only contributes its id.
pub fn owner_pet_request(owner_id: i32, pet: ProtoOwnerAddPet) -> AppResult<PetCreateRequest> {
    Ok(PetCreateRequest {
        birth_date: parse_date("birthDate", &pet.birth_date)?,
        name: pet.name,
        pet_type_id: pet.r#type.map(|t| t.id).unwrap_or_default(),
        owner_id,
    })
}

/// Request for a visit recorded through an owner's pet
pub fn pet_visit_request(pet_id: i32, visit: ProtoOwnerAddVisit) -> AppResult<VisitCreateRequest> {
    Ok(VisitCreateRequest {
        date: parse_date("visitDate", &visit.visit_date)?,
        description: visit.visit_description,
        pet_id,
    })
}

/// Names of the specialties carried by a vet message
pub fn specialty_names(specialties: &[ProtoSpecialty]) -> Vec<String> {
    specialties.iter().map(|s| s.name.clone()).collect()
}
