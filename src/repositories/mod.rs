//! Repository pattern implementation for data access
//!
//! Each clinic entity kind gets a repository over the shared SQLite pool.
//! All of them implement [`Repository`], so lookups, listings and writes
//! read the same way regardless of the entity.
//!
//! # Usage
//!
//! ```rust,ignore
//! use petclinic_rest::repositories::{OwnerQuery, OwnerRepository, Repository};
//!
//! async fn example(repo: OwnerRepository) {
//!     let owner = repo.find_by_id(1).await?;
//!     let davises = repo.find_all(OwnerQuery::last_name("Davis")).await?;
//! }
//! ```

pub mod owner;
pub mod pet;
pub mod pet_type;
pub mod specialty;
pub mod traits;
pub mod vet;
pub mod visit;

// Re-export main traits and types
pub use owner::{OwnerQuery, OwnerRepository};
pub use pet::PetRepository;
pub use pet_type::PetTypeRepository;
pub use specialty::SpecialtyRepository;
pub use traits::*;
pub use vet::VetRepository;
pub use visit::{VisitQuery, VisitRepository};
