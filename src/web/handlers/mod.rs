//! Web handlers module
//!
//! HTTP request handlers organized by resource. Handlers stay thin: decode
//! the wire message, call the clinic service, encode the reply.

pub mod health;
pub mod owners;
pub mod pet_types;
pub mod pets;
pub mod specialties;
pub mod vets;
pub mod visits;
