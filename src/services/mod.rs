//! Business logic services
//!
//! Services sit between the web handlers and the repositories. Handlers only
//! speak to [`ClinicService`]; it owns the not-found policy for lookups and
//! checks the references a write carries.

pub mod clinic;

pub use clinic::ClinicService;
