//! Domain layer for routemap
//!
//! Contains the geographic value objects, the capabilities an entity
//! implements to appear on a map, and the sample to-do entity.
//! This layer has no I/O and defines the ubiquitous language.

pub mod capabilities;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use capabilities::{Locatable, RouteSource};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
