//! Registration domain module (persons and parking passes).
//!
//! This crate contains the business rules for registering a person and
//! tracking their parking-pass privilege, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod email;
pub mod name;
pub mod person;

pub use email::EmailAddress;
pub use name::PersonName;
pub use person::{ParkingPassStatus, Person};
