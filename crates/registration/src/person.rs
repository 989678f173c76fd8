//! Person entity: validated identity data plus parking-pass state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use campuspass_core::{DomainError, DomainResult, Entity, PersonId};

use crate::email::EmailAddress;
use crate::name::PersonName;

/// Parking-pass lifecycle. The only transition is
/// `NotPurchased -> Purchased`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParkingPassStatus {
    #[default]
    NotPurchased,
    Purchased,
}

/// One individual's registration record.
///
/// Identity fields (name, date of birth, email) are validated atomically at
/// construction and immutable afterwards; a `Person` can never exist in a
/// partially-valid state. The parking pass is the single mutable field and
/// is monotonic for the life of the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: PersonName,
    date_of_birth: NaiveDate,
    email_address: EmailAddress,
    parking_pass: ParkingPassStatus,
}

impl Person {
    /// Create a new person from raw user-supplied input.
    ///
    /// Validation runs in field order (name, then date of birth, then email)
    /// and stops at the first failure, so only one field's message surfaces
    /// when several fields are invalid. Callers must not rely on that order
    /// for multi-error reporting.
    ///
    /// A missing date of birth (`None`) is rejected; the calendar date itself
    /// is otherwise unconstrained. On success the person starts without a
    /// parking pass.
    pub fn create(
        name: String,
        date_of_birth: Option<NaiveDate>,
        email_address: String,
    ) -> DomainResult<Self> {
        let name = PersonName::parse(name)?;
        let date_of_birth = date_of_birth
            .ok_or_else(|| DomainError::invalid_input("date of birth is required"))?;
        let email_address = EmailAddress::parse(email_address)?;

        Ok(Self {
            id: PersonId::new(),
            name,
            date_of_birth,
            email_address,
            parking_pass: ParkingPassStatus::NotPurchased,
        })
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn email_address(&self) -> &EmailAddress {
        &self.email_address
    }

    pub fn parking_pass(&self) -> ParkingPassStatus {
        self.parking_pass
    }

    pub fn has_parking_pass(&self) -> bool {
        self.parking_pass == ParkingPassStatus::Purchased
    }

    /// Attempt to purchase a parking pass.
    ///
    /// Returns `true` and records the pass on the first successful call;
    /// returns `false` with no state change when the person already owns
    /// one. Already owning a pass is a normal business outcome, not an
    /// error. This is the entity's only mutator.
    pub fn purchase_parking_pass(&mut self) -> bool {
        if self.parking_pass == ParkingPassStatus::Purchased {
            return false;
        }
        self.parking_pass = ParkingPassStatus::Purchased;
        true
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fixed-format human-readable summary for display and logging.
///
/// Deliberately excludes parking-pass status and is not a serialization
/// format; nothing should parse it back.
impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Name: {}, Local Date: {}, Email: {}",
            self.name, self.date_of_birth, self.email_address
        )
    }
}
