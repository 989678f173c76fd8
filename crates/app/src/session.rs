//! One form session: a single in-memory person being created or modified.
//!
//! Mirrors the form's behavior as pure request/response methods so the
//! stdin/terminal plumbing in `main` stays trivial and everything here is
//! unit-testable.

use chrono::NaiveDate;

use campuspass_registration::Person;

/// Parking-pass status line, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStatus {
    pub message: &'static str,
    /// Affirmative status renders in the affirmative color, otherwise the
    /// warning color.
    pub affirmative: bool,
}

const HAS_PASS: PassStatus = PassStatus {
    message: "This person has a parking pass!",
    affirmative: true,
};

const NO_PASS: PassStatus = PassStatus {
    message: "This person does not have a parking pass!",
    affirmative: false,
};

/// Holds the one person the form is editing. Replaced wholesale on every
/// successful save; untouched when validation rejects the input.
#[derive(Debug, Default)]
pub struct FormSession {
    person: Option<Person>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn person(&self) -> Option<&Person> {
        self.person.as_ref()
    }

    /// Validate and save the entered data, replacing any previous person.
    ///
    /// On success returns the confirmation line; on rejection returns the
    /// error line and leaves the current person untouched.
    pub fn save(
        &mut self,
        name: String,
        date_of_birth: Option<NaiveDate>,
        email_address: String,
    ) -> Result<String, String> {
        let person = Person::create(name, date_of_birth, email_address)
            .map_err(|e| format!("Entered data invalid: {}", e.reason()))?;
        let confirmation = format!("{person} saved successfully!");
        self.person = Some(person);
        Ok(confirmation)
    }

    /// Load the pre-defined example person into the session.
    pub fn load_example(&mut self) -> Result<String, String> {
        self.save(
            "John Doe".to_string(),
            NaiveDate::from_ymd_opt(2000, 1, 1),
            "john@gmail.com".to_string(),
        )
    }

    /// Attempt to purchase a parking pass for the current person.
    ///
    /// Fails when no person has been saved yet, or when the person already
    /// owns a pass.
    pub fn buy_pass(&mut self) -> Result<(), String> {
        let person = self
            .person
            .as_mut()
            .ok_or_else(|| "No person has been saved yet.".to_string())?;
        if person.purchase_parking_pass() {
            Ok(())
        } else {
            Err("This person already had a parking pass! Don't waste my money!".to_string())
        }
    }

    /// The parking-pass status line for the current person, if any.
    pub fn pass_status(&self) -> Option<PassStatus> {
        self.person.as_ref().map(|p| {
            if p.has_parking_pass() {
                HAS_PASS
            } else {
                NO_PASS
            }
        })
    }
}
