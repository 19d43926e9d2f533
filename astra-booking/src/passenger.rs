use astra_shared::Masked;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Loose international shape: optional +, then digits with common
// separators. Digit count is checked separately.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().-]+$").expect("phone regex"));

/// Traveler fields checked by completeness validation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PassengerField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    PassportNumber,
    PassportExpiry,
    SpaceflightConsent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub relation: String,
    pub phone: String,
}

/// A traveler on the in-progress booking. Owned exclusively by the draft;
/// one instance per traveler, index 0 is the primary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
    pub passport_number: Masked<String>,
    pub passport_expiry: Option<NaiveDate>,
    pub emergency_contact: EmergencyContact,
    pub special_requirements: String,
    pub spaceflight_consent: bool,
}

impl Passenger {
    /// A blank traveler form.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: None,
            nationality: String::new(),
            passport_number: Masked(String::new()),
            passport_expiry: None,
            emergency_contact: EmergencyContact::default(),
            special_requirements: String::new(),
            spaceflight_consent: false,
        }
    }

    /// Every completeness rule the traveler currently violates, reported
    /// together so the form can highlight all offending fields at once.
    ///
    /// `today` is the validation instant; the passport must expire
    /// strictly after it.
    pub fn missing_fields(&self, today: NaiveDate) -> Vec<PassengerField> {
        let mut missing = Vec::new();

        if self.first_name.trim().is_empty() {
            missing.push(PassengerField::FirstName);
        }
        if self.last_name.trim().is_empty() {
            missing.push(PassengerField::LastName);
        }
        if !EMAIL_RE.is_match(&self.email) {
            missing.push(PassengerField::Email);
        }
        // Phone is optional, but must look like a phone number when given.
        if !self.phone.is_empty() && !is_plausible_phone(&self.phone) {
            missing.push(PassengerField::Phone);
        }
        if self.date_of_birth.is_none() {
            missing.push(PassengerField::DateOfBirth);
        }
        if self.passport_number.inner().trim().is_empty() {
            missing.push(PassengerField::PassportNumber);
        }
        match self.passport_expiry {
            Some(expiry) if expiry > today => {}
            _ => missing.push(PassengerField::PassportExpiry),
        }
        if !self.spaceflight_consent {
            missing.push(PassengerField::SpaceflightConsent);
        }

        missing
    }

    pub fn is_complete(&self, today: NaiveDate) -> bool {
        self.missing_fields(today).is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for Passenger {
    fn default() -> Self {
        Self::new()
    }
}

fn is_plausible_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    PHONE_RE.is_match(phone) && (7..=15).contains(&digits)
}

/// A traveler that passes every completeness rule; shared test fixture.
#[cfg(test)]
pub(crate) fn complete_passenger() -> Passenger {
    Passenger {
        first_name: "Valentina".to_string(),
        last_name: "Soto".to_string(),
        email: "valentina@example.com".to_string(),
        phone: "+1 (555) 010-2030".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1988, 4, 12),
        nationality: "Chilean".to_string(),
        passport_number: Masked("P9083122".to_string()),
        passport_expiry: NaiveDate::from_ymd_opt(2033, 1, 1),
        emergency_contact: EmergencyContact {
            name: "Rosa Soto".to_string(),
            relation: "Mother".to_string(),
            phone: "+56 2 2345 6789".to_string(),
        },
        special_requirements: String::new(),
        spaceflight_consent: true,
        ..Passenger::new()
    }
}
