// 🧑‍⚕️ Person Entities - Patients, Dentists, Hygienists
//
// Every person has a stable string id. Dentists and hygienists also carry the
// DentalPractitioner capability, which is what makes them bookable for a
// treatment. Patients never do.

use serde::{Deserialize, Serialize};

// ============================================================================
// PERSON KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonKind {
    Patient,
    Dentist,
    Hygienist,
}

impl PersonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonKind::Patient => "Patient",
            PersonKind::Dentist => "Dentist",
            PersonKind::Hygienist => "Hygienist",
        }
    }
}

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Anything that can live in a `PersonRegistry`.
pub trait Person {
    /// Unique id within the person's registry
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn kind(&self) -> PersonKind;
}

/// A person who can be booked for treatments.
///
/// Implemented by `Dentist` and `Hygienist` (and by `Practitioner`, which
/// wraps either one). `Patient` does not implement it.
pub trait DentalPractitioner: Person {
    /// Wrap this practitioner while keeping its concrete kind
    fn to_practitioner(&self) -> Practitioner;
}

// ============================================================================
// PATIENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Patient {
    pub id: String,
    pub name: String,

    /// Contact number, if the clinic has one on file
    #[serde(default)]
    pub phone: Option<String>,
}

impl Patient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Patient {
            id: id.into(),
            name: name.into(),
            phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

impl Person for Patient {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Patient
    }
}

// ============================================================================
// DENTIST
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dentist {
    pub id: String,
    pub name: String,

    /// e.g. "Orthodontics", "Endodontics"
    #[serde(default)]
    pub specialty: Option<String>,
}

impl Dentist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Dentist {
            id: id.into(),
            name: name.into(),
            specialty: None,
        }
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }
}

impl Person for Dentist {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Dentist
    }
}

impl DentalPractitioner for Dentist {
    fn to_practitioner(&self) -> Practitioner {
        Practitioner::Dentist(self.clone())
    }
}

// ============================================================================
// HYGIENIST
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hygienist {
    pub id: String,
    pub name: String,
}

impl Hygienist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Hygienist {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Person for Hygienist {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PersonKind {
        PersonKind::Hygienist
    }
}

impl DentalPractitioner for Hygienist {
    fn to_practitioner(&self) -> Practitioner {
        Practitioner::Hygienist(self.clone())
    }
}

// ============================================================================
// PRACTITIONER
// ============================================================================

/// A dental practitioner of either concrete kind.
///
/// Returned by cross-registry lookups so callers can still tell a dentist from
/// a hygienist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Practitioner {
    Dentist(Dentist),
    Hygienist(Hygienist),
}

impl Practitioner {
    pub fn as_dentist(&self) -> Option<&Dentist> {
        match self {
            Practitioner::Dentist(dentist) => Some(dentist),
            Practitioner::Hygienist(_) => None,
        }
    }

    pub fn as_hygienist(&self) -> Option<&Hygienist> {
        match self {
            Practitioner::Hygienist(hygienist) => Some(hygienist),
            Practitioner::Dentist(_) => None,
        }
    }
}

impl Person for Practitioner {
    fn id(&self) -> &str {
        match self {
            Practitioner::Dentist(dentist) => dentist.id(),
            Practitioner::Hygienist(hygienist) => hygienist.id(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Practitioner::Dentist(dentist) => dentist.name(),
            Practitioner::Hygienist(hygienist) => hygienist.name(),
        }
    }

    fn kind(&self) -> PersonKind {
        match self {
            Practitioner::Dentist(_) => PersonKind::Dentist,
            Practitioner::Hygienist(_) => PersonKind::Hygienist,
        }
    }
}

impl DentalPractitioner for Practitioner {
    fn to_practitioner(&self) -> Practitioner {
        self.clone()
    }
}

impl From<Dentist> for Practitioner {
    fn from(dentist: Dentist) -> Self {
        Practitioner::Dentist(dentist)
    }
}

impl From<Hygienist> for Practitioner {
    fn from(hygienist: Hygienist) -> Self {
        Practitioner::Hygienist(hygienist)
    }
}

// ============================================================================
// TESTS
// ============================================================================
