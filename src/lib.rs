// Dental Clinic Scheduler - Core Library
// Registries of patients, dentists and hygienists, a treatment catalog,
// and appointment booking on top of them.

pub mod entities;
pub mod scheduler;
pub mod shared;
pub mod roster;

// Re-export commonly used types
pub use entities::{
    Appointment,
    DentalPractitioner, Dentist, Hygienist, Patient, Person, PersonKind, Practitioner,
    PersonRegistry,
    Treatment, TreatmentCatalog,
};
pub use scheduler::{
    Clinic, ScheduleResult, is_available,
    PATIENT_NOT_FOUND, PRACTITIONER_NOT_FOUND,
};
pub use shared::SharedClinic;
pub use roster::ClinicRoster;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
