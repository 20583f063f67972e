// Entity Models - people, treatments and appointments
//
// Each entity has:
// - A stable string id
// - An id-keyed home (registry, catalog or the clinic's appointment list)

pub mod person;
pub mod registry;
pub mod treatment;
pub mod appointment;

pub use person::{DentalPractitioner, Dentist, Hygienist, Patient, Person, PersonKind, Practitioner};
pub use registry::PersonRegistry;
pub use treatment::{Treatment, TreatmentCatalog};
pub use appointment::Appointment;
