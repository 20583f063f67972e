// 🗓️ Scheduler - booking appointments at the clinic
//
// A Clinic owns the three person registries, the treatment catalog and the
// appointment list. Every booking attempt ends in a ScheduleResult; nothing
// here returns an error.
//
// Check order (first failure wins):
// 1. Patient must exist
// 2. Treatment must exist
// 3. Practitioner must exist (dentists first, then hygienists)
// 4. Practitioner must be available

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::entities::{
    Appointment, DentalPractitioner, Dentist, Hygienist, Patient, Person, PersonRegistry,
    Practitioner, Treatment, TreatmentCatalog,
};

pub const PATIENT_NOT_FOUND: &str = "Patient not found";
pub const PRACTITIONER_NOT_FOUND: &str = "Dental practitioner not found";

// ============================================================================
// SCHEDULE RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduleResult {
    /// Appointment booked; carries the new appointment id
    Success(String),

    /// Patient or practitioner could not be resolved
    NotFound(String),

    /// Treatment id unknown; carries every treatment currently offered
    TreatmentUnavailable(Vec<Treatment>),

    /// Practitioner is busy; carries available dentists, then available hygienists
    DentalPractitionerUnavailable(Vec<Practitioner>),
}

impl ScheduleResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ScheduleResult::Success(_))
    }

    pub fn appointment_id(&self) -> Option<&str> {
        match self {
            ScheduleResult::Success(id) => Some(id),
            _ => None,
        }
    }
}

// ============================================================================
// AVAILABILITY
// ============================================================================

/// Placeholder availability rule: the numeric value of the last character of
/// the practitioner's id must be even.
///
/// Numeric values follow the usual character-value table: `0`-`9` are digits,
/// ASCII and fullwidth letters count from 10 (`a`/`A` = 10, `z`/`Z` = 35), and
/// decimal digits of other scripts (`٤`, `４`) carry their digit value. Empty
/// ids and characters with no value are never available.
pub fn is_available<P>(practitioner: &P) -> bool
where
    P: DentalPractitioner + ?Sized,
{
    practitioner
        .id()
        .chars()
        .last()
        .and_then(numeric_value)
        .map(|value| value % 2 == 0)
        .unwrap_or(false)
}

/// Code points of `0` in each contiguous run of Unicode decimal digits (BMP)
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

fn numeric_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(36) {
        return Some(value);
    }

    let cp = u32::from(c);
    match cp {
        // Fullwidth A-Z, a-z
        0xFF21..=0xFF3A => Some(cp - 0xFF21 + 10),
        0xFF41..=0xFF5A => Some(cp - 0xFF41 + 10),
        _ => DECIMAL_ZEROS
            .iter()
            .find(|&&zero| (zero..zero + 10).contains(&cp))
            .map(|zero| cp - zero),
    }
}

// ============================================================================
// CLINIC
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Clinic {
    patients: PersonRegistry<Patient>,
    dentists: PersonRegistry<Dentist>,
    hygienists: PersonRegistry<Hygienist>,
    treatments: TreatmentCatalog,
    appointments: Vec<Appointment>,
}

impl Clinic {
    /// Create an empty clinic
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Population
    // ------------------------------------------------------------------------

    pub fn add_patient(&mut self, patient: Patient) {
        self.patients.add(patient);
    }

    pub fn add_dentist(&mut self, dentist: Dentist) {
        self.dentists.add(dentist);
    }

    pub fn add_hygienist(&mut self, hygienist: Hygienist) {
        self.hygienists.add(hygienist);
    }

    /// Add a treatment to the catalog (overwrites on same id)
    pub fn add_treatment(&mut self, treatment: Treatment) {
        self.treatments.add(treatment);
    }

    pub fn patients(&self) -> &PersonRegistry<Patient> {
        &self.patients
    }

    pub fn patients_mut(&mut self) -> &mut PersonRegistry<Patient> {
        &mut self.patients
    }

    pub fn dentists(&self) -> &PersonRegistry<Dentist> {
        &self.dentists
    }

    pub fn dentists_mut(&mut self) -> &mut PersonRegistry<Dentist> {
        &mut self.dentists
    }

    pub fn hygienists(&self) -> &PersonRegistry<Hygienist> {
        &self.hygienists
    }

    pub fn hygienists_mut(&mut self) -> &mut PersonRegistry<Hygienist> {
        &mut self.hygienists
    }

    pub fn treatments(&self) -> &TreatmentCatalog {
        &self.treatments
    }

    // ------------------------------------------------------------------------
    // Scheduling
    // ------------------------------------------------------------------------

    /// Try to book `treatment_id` for `patient_id` with `practitioner_id` at `time`
    pub fn schedule_appointment(
        &mut self,
        patient_id: &str,
        practitioner_id: &str,
        time: NaiveDateTime,
        treatment_id: &str,
    ) -> ScheduleResult {
        debug!(patient_id, practitioner_id, treatment_id, %time, "Scheduling appointment");

        let Some(patient) = self.patients.get_by_id(patient_id) else {
            debug!(patient_id, "Patient not found");
            return ScheduleResult::NotFound(PATIENT_NOT_FOUND.to_string());
        };

        let Some(treatment) = self.treatments.get(treatment_id) else {
            debug!(treatment_id, "Treatment not in catalog");
            return ScheduleResult::TreatmentUnavailable(self.treatments.all());
        };

        let Some(practitioner) = self.find_practitioner(practitioner_id) else {
            debug!(practitioner_id, "Dental practitioner not found");
            return ScheduleResult::NotFound(PRACTITIONER_NOT_FOUND.to_string());
        };

        if !is_available(&practitioner) {
            let candidates = self.available_practitioners();
            debug!(
                practitioner_id,
                candidates = candidates.len(),
                "Dental practitioner unavailable"
            );
            return ScheduleResult::DentalPractitionerUnavailable(candidates);
        }

        let appointment = Appointment::book(patient, practitioner, time, treatment);
        let appointment_id = appointment.id.clone();
        self.appointments.push(appointment);

        info!(
            appointment_id = %appointment_id,
            patient_id,
            practitioner_id,
            treatment_id,
            "Appointment booked"
        );
        ScheduleResult::Success(appointment_id)
    }

    /// Resolve a practitioner id: dentists first, then hygienists
    pub fn find_practitioner(&self, id: &str) -> Option<Practitioner> {
        self.dentists
            .get_by_id(id)
            .map(|dentist| dentist.to_practitioner())
            .or_else(|| {
                self.hygienists
                    .get_by_id(id)
                    .map(|hygienist| hygienist.to_practitioner())
            })
    }

    /// All currently available dentists followed by all available hygienists
    pub fn available_practitioners(&self) -> Vec<Practitioner> {
        let dentists = self
            .dentists
            .find_by(|d| is_available(d))
            .into_iter()
            .map(Practitioner::Dentist);
        let hygienists = self
            .hygienists
            .find_by(|h| is_available(h))
            .into_iter()
            .map(Practitioner::Hygienist);

        dentists.chain(hygienists).collect()
    }

    // ------------------------------------------------------------------------
    // Appointment queries
    // ------------------------------------------------------------------------

    pub fn get_appointment_by_id(&self, id: &str) -> Option<Appointment> {
        self.appointments.iter().find(|a| a.id == id).cloned()
    }

    /// All appointments, in booking order
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn appointments_for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient.id() == patient_id)
            .cloned()
            .collect()
    }

    pub fn appointments_for_practitioner(&self, practitioner_id: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.practitioner.id() == practitioner_id)
            .cloned()
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PersonKind;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    /// p1, dentists d1..d4, hygienists h1..h2, treatments t1 + t2
    fn sample_clinic() -> Clinic {
        let mut clinic = Clinic::new();
        clinic.add_patient(Patient::new("p1", "Ada"));
        clinic.add_dentist(Dentist::new("d1", "Dr. Ruiz"));
        clinic.add_dentist(Dentist::new("d2", "Dr. Osei"));
        clinic.add_dentist(Dentist::new("d3", "Dr. Ng"));
        clinic.add_dentist(Dentist::new("d4", "Dr. Haddad"));
        clinic.add_hygienist(Hygienist::new("h1", "Kim"));
        clinic.add_hygienist(Hygienist::new("h2", "Lee"));
        clinic.add_treatment(Treatment::new("t1", "Cleaning", 80.0, 30));
        clinic.add_treatment(Treatment::new("t2", "Filling", 120.0, 45));
        clinic
    }

    fn ids(practitioners: &[Practitioner]) -> Vec<&str> {
        practitioners.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_availability_rule() {
        assert!(is_available(&Dentist::new("d2", "")));
        assert!(is_available(&Dentist::new("d10", "")));
        assert!(is_available(&Hygienist::new("h0", "")));
        assert!(!is_available(&Dentist::new("d3", "")));
        assert!(!is_available(&Hygienist::new("h21", "")));

        // Letters count from 10: a = 10, b = 11
        assert!(is_available(&Dentist::new("da", "")));
        assert!(is_available(&Dentist::new("dA", "")));
        assert!(!is_available(&Dentist::new("db", "")));
        assert!(!is_available(&Hygienist::new("hz", "")));
        assert!(is_available(&Hygienist::new("hY", "")));

        // Decimal digits of other scripts carry their digit value
        assert!(is_available(&Dentist::new("d\u{0664}", "")));
        assert!(!is_available(&Dentist::new("d\u{0663}", "")));
        assert!(is_available(&Dentist::new("d\u{FF14}", "")));
        assert!(!is_available(&Dentist::new("d\u{FF17}", "")));
        assert!(is_available(&Dentist::new("d\u{FF41}", "")));

        // Empty ids and characters without a numeric value are never available
        assert!(!is_available(&Dentist::new("d-", "")));
        assert!(!is_available(&Dentist::new("d\u{00E9}", "")));
        assert!(!is_available(&Dentist::new("", "")));
    }

    #[test]
    fn test_unknown_patient() {
        let mut clinic = sample_clinic();

        // Patient check wins even when everything else is wrong too
        let result = clinic.schedule_appointment("p9", "d9", now(), "t9");
        assert_eq!(result, ScheduleResult::NotFound("Patient not found".to_string()));

        let result = clinic.schedule_appointment("p9", "d2", now(), "t1");
        assert_eq!(result, ScheduleResult::NotFound("Patient not found".to_string()));
        assert!(clinic.appointments().is_empty());
    }

    #[test]
    fn test_unknown_treatment_lists_catalog() {
        let mut clinic = sample_clinic();

        let result = clinic.schedule_appointment("p1", "d9", now(), "t9");
        assert_eq!(
            result,
            ScheduleResult::TreatmentUnavailable(clinic.treatments().all())
        );

        match result {
            ScheduleResult::TreatmentUnavailable(treatments) => {
                let names: Vec<&str> = treatments.iter().map(|t| t.name.as_str()).collect();
                assert_eq!(names, vec!["Cleaning", "Filling"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_practitioner() {
        let mut clinic = sample_clinic();

        let result = clinic.schedule_appointment("p1", "d9", now(), "t1");
        assert_eq!(
            result,
            ScheduleResult::NotFound("Dental practitioner not found".to_string())
        );

        // Patients are not practitioners
        let result = clinic.schedule_appointment("p1", "p1", now(), "t1");
        assert_eq!(
            result,
            ScheduleResult::NotFound("Dental practitioner not found".to_string())
        );
    }

    #[test]
    fn test_unavailable_practitioner_suggests_alternatives() {
        let mut clinic = sample_clinic();

        let result = clinic.schedule_appointment("p1", "d3", now(), "t1");
        match result {
            ScheduleResult::DentalPractitionerUnavailable(candidates) => {
                assert_eq!(ids(&candidates), vec!["d2", "d4", "h2"]);
                assert_eq!(candidates[0].kind(), PersonKind::Dentist);
                assert_eq!(candidates[2].kind(), PersonKind::Hygienist);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(clinic.appointments().is_empty());
    }

    #[test]
    fn test_unavailable_with_no_alternatives() {
        let mut clinic = Clinic::new();
        clinic.add_patient(Patient::new("p1", "Ada"));
        clinic.add_dentist(Dentist::new("d3", "Dr. Ng"));
        clinic.add_treatment(Treatment::new("t1", "Cleaning", 80.0, 30));

        let result = clinic.schedule_appointment("p1", "d3", now(), "t1");
        assert_eq!(result, ScheduleResult::DentalPractitionerUnavailable(vec![]));
    }

    #[test]
    fn test_successful_booking_round_trip() {
        let mut clinic = sample_clinic();

        let result = clinic.schedule_appointment("p1", "d2", now(), "t1");
        assert!(result.is_success());
        let id = result.appointment_id().unwrap().to_string();
        assert!(uuid::Uuid::parse_str(&id).is_ok());

        let appointment = clinic.get_appointment_by_id(&id).unwrap();
        assert_eq!(appointment.id, id);
        assert_eq!(appointment.patient, Patient::new("p1", "Ada"));
        assert_eq!(
            appointment.practitioner,
            Practitioner::Dentist(Dentist::new("d2", "Dr. Osei"))
        );
        assert_eq!(appointment.time, now());
        assert_eq!(appointment.treatment, Treatment::new("t1", "Cleaning", 80.0, 30));

        assert!(clinic.get_appointment_by_id("missing").is_none());
    }

    #[test]
    fn test_hygienist_booking_keeps_kind() {
        let mut clinic = sample_clinic();

        let result = clinic.schedule_appointment("p1", "h2", now(), "t2");
        let id = result.appointment_id().unwrap();

        let appointment = clinic.get_appointment_by_id(id).unwrap();
        assert_eq!(appointment.practitioner.kind(), PersonKind::Hygienist);
        assert_eq!(appointment.practitioner.as_hygienist().unwrap().name, "Lee");
    }

    #[test]
    fn test_dentist_wins_over_hygienist_with_same_id() {
        let mut clinic = sample_clinic();
        clinic.add_hygienist(Hygienist::new("d2", "Shadow"));

        let practitioner = clinic.find_practitioner("d2").unwrap();
        assert_eq!(practitioner, Practitioner::Dentist(Dentist::new("d2", "Dr. Osei")));
    }

    #[test]
    fn test_add_treatment_keeps_latest_content() {
        let mut clinic = sample_clinic();
        clinic.add_treatment(Treatment::new("t1", "Deep Cleaning", 150.0, 60));

        assert_eq!(clinic.treatments().len(), 2);
        assert_eq!(clinic.treatments().get("t1").unwrap().name, "Deep Cleaning");

        let result = clinic.schedule_appointment("p1", "d4", now(), "t1");
        let appointment = clinic
            .get_appointment_by_id(result.appointment_id().unwrap())
            .unwrap();
        assert_eq!(appointment.treatment.cost, 150.0);
    }

    #[test]
    fn test_appointment_queries() {
        let mut clinic = sample_clinic();
        clinic.add_patient(Patient::new("p2", "Grace"));

        let first = clinic.schedule_appointment("p1", "d2", now(), "t1");
        let second = clinic.schedule_appointment("p2", "d2", now(), "t2");
        let third = clinic.schedule_appointment("p1", "h2", now(), "t2");
        assert!(first.is_success() && second.is_success() && third.is_success());

        assert_eq!(clinic.appointments().len(), 3);
        assert_eq!(clinic.appointments_for_patient("p1").len(), 2);
        assert_eq!(clinic.appointments_for_patient("p2").len(), 1);
        assert_eq!(clinic.appointments_for_practitioner("d2").len(), 2);
        assert_eq!(clinic.appointments_for_practitioner("h2").len(), 1);
        assert!(clinic.appointments_for_practitioner("d4").is_empty());

        // Booking order is preserved
        assert_eq!(
            Some(clinic.appointments()[0].id.as_str()),
            first.appointment_id()
        );
    }

    #[test]
    fn test_registries_are_reachable_for_population() {
        let mut clinic = Clinic::new();
        clinic.patients_mut().add(Patient::new("p1", "Ada"));
        clinic.dentists_mut().add(Dentist::new("d2", "Dr. Osei"));
        clinic.hygienists_mut().add(Hygienist::new("h4", "Kim"));

        assert!(clinic.patients().contains("p1"));
        assert_eq!(clinic.dentists().len(), 1);
        assert_eq!(ids(&clinic.available_practitioners()), vec!["d2", "h4"]);
    }
}
