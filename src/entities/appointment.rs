// 📅 Appointment Entity
//
// Only the scheduler creates appointments. Once booked an appointment never
// changes: it keeps the patient, practitioner and treatment as they were at
// booking time.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::person::{Patient, Person, Practitioner};
use super::treatment::Treatment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Generated UUID v4 string
    pub id: String,
    pub patient: Patient,
    pub practitioner: Practitioner,
    pub time: NaiveDateTime,
    pub treatment: Treatment,
}

impl Appointment {
    pub(crate) fn book(
        patient: Patient,
        practitioner: Practitioner,
        time: NaiveDateTime,
        treatment: Treatment,
    ) -> Self {
        Appointment {
            id: uuid::Uuid::new_v4().to_string(),
            patient,
            practitioner,
            time,
            treatment,
        }
    }

    /// When the treatment is expected to finish
    pub fn end_time(&self) -> NaiveDateTime {
        self.time + self.treatment.duration()
    }

    pub fn involves(&self, person_id: &str) -> bool {
        self.patient.id() == person_id || self.practitioner.id() == person_id
    }
}
