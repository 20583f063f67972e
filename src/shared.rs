// 🔒 Shared Clinic - one lock around the whole scheduler
//
// Registries, catalog and appointment list all sit behind a single RwLock, so
// there is at most one writer at a time across every piece of clinic state.
// Clones share the same clinic.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;

use crate::entities::{Appointment, Dentist, Hygienist, Patient, Practitioner, Treatment};
use crate::scheduler::{Clinic, ScheduleResult};

#[derive(Debug, Clone, Default)]
pub struct SharedClinic {
    inner: Arc<RwLock<Clinic>>,
}

impl SharedClinic {
    pub fn new(clinic: Clinic) -> Self {
        SharedClinic {
            inner: Arc::new(RwLock::new(clinic)),
        }
    }

    // Writers only run the Clinic methods below, each a single insert or push,
    // so a poisoned lock still guards a consistent Clinic.
    fn read(&self) -> RwLockReadGuard<'_, Clinic> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Clinic> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only closure against the clinic
    pub fn with<R>(&self, f: impl FnOnce(&Clinic) -> R) -> R {
        f(&*self.read())
    }

    pub fn add_patient(&self, patient: Patient) {
        self.write().add_patient(patient);
    }

    pub fn add_dentist(&self, dentist: Dentist) {
        self.write().add_dentist(dentist);
    }

    pub fn add_hygienist(&self, hygienist: Hygienist) {
        self.write().add_hygienist(hygienist);
    }

    pub fn add_treatment(&self, treatment: Treatment) {
        self.write().add_treatment(treatment);
    }

    pub fn schedule_appointment(
        &self,
        patient_id: &str,
        practitioner_id: &str,
        time: NaiveDateTime,
        treatment_id: &str,
    ) -> ScheduleResult {
        self.write()
            .schedule_appointment(patient_id, practitioner_id, time, treatment_id)
    }

    pub fn get_appointment_by_id(&self, id: &str) -> Option<Appointment> {
        self.read().get_appointment_by_id(id)
    }

    pub fn available_practitioners(&self) -> Vec<Practitioner> {
        self.read().available_practitioners()
    }

    pub fn appointment_count(&self) -> usize {
        self.read().appointments().len()
    }
}

impl From<Clinic> for SharedClinic {
    fn from(clinic: Clinic) -> Self {
        SharedClinic::new(clinic)
    }
}

// ============================================================================
// TESTS
// ============================================================================
