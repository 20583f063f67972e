// 🦷 Treatment Entity + Catalog
//
// The catalog is keyed by treatment id. Adding a treatment with an existing id
// replaces it; nothing is ever removed.

use chrono::Duration;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// TREATMENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Treatment {
    pub id: String,
    pub name: String,

    /// Price charged to the patient
    pub cost: f64,

    /// Chair time needed, in minutes
    pub duration_minutes: u32,
}

impl Treatment {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost: f64,
        duration_minutes: u32,
    ) -> Self {
        Treatment {
            id: id.into(),
            name: name.into(),
            cost,
            duration_minutes,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.duration_minutes))
    }
}

// ============================================================================
// TREATMENT CATALOG
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct TreatmentCatalog {
    treatments: IndexMap<String, Treatment>,
}

impl TreatmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a treatment (overwrites an existing entry with the same id)
    pub fn add(&mut self, treatment: Treatment) {
        self.treatments.insert(treatment.id.clone(), treatment);
    }

    pub fn get(&self, id: &str) -> Option<Treatment> {
        self.treatments.get(id).cloned()
    }

    /// Full current contents, in catalog order
    pub fn all(&self) -> Vec<Treatment> {
        self.treatments.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.treatments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.treatments.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
