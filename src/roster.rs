// 📋 Clinic Roster - seed a clinic from JSON
//
// Roster = the people and treatments a clinic starts with.
// Every section is optional; unknown fields are rejected.
//
// {
//   "patients":   [{ "id": "p1", "name": "Ada" }],
//   "dentists":   [{ "id": "d2", "name": "Dr. Osei", "specialty": "Orthodontics" }],
//   "hygienists": [{ "id": "h4", "name": "Kim" }],
//   "treatments": [{ "id": "t1", "name": "Cleaning", "cost": 80.0, "duration_minutes": 30 }]
// }

use anyhow::{bail, Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::entities::{Dentist, Hygienist, Patient, Person, Treatment};
use crate::scheduler::Clinic;

// ============================================================================
// ROSTER DEFINITION
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClinicRoster {
    #[serde(default)]
    pub patients: Vec<Patient>,

    #[serde(default)]
    pub dentists: Vec<Dentist>,

    #[serde(default)]
    pub hygienists: Vec<Hygienist>,

    #[serde(default)]
    pub treatments: Vec<Treatment>,
}

impl ClinicRoster {
    /// Load a roster from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read roster file: {:?}", path.as_ref()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Invalid roster file: {:?}", path.as_ref()))
    }

    /// Parse and validate a roster from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let roster: ClinicRoster =
            serde_json::from_str(json).context("Failed to parse roster JSON")?;

        roster.validate()?;
        Ok(roster)
    }

    /// Reject empty ids and ids repeated within one section
    pub fn validate(&self) -> Result<()> {
        check_ids("patients", self.patients.iter().map(|p| p.id()))?;
        check_ids("dentists", self.dentists.iter().map(|d| d.id()))?;
        check_ids("hygienists", self.hygienists.iter().map(|h| h.id()))?;
        check_ids("treatments", self.treatments.iter().map(|t| t.id.as_str()))?;
        Ok(())
    }
}

fn check_ids<'a>(section: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();

    for id in ids {
        if id.trim().is_empty() {
            bail!("Empty id in roster section '{}'", section);
        }
        if !seen.insert(id) {
            bail!("Duplicate id '{}' in roster section '{}'", id, section);
        }
    }

    Ok(())
}

// ============================================================================
// CLINIC FROM ROSTER
// ============================================================================

impl Clinic {
    /// Build a clinic populated with everything in the roster
    pub fn from_roster(roster: ClinicRoster) -> Self {
        let mut clinic = Clinic::new();
        clinic.load_roster(roster);
        clinic
    }

    /// Add every roster entry to this clinic (same-id entries are overwritten)
    pub fn load_roster(&mut self, roster: ClinicRoster) {
        info!(
            patients = roster.patients.len(),
            dentists = roster.dentists.len(),
            hygienists = roster.hygienists.len(),
            treatments = roster.treatments.len(),
            "Loading clinic roster"
        );

        roster.patients.into_iter().for_each(|p| self.add_patient(p));
        roster.dentists.into_iter().for_each(|d| self.add_dentist(d));
        roster.hygienists.into_iter().for_each(|h| self.add_hygienist(h));
        roster.treatments.into_iter().for_each(|t| self.add_treatment(t));
    }
}

// ============================================================================
// TESTS
// ============================================================================
