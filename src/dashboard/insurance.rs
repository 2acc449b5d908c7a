use serde::{Deserialize, Serialize};

use super::contains_ci;

/// Insurer view: member roster, per-hospital usage, demographics rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceData {
    #[serde(default)]
    pub active_members: Vec<ActiveMember>,
    #[serde(default)]
    pub hospital_usage: Vec<HospitalUsageRow>,
    pub demographics_data: Demographics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveMember {
    pub id: i64,
    pub name: String,
    pub policy_number: String,
    pub plan_type: String,
    pub last_interaction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalUsageRow {
    pub id: i64,
    pub hospital: String,
    pub location: String,
    pub total_visits: i64,
    pub avg_cost_per_visit: f64,
    pub most_common: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub total_active_members: i64,
    pub total_hospitals_covered: i64,
    #[serde(default)]
    pub age_groups: Vec<AgeGroupShare>,
    #[serde(default)]
    pub sex_composition: Vec<SexShare>,
    #[serde(default)]
    pub location_data: Vec<LocationShare>,
    #[serde(default)]
    pub top_symptoms: Vec<SymptomShare>,
    #[serde(default)]
    pub insurance_types: Vec<InsuranceTypeShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeGroupShare {
    pub range: String,
    pub percentage: f64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SexShare {
    pub sex: String,
    pub percentage: f64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationShare {
    pub state: String,
    /// Relative member density, 0..100, drives the heat bar width.
    pub density: f64,
    pub members: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomShare {
    pub symptom: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceTypeShare {
    #[serde(rename = "type")]
    pub label: String,
    pub percentage: f64,
}

impl InsuranceData {
    /// Member roster filtered by name or policy number. Empty term returns
    /// the full roster.
    pub fn filter_members(&self, term: &str) -> Vec<&ActiveMember> {
        if term.is_empty() {
            return self.active_members.iter().collect();
        }
        self.active_members
            .iter()
            .filter(|m| contains_ci(&m.name, term) || contains_ci(&m.policy_number, term))
            .collect()
    }

    /// Usage rows filtered by hospital name.
    pub fn filter_hospitals(&self, term: &str) -> Vec<&HospitalUsageRow> {
        if term.is_empty() {
            return self.hospital_usage.iter().collect();
        }
        self.hospital_usage.iter().filter(|h| contains_ci(&h.hospital, term)).collect()
    }
}
