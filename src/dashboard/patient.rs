use serde::{Deserialize, Serialize};

/// Patient view: personal record, next appointment, active prescriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientData {
    pub personal_info: PatientPersonalInfo,
    #[serde(default)]
    pub upcoming_appointment: Option<PatientAppointment>,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPersonalInfo {
    pub full_name: String,
    /// ISO date, rendered long-form by the view layer.
    pub dob: String,
    pub sex: String,
    pub zip: String,
    pub insurance: String,
    pub policy: String,
    pub allergies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAppointment {
    pub doctor: String,
    pub specialty: String,
    pub hospital: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    pub id: i64,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub renewal_date: String,
}
