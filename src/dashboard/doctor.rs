use serde::{Deserialize, Serialize};

/// Doctor view: practice record, today's schedule, bookable slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorData {
    pub personal_info: DoctorPersonalInfo,
    #[serde(default)]
    pub todays_appointments: Vec<DoctorAppointment>,
    /// Ordered slot labels ("8:00 AM" .. "5:00 PM") used by the blocking UI.
    #[serde(default)]
    pub time_slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPersonalInfo {
    pub name: String,
    pub specialty: String,
    pub hospital: String,
    pub license: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorAppointment {
    pub id: i64,
    pub patient: String,
    pub time: String,
    pub reason: String,
    pub risk: RiskLevel,
}

/// Triage risk band shown next to each appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}
