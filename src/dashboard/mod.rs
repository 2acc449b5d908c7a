//! Role-shaped dashboard payloads.
//! Each account kind carries its own strongly-typed record; the directory
//! stores them as opaque JSON and this module decodes them per role. Every
//! role also ships a bundled fallback dataset with the identical shape, used
//! whenever a session carries no decodable payload.

mod doctor;
mod hospital;
mod insurance;
mod patient;
pub mod samples;

pub use doctor::{DoctorAppointment, DoctorData, DoctorPersonalInfo, RiskLevel};
pub use hospital::{
    HospitalAppointment, HospitalData, HospitalDoctor, HospitalOverview, HospitalPatient,
    HospitalPerformance, HospitalPrescription, DoctorPerformanceRow, TrendMetric,
};
pub use insurance::{
    ActiveMember, AgeGroupShare, Demographics, HospitalUsageRow, InsuranceData,
    InsuranceTypeShare, LocationShare, SexShare, SymptomShare,
};
pub use patient::{PatientAppointment, PatientData, PatientPersonalInfo, Prescription};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::identity::UserType;

/// The per-role payload attached to a session, keyed by the same closed
/// enumeration that drives the credential gate and the role router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardData {
    Patient(PatientData),
    Doctor(DoctorData),
    Hospital(HospitalData),
    Insurance(InsuranceData),
}

impl DashboardData {
    /// Decode a directory record's opaque payload into the typed variant for
    /// the given role. A payload that does not match the role's shape yields
    /// None; the dashboards then fall back to the bundled dataset.
    pub fn decode(user_type: UserType, value: &serde_json::Value) -> Option<DashboardData> {
        let decoded = match user_type {
            UserType::Patient => serde_json::from_value(value.clone()).map(DashboardData::Patient),
            UserType::Doctor => serde_json::from_value(value.clone()).map(DashboardData::Doctor),
            UserType::Hospital => serde_json::from_value(value.clone()).map(DashboardData::Hospital),
            UserType::Insurance => serde_json::from_value(value.clone()).map(DashboardData::Insurance),
        };
        match decoded {
            Ok(d) => Some(d),
            Err(e) => {
                debug!("dashboard payload for {} did not decode: {}", user_type, e);
                None
            }
        }
    }

    /// The role this payload belongs to.
    pub fn user_type(&self) -> UserType {
        match self {
            DashboardData::Patient(_) => UserType::Patient,
            DashboardData::Doctor(_) => UserType::Doctor,
            DashboardData::Hospital(_) => UserType::Hospital,
            DashboardData::Insurance(_) => UserType::Insurance,
        }
    }

    /// The bundled static dataset for a role.
    pub fn fallback(user_type: UserType) -> DashboardData {
        match user_type {
            UserType::Patient => DashboardData::Patient(samples::patient()),
            UserType::Doctor => DashboardData::Doctor(samples::doctor()),
            UserType::Hospital => DashboardData::Hospital(samples::hospital()),
            UserType::Insurance => DashboardData::Insurance(samples::insurance()),
        }
    }
}

/// Case-insensitive substring match used by every dashboard search box.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Render an ISO `YYYY-MM-DD` date as long-form US English, e.g.
/// "March 5, 2025". Anything unparseable renders verbatim.
pub fn format_long_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
