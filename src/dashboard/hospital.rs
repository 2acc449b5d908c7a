use serde::{Deserialize, Serialize};

use super::contains_ci;

/// Hospital admin view: overview counters plus the searchable rosters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalData {
    pub overview_data: HospitalOverview,
    #[serde(default)]
    pub patients_data: Vec<HospitalPatient>,
    #[serde(default)]
    pub doctors_data: Vec<HospitalDoctor>,
    #[serde(default)]
    pub appointments_data: Vec<HospitalAppointment>,
    #[serde(default)]
    pub prescriptions_data: Vec<HospitalPrescription>,
    pub performance_data: HospitalPerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalOverview {
    pub total_patients: i64,
    pub total_doctors: i64,
    pub today_appointments: i64,
    pub triage_calls_week: i64,
    pub prescriptions_to_renew: i64,
    #[serde(default)]
    pub top_symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalPatient {
    pub id: i64,
    pub patient_id: String,
    pub name: String,
    pub dob: String,
    pub insurance_provider: String,
    pub last_visit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDoctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub medical_license: String,
    /// One flag per hourly slot, 8AM through 5PM.
    #[serde(default)]
    pub schedule: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalAppointment {
    pub id: i64,
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalPrescription {
    pub id: i64,
    pub patient: String,
    pub medication: String,
    pub dosage: String,
    pub duration: String,
    pub issue_date: String,
    pub refill_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalPerformance {
    #[serde(default)]
    pub doctor_performance: Vec<DoctorPerformanceRow>,
    pub appointment_improvement: TrendMetric,
    pub patient_satisfaction: TrendMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorPerformanceRow {
    pub id: i64,
    pub doctor: String,
    pub appointments_per_week: i64,
    pub change: TrendMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetric {
    pub is_positive: bool,
    pub percentage: f64,
    pub description: String,
}

impl HospitalData {
    /// Patient roster filtered by name or patient id. An empty term returns
    /// every row, matching the search-box semantics.
    pub fn filter_patients(&self, term: &str) -> Vec<&HospitalPatient> {
        if term.is_empty() {
            return self.patients_data.iter().collect();
        }
        self.patients_data
            .iter()
            .filter(|p| contains_ci(&p.name, term) || contains_ci(&p.patient_id, term))
            .collect()
    }

    /// Doctor roster filtered by name or medical license.
    pub fn filter_doctors(&self, term: &str) -> Vec<&HospitalDoctor> {
        if term.is_empty() {
            return self.doctors_data.iter().collect();
        }
        self.doctors_data
            .iter()
            .filter(|d| contains_ci(&d.name, term) || contains_ci(&d.medical_license, term))
            .collect()
    }

    /// Appointments filtered by patient, doctor or reason.
    pub fn filter_appointments(&self, term: &str) -> Vec<&HospitalAppointment> {
        if term.is_empty() {
            return self.appointments_data.iter().collect();
        }
        self.appointments_data
            .iter()
            .filter(|a| {
                contains_ci(&a.patient, term) || contains_ci(&a.doctor, term) || contains_ci(&a.reason, term)
            })
            .collect()
    }

    /// Prescriptions filtered by patient or medication.
    pub fn filter_prescriptions(&self, term: &str) -> Vec<&HospitalPrescription> {
        if term.is_empty() {
            return self.prescriptions_data.iter().collect();
        }
        self.prescriptions_data
            .iter()
            .filter(|p| contains_ci(&p.patient, term) || contains_ci(&p.medication, term))
            .collect()
    }

    /// Performance rows filtered by doctor name.
    pub fn filter_performance(&self, term: &str) -> Vec<&DoctorPerformanceRow> {
        if term.is_empty() {
            return self.performance_data.doctor_performance.iter().collect();
        }
        self.performance_data
            .doctor_performance
            .iter()
            .filter(|d| contains_ci(&d.doctor, term))
            .collect()
    }
}
