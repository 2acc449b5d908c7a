//! Bundled fallback datasets, one per role. Served whenever a session
//! carries no decodable payload from the directory, and used to seed the
//! demo directory on first run.

use super::doctor::{DoctorAppointment, DoctorData, DoctorPersonalInfo, RiskLevel};
use super::hospital::{
    DoctorPerformanceRow, HospitalAppointment, HospitalData, HospitalDoctor, HospitalOverview,
    HospitalPatient, HospitalPerformance, HospitalPrescription, TrendMetric,
};
use super::insurance::{
    ActiveMember, AgeGroupShare, Demographics, HospitalUsageRow, InsuranceData, InsuranceTypeShare,
    LocationShare, SexShare, SymptomShare,
};
use super::patient::{PatientAppointment, PatientData, PatientPersonalInfo, Prescription};

pub fn patient() -> PatientData {
    PatientData {
        personal_info: PatientPersonalInfo {
            full_name: "Jordan Avery".into(),
            dob: "1987-06-14".into(),
            sex: "Female".into(),
            zip: "94107".into(),
            insurance: "BlueShield Plus".into(),
            policy: "BSP-4417-8823".into(),
            allergies: "Penicillin".into(),
        },
        upcoming_appointment: Some(PatientAppointment {
            doctor: "Dr. Maria Chen".into(),
            specialty: "Cardiology".into(),
            hospital: "St. Vincent Medical Center".into(),
            date: "2025-03-05".into(),
            time: "10:30 AM".into(),
            reason: "Annual checkup".into(),
        }),
        prescriptions: vec![
            Prescription {
                id: 1,
                name: "Lisinopril".into(),
                dosage: "10mg".into(),
                frequency: "Once daily".into(),
                renewal_date: "2025-04-01".into(),
            },
            Prescription {
                id: 2,
                name: "Atorvastatin".into(),
                dosage: "20mg".into(),
                frequency: "Once daily, evening".into(),
                renewal_date: "2025-03-18".into(),
            },
        ],
    }
}

pub fn doctor() -> DoctorData {
    DoctorData {
        personal_info: DoctorPersonalInfo {
            name: "Dr. Maria Chen".into(),
            specialty: "Cardiology".into(),
            hospital: "St. Vincent Medical Center".into(),
            license: "MC-204917".into(),
        },
        todays_appointments: vec![
            DoctorAppointment {
                id: 1,
                patient: "Jordan Avery".into(),
                time: "10:30 AM".into(),
                reason: "Annual checkup".into(),
                risk: RiskLevel::Low,
            },
            DoctorAppointment {
                id: 2,
                patient: "Sam Okafor".into(),
                time: "11:15 AM".into(),
                reason: "Chest pain follow-up".into(),
                risk: RiskLevel::High,
            },
            DoctorAppointment {
                id: 3,
                patient: "Lena Fischer".into(),
                time: "2:00 PM".into(),
                reason: "Hypertension review".into(),
                risk: RiskLevel::Moderate,
            },
        ],
        time_slots: vec![
            "8:00 AM".into(),
            "9:00 AM".into(),
            "10:00 AM".into(),
            "11:00 AM".into(),
            "12:00 PM".into(),
            "1:00 PM".into(),
            "2:00 PM".into(),
            "3:00 PM".into(),
            "4:00 PM".into(),
            "5:00 PM".into(),
        ],
    }
}

pub fn hospital() -> HospitalData {
    HospitalData {
        overview_data: HospitalOverview {
            total_patients: 2418,
            total_doctors: 64,
            today_appointments: 183,
            triage_calls_week: 412,
            prescriptions_to_renew: 57,
            top_symptoms: vec!["Fever".into(), "Chest pain".into(), "Fatigue".into()],
        },
        patients_data: vec![
            HospitalPatient {
                id: 1,
                patient_id: "PT-10021".into(),
                name: "Jordan Avery".into(),
                dob: "1987-06-14".into(),
                insurance_provider: "BlueShield Plus".into(),
                last_visit: "2025-01-22".into(),
            },
            HospitalPatient {
                id: 2,
                patient_id: "PT-10022".into(),
                name: "Sam Okafor".into(),
                dob: "1975-11-02".into(),
                insurance_provider: "Aetna Core".into(),
                last_visit: "2025-02-10".into(),
            },
            HospitalPatient {
                id: 3,
                patient_id: "PT-10023".into(),
                name: "Lena Fischer".into(),
                dob: "1992-03-30".into(),
                insurance_provider: "UnitedCare".into(),
                last_visit: "2024-12-05".into(),
            },
        ],
        doctors_data: vec![
            HospitalDoctor {
                id: 1,
                name: "Dr. Maria Chen".into(),
                specialty: "Cardiology".into(),
                medical_license: "MC-204917".into(),
                schedule: vec![true, true, false, true, true, false, true, true, true, false],
            },
            HospitalDoctor {
                id: 2,
                name: "Dr. Paul Ngata".into(),
                specialty: "Pediatrics".into(),
                medical_license: "MC-118204".into(),
                schedule: vec![false, true, true, true, false, true, true, false, true, true],
            },
        ],
        appointments_data: vec![
            HospitalAppointment {
                id: 1,
                patient: "Jordan Avery".into(),
                doctor: "Dr. Maria Chen".into(),
                date: "2025-03-05".into(),
                time: "10:30 AM".into(),
                reason: "Annual checkup".into(),
            },
            HospitalAppointment {
                id: 2,
                patient: "Sam Okafor".into(),
                doctor: "Dr. Maria Chen".into(),
                date: "2025-03-05".into(),
                time: "11:15 AM".into(),
                reason: "Chest pain follow-up".into(),
            },
        ],
        prescriptions_data: vec![
            HospitalPrescription {
                id: 1,
                patient: "Jordan Avery".into(),
                medication: "Lisinopril".into(),
                dosage: "10mg".into(),
                duration: "90 days".into(),
                issue_date: "2025-01-02".into(),
                refill_date: "2025-04-01".into(),
            },
            HospitalPrescription {
                id: 2,
                patient: "Lena Fischer".into(),
                medication: "Metformin".into(),
                dosage: "500mg".into(),
                duration: "30 days".into(),
                issue_date: "2025-02-12".into(),
                refill_date: "2025-03-14".into(),
            },
        ],
        performance_data: HospitalPerformance {
            doctor_performance: vec![
                DoctorPerformanceRow {
                    id: 1,
                    doctor: "Dr. Maria Chen".into(),
                    appointments_per_week: 42,
                    change: TrendMetric {
                        is_positive: true,
                        percentage: 8.0,
                        description: "more than last month".into(),
                    },
                },
                DoctorPerformanceRow {
                    id: 2,
                    doctor: "Dr. Paul Ngata".into(),
                    appointments_per_week: 35,
                    change: TrendMetric {
                        is_positive: false,
                        percentage: 3.0,
                        description: "fewer than last month".into(),
                    },
                },
            ],
            appointment_improvement: TrendMetric {
                is_positive: true,
                percentage: 12.0,
                description: "compared to the previous quarter".into(),
            },
            patient_satisfaction: TrendMetric {
                is_positive: true,
                percentage: 91.0,
                description: "Patient Satisfaction Rate".into(),
            },
        },
    }
}

pub fn insurance() -> InsuranceData {
    InsuranceData {
        active_members: vec![
            ActiveMember {
                id: 1,
                name: "Jordan Avery".into(),
                policy_number: "BSP-4417-8823".into(),
                plan_type: "Premium".into(),
                last_interaction: "2025-02-20".into(),
            },
            ActiveMember {
                id: 2,
                name: "Sam Okafor".into(),
                policy_number: "BSP-5120-1174".into(),
                plan_type: "Basic".into(),
                last_interaction: "2025-01-08".into(),
            },
            ActiveMember {
                id: 3,
                name: "Priya Raman".into(),
                policy_number: "BSP-603-44821".into(),
                plan_type: "Premium".into(),
                last_interaction: "2025-02-27".into(),
            },
        ],
        hospital_usage: vec![
            HospitalUsageRow {
                id: 1,
                hospital: "St. Vincent Medical Center".into(),
                location: "San Francisco, CA".into(),
                total_visits: 1240,
                avg_cost_per_visit: 312.5,
                most_common: "Cardiology consult".into(),
            },
            HospitalUsageRow {
                id: 2,
                hospital: "Riverside General".into(),
                location: "Sacramento, CA".into(),
                total_visits: 876,
                avg_cost_per_visit: 248.0,
                most_common: "Primary care visit".into(),
            },
        ],
        demographics_data: Demographics {
            total_active_members: 15204,
            total_hospitals_covered: 38,
            age_groups: vec![
                AgeGroupShare { range: "0-17".into(), percentage: 14.0, count: 2129 },
                AgeGroupShare { range: "18-34".into(), percentage: 27.0, count: 4105 },
                AgeGroupShare { range: "35-54".into(), percentage: 33.0, count: 5017 },
                AgeGroupShare { range: "55-74".into(), percentage: 21.0, count: 3193 },
                AgeGroupShare { range: "75+".into(), percentage: 5.0, count: 760 },
            ],
            sex_composition: vec![
                SexShare { sex: "Male".into(), percentage: 48.0, count: 7298 },
                SexShare { sex: "Female".into(), percentage: 52.0, count: 7906 },
            ],
            location_data: vec![
                LocationShare { state: "California".into(), density: 82.0, members: 6890 },
                LocationShare { state: "Oregon".into(), density: 44.0, members: 3702 },
                LocationShare { state: "Washington".into(), density: 55.0, members: 4612 },
            ],
            top_symptoms: vec![
                SymptomShare { symptom: "Fever".into(), percentage: 31.0 },
                SymptomShare { symptom: "Back pain".into(), percentage: 24.0 },
                SymptomShare { symptom: "Fatigue".into(), percentage: 19.0 },
                SymptomShare { symptom: "Headache".into(), percentage: 15.0 },
                SymptomShare { symptom: "Other".into(), percentage: 11.0 },
            ],
            insurance_types: vec![
                InsuranceTypeShare { label: "Employer".into(), percentage: 58.0 },
                InsuranceTypeShare { label: "Individual".into(), percentage: 29.0 },
                InsuranceTypeShare { label: "Government".into(), percentage: 13.0 },
            ],
        },
    }
}
