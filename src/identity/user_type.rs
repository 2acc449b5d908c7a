use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Email shape check for facility logins. Intentionally loose: anything of
/// the form local@domain.tld with no whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// The four account kinds the portal serves. The discriminant order matches
/// the directory's numeric `role` column and must not change: the hosted
/// store filters on these exact values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    Patient,
    Doctor,
    Hospital,
    Insurance,
}

/// How a credential field should be presented and captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Phone,
    Text,
    Email,
    Password,
}

/// Per-role metadata for one credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Some(n): input is digit-only and capped at n characters as typed.
    pub digit_cap: Option<usize>,
}

impl UserType {
    pub const ALL: [UserType; 4] = [UserType::Patient, UserType::Doctor, UserType::Hospital, UserType::Insurance];

    /// Fixed bijection onto the directory's `role` column.
    pub fn role_index(self) -> u8 {
        match self {
            UserType::Patient => 0,
            UserType::Doctor => 1,
            UserType::Hospital => 2,
            UserType::Insurance => 3,
        }
    }

    /// Inverse of `role_index`. Out-of-range indices are data errors from
    /// the outside world, not panics.
    pub fn from_role_index(idx: u8) -> Option<UserType> {
        match idx {
            0 => Some(UserType::Patient),
            1 => Some(UserType::Doctor),
            2 => Some(UserType::Hospital),
            3 => Some(UserType::Insurance),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Patient => "Patient",
            UserType::Doctor => "Doctor",
            UserType::Hospital => "Hospital",
            UserType::Insurance => "Insurance",
        }
    }

    pub fn parse(s: &str) -> Option<UserType> {
        match s {
            "Patient" => Some(UserType::Patient),
            "Doctor" => Some(UserType::Doctor),
            "Hospital" => Some(UserType::Hospital),
            "Insurance" => Some(UserType::Insurance),
            _ => None,
        }
    }

    pub fn field1_spec(self) -> FieldSpec {
        match self {
            UserType::Patient => FieldSpec { placeholder: "Phone Number", kind: FieldKind::Phone, digit_cap: Some(10) },
            UserType::Doctor => FieldSpec { placeholder: "Username", kind: FieldKind::Text, digit_cap: None },
            UserType::Hospital | UserType::Insurance => {
                FieldSpec { placeholder: "Email Address", kind: FieldKind::Email, digit_cap: None }
            }
        }
    }

    pub fn field2_spec(self) -> FieldSpec {
        match self {
            UserType::Patient => FieldSpec { placeholder: "MediCode", kind: FieldKind::Password, digit_cap: Some(4) },
            UserType::Doctor | UserType::Hospital | UserType::Insurance => {
                FieldSpec { placeholder: "Password", kind: FieldKind::Password, digit_cap: None }
            }
        }
    }

    /// Whether field2 is concealed by default (and so gets a reveal toggle).
    pub fn conceals_field2(self) -> bool {
        self.field2_spec().kind == FieldKind::Password
    }

    /// Submission gate: both fields well-formed for this role.
    /// Blank input never validates regardless of role.
    pub fn credentials_valid(self, field1: &str, field2: &str) -> bool {
        if field1.trim().is_empty() || field2.trim().is_empty() {
            return false;
        }
        match self {
            UserType::Patient => field1.len() == 10 && field2.len() == 4,
            UserType::Doctor => field1.chars().count() >= 3 && field2.chars().count() >= 6,
            UserType::Hospital | UserType::Insurance => {
                EMAIL_RE.is_match(field1) && field2.chars().count() >= 6
            }
        }
    }

    /// Apply the role's as-typed input policy to raw field1 text.
    pub fn sanitize_field1(self, raw: &str) -> String {
        sanitize(raw, self.field1_spec().digit_cap)
    }

    /// Apply the role's as-typed input policy to raw field2 text.
    pub fn sanitize_field2(self, raw: &str) -> String {
        sanitize(raw, self.field2_spec().digit_cap)
    }
}

fn sanitize(raw: &str, digit_cap: Option<usize>) -> String {
    match digit_cap {
        Some(cap) => raw.chars().filter(|c| c.is_ascii_digit()).take(cap).collect(),
        None => raw.to_string(),
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_index_round_trips() {
        for t in UserType::ALL {
            assert_eq!(UserType::from_role_index(t.role_index()), Some(t));
        }
        assert_eq!(UserType::from_role_index(4), None);
        assert_eq!(UserType::from_role_index(255), None);
    }

    #[test]
    fn name_round_trips() {
        for t in UserType::ALL {
            assert_eq!(UserType::parse(t.as_str()), Some(t));
        }
        assert_eq!(UserType::parse("patient"), None);
        assert_eq!(UserType::parse(""), None);
    }

    #[test]
    fn patient_sanitization_strips_and_caps() {
        let t = UserType::Patient;
        assert_eq!(t.sanitize_field1("(555) 123-4567"), "5551234567");
        assert_eq!(t.sanitize_field1("555123456789"), "5551234567");
        assert_eq!(t.sanitize_field2("12a34"), "1234");
        assert_eq!(t.sanitize_field2("98765"), "9876");
        // Other roles pass text through untouched.
        assert_eq!(UserType::Doctor.sanitize_field1("dr.jones!"), "dr.jones!");
        assert_eq!(UserType::Hospital.sanitize_field2("p@ss word"), "p@ss word");
    }

    #[test]
    fn patient_validity_requires_exact_lengths() {
        let t = UserType::Patient;
        assert!(t.credentials_valid("5551234567", "1234"));
        assert!(!t.credentials_valid("555123456", "1234"));
        assert!(!t.credentials_valid("5551234567", "123"));
        assert!(!t.credentials_valid("", ""));
    }

    #[test]
    fn doctor_validity_uses_minimum_lengths() {
        let t = UserType::Doctor;
        assert!(t.credentials_valid("abc", "secret"));
        assert!(t.credentials_valid("drjones", "longerpassword"));
        assert!(!t.credentials_valid("ab", "secret"));
        assert!(!t.credentials_valid("abc", "short"));
        assert!(!t.credentials_valid("   ", "secret"));
    }

    #[test]
    fn facility_validity_requires_email_shape() {
        for t in [UserType::Hospital, UserType::Insurance] {
            assert!(t.credentials_valid("admin@mercy.org", "secret"));
            assert!(!t.credentials_valid("admin@mercy", "secret"));
            assert!(!t.credentials_valid("not an email", "secret"));
            assert!(!t.credentials_valid("a@b.c", "five5"));
            assert!(!t.credentials_valid("has space@x.org", "secret"));
        }
    }

    #[test]
    fn field_metadata_matches_role() {
        assert_eq!(UserType::Patient.field1_spec().placeholder, "Phone Number");
        assert_eq!(UserType::Patient.field2_spec().digit_cap, Some(4));
        assert_eq!(UserType::Doctor.field1_spec().kind, FieldKind::Text);
        assert_eq!(UserType::Insurance.field1_spec().kind, FieldKind::Email);
        for t in UserType::ALL {
            assert!(t.conceals_field2());
        }
    }
}
