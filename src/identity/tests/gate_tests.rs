use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::directory::MemoryDirectory;
use crate::error::{AppError, AppResult, MSG_INVALID_CREDENTIALS};
use crate::identity::{AuthProvider, CredentialGate, DirectoryAuthProvider, Session, UserType};
use crate::server::seed_demo_users;

/// Provider that records every call and always refuses.
struct CountingProvider {
    calls: AtomicUsize,
}

impl CountingProvider {
    fn new() -> Self {
        Self { calls: AtomicUsize::new(0) }
    }
}

#[async_trait]
impl AuthProvider for CountingProvider {
    async fn authenticate(&self, _f1: &str, _f2: &str, _t: UserType) -> AppResult<Session> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::invalid_credentials())
    }
}

fn rt() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap()
}

#[test]
fn patient_input_is_sanitized_as_typed() {
    let mut gate = CredentialGate::new(UserType::Patient);
    gate.set_field1("(555) 123-4567 ext 99");
    assert_eq!(gate.field1(), "5551234567");
    gate.set_field2("12x345");
    assert_eq!(gate.field2(), "1234");
    assert!(gate.is_valid());

    // Partial input keeps the control disabled without any error.
    gate.set_field1("555");
    assert!(!gate.is_valid());
    assert!(gate.error().is_none());
}

#[test]
fn doctor_and_facility_validity() {
    let mut gate = CredentialGate::new(UserType::Doctor);
    gate.set_field1("dr");
    gate.set_field2("secret");
    assert!(!gate.is_valid());
    gate.set_field1("drchen");
    assert!(gate.is_valid());
    gate.set_field2("short");
    assert!(!gate.is_valid());

    let mut gate = CredentialGate::new(UserType::Insurance);
    gate.set_field1("ops@insurer");
    gate.set_field2("coverage");
    assert!(!gate.is_valid());
    gate.set_field1("ops@insurer.com");
    assert!(gate.is_valid());
}

#[test]
fn changing_user_type_resets_fields_and_toggle() {
    let mut gate = CredentialGate::new(UserType::Doctor);
    gate.set_field1("drchen");
    gate.set_field2("heartbeat");
    gate.toggle_reveal();
    assert!(gate.reveal_field2());

    gate.change_user_type(UserType::Patient);
    assert_eq!(gate.user_type(), UserType::Patient);
    assert_eq!(gate.field1(), "");
    assert_eq!(gate.field2(), "");
    assert!(!gate.reveal_field2());
}

#[test]
fn changing_user_type_keeps_prior_error() {
    let rt = rt();
    let provider = CountingProvider::new();
    let mut gate = CredentialGate::new(UserType::Doctor);
    gate.set_field1("drchen");
    gate.set_field2("wrongpass");
    assert!(rt.block_on(gate.submit(&provider)).is_none());
    assert!(gate.error().is_some());

    gate.change_user_type(UserType::Patient);
    // fields reset, message still visible
    assert_eq!(gate.field1(), "");
    assert_eq!(gate.error().map(|e| e.message()), Some(MSG_INVALID_CREDENTIALS));
}

#[test]
fn invalid_input_never_reaches_the_provider() {
    let rt = rt();
    let provider = CountingProvider::new();
    let mut gate = CredentialGate::new(UserType::Patient);
    gate.set_field1("555");
    gate.set_field2("12");
    assert!(rt.block_on(gate.submit(&provider)).is_none());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert!(gate.error().is_none());
}

#[test]
fn submit_is_ignored_while_loading() {
    let rt = rt();
    let provider = CountingProvider::new();
    let mut gate = CredentialGate::new(UserType::Doctor);
    gate.set_field1("drchen");
    gate.set_field2("heartbeat");
    gate.force_loading(true);
    assert!(rt.block_on(gate.submit(&provider)).is_none());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    gate.force_loading(false);
    assert!(rt.block_on(gate.submit(&provider)).is_none());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn successful_submit_yields_a_session_and_clears_the_error() {
    let rt = rt();
    let directory = MemoryDirectory::new();
    seed_demo_users(&directory);
    let provider = DirectoryAuthProvider::new(Arc::new(directory));

    let mut gate = CredentialGate::new(UserType::Patient);
    gate.set_field1("5551234567");
    gate.set_field2("9999");
    assert!(rt.block_on(gate.submit(&provider)).is_none());
    assert!(gate.error().is_some());

    gate.set_field2("1234");
    let session = rt.block_on(gate.submit(&provider)).expect("login succeeds");
    assert_eq!(session.user_type, UserType::Patient);
    assert!(gate.error().is_none());
    assert!(!gate.loading());
}
