use super::*;

// =============================================================
// Submit gate
// =============================================================

#[test]
fn missing_login_shows_message_without_credentials() {
    assert_eq!(
        check_submit(false, "", "hunter2"),
        SubmitCheck::Invalid("Enter your login.".to_owned())
    );
}

#[test]
fn missing_password_shows_message_without_credentials() {
    assert_eq!(
        check_submit(false, "alice", "  "),
        SubmitCheck::Invalid("Enter your password.".to_owned())
    );
}

#[test]
fn empty_form_reports_login_first() {
    assert_eq!(
        check_submit(false, "", ""),
        SubmitCheck::Invalid("Enter your login.".to_owned())
    );
}

#[test]
fn loading_form_ignores_submit() {
    assert_eq!(check_submit(true, "alice", "hunter2"), SubmitCheck::Ignore);
    assert_eq!(check_submit(true, "", ""), SubmitCheck::Ignore);
}

#[test]
fn valid_input_is_ready_with_credentials() {
    assert_eq!(
        check_submit(false, "alice", "hunter2"),
        SubmitCheck::Ready(LoginCredentials::new("alice", "hunter2"))
    );
}

// =============================================================
// Button label
// =============================================================

#[test]
fn submit_label_idle() {
    assert_eq!(submit_label(Phase::Idle), "Log in");
}

#[test]
fn submit_label_submitting() {
    assert_eq!(submit_label(Phase::Submitting), "Logging in...");
}

#[test]
fn submit_label_locked() {
    assert_eq!(submit_label(Phase::Locked), "Locked");
}
