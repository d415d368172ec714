use super::*;

fn api_with(outcome: Outcome) -> MockApi<FixedChooser> {
    MockApi::with_chooser(&LoginConfig::default(), FixedChooser(outcome))
}

// =============================================================
// Endpoint selection
// =============================================================

#[test]
fn endpoint_maps_outcome_to_configured_url() {
    let cfg = LoginConfig {
        success_url: "https://mock.test/ok".to_owned(),
        error_url: "https://mock.test/fail".to_owned(),
        ..LoginConfig::default()
    };
    let api = MockApi::new(&cfg);
    assert_eq!(api.endpoint(Outcome::Success), "https://mock.test/ok");
    assert_eq!(api.endpoint(Outcome::Error), "https://mock.test/fail");
}

#[test]
fn fixed_chooser_forces_success_branch() {
    let api = api_with(Outcome::Success);
    let (outcome, url) = api.choose_endpoint();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(url, LoginConfig::default().success_url);
}

#[test]
fn fixed_chooser_forces_error_branch() {
    let api = api_with(Outcome::Error);
    let (outcome, url) = api.choose_endpoint();
    assert_eq!(outcome, Outcome::Error);
    assert_eq!(url, LoginConfig::default().error_url);
}

#[test]
fn random_chooser_produces_both_outcomes() {
    let chooser = RandomChooser;
    let draws: Vec<Outcome> = (0..200).map(|_| chooser.choose()).collect();
    assert!(draws.contains(&Outcome::Success));
    assert!(draws.contains(&Outcome::Error));
}

// =============================================================
// Transport
// =============================================================

#[test]
fn attempt_login_is_unavailable_off_browser() {
    let api = api_with(Outcome::Success);
    let res = futures::executor::block_on(api.attempt_login());
    assert_eq!(res, Err(ApiError::Unavailable));
}

// =============================================================
// ApiError -> display result
// =============================================================

#[test]
fn status_error_message_includes_status() {
    let err = ApiError::Status { status: 401, body: None };
    assert_eq!(err.to_string(), "login request failed: 401");
}

#[test]
fn status_error_with_body_displays_body() {
    let err = ApiError::Status {
        status: 400,
        body: Some(ApiResult::failure("bad credentials")),
    };
    let shown = err.into_result();
    assert!(!shown.success);
    assert_eq!(shown.errors.as_deref(), Some("bad credentials"));
}

#[test]
fn status_error_body_is_forced_to_failure() {
    let err = ApiError::Status {
        status: 500,
        body: Some(ApiResult {
            success: true,
            result: None,
            errors: None,
        }),
    };
    let shown = err.into_result();
    assert!(!shown.success);
    assert_eq!(shown.errors.as_deref(), Some("login request failed: 500"));
}

#[test]
fn transport_error_becomes_synthetic_failure() {
    let shown = ApiError::Transport("offline".to_owned()).into_result();
    assert!(!shown.success);
    assert!(shown.result.is_none());
    assert_eq!(shown.errors.as_deref(), Some("network error: offline"));
}
