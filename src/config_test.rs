use super::*;

#[test]
fn default_lock_is_one_minute() {
    assert_eq!(LoginConfig::default().lock_duration_ms, 60_000);
}

#[test]
fn default_error_display_is_five_seconds() {
    assert_eq!(LoginConfig::default().error_display_ms, 5_000);
}

#[test]
fn default_tick_is_one_second() {
    assert_eq!(LoginConfig::default().tick_interval_ms, 1_000);
}

#[test]
fn default_storage_key_matches_browser_key() {
    assert_eq!(LoginConfig::default().storage_key, "loginTimeout");
}

#[test]
fn default_endpoints_are_distinct() {
    let cfg = LoginConfig::default();
    assert_ne!(cfg.success_url, cfg.error_url);
    assert!(cfg.success_url.starts_with("https://"));
    assert!(cfg.error_url.starts_with("https://"));
}
