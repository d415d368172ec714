//! Inline alert showing the latest login result.

#[cfg(test)]
#[path = "result_alert_test.rs"]
mod result_alert_test;

use leptos::prelude::*;

use crate::net::types::{ApiResult, User};
use crate::state::login::FormView;

/// Alert bound to `FormView::login_result`; renders nothing when empty.
#[component]
pub fn ResultAlert() -> impl IntoView {
    let form = expect_context::<RwSignal<FormView>>();

    let has_result = move || form.with(|f| f.login_result.is_some());
    let class = move || form.with(|f| alert_class(f.login_result.as_ref()));
    let message = move || {
        form.with(|f| {
            f.login_result
                .as_ref()
                .map(result_message)
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=has_result>
            <div class=class role="alert">
                {message}
            </div>
        </Show>
    }
}

fn alert_class(result: Option<&ApiResult<User>>) -> &'static str {
    match result {
        Some(r) if r.success => "login-alert login-alert--success",
        Some(_) => "login-alert login-alert--error",
        None => "login-alert",
    }
}

fn result_message(result: &ApiResult<User>) -> String {
    if result.success {
        return match result.result.as_ref().and_then(User::display_name) {
            Some(name) => format!("Welcome, {name}!"),
            None => "Logged in successfully.".to_owned(),
        };
    }
    match result.errors.as_deref() {
        Some(errors) if !errors.trim().is_empty() => errors.to_owned(),
        _ => "Login failed.".to_owned(),
    }
}
