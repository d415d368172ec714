//! "Try again in N s" hint shown while the form is locked.

use leptos::prelude::*;

use crate::state::login::{FormView, Phase};

#[component]
pub fn LockCountdown() -> impl IntoView {
    let form = expect_context::<RwSignal<FormView>>();
    let label = move || form.with(countdown_label);

    view! {
        <Show when=move || label().is_some()>
            <p class="login-countdown">{move || label().unwrap_or_default()}</p>
        </Show>
    }
}

fn countdown_label(view: &FormView) -> Option<String> {
    if view.phase != Phase::Locked {
        return None;
    }
    match view.remaining_lock_seconds {
        Some(secs) if secs > 0 => Some(format!("Try again in {secs} s")),
        _ => None,
    }
}
