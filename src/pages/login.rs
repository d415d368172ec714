//! Login page: credentials form wired to the lockout state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `LoginFlow` for the page lifetime. Every step of the flow is
//! republished into the `RwSignal<FormView>` context and every timer it asks
//! for is handed to a browser timeout that feeds the event back in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::{lock_countdown::LockCountdown, result_alert::ResultAlert};
use crate::net::types::LoginCredentials;
use crate::state::login::{FormView, Phase, validate_credentials};

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = expect_context::<RwSignal<FormView>>();
    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    let controller = browser::Controller::mount(form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let check = check_submit(
            form.get_untracked().is_loading,
            &login.get_untracked(),
            &password.get_untracked(),
        );
        let credentials = match check {
            SubmitCheck::Ignore => return,
            SubmitCheck::Invalid(message) => {
                info.set(message);
                return;
            }
            SubmitCheck::Ready(credentials) => credentials,
        };
        info.set(String::new());

        #[cfg(feature = "csr")]
        controller.submit(credentials, info);
        #[cfg(not(feature = "csr"))]
        let _ = credentials;
    };

    let is_loading = move || form.with(|f| f.is_loading);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <input
                        class="login-input"
                        type="text"
                        name="login"
                        placeholder="Login"
                        autocomplete="username"
                        required=true
                        prop:value=move || login.get()
                        on:input=move |ev| login.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        name="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=is_loading
                    >
                        {move || submit_label(form.with(|f| f.phase))}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <ResultAlert/>
                <LockCountdown/>
            </div>
        </div>
    }
}

/// What a form submission should do before anything reaches the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SubmitCheck {
    /// The button is disabled; drop the event.
    Ignore,
    /// Show this message and stay put.
    Invalid(String),
    Ready(LoginCredentials),
}

fn check_submit(is_loading: bool, login: &str, password: &str) -> SubmitCheck {
    if is_loading {
        return SubmitCheck::Ignore;
    }
    let credentials = LoginCredentials::new(login, password);
    match validate_credentials(&credentials) {
        Ok(()) => SubmitCheck::Ready(credentials),
        Err(e) => SubmitCheck::Invalid(e.to_string()),
    }
}

fn submit_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Log in",
        Phase::Submitting => "Logging in...",
        Phase::Locked => "Locked",
    }
}

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::*;

    use crate::config::LoginConfig;
    use crate::net::api::MockApi;
    use crate::net::types::LoginCredentials;
    use crate::state::login::{FormView, LoginFlow, SubmitRejected, run_attempt};
    use crate::util::clock::{Clock, SystemClock};
    use crate::util::storage::BrowserStore;
    use crate::util::timers::{Scheduled, schedule_in_browser};

    type Flow = Rc<RefCell<LoginFlow<BrowserStore>>>;

    /// Browser side of the page: the flow, the API, and timer plumbing.
    #[derive(Clone)]
    pub(super) struct Controller {
        flow: Flow,
        api: Rc<MockApi>,
        form: RwSignal<FormView>,
    }

    impl Controller {
        /// Build the flow from persisted lock state and start any timers it
        /// needs.
        pub(super) fn mount(form: RwSignal<FormView>) -> Self {
            let config = LoginConfig::default();
            let mut flow = LoginFlow::new(BrowserStore, &config);
            let timers = flow.init(SystemClock.now_ms());
            let flow = Rc::new(RefCell::new(flow));
            form.set(flow.borrow().view());
            schedule(&flow, form, timers);
            Self {
                flow,
                api: Rc::new(MockApi::new(&config)),
                form,
            }
        }

        pub(super) fn submit(&self, credentials: LoginCredentials, info: RwSignal<String>) {
            let flow = Rc::clone(&self.flow);
            let api = Rc::clone(&self.api);
            let form = self.form;
            leptos::task::spawn_local(async move {
                let outcome = run_attempt(&*flow, &*api, &SystemClock, &credentials, |view| form.set(view)).await;
                match outcome {
                    Ok(timers) => schedule(&flow, form, timers),
                    Err(SubmitRejected::Busy) => log::debug!("login submit ignored while busy"),
                    Err(e) => info.set(e.to_string()),
                }
            });
        }
    }

    fn schedule(flow: &Flow, form: RwSignal<FormView>, timers: Vec<Scheduled>) {
        for timer in timers {
            let flow = Rc::clone(flow);
            schedule_in_browser(timer, move |event| {
                let next = flow.borrow_mut().on_timer(event, SystemClock.now_ms());
                form.set(flow.borrow().view());
                schedule(&flow, form, next);
            });
        }
    }
}
