//! Root application component and mount entry point.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::login::LoginPage;
use crate::state::login::FormView;

/// Root application component.
///
/// Provides the shared `FormView` context read by the page and its
/// components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let form = RwSignal::new(FormView::default());
    provide_context(form);

    view! {
        <Title text="Login"/>
        <main>
            <LoginPage/>
        </main>
    }
}

/// Mount `App` onto `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    leptos::mount::mount_to_body(App);
}
