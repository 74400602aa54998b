//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, pricing::PricingPage, success::SuccessPage};
use crate::state::{session::SessionState, ui::UiState};
use crate::util::auth::restore_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and UI contexts and restores the stored credential
/// once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    // Effects only run after hydration, so storage is never touched during SSR.
    Effect::new(move || restore_session(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/seodash.css"/>
        <Title text="SEO Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=StaticSegment("success") view=SuccessPage/>
            </Routes>
        </Router>
    }
}
