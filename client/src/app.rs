//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    bookings::BookingsPage, dashboard::DashboardPage, gallery::GalleryPage, login::LoginPage,
    messages::MessagesPage, registrants::RegistrantsPage,
};
use crate::state::auth::AuthState;
use crate::util::session;

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
/// Provides the session signal and restores any persisted token once the app
/// is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Effects only run after hydration, so SSR always renders the restoring state.
    Effect::new(move || session::restore(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/expo-admin.css"/>
        <Title text="INDTEC EXPO Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("visitors") view=RegistrantsPage/>
                <Route path=StaticSegment("bookings") view=BookingsPage/>
                <Route path=StaticSegment("messages") view=MessagesPage/>
                <Route path=StaticSegment("gallery") view=GalleryPage/>
            </Routes>
        </Router>
    }
}
