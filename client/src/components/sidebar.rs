//! Persistent navigation panel for the protected screens.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_PATH;
use crate::util::session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Dashboard", path: "/" },
    NavLink { label: "Visitors/Exhibitors", path: "/visitors" },
    NavLink { label: "Stall Bookings", path: "/bookings" },
    NavLink { label: "Messages", path: "/messages" },
    NavLink { label: "Gallery", path: "/gallery" },
];

/// Whether `link` should be highlighted for `current`. The dashboard only
/// matches exactly; other links also match their sub-paths.
pub fn is_active(link: &NavLink, current: &str) -> bool {
    let current = if current.len() > 1 { current.trim_end_matches('/') } else { current };
    if link.path == "/" {
        return current == "/";
    }
    current == link.path || current.strip_prefix(link.path).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::sign_out(auth);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"INDTEC EXPO"</div>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let link = *link;
                        let class = move || {
                            if pathname.with(|current| is_active(&link, current)) {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <a href=link.path class=class>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <button class="btn sidebar__logout" on:click=on_logout>
                "Logout"
            </button>
        </aside>
    }
}
