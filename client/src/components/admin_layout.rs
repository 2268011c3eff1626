//! Frame shared by every protected screen: auth guard plus sidebar.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` only while a session exists; otherwise shows a
/// placeholder until the redirect to `/login` happens.
#[component]
pub fn AdminLayout(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="admin-layout admin-layout--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-layout">
                <Sidebar/>
                <main class="admin-layout__content">
                    <h1 class="admin-layout__title">{title}</h1>
                    {children()}
                </main>
            </div>
        </Show>
    }
}
