//! Visitor/exhibitor listing with type tabs and five-row pages.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::pagination::Pagination;
use crate::net::api;
use crate::state::auth::AuthState;
use crate::state::loadable::Loadable;
use crate::state::registrants::{REGISTRANT_TABS, RegistrantsState};
use crate::util::dates::format_date;
use crate::util::session;
use crate::util::task::MountGuard;

#[component]
pub fn RegistrantsPage() -> impl IntoView {
    view! {
        <AdminLayout title="Visitors & Exhibitors">
            <RegistrantsScreen/>
        </AdminLayout>
    }
}

#[component]
fn RegistrantsScreen() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(RegistrantsState::default());
    let guard = MountGuard::new();

    let token = session::current_token(auth);
    guard.spawn(async move { api::fetch_registrants(&token).await }, move |result| {
        let result = session::check_result(auth, "fetch registrants", result);
        state.update(|s| s.items = Loadable::from_result(result));
    });

    let listing = Memo::new(move |_| state.with(RegistrantsState::visible));
    let page = Signal::derive(move || listing.with(|l| l.page));
    let total_pages = Signal::derive(move || listing.with(|l| l.total_pages));
    let on_prev = Callback::new(move |()| state.update(RegistrantsState::prev_page));
    let on_next = Callback::new(move |()| state.update(RegistrantsState::next_page));

    let tabs = REGISTRANT_TABS
        .iter()
        .map(|(label, filter)| {
            let filter = *filter;
            let class = move || {
                if state.with(|s| s.query.category == filter) { "tab tab--active" } else { "tab" }
            };
            view! {
                <button class=class on:click=move |_| state.update(|s| s.query.set_category(filter))>
                    {*label}
                </button>
            }
        })
        .collect_view();

    let table = move || {
        if let Some(error) = state.with(|s| s.items.error().map(str::to_owned)) {
            return view! { <p class="panel__error">{format!("Could not load registrants: {error}")}</p> }.into_any();
        }
        if state.with(|s| s.items.is_loading()) {
            return view! { <p class="panel__loading">"Loading registrants..."</p> }.into_any();
        }
        let tab_label = state.with(RegistrantsState::active_tab_label);
        listing.with(|l| {
            if l.is_empty() {
                let message = match tab_label {
                    "All" => "No registrants found.".to_owned(),
                    label => format!("No {} found.", label.to_lowercase()),
                };
                return view! { <p class="panel__empty">{message}</p> }.into_any();
            }
            let rows = l
                .rows
                .iter()
                .map(|r| {
                    view! {
                        <tr data-key=r.row_key()>
                            <td>{r.name.clone()}</td>
                            <td>{r.email.clone()}</td>
                            <td>{r.kind.as_str()}</td>
                            <td>{format_date(r.registered_at.as_deref())}</td>
                        </tr>
                    }
                })
                .collect_view();
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Type"</th>
                            <th>"Registered"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <Pagination page=page total_pages=total_pages on_prev=on_prev on_next=on_next/>
            }
                .into_any()
        })
    };

    view! {
        <section class="list-screen">
            <div class="list-screen__toolbar">
                <div class="tabs">{tabs}</div>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search name or email"
                    prop:value=move || state.with(|s| s.query.search.clone())
                    on:input=move |ev| state.update(|s| s.query.set_search(event_target_value(&ev)))
                />
            </div>
            {table}
        </section>
    }
}
