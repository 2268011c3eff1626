//! Contact-message inbox.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::modal::{DetailRow, Modal};
use crate::net::api;
use crate::net::types::ContactMessage;
use crate::state::auth::AuthState;
use crate::state::loadable::Loadable;
use crate::state::messages::MessagesState;
use crate::util::browser;
use crate::util::dates::{format_date, format_datetime};
use crate::util::session;
use crate::util::task::MountGuard;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <AdminLayout title="Messages">
            <MessagesScreen/>
        </AdminLayout>
    }
}

#[component]
fn MessagesScreen() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(MessagesState::default());
    let guard = MountGuard::new();

    let token = session::current_token(auth);
    guard.spawn(async move { api::fetch_contact_messages(&token).await }, move |result| {
        let result = session::check_result(auth, "fetch contact messages", result);
        state.update(|s| s.items = Loadable::from_result(result));
    });

    let on_view = Callback::new(move |id: i64| state.update(|s| s.selected = Some(id)));
    let on_close = Callback::new(move |()| state.update(|s| s.selected = None));
    let on_delete = Callback::new(move |id: i64| {
        if browser::confirm("Delete this message?") {
            state.update(|s| {
                s.remove_local(id);
            });
        }
    });

    let table = move || {
        state.with(|s| {
            if let Some(error) = s.items.error() {
                return view! { <p class="panel__error">{format!("Could not load messages: {error}")}</p> }.into_any();
            }
            if s.items.is_loading() {
                return view! { <p class="panel__loading">"Loading messages..."</p> }.into_any();
            }
            let listing = s.visible();
            if listing.is_empty() {
                return view! { <p class="panel__empty">"No messages found."</p> }.into_any();
            }
            let rows = listing.rows.into_iter().map(|message| message_row(message, on_view, on_delete)).collect_view();
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Received"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
                .into_any()
        })
    };

    let details = move || {
        state.with(|s| s.selected_message().cloned()).map(|message| {
            view! {
                <Modal title="Message Details".to_owned() on_close=on_close>
                    <DetailRow label="Name" value=message.full_name()/>
                    <DetailRow label="Email" value=message.email.clone()/>
                    <DetailRow label="Phone" value=message.phone.clone()/>
                    <DetailRow label="Received" value=format_datetime(message.updated_at.as_deref())/>
                    <div class="message-body">
                        <span class="detail-row__label">"Message"</span>
                        <p class="message-body__text">{message.message.clone()}</p>
                    </div>
                </Modal>
            }
        })
    };

    view! {
        <section class="list-screen">
            <div class="list-screen__toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search name, email, or phone"
                    prop:value=move || state.with(|s| s.query.search.clone())
                    on:input=move |ev| state.update(|s| s.query.set_search(event_target_value(&ev)))
                />
            </div>
            {table}
            {details}
        </section>
    }
}

fn message_row(message: ContactMessage, on_view: Callback<i64>, on_delete: Callback<i64>) -> impl IntoView {
    let id = message.id;
    view! {
        <tr>
            <td>{message.full_name()}</td>
            <td>{message.email}</td>
            <td>{message.phone}</td>
            <td>{format_date(message.updated_at.as_deref())}</td>
            <td class="data-table__actions">
                <button class="btn" on:click=move |_| on_view.run(id)>
                    "View"
                </button>
                <button class="btn btn--reject" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
