//! Stall-booking review screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists every booking with status tabs and search. Pending rows offer quick
//! approve/reject; the edit modal can set any status. Both paths write through
//! `PUT /spacebooking/{id}` and only patch the row after the backend confirms.

use leptos::prelude::*;

use crate::components::admin_layout::AdminLayout;
use crate::components::modal::{DetailRow, Modal};
use crate::net::api;
use crate::net::types::{Booking, BookingStatus};
use crate::state::auth::AuthState;
use crate::state::bookings::{BookingsState, STATUS_TABS, status_badge_class};
use crate::state::loadable::Loadable;
use crate::util::session;
use crate::util::task::MountGuard;

#[component]
pub fn BookingsPage() -> impl IntoView {
    view! {
        <AdminLayout title="Stall Bookings">
            <BookingsScreen/>
        </AdminLayout>
    }
}

/// Start a status write for `id` unless one is already in flight.
fn save_status(auth: RwSignal<AuthState>, state: RwSignal<BookingsState>, guard: &MountGuard, id: i64, status: BookingStatus) {
    if !state.try_update(|s| s.begin_write(id)).unwrap_or(false) {
        return;
    }
    let token = session::current_token(auth);
    guard.spawn(async move { api::update_booking_status(&token, id, status).await }, move |result| {
        let result = session::check_result(auth, "booking status update", result);
        state.update(|s| {
            s.finish_write(id, status, &result);
        });
    });
}

#[component]
fn BookingsScreen() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(BookingsState::default());
    let guard = MountGuard::new();

    let token = session::current_token(auth);
    guard.spawn(async move { api::fetch_bookings(&token).await }, move |result| {
        let result = session::check_result(auth, "fetch bookings", result);
        state.update(|s| s.items = Loadable::from_result(result));
    });

    let quick_guard = guard.clone();
    let on_quick = Callback::new(move |(id, status): (i64, BookingStatus)| {
        save_status(auth, state, &quick_guard, id, status);
    });
    let on_view = Callback::new(move |id: i64| state.update(|s| s.open_details(id)));
    let on_edit = Callback::new(move |id: i64| state.update(|s| s.open_editor(id)));
    let on_close_details = Callback::new(move |()| state.update(BookingsState::close_details));
    let on_cancel_edit = Callback::new(move |()| state.update(BookingsState::cancel_editor));
    let save_guard = guard.clone();
    let on_save_edit = Callback::new(move |()| {
        if let Some(draft) = state.try_update(BookingsState::take_draft).flatten() {
            save_status(auth, state, &save_guard, draft.id, draft.status);
        }
    });

    let tabs = STATUS_TABS
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
        state.with(|s| {
            if let Some(error) = s.items.error() {
                return view! { <p class="panel__error">{format!("Could not load bookings: {error}")}</p> }.into_any();
            }
            if s.items.is_loading() {
                return view! { <p class="panel__loading">"Loading bookings..."</p> }.into_any();
            }
            let listing = s.visible();
            if listing.is_empty() {
                return view! { <p class="panel__empty">"No bookings found."</p> }.into_any();
            }
            let rows = listing
                .rows
                .into_iter()
                .map(|booking| {
                    let busy = s.is_pending(booking.id);
                    booking_row(booking, busy, on_view, on_edit, on_quick)
                })
                .collect_view();
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Company"</th>
                            <th>"Stall"</th>
                            <th>"Status"</th>
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
        state
            .with(|s| s.viewing.and_then(|id| s.find(id).cloned()))
            .map(|booking| booking_details(booking, on_close_details))
    };

    let editor = move || {
        state.with(|s| {
            s.editing.and_then(|draft| s.find(draft.id).map(|b| (b.full_name.clone(), draft.status)))
        })
        .map(|(name, status)| {
            view! {
                <Modal title="Edit Booking Status".to_owned() on_close=on_cancel_edit>
                    <DetailRow label="Name" value=name/>
                    <label class="field">
                        <span class="field__label">"Status"</span>
                        <select
                            class="field__input"
                            on:change=move |ev| {
                                if let Some(next) = BookingStatus::parse(&event_target_value(&ev)) {
                                    state.update(|s| s.set_draft_status(next));
                                }
                            }
                        >
                            {BookingStatus::ALL
                                .iter()
                                .map(|option| {
                                    view! {
                                        <option value=option.as_str() selected={*option == status}>
                                            {option.as_str()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <div class="modal__actions">
                        <button class="btn" on:click=move |_| on_cancel_edit.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| on_save_edit.run(())>
                            "Save"
                        </button>
                    </div>
                </Modal>
            }
        })
    };

    view! {
        <section class="list-screen">
            <div class="list-screen__toolbar">
                <div class="tabs">{tabs}</div>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search name, email, or stall"
                    prop:value=move || state.with(|s| s.query.search.clone())
                    on:input=move |ev| state.update(|s| s.query.set_search(event_target_value(&ev)))
                />
            </div>
            <Show when=move || state.with(|s| s.write_error.is_some())>
                <p class="panel__error">{move || state.with(|s| s.write_error.clone().unwrap_or_default())}</p>
            </Show>
            {table}
            {details}
            {editor}
        </section>
    }
}

fn booking_row(
    booking: Booking,
    busy: bool,
    on_view: Callback<i64>,
    on_edit: Callback<i64>,
    on_quick: Callback<(i64, BookingStatus)>,
) -> impl IntoView {
    let id = booking.id;
    let quick_actions = (booking.status == BookingStatus::Pending).then(|| {
        view! {
            <button class="btn btn--approve" disabled=busy on:click=move |_| on_quick.run((id, BookingStatus::Booked))>
                "Approve"
            </button>
            <button
                class="btn btn--reject"
                disabled=busy
                on:click=move |_| on_quick.run((id, BookingStatus::Rejected))
            >
                "Reject"
            </button>
        }
    });

    view! {
        <tr>
            <td>{booking.full_name}</td>
            <td>{booking.email}</td>
            <td>{booking.company}</td>
            <td>{booking.stall}</td>
            <td>
                <span class=status_badge_class(booking.status)>{booking.status.as_str()}</span>
            </td>
            <td class="data-table__actions">
                <button class="btn" on:click=move |_| on_view.run(id)>
                    "View"
                </button>
                <button class="btn" disabled=busy on:click=move |_| on_edit.run(id)>
                    "Edit"
                </button>
                {quick_actions}
            </td>
        </tr>
    }
}

fn booking_details(booking: Booking, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Booking Details".to_owned() on_close=on_close>
            <DetailRow label="Name" value=booking.full_name/>
            <DetailRow label="Email" value=booking.email/>
            <DetailRow label="Phone" value=booking.phone/>
            <DetailRow label="Company" value=booking.company/>
            <DetailRow label="Designation" value=booking.designation/>
            <DetailRow label="Heard From" value=booking.heard_from/>
            <DetailRow label="Categories" value=booking.categories/>
            <DetailRow label="Status" value=booking.status.as_str().to_owned()/>
            <DetailRow label="City" value=booking.city/>
            <DetailRow label="State" value=booking.state/>
            <DetailRow label="Country" value=booking.country/>
            <DetailRow label="Zip" value=booking.zip/>
            <DetailRow label="Address" value=booking.address/>
            <DetailRow label="Street" value=booking.street/>
        </Modal>
    }
}
