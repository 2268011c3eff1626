//! Stall-booking screen state: fetched bookings, tab/search query, modals,
//! and in-flight status writes.
//!
//! DESIGN
//! ======
//! A status change is only applied locally after the backend confirms it.
//! Both the quick approve/reject buttons and the edit modal go through
//! `begin_write` / `finish_write`, so the two paths cannot drift apart.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use std::collections::BTreeSet;

use super::list::{self, CategoryFilter, ListConfig, ListQuery, ListView, Listable};
use super::loadable::Loadable;
use crate::net::error::ApiError;
use crate::net::types::{Booking, BookingStatus};

pub const BOOKINGS_LIST: ListConfig = ListConfig { page_size: None };

/// Status tabs in display order.
pub const STATUS_TABS: [(&str, CategoryFilter<BookingStatus>); 4] = [
    ("All", CategoryFilter::All),
    ("Pending", CategoryFilter::Only(BookingStatus::Pending)),
    ("Booked", CategoryFilter::Only(BookingStatus::Booked)),
    ("Rejected", CategoryFilter::Only(BookingStatus::Rejected)),
];

impl Listable for Booking {
    type Category = BookingStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.email.as_str(), self.stall.as_str()]
    }

    fn category(&self) -> BookingStatus {
        self.status
    }

    fn date_key(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

/// Unsaved status selection in the edit modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusDraft {
    pub id: i64,
    pub status: BookingStatus,
}

#[derive(Clone, Debug, Default)]
pub struct BookingsState {
    pub items: Loadable<Vec<Booking>>,
    pub query: ListQuery<BookingStatus>,
    /// Booking shown in the detail modal.
    pub viewing: Option<i64>,
    pub editing: Option<StatusDraft>,
    /// Bookings with a status write in flight.
    pub pending: BTreeSet<i64>,
    /// Last write failure, shown above the table.
    pub write_error: Option<String>,
}

impl BookingsState {
    pub fn visible(&self) -> ListView<Booking> {
        list::derive(self.items.items(), &self.query, BOOKINGS_LIST)
    }

    pub fn find(&self, id: i64) -> Option<&Booking> {
        self.items.items().iter().find(|b| b.id == id)
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.pending.contains(&id)
    }

    pub fn open_details(&mut self, id: i64) {
        self.viewing = Some(id);
    }

    pub fn close_details(&mut self) {
        self.viewing = None;
    }

    /// Open the edit modal seeded with the booking's current status.
    pub fn open_editor(&mut self, id: i64) {
        if let Some(booking) = self.find(id) {
            self.editing = Some(StatusDraft { id, status: booking.status });
        }
    }

    pub fn set_draft_status(&mut self, status: BookingStatus) {
        if let Some(draft) = self.editing.as_mut() {
            draft.status = status;
        }
    }

    /// Close the editor, discarding the draft.
    pub fn cancel_editor(&mut self) {
        self.editing = None;
    }

    /// Take the draft for saving and close the editor.
    pub fn take_draft(&mut self) -> Option<StatusDraft> {
        self.editing.take()
    }

    /// Reserve a write slot for `id`. Returns false when a write for that
    /// booking is already in flight or the booking is unknown.
    pub fn begin_write(&mut self, id: i64) -> bool {
        if self.find(id).is_none() || self.pending.contains(&id) {
            return false;
        }
        self.pending.insert(id);
        self.write_error = None;
        true
    }

    /// Settle a status write. The local record changes only on success.
    /// Returns whether the local status was updated.
    pub fn finish_write(&mut self, id: i64, status: BookingStatus, result: &Result<(), ApiError>) -> bool {
        self.pending.remove(&id);
        match result {
            Ok(()) => {
                let Some(items) = self.items.ready_mut() else {
                    return false;
                };
                let Some(booking) = items.iter_mut().find(|b| b.id == id) else {
                    return false;
                };
                booking.status = status;
                true
            }
            Err(e) => {
                self.write_error = Some(format!("Could not update booking #{id}: {}", e.user_message()));
                false
            }
        }
    }
}

/// CSS modifier for a status badge.
pub fn status_badge_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Booked => "status-badge status-badge--booked",
        BookingStatus::Rejected => "status-badge status-badge--rejected",
        BookingStatus::Pending => "status-badge status-badge--pending",
    }
}
