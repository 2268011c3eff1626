//! Contact-message screen state.
//!
//! Deleting a message only removes it from this session's list; the backend
//! exposes no delete endpoint for contact messages.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use super::list::{self, ListConfig, ListQuery, ListView, Listable};
use super::loadable::Loadable;
use crate::net::types::ContactMessage;

pub const MESSAGES_LIST: ListConfig = ListConfig { page_size: None };

impl Listable for ContactMessage {
    type Category = ();

    fn search_fields(&self) -> Vec<&str> {
        vec![self.first_name.as_str(), self.last_name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn category(&self) -> Self::Category {}

    fn date_key(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MessagesState {
    pub items: Loadable<Vec<ContactMessage>>,
    pub query: ListQuery<()>,
    pub selected: Option<i64>,
}

impl MessagesState {
    pub fn visible(&self) -> ListView<ContactMessage> {
        list::derive(self.items.items(), &self.query, MESSAGES_LIST)
    }

    pub fn selected_message(&self) -> Option<&ContactMessage> {
        let id = self.selected?;
        self.items.items().iter().find(|m| m.id == id)
    }

    /// Drop a message from the local list. Returns whether anything was removed.
    pub fn remove_local(&mut self, id: i64) -> bool {
        let Some(items) = self.items.ready_mut() else {
            return false;
        };
        let before = items.len();
        items.retain(|m| m.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        items.len() != before
    }
}
