//! Visitor/exhibitor screen state: type tabs plus fixed-size pages.

#[cfg(test)]
#[path = "registrants_test.rs"]
mod registrants_test;

use super::list::{self, CategoryFilter, ListConfig, ListQuery, ListView, Listable};
use super::loadable::Loadable;
use crate::net::types::{Registrant, RegistrantKind};

pub const REGISTRANTS_PER_PAGE: usize = 5;

pub const REGISTRANTS_LIST: ListConfig = ListConfig { page_size: Some(REGISTRANTS_PER_PAGE) };

pub const REGISTRANT_TABS: [(&str, CategoryFilter<RegistrantKind>); 3] = [
    ("All", CategoryFilter::All),
    ("Visitors", CategoryFilter::Only(RegistrantKind::Visitor)),
    ("Exhibitors", CategoryFilter::Only(RegistrantKind::Exhibitor)),
];

impl Listable for Registrant {
    type Category = RegistrantKind;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn category(&self) -> RegistrantKind {
        self.kind
    }

    fn date_key(&self) -> Option<&str> {
        self.registered_at.as_deref()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegistrantsState {
    pub items: Loadable<Vec<Registrant>>,
    pub query: ListQuery<RegistrantKind>,
}

impl RegistrantsState {
    pub fn visible(&self) -> ListView<Registrant> {
        list::derive(self.items.items(), &self.query, REGISTRANTS_LIST)
    }

    pub fn next_page(&mut self) {
        let total = self.visible().total_pages;
        self.query.next_page(total);
    }

    pub fn prev_page(&mut self) {
        let total = self.visible().total_pages;
        self.query.prev_page(total);
    }

    /// Label of the active tab, used in the empty-table message.
    pub fn active_tab_label(&self) -> &'static str {
        REGISTRANT_TABS
            .iter()
            .find(|(_, filter)| *filter == self.query.category)
            .map_or("All", |(label, _)| *label)
    }
}
