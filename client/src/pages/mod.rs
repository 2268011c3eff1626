//! Routed page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per route. Protected pages wrap an inner screen in
//! `AdminLayout`, so the screen (and its fetches) only mounts once a session
//! exists.

pub mod bookings;
pub mod dashboard;
pub mod gallery;
pub mod login;
pub mod messages;
pub mod registrants;
