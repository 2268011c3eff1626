//! Reactive UI state for the admin screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages hold these structs in `RwSignal`s and derive what they render from
//! them. The auth state is the only one shared through context; every list
//! screen owns its state for as long as it is mounted.

pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod gallery;
pub mod list;
pub mod loadable;
pub mod messages;
pub mod registrants;
