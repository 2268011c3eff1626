//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages compose these around their own state: the protected layout and
//! sidebar, the shared modal and pager, and the dashboard charts.

pub mod admin_layout;
pub mod charts;
pub mod modal;
pub mod pagination;
pub mod sidebar;
