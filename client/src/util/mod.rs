//! Browser-side helpers used by the admin pages.
//!
//! `session` and `storage` keep the bearer token in localStorage, `auth`
//! installs the login/dashboard redirects, `task` drops fetch results that
//! land after a page unmounts, `dates` and `charts` hold the pure formatting
//! and SVG geometry, and `browser` wraps confirm dialogs and file pickers.

pub mod auth;
pub mod browser;
pub mod charts;
pub mod dates;
pub mod session;
pub mod storage;
pub mod task;
