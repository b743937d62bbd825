//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own view-session state and grid logic so route handlers
//! can stay focused on protocol translation.

pub mod reaper;
pub mod view;
