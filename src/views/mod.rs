//! Server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos renders the page shell and every grid fragment to HTML strings on
//! the server. The browser script only swaps fragments in and reports cell
//! interactions back; it never decides what a cell looks like.

pub mod grid;
pub mod page;
