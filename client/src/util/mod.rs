//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, scrolling, alerts, file
//! downloads) from page and component logic. Every browser call is gated on
//! the `hydrate` feature and degrades to a no-op during server rendering and
//! native tests.

pub mod alert;
pub mod download;
pub mod report;
pub mod scroll;
pub mod timer;
