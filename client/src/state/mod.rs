//! Client-side state machines for the landing page widgets.
//!
//! DESIGN
//! ======
//! Each widget owns its own state (`upload`, `demo`) as plain data with
//! pure transition methods. Components wrap them in `RwSignal`s and drive
//! the timers; the transitions themselves never touch the browser.

pub mod demo;
pub mod upload;
