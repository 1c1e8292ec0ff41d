//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing sections render static copy from `content` and drive the
//! `state` machines; the header, hero and upload sections coordinate
//! through the `ScrollTargets` context provided by the landing page.

pub mod demo;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub mod stats_card;
pub mod upload;
