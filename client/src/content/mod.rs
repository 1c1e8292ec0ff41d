//! Static content tables rendered by the pages.
//!
//! DESIGN
//! ======
//! Everything the UI prints that is not derived from user input lives here as
//! `&'static` tables. Components iterate the tables; the report renderer reads
//! the `CaseStudy`. No table is ever mutated.

pub mod case_study;
pub mod dashboard;
pub mod demo;
pub mod landing;

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;
