//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped context (the landing page provides the scroll
//! targets) and delegates rendering details to `components`.

pub mod home;
pub mod landing;
