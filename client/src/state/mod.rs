//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `generation`, `notices`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod auth_events;
pub mod generation;
pub mod notices;
