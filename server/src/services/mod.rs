//! Clients for the external services the server fronts.
//!
//! ARCHITECTURE
//! ============
//! Each service sits behind a trait (`IdentityProvider`, `AdGenerator`) so
//! route handlers stay focused on protocol translation and cookie plumbing,
//! and tests can substitute in-process mocks.

pub mod identity;
pub mod webhook;
