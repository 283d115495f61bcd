//! # Payout Hex
//!
//! Application service layer and HTTP adapter for the payout gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validate, forward, map errors)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: PayoutProvider`, allowing the real
//! HTTP provider or a test double to be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::PayoutService;
