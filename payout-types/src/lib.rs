//! # Payout Types
//!
//! DTOs, error taxonomy and port traits for the payout gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the innermost layer of the gateway:
//! - `dto/` - Request/response shapes crossing the HTTP boundaries
//! - `error/` - Gateway and provider error types
//! - `ports/` - Trait the outbound adapter must implement

pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use dto::{EnvelopeStatus, PayoutOrder, PayoutRequest, ResponseEnvelope};
pub use error::{GatewayError, ProviderError};
pub use ports::PayoutProvider;
