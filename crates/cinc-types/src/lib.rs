//! Shared types for the CINC REST API
//!
//! This crate provides the record types and the error taxonomy used across
//! the CINC SDK. It performs no I/O and can be used independently.
//!
//! # Key Types
//!
//! - [`CincError`], [`ErrorKind`] - Classified SDK errors
//! - [`Asset`] - Assets under management
//! - [`Market`], [`MarketResponse`] - Market quotes and snapshots
//! - [`Portfolio`], [`PortfolioAsset`], [`PortfolioResponse`] - Portfolios
//! - [`User`], [`AuthResponse`], [`LoginRequest`] - Authentication

pub mod asset;
pub mod auth;
pub mod error;
pub mod market;
pub mod portfolio;

// Re-export commonly used types
pub use asset::*;
pub use auth::*;
pub use error::*;
pub use market::*;
pub use portfolio::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
