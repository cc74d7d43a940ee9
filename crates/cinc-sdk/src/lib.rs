//! High-level SDK for the CINC API
//!
//! This crate provides a single [`CincClient`] that owns the HTTP transport
//! and the session token, and hands out typed services for each area of
//! the API.
//!
//! # Quick Start
//!
//! ```no_run
//! use cinc_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CincClient::builder()
//!         .with_retry_attempts(5)
//!         .build()?;
//!
//!     // Token is installed for every later request
//!     client.authenticate("user@example.com", "password").await?;
//!
//!     let market = client.markets().get_market_data().await?;
//!     println!("{} markets, volume {}", market.total_markets, market.total_volume);
//!
//!     match client.assets().get_asset_by_id("missing").await {
//!         Err(e) if e.kind() == ErrorKind::NotFound => println!("no such asset"),
//!         other => println!("{:?}", other),
//!     }
//!
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Simple API**: Builder pattern for configuration
//! - **Automatic Retry**: Exponential backoff on network and server errors
//! - **Typed Errors**: One [`CincError`] kind per failure class
//! - **Session Handling**: Login installs the bearer token, logout clears it

pub mod builder;
pub mod client;
pub mod prelude;

// Re-export main types
pub use builder::CincClientBuilder;
pub use client::CincClient;

// Re-export commonly used types from dependencies
pub use cinc_rest::{ClientConfig, ConfigUpdate, RequestOptions, RestClient};
pub use cinc_types::{CincError, CincResult, ErrorKind};
