//! REST client for the CINC API
//!
//! This crate provides the HTTP transport shared by every CINC service and
//! the typed service handles built on it.
//!
//! # Features
//!
//! - **Transport**: JSON requests with bearer auth, per-call overrides and
//!   bounded exponential backoff on network and server failures
//! - **Errors**: every failure classified into a [`CincError`] kind
//! - **Services**: auth, assets, market data and portfolios
//!
//! # Example
//!
//! ```no_run
//! use cinc_rest::{ClientConfig, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RestClient::new(ClientConfig::from_env()?)?;
//!
//!     let session = client.auth().login("user@example.com", "password").await?;
//!     client.set_token(session.token)?;
//!
//!     for asset in client.assets().get_assets().await? {
//!         println!("{}: {} {}", asset.name, asset.value, asset.currency);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retries
//!
//! Network errors and 5xx responses are retried up to `retry_attempts` times,
//! waiting `retry_delay * 2^n` before retry `n`. Client errors (4xx) fail
//! immediately.

pub mod client;
pub mod config;
mod error;
pub mod request;
pub mod retry;
pub mod services;

pub use client::{RestClient, USER_AGENT};
pub use config::{ClientConfig, ConfigUpdate};
pub use request::RequestOptions;
pub use retry::RetryPolicy;
pub use services::{AssetService, AuthService, MarketService, PortfolioService};

pub use cinc_types::{CincError, CincResult, ErrorKind};
