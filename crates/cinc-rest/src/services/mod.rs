//! Domain service implementations
//!
//! Each service is a thin borrowing handle over a [`RestClient`](crate::RestClient).
//! Services never retry or reclassify; errors come straight from the transport.

pub mod assets;
pub mod auth;
pub mod market;
pub mod portfolio;

pub use assets::AssetService;
pub use auth::AuthService;
pub use market::MarketService;
pub use portfolio::PortfolioService;
