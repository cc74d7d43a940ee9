//! Re-exports for convenience
//!
//! Import everything you need with:
//! ```
//! use cinc_sdk::prelude::*;
//! ```

// Client
pub use crate::builder::CincClientBuilder;
pub use crate::client::CincClient;

// Transport and services
pub use cinc_rest::{
    AssetService, AuthService, ClientConfig, ConfigUpdate, MarketService, PortfolioService,
    RequestOptions, RestClient, RetryPolicy,
};

// Records and errors
pub use cinc_types::{
    Asset, AuthResponse, CincError, CincResult, ErrorKind, LoginRequest, Market, MarketResponse,
    Portfolio, PortfolioAsset, PortfolioListResponse, PortfolioResponse, User,
};

// Decimal for monetary values
pub use cinc_types::Decimal;
