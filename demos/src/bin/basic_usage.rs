//! Demo: Basic Usage
//!
//! Showcases: login, asset listing, market data, config, error kinds
//!
//! Run: cargo run --bin basic_usage
//!
//! Set `CINC_API_BASE_URL` and friends to point at another server, and
//! `CINC_DEMO_EMAIL` / `CINC_DEMO_PASSWORD` to log in with real credentials.
//! `RUST_LOG=debug` shows every request and retry.

use cinc_sdk::prelude::*;
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  CINC SDK - BASIC USAGE".cyan().bold());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = CincClient::from_env()?;

    let email = std::env::var("CINC_DEMO_EMAIL").unwrap_or_else(|_| "demo@example.com".into());
    let password = std::env::var("CINC_DEMO_PASSWORD").unwrap_or_else(|_| "demo-password".into());

    // 1. Authentication
    println!("{} Logging in as {}", "1.".white().bold(), email);
    match client.authenticate(&email, &password).await {
        Ok(session) => {
            println!("   {} Authenticated as {}", "✓".green(), session.user.username);
            show_account_data(&client).await;
        }
        Err(e) => {
            println!("   {} Login failed ({}): {}", "✗".yellow(), e.kind(), e.message());
            println!("   Set CINC_DEMO_EMAIL and CINC_DEMO_PASSWORD to use real credentials");
        }
    }

    // 2. Configuration
    let config = client.config();
    println!();
    println!("{} Configuration", "2.".white().bold());
    println!("   Base URL:       {}", config.base_url);
    println!("   Timeout:        {:?}", config.timeout);
    println!("   Retry attempts: {}", config.retry_attempts);
    println!("   Retry delay:    {:?}", config.retry_delay);

    // 3. Error handling
    println!();
    println!("{} Error handling", "3.".white().bold());
    match client.assets().get_asset_by_id("invalid-id-12345").await {
        Ok(asset) => println!("   Unexpectedly found {}", asset.name),
        Err(e) => {
            let status = e
                .status_code()
                .map(|code| code.to_string())
                .unwrap_or_else(|| "none".into());
            println!("   {} kind={} status={}", "✓".green(), e.kind(), status);
            println!("   message: {}", e.message());
            if e.is_retryable() {
                println!("   (retried {} times before giving up)", config.retry_attempts);
            }
        }
    }

    if client.is_authenticated() {
        if let Err(e) = client.logout().await {
            println!("   {} Logout failed: {}", "✗".yellow(), e);
        }
    }

    println!();
    println!("{}", "Done.".green().bold());
    Ok(())
}

async fn show_account_data(client: &CincClient) {
    match client.assets().get_assets().await {
        Ok(assets) => {
            println!("   {} Retrieved {} assets", "✓".green(), assets.len());
            for asset in assets.iter().take(5) {
                println!(
                    "     {:<30} {:>14} {}",
                    asset.name, asset.value, asset.currency
                );
            }
        }
        Err(e) => println!("   {} Assets: {}", "✗".yellow(), e),
    }

    match client.markets().get_market_data().await {
        Ok(data) => {
            println!(
                "   {} {} markets, total volume {}",
                "✓".green(),
                data.total_markets,
                data.total_volume
            );
            for market in data.markets.iter().take(5) {
                println!(
                    "     {:<8} {:>12} {:>8}%",
                    market.symbol, market.last_price, market.change_percent
                );
            }
        }
        Err(e) => println!("   {} Market data: {}", "✗".yellow(), e),
    }
}
