//! Price-feed API client for ancora.
//!
//! This crate provides a client for fetching daily closing prices from the
//! stock price-data service, normalizing either of its response shapes into
//! an [`ancora_core::PriceSeries`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use ancora_core::{DateWindow, Date};
//! use ancora_feed::FeedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FeedClient::from_env();
//!
//!     let window = DateWindow::new(
//!         Date::from_ymd_opt(2025, 4, 30).unwrap(),
//!         Date::from_ymd_opt(2025, 8, 31).unwrap(),
//!     );
//!     let series = client.daily_closes(&["AAPL".to_string()], window).await?;
//!     println!("{} tickers returned", series.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Both are optional and may live in a `.env` file:
//!
//! ```bash
//! STOCK_API_BASE=https://stockdata-api-6xok.onrender.com
//! STOCK_API_KEY=bearer_token_if_required
//! ```

mod client;
mod error;
mod types;

pub use client::FeedClient;
pub use error::FeedError;

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
