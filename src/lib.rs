//! TestRail API Client
//!
//! A typed client for the TestRail REST API v2.
//!
//! ## Features
//!
//! - **Typed request factories** for projects, cases, runs, plans, results and more
//! - **Partial updates** - writable models remember which fields were assigned,
//!   and only those are sent
//! - **Three response shapes** - single object, list, or nothing, checked on decode
//! - **Rate-limit aware** - HTTP 429 is retried with backoff honouring `Retry-After`
//! - **Flexible configuration** via TOML files and environment variables
//!
//! ## Example Configuration
//!
//! ```toml
//! [testrail]
//! url = "https://example.testrail.io"
//! username = "qa@example.com"
//! # api_key from TESTRAIL_API_KEY env var
//! max_retries = 3
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```
//!
//! ## Partial updates
//!
//! ```no_run
//! # async fn demo(client: testrail_client::TestRail) -> testrail_client::TestRailResult<()> {
//! use testrail_client::models::Case;
//!
//! // Only "title" is transmitted; every other field stays untouched server-side.
//! let case = Case::default().with_id(42u64).with_title("Login with SSO");
//! let updated = client.cases().update(&case)?.execute().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod tracking;

// Re-export main types
pub use client::{Request, RetryPolicy, TestRail};
pub use config::{AppConfig, TestRailConfig, load_config};
pub use error::{AppError, ErrorKind, Result, TestRailError, TestRailResult};
pub use tracking::Resource;
