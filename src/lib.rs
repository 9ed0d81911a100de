//! # Kong Admin API Rust Client
//!
//! A typed client for the Kong gateway's REST Admin API, exposing resource
//! collections (APIs, Consumers, Plugins, and per-consumer auth credentials)
//! as structured operations instead of raw HTTP calls.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`KongConfig`] and [`KongConfigBuilder`]
//! - A throttled HTTP session with optional connection reuse
//! - A uniform create / create-or-update / update / delete / list / count
//!   operation set across every resource
//! - A typed error taxonomy distinguishing conflicts, local validation
//!   failures, generic backend failures, and transport errors
//! - Bounded exponential-backoff retry, applied only to idempotent deletes
//!
//! ## Quick Start
//!
//! ```rust
//! use kong_admin::{AdminUrl, KongConfig};
//! use std::time::Duration;
//!
//! // Create configuration using the builder pattern
//! let config = KongConfig::builder()
//!     .admin_url(AdminUrl::new("http://localhost:8001").unwrap())
//!     .minimum_request_interval(Duration::from_millis(200))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Making Admin API Calls
//!
//! ```rust,ignore
//! use kong_admin::{ApiDefinition, KongAdminClient, ListParams};
//!
//! let kong = KongAdminClient::from_url("http://localhost:8001")?;
//!
//! // Register an API
//! let api = kong.apis()
//!     .add(&ApiDefinition::new("http://upstream.internal").name("svc"))
//!     .await?;
//! println!("created api {:?}", api.get("id"));
//!
//! // List with filters; filters are validated against the resource's
//! // whitelist before any request is made
//! let page = kong.apis().list(&ListParams::new().size(10).filter("name", "svc")).await?;
//! println!("{} of {} apis", page.data.len(), page.count());
//!
//! // Nested credentials, scoped to one consumer
//! kong.consumers()
//!     .basic_auth("alice")
//!     .create_or_update(None, Some("alice"), Some("secret"))
//!     .await?;
//!
//! // Deleting something already gone is not an error
//! kong.apis().delete("svc").await?;
//! kong.apis().delete("svc").await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`KongError`] on failure:
//!
//! ```rust,ignore
//! use kong_admin::KongError;
//!
//! match kong.consumers().create(Some("alice"), None).await {
//!     Ok(consumer) => println!("created {:?}", consumer.get("id")),
//!     Err(KongError::Conflict { message }) => {
//!         // Recoverable: switch to create_or_update, or pick another name
//!         println!("already exists: {message}");
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: throttle and connection-reuse settings are
//!   explicit configuration; sharing a throttle clock means sharing a
//!   client, never an ambient global
//! - **Fail-fast validation**: URLs validate on construction; filter and
//!   update fields validate before any network I/O
//! - **Data over hierarchy**: one [`rest::ResourceClient`] implements the
//!   operation set, configured per resource by a [`rest::ResourceSpec`]
//! - **Async-first**: designed for use with the Tokio runtime; one blocking
//!   round trip per operation, no background work

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::KongAdminClient;
pub use config::{AdminUrl, KongConfig, KongConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP session types
pub use clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse};

// Re-export REST core types
pub use rest::{Fields, KongError, ListParams, PagedList, Record, RetryPolicy};

// Re-export resource clients and definitions
pub use resources::{
    ApiDefinition, ApiPluginsClient, ApisClient, BasicAuthClient, ConsumersClient, KeyAuthClient,
    OAuth2Client, PluginDefinition, PluginsClient,
};
