//! Concrete resource clients.
//!
//! Every client here is a thin, typed instantiation of
//! [`ResourceClient`](crate::rest::ResourceClient): the resource's path
//! segment and field whitelists are data, the operation set is shared.
//! Top-level clients ([`ApisClient`], [`ConsumersClient`], [`PluginsClient`])
//! are owned by the [`KongAdminClient`](crate::KongAdminClient) facade;
//! nested clients are produced by factory methods on their parent and carry
//! only the parent identifier and base URL.

mod api_plugins;
mod apis;
mod basic_auth;
mod consumers;
mod key_auth;
mod oauth2;
mod plugins;

pub use api_plugins::{ApiPluginsClient, PluginDefinition};
pub use apis::{ApiDefinition, ApisClient};
pub use basic_auth::BasicAuthClient;
pub use consumers::ConsumersClient;
pub use key_auth::KeyAuthClient;
pub use oauth2::OAuth2Client;
pub use plugins::PluginsClient;
