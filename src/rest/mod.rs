//! REST infrastructure shared by every resource client.
//!
//! This module is the core of the crate:
//!
//! - **[`join_url`] / [`append_query`]**: canonical trailing-slash URL building
//! - **[`classify`] / [`Disposition`]**: the status-code contract in one place
//! - **[`KongError`]**: the error taxonomy (conflict / validation / generic /
//!   transport)
//! - **[`RetryPolicy`] / [`retry_with_backoff`]**: bounded backoff, applied
//!   only at delete call sites
//! - **[`Fields`]**: explicit ordered field maps with whitelist validation
//! - **[`ResourceClient`] / [`ResourceSpec`]**: the shared CRUD+list+count
//!   pattern, configured by data
//!
//! Individual resources (APIs, Consumers, credentials, ...) are thin
//! instantiations of this pattern; they live in [`crate::resources`].

mod errors;
mod fields;
mod path;
mod resource;
mod response;
mod retry;

pub use errors::KongError;
pub use fields::Fields;
pub use path::{append_query, join_url};
pub use resource::{ListParams, Parent, ResourceClient, ResourceSpec};
pub use response::{
    classify, flatten_error_body, Disposition, PagedList, Record, CONFLICT, CREATED,
    DEFAULT_PAGE_SIZE, NOT_FOUND, NO_CONTENT, OK,
};
pub use retry::{retry_with_backoff, RetryPolicy};
