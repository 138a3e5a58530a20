//! src/channels/mod.rs
//!
//! A channel is one independent, optional delivery mechanism for the
//! subscription email: the third-party transactional-email relay, or our
//! own backend. Each one can fail or be absent without affecting the other.
pub mod backend;
pub mod relay;

pub use backend::BackendClient;
pub use relay::RelayClient;
