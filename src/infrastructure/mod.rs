//! Infrastructure layer - External concerns and adapters
//!
//! HTTP adapters, request signing, nonces and the upstream throttle.

pub mod adapters;
pub mod nonce;
pub mod signing;
pub mod throttle;

pub use adapters::{default_registry, GHashIoAdapter};
pub use nonce::{FixedNonce, NonceProvider, UnixTimeNonce};
pub use signing::{generate_post_data, SignedRequest};
pub use throttle::{NoThrottle, RateLimitThrottle, Throttle};
