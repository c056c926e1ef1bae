#![warn(missing_docs)]

//! Window-control bridge for caption => See `caption` crate.
//!
//! The host owns the window and implements [WindowControl]; the restricted
//! renderer talks to it through a [WindowApi] over any [Transport]. Every
//! operation is a single request answered by a single reply.

pub mod api;
pub mod channel;
mod error;
pub mod host;
pub mod request;

pub use api::{Transport, WindowApi};
pub use channel::{spawn_host, ChannelTransport};
pub use error::BridgeError;
pub use host::{WindowControl, WindowControlHost};
pub use request::{WindowRequest, WindowResponse, CHANNEL_PREFIX};
