// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

use crate::request::{WindowRequest, WindowResponse};

/// Errors crossing the window-control bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// No request is handled on this channel
    #[error("no window-control handler for channel {0:?}")]
    UnknownChannel(String),
    /// The host side stopped handling requests
    #[error("window-control host is gone")]
    HostClosed,
    /// The host answered with a reply of the wrong kind
    #[error("unexpected reply {response:?} to {request:?}")]
    UnexpectedResponse {
        /// Request that was sent
        request: WindowRequest,
        /// Reply that came back
        response: WindowResponse,
    },
}
