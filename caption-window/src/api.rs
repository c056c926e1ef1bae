// SPDX-License-Identifier: MIT OR Apache-2.0
//! Renderer side of the bridge

use async_trait::async_trait;

use crate::error::BridgeError;
use crate::request::{WindowRequest, WindowResponse};

/// Carries one request to the host and brings back its reply.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the reply
    async fn invoke(&self, request: WindowRequest) -> Result<WindowResponse, BridgeError>;
}

/// The window-control API exposed to the restricted renderer.
pub struct WindowApi<T: Transport> {
    transport: T,
}

impl<T: Transport> WindowApi<T> {
    /// Create an API over `transport`
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Whether the window is maximized
    pub async fn is_maximized(&self) -> Result<bool, BridgeError> {
        let request = WindowRequest::IsMaximized;
        match self.transport.invoke(request).await? {
            WindowResponse::Maximized(maximized) => Ok(maximized),
            response => Err(BridgeError::UnexpectedResponse { request, response }),
        }
    }

    /// Maximize the window
    pub async fn maximize(&self) -> Result<(), BridgeError> {
        self.perform(WindowRequest::Maximize).await
    }

    /// Minimize the window
    pub async fn minimize(&self) -> Result<(), BridgeError> {
        self.perform(WindowRequest::Minimize).await
    }

    /// Restore the window
    pub async fn restore(&self) -> Result<(), BridgeError> {
        self.perform(WindowRequest::Restore).await
    }

    /// Close the window
    pub async fn close(&self) -> Result<(), BridgeError> {
        self.perform(WindowRequest::Close).await
    }

    async fn perform(&self, request: WindowRequest) -> Result<(), BridgeError> {
        match self.transport.invoke(request).await? {
            WindowResponse::Done => Ok(()),
            response => Err(BridgeError::UnexpectedResponse { request, response }),
        }
    }
}
