// SPDX-License-Identifier: MIT OR Apache-2.0
//! Privileged side of the bridge

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::Transport;
use crate::error::BridgeError;
use crate::request::{WindowRequest, WindowResponse};

/// Window operations the host can perform.
#[async_trait]
pub trait WindowControl: Send + Sync {
    /// Whether the window is maximized
    async fn is_maximized(&self) -> bool;
    /// Maximize the window
    async fn maximize(&self);
    /// Minimize the window
    async fn minimize(&self);
    /// Restore the window
    async fn restore(&self);
    /// Close the window
    async fn close(&self);
}

/// Answers bridge requests against one window.
pub struct WindowControlHost<W: WindowControl + ?Sized> {
    window: Arc<W>,
}

impl<W: WindowControl + ?Sized> Clone for WindowControlHost<W> {
    fn clone(&self) -> Self {
        Self {
            window: self.window.clone(),
        }
    }
}

impl<W: WindowControl + ?Sized> WindowControlHost<W> {
    /// Create a host for `window`
    pub fn new(window: Arc<W>) -> Self {
        Self { window }
    }

    /// The controlled window
    pub fn window(&self) -> &Arc<W> {
        &self.window
    }

    /// Perform a request
    pub async fn handle(&self, request: WindowRequest) -> WindowResponse {
        log::trace!("window-control request {}", request.name());
        match request {
            WindowRequest::IsMaximized => WindowResponse::Maximized(self.window.is_maximized().await),
            WindowRequest::Maximize => {
                self.window.maximize().await;
                WindowResponse::Done
            },
            WindowRequest::Minimize => {
                self.window.minimize().await;
                WindowResponse::Done
            },
            WindowRequest::Restore => {
                self.window.restore().await;
                WindowResponse::Done
            },
            WindowRequest::Close => {
                self.window.close().await;
                WindowResponse::Done
            },
        }
    }

    /// Perform the request registered on `channel`
    pub async fn handle_channel(&self, channel: &str) -> Result<WindowResponse, BridgeError> {
        let request = WindowRequest::from_channel(channel)?;
        Ok(self.handle(request).await)
    }
}

/// Direct calls, for renderers running in the host's own context.
#[async_trait]
impl<W: WindowControl + ?Sized + 'static> Transport for WindowControlHost<W> {
    async fn invoke(&self, request: WindowRequest) -> Result<WindowResponse, BridgeError> {
        Ok(self.handle(request).await)
    }
}
