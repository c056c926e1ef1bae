// SPDX-License-Identifier: MIT OR Apache-2.0
//! In-process transport across a task boundary
//!
//! The host runs on its own tokio task and owns the window; renderers only
//! hold a [ChannelTransport]. Each request carries a oneshot for its reply.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::api::Transport;
use crate::error::BridgeError;
use crate::host::{WindowControl, WindowControlHost};
use crate::request::{WindowRequest, WindowResponse};

const QUEUE_SIZE: usize = 16;

struct Invocation {
    request: WindowRequest,
    reply: oneshot::Sender<WindowResponse>,
}

/// Renderer-side handle sending requests to a host task.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<Invocation>,
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn invoke(&self, request: WindowRequest) -> Result<WindowResponse, BridgeError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Invocation { request, reply })
            .await
            .map_err(|_| BridgeError::HostClosed)?;
        response.await.map_err(|_| BridgeError::HostClosed)
    }
}

/// Spawn a host task for `window` on the current tokio runtime.
///
/// The task ends once every [ChannelTransport] clone is dropped.
pub fn spawn_host<W>(window: Arc<W>) -> (ChannelTransport, JoinHandle<()>)
where
    W: WindowControl + ?Sized + 'static,
{
    let (sender, mut receiver) = mpsc::channel::<Invocation>(QUEUE_SIZE);
    let host = WindowControlHost::new(window);

    let handle = tokio::spawn(async move {
        while let Some(Invocation { request, reply }) = receiver.recv().await {
            let response = host.handle(request).await;
            if reply.send(response).is_err() {
                log::debug!("renderer dropped reply to {}", request.name());
            }
        }
        log::debug!("window-control host stopped");
    });

    (ChannelTransport { sender }, handle)
}
