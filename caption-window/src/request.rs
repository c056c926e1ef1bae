// SPDX-License-Identifier: MIT OR Apache-2.0
//! Window-control requests, replies and channel names

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Prefix shared by every bridge channel name.
pub const CHANNEL_PREFIX: &str = "caption";

/// A window-control request sent from the renderer to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowRequest {
    /// Query whether the window is maximized
    IsMaximized,
    /// Maximize the window
    Maximize,
    /// Minimize the window
    Minimize,
    /// Restore the window from minimized or maximized state
    Restore,
    /// Close the window
    Close,
}

impl WindowRequest {
    /// Every request, in channel registration order
    pub const ALL: [WindowRequest; 5] = [
        WindowRequest::IsMaximized,
        WindowRequest::Maximize,
        WindowRequest::Minimize,
        WindowRequest::Restore,
        WindowRequest::Close,
    ];

    /// Operation name, e.g. `isMaximized`
    pub fn name(&self) -> &'static str {
        match self {
            WindowRequest::IsMaximized => "isMaximized",
            WindowRequest::Maximize => "maximize",
            WindowRequest::Minimize => "minimize",
            WindowRequest::Restore => "restore",
            WindowRequest::Close => "close",
        }
    }

    /// Channel name, e.g. `caption:isMaximized`
    pub fn channel(&self) -> String {
        format!("{}:{}", CHANNEL_PREFIX, self.name())
    }

    /// Look up the request handled on `channel`
    pub fn from_channel(channel: &str) -> Result<Self, BridgeError> {
        channel
            .strip_prefix(CHANNEL_PREFIX)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|name| Self::ALL.into_iter().find(|request| request.name() == name))
            .ok_or_else(|| BridgeError::UnknownChannel(channel.to_string()))
    }
}

/// Reply to a [WindowRequest].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindowResponse {
    /// Answer to [WindowRequest::IsMaximized]
    Maximized(bool),
    /// The action was performed
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names() {
        assert_eq!(WindowRequest::IsMaximized.channel(), "caption:isMaximized");
        for request in WindowRequest::ALL {
            assert_eq!(WindowRequest::from_channel(&request.channel()).unwrap(), request);
        }
    }

    #[test]
    fn test_unknown_channel() {
        for channel in ["caption:fullscreen", "other:close", "close", "caption:"] {
            assert!(matches!(
                WindowRequest::from_channel(channel),
                Err(BridgeError::UnknownChannel(name)) if name == channel
            ));
        }
    }
}
