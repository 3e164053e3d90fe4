//! Card sharing with clipboard fallback.
//!
//! Mirrors the platform share flow: try the native share action first; a
//! user cancel is silent, any other failure falls back to copying the text
//! to the clipboard, and only a missing clipboard surfaces a notice.

use async_trait::async_trait;

/// Outcome reported by a share platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share sheet completed.
    Shared,
    /// The user dismissed the share sheet.
    Cancelled,
    /// The share mechanism is unavailable or failed.
    Failed,
}

/// A native share action (share sheet, `xdg-open`, ...).
#[async_trait]
pub trait SharePlatform: Send + Sync {
    async fn share(&self, title: &str, text: &str) -> ShareOutcome;
}

/// A clipboard the share flow can fall back to.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Copies `text`; returns `false` when the clipboard is unavailable.
    async fn copy(&self, text: &str) -> bool;
}

/// Final result of a share attempt, for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareResult {
    Shared,
    /// Cancelled by the user; callers show no message.
    Cancelled,
    /// Fallback copy succeeded; callers show the "copied" notice.
    Copied,
    /// Neither sharing nor the clipboard worked; callers show a notice.
    Unavailable,
}

/// Runs the share flow for a card text.
pub async fn share_card(
    platform: &dyn SharePlatform,
    clipboard: &dyn Clipboard,
    title: &str,
    text: &str,
) -> ShareResult {
    match platform.share(title, text).await {
        ShareOutcome::Shared => ShareResult::Shared,
        ShareOutcome::Cancelled => ShareResult::Cancelled,
        ShareOutcome::Failed => {
            tracing::debug!("share platform unavailable, trying clipboard");
            if clipboard.copy(text).await {
                ShareResult::Copied
            } else {
                ShareResult::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPlatform(ShareOutcome);

    #[async_trait]
    impl SharePlatform for FixedPlatform {
        async fn share(&self, _title: &str, _text: &str) -> ShareOutcome {
            self.0
        }
    }

    struct FixedClipboard(bool);

    #[async_trait]
    impl Clipboard for FixedClipboard {
        async fn copy(&self, _text: &str) -> bool {
            self.0
        }
    }

    #[tokio::test]
    async fn test_share_success() {
        let result = share_card(
            &FixedPlatform(ShareOutcome::Shared),
            &FixedClipboard(true),
            "t",
            "x",
        )
        .await;
        assert_eq!(result, ShareResult::Shared);
    }

    #[tokio::test]
    async fn test_cancel_is_silent_no_fallback() {
        let result = share_card(
            &FixedPlatform(ShareOutcome::Cancelled),
            &FixedClipboard(true),
            "t",
            "x",
        )
        .await;
        assert_eq!(result, ShareResult::Cancelled);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_clipboard() {
        let result = share_card(
            &FixedPlatform(ShareOutcome::Failed),
            &FixedClipboard(true),
            "t",
            "x",
        )
        .await;
        assert_eq!(result, ShareResult::Copied);
    }

    #[tokio::test]
    async fn test_no_clipboard_surfaces_unavailable() {
        let result = share_card(
            &FixedPlatform(ShareOutcome::Failed),
            &FixedClipboard(false),
            "t",
            "x",
        )
        .await;
        assert_eq!(result, ShareResult::Unavailable);
    }
}
