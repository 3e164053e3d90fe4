use anyhow::Result;
use async_trait::async_trait;

use haru_application::{
    share_card, AffirmationSession, Clipboard, ShareOutcome, SharePlatform, ShareResult,
};
use haru_core::card::CategoryFilter;
use haru_core::ledger::FavoriteToggle;
use haru_core::locale::Locale;

use super::print_card;

pub async fn run(
    session: &mut AffirmationSession,
    filter: CategoryFilter,
    fav: bool,
    share: bool,
    locale: Locale,
) -> Result<()> {
    session.set_filter(filter);
    let card = session.draw_card(chrono::Utc::now()).await?;
    print_card(&card, locale);

    if fav {
        match session.toggle_favorite().await {
            Some(FavoriteToggle::Added) => println!("\n❤️  {}", card.id),
            Some(FavoriteToggle::Removed) => println!("\n🤍 {}", card.id),
            None => {}
        }
    }

    if share {
        let text = session
            .share_text(locale)
            .unwrap_or_else(|| card.display_text());
        match share_card(&NoSharePlatform, &ProcessClipboard, locale.app_title(), &text).await {
            ShareResult::Shared | ShareResult::Cancelled => {}
            ShareResult::Copied => println!("\n{}", locale.share_copied()),
            ShareResult::Unavailable => println!("\n{}", locale.share_unavailable()),
        }
    }

    Ok(())
}

/// The terminal has no native share sheet; sharing always falls back to
/// the clipboard.
struct NoSharePlatform;

#[async_trait]
impl SharePlatform for NoSharePlatform {
    async fn share(&self, _title: &str, _text: &str) -> ShareOutcome {
        ShareOutcome::Failed
    }
}

/// Clipboard backed by the usual command-line helpers.
struct ProcessClipboard;

impl ProcessClipboard {
    fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
        &[
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("pbcopy", &[]),
        ]
    }

    /// Pipes `text` into one candidate program. The child is always reaped,
    /// even when the write fails.
    async fn copy_via(program: &str, args: &[&str], text: &str) -> bool {
        use tokio::io::AsyncWriteExt;
        use tokio::process::Command;

        let spawned = Command::new(program)
            .args(args)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn();
        let Ok(mut child) = spawned else {
            return false;
        };

        let mut write_ok = true;
        if let Some(mut stdin) = child.stdin.take() {
            write_ok = stdin.write_all(text.as_bytes()).await.is_ok();
        }
        let status = child.wait().await;
        write_ok && matches!(status, Ok(status) if status.success())
    }
}

#[async_trait]
impl Clipboard for ProcessClipboard {
    async fn copy(&self, text: &str) -> bool {
        for (program, args) in Self::candidates() {
            if Self::copy_via(program, args, text).await {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_via_reaps_child_when_write_fails() {
        // `false` exits without reading stdin; a large write hits the closed
        // pipe and the helper must reap the child and report failure rather
        // than hang or leave a zombie behind.
        let text = "x".repeat(1 << 20);
        assert!(!ProcessClipboard::copy_via("false", &[], &text).await);
    }

    #[tokio::test]
    async fn test_copy_via_reports_success() {
        assert!(ProcessClipboard::copy_via("cat", &[], "hello").await);
    }

    #[tokio::test]
    async fn test_missing_program_reports_failure() {
        assert!(!ProcessClipboard::copy_via("haru-no-such-clipboard", &[], "x").await);
    }
}
