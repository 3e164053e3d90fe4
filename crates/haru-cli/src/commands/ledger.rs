use anyhow::{bail, Result};

use haru_application::AffirmationSession;
use haru_core::card::CardId;
use haru_core::locale::Locale;

pub fn history(session: &AffirmationSession, locale: Locale) {
    if session.history().is_empty() {
        println!(
            "{}",
            match locale {
                Locale::Ko => "아직 본 카드가 없습니다",
                Locale::En => "No cards viewed yet",
            }
        );
        return;
    }

    for entry in session.history().entries() {
        let text = truncate(&entry.card.text, 50);
        println!(
            "{} {}  [{}]",
            entry.card.category.emoji(),
            text,
            entry.viewed_at.format("%Y-%m-%d %H:%M")
        );
    }
}

pub async fn favorites(
    session: &mut AffirmationSession,
    remove: Option<String>,
    locale: Locale,
) -> Result<()> {
    if let Some(raw) = remove {
        let Some(id) = CardId::parse(&raw) else {
            bail!("invalid favorite id '{}'", raw);
        };
        session.remove_favorite(&id).await;
        return Ok(());
    }

    if session.favorites().is_empty() {
        println!(
            "{}",
            match locale {
                Locale::Ko => "즐겨찾기가 비어 있습니다",
                Locale::En => "No favorites yet",
            }
        );
        return Ok(());
    }

    for entry in session.favorites().entries() {
        println!("{} {}  ({})", entry.category.emoji(), entry.text, entry.id);
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
