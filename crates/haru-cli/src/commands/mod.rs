pub mod draw;
pub mod ledger;
pub mod premium;
pub mod stats;
pub mod theme;

use haru_core::card::AffirmationCard;
use haru_core::locale::Locale;

/// Prints one card the way the app renders it: category line, text,
/// optional author attribution.
pub fn print_card(card: &AffirmationCard, locale: Locale) {
    println!(
        "{} {}",
        card.category.emoji(),
        locale.category_label(card.category)
    );
    println!();
    println!("{}", card.display_text());
}
