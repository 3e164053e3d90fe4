//! Affirmation card domain models.
//!
//! Cards come from two sources: the bundled catalog (numeric ids) and the
//! remote quote provider (synthesized string ids). `CardId` keeps the two
//! spaces apart structurally so ids never collide and are never compared
//! through their string forms.

use serde::{Deserialize, Serialize};

/// Content category of an affirmation card.
///
/// The five catalog categories carry bundled records; `Quote` marks cards
/// synthesized from the remote quote provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SelfLove,
    Motivation,
    Gratitude,
    Relationships,
    Success,
    Quote,
}

/// The catalog categories, i.e. every category except `Quote`.
pub const CATALOG_CATEGORIES: [Category; 5] = [
    Category::SelfLove,
    Category::Motivation,
    Category::Gratitude,
    Category::Relationships,
    Category::Success,
];

impl Category {
    /// Returns the stable string form used in storage and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SelfLove => "self-love",
            Category::Motivation => "motivation",
            Category::Gratitude => "gratitude",
            Category::Relationships => "relationships",
            Category::Success => "success",
            Category::Quote => "quote",
        }
    }

    /// Parses the stable string form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "self-love" => Some(Category::SelfLove),
            "motivation" => Some(Category::Motivation),
            "gratitude" => Some(Category::Gratitude),
            "relationships" => Some(Category::Relationships),
            "success" => Some(Category::Success),
            "quote" => Some(Category::Quote),
            _ => None,
        }
    }

    /// Emoji shown next to the category label.
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::SelfLove => "💖",
            Category::Motivation => "🔥",
            Category::Gratitude => "🙏",
            Category::Relationships => "🤝",
            Category::Success => "⭐",
            Category::Quote => "💬",
        }
    }

    /// Accent color associated with the category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::SelfLove => "#e91e63",
            Category::Motivation => "#ff6b6b",
            Category::Gratitude => "#feca57",
            Category::Relationships => "#48dbfb",
            Category::Success => "#1dd1a1",
            Category::Quote => "#9b59b6",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an affirmation card.
///
/// Catalog cards use small numeric ids; quote cards use a synthesized
/// string id. The tagged representation makes the two spaces disjoint, so
/// equality is structural everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum CardId {
    Catalog(u32),
    Quote(String),
}

impl CardId {
    /// True for ids synthesized from the quote provider.
    pub fn is_quote(&self) -> bool {
        matches!(self, CardId::Quote(_))
    }

    /// Parses the display form: a bare number for catalog ids,
    /// `quote_<value>` for quote ids.
    pub fn parse(value: &str) -> Option<Self> {
        if let Some(rest) = value.strip_prefix("quote_") {
            if rest.is_empty() {
                return None;
            }
            return Some(CardId::Quote(rest.to_string()));
        }
        value.parse::<u32>().ok().map(CardId::Catalog)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardId::Catalog(n) => write!(f, "{}", n),
            CardId::Quote(s) => write!(f, "quote_{}", s),
        }
    }
}

/// A single affirmation or quote card. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffirmationCard {
    pub id: CardId,
    pub category: Category,
    pub text: String,
    /// Present for quote cards, absent for bundled affirmations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl AffirmationCard {
    /// Card text followed by the author attribution, when one exists.
    pub fn display_text(&self) -> String {
        match &self.author {
            Some(author) if !author.is_empty() => format!("{}\n\n— {}", self.text, author),
            _ => self.text.clone(),
        }
    }
}

/// User-selectable category filter: every catalog category, `all`, or
/// `quote` (which routes to the remote provider).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryFilter {
    All,
    Category(Category),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// Parses a selector value (`all` or a category string).
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(CategoryFilter::All);
        }
        Category::parse(value).map(CategoryFilter::Category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c.as_str(),
        }
    }

    /// True when the filter routes to the quote provider.
    pub fn is_quote(&self) -> bool {
        matches!(self, CategoryFilter::Category(Category::Quote))
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for c in CATALOG_CATEGORIES {
            assert_eq!(Category::parse(c.as_str()), Some(c));
        }
        assert_eq!(Category::parse("quote"), Some(Category::Quote));
        assert_eq!(Category::parse("unknown"), None);
    }

    #[test]
    fn test_card_id_spaces_are_disjoint() {
        let catalog = CardId::Catalog(7);
        let quote = CardId::Quote("7".to_string());
        assert_ne!(catalog, quote);
    }

    #[test]
    fn test_card_id_parse_round_trip() {
        let catalog = CardId::Catalog(42);
        let quote = CardId::Quote("abc".to_string());
        assert_eq!(CardId::parse(&catalog.to_string()), Some(catalog));
        assert_eq!(CardId::parse(&quote.to_string()), Some(quote));
        assert_eq!(CardId::parse("quote_"), None);
        assert_eq!(CardId::parse("not-an-id"), None);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("quote"),
            Some(CategoryFilter::Category(Category::Quote))
        );
        assert_eq!(CategoryFilter::parse("nope"), None);
        assert!(CategoryFilter::parse("quote").unwrap().is_quote());
        assert!(!CategoryFilter::parse("success").unwrap().is_quote());
    }

    #[test]
    fn test_display_text_with_author() {
        let card = AffirmationCard {
            id: CardId::Quote("abc".to_string()),
            category: Category::Quote,
            text: "Stay hungry.".to_string(),
            author: Some("S. Jobs".to_string()),
        };
        assert_eq!(card.display_text(), "Stay hungry.\n\n— S. Jobs");
    }
}
