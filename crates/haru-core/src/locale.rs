//! UI locale and label lookup.
//!
//! A small stand-in for the original multi-language string layer: enough to
//! label categories and the share/notice messages the CLI prints. Korean is
//! the default, matching the bundled catalog.

use serde::{Deserialize, Serialize};

use crate::card::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ko" => Some(Locale::Ko),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Localized display name of a category.
    pub fn category_label(&self, category: Category) -> &'static str {
        match (self, category) {
            (Locale::Ko, Category::SelfLove) => "자존감",
            (Locale::Ko, Category::Motivation) => "동기부여",
            (Locale::Ko, Category::Gratitude) => "감사",
            (Locale::Ko, Category::Relationships) => "관계",
            (Locale::Ko, Category::Success) => "성공",
            (Locale::Ko, Category::Quote) => "오늘의 명언",
            (Locale::En, Category::SelfLove) => "Self-Love",
            (Locale::En, Category::Motivation) => "Motivation",
            (Locale::En, Category::Gratitude) => "Gratitude",
            (Locale::En, Category::Relationships) => "Relationships",
            (Locale::En, Category::Success) => "Success",
            (Locale::En, Category::Quote) => "Quote of the Day",
        }
    }

    /// App title used in the share signature.
    pub fn app_title(&self) -> &'static str {
        match self {
            Locale::Ko => "하루 긍정 확언",
            Locale::En => "haru - Daily Affirmations",
        }
    }

    /// Notice shown after a successful clipboard fallback.
    pub fn share_copied(&self) -> &'static str {
        match self {
            Locale::Ko => "클립보드에 복사되었습니다",
            Locale::En => "Copied to clipboard",
        }
    }

    /// Notice shown when neither sharing nor the clipboard is available.
    pub fn share_unavailable(&self) -> &'static str {
        match self {
            Locale::Ko => "공유 기능을 사용할 수 없습니다",
            Locale::En => "Sharing is not available",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_korean() {
        assert_eq!(Locale::default(), Locale::Ko);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
    }
}
