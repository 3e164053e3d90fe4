//! The bundled affirmation catalog.
//!
//! 100 records, 20 per catalog category. The catalog is non-empty for every
//! catalog category by construction, which the selection engine relies on.

use crate::card::{AffirmationCard, CardId, Category, CategoryFilter};

fn entry(id: u32, category: Category, text: &str) -> AffirmationCard {
    AffirmationCard {
        id: CardId::Catalog(id),
        category,
        text: text.to_string(),
        author: None,
    }
}

/// The static, bundled set of affirmation records.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<AffirmationCard>,
}

impl Catalog {
    /// Builds the bundled catalog.
    pub fn bundled() -> Self {
        Self {
            cards: bundled_cards(),
        }
    }

    /// All cards in the catalog.
    pub fn cards(&self) -> &[AffirmationCard] {
        &self.cards
    }

    /// Cards matching the given filter (`All` returns the whole catalog).
    ///
    /// The `quote` pseudo-category has no catalog records and yields an
    /// empty pool; callers route it to the quote provider instead.
    pub fn pool(&self, filter: CategoryFilter) -> Vec<&AffirmationCard> {
        match filter {
            CategoryFilter::All => self.cards.iter().collect(),
            CategoryFilter::Category(category) => self
                .cards
                .iter()
                .filter(|c| c.category == category)
                .collect(),
        }
    }

    /// Looks up a card by id.
    pub fn find(&self, id: &CardId) -> Option<&AffirmationCard> {
        self.cards.iter().find(|c| &c.id == id)
    }
}

fn bundled_cards() -> Vec<AffirmationCard> {
    vec![
        entry(1, Category::SelfLove, "나는 있는 그대로의 나를 사랑합니다"),
        entry(2, Category::SelfLove, "나는 충분히 가치 있는 사람입니다"),
        entry(3, Category::SelfLove, "나의 감정은 소중하고 타당합니다"),
        entry(4, Category::SelfLove, "나는 나 자신에게 친절합니다"),
        entry(5, Category::SelfLove, "완벽하지 않아도 괜찮습니다"),
        entry(6, Category::SelfLove, "나는 나만의 속도로 성장하고 있습니다"),
        entry(7, Category::SelfLove, "나는 사랑받을 자격이 있습니다"),
        entry(8, Category::SelfLove, "나의 존재만으로도 충분합니다"),
        entry(9, Category::SelfLove, "나는 스스로를 자랑스럽게 여깁니다"),
        entry(10, Category::SelfLove, "나는 나 자신의 최고의 친구입니다"),
        entry(11, Category::SelfLove, "나는 내 자신을 온전히 받아들입니다"),
        entry(12, Category::SelfLove, "나는 매일 더 나은 사람이 되고 있습니다"),
        entry(13, Category::SelfLove, "나의 몸과 마음을 존중합니다"),
        entry(14, Category::SelfLove, "나는 나 자신을 먼저 챙깁니다"),
        entry(15, Category::SelfLove, "나는 나의 선택을 믿습니다"),
        entry(16, Category::SelfLove, "나는 나를 위해 시간을 씁니다"),
        entry(17, Category::SelfLove, "나는 나의 한계를 존중합니다"),
        entry(18, Category::SelfLove, "나는 나 자신에게 인내심을 갖습니다"),
        entry(19, Category::SelfLove, "나는 나의 과거를 용서합니다"),
        entry(20, Category::SelfLove, "나는 나 자신을 위해 최선을 다합니다"),
        entry(21, Category::Motivation, "나는 내가 원하는 것을 이룰 수 있습니다"),
        entry(22, Category::Motivation, "오늘도 나는 한 걸음 앞으로 나아갑니다"),
        entry(23, Category::Motivation, "어려움은 나를 더 강하게 만듭니다"),
        entry(24, Category::Motivation, "나는 끊임없이 배우고 성장합니다"),
        entry(25, Category::Motivation, "나는 내 꿈을 실현할 힘이 있습니다"),
        entry(26, Category::Motivation, "포기하지 않으면 반드시 이룰 수 있습니다"),
        entry(27, Category::Motivation, "나는 오늘 최선을 다합니다"),
        entry(28, Category::Motivation, "나는 실패에서 배웁니다"),
        entry(29, Category::Motivation, "나는 무한한 가능성을 가지고 있습니다"),
        entry(30, Category::Motivation, "나는 목표를 향해 꾸준히 나아갑니다"),
        entry(31, Category::Motivation, "나는 변화를 두려워하지 않습니다"),
        entry(32, Category::Motivation, "나는 도전을 즐깁니다"),
        entry(33, Category::Motivation, "나는 집중력이 뛰어납니다"),
        entry(34, Category::Motivation, "나는 생산적인 하루를 보냅니다"),
        entry(35, Category::Motivation, "나는 장애물을 기회로 만듭니다"),
        entry(36, Category::Motivation, "나는 열정으로 가득 차 있습니다"),
        entry(37, Category::Motivation, "나는 끝까지 해냅니다"),
        entry(38, Category::Motivation, "나는 긍정적인 에너지로 가득합니다"),
        entry(39, Category::Motivation, "나는 새로운 시작을 환영합니다"),
        entry(40, Category::Motivation, "나는 내 인생의 주인공입니다"),
        entry(41, Category::Gratitude, "나는 오늘 하루에 감사합니다"),
        entry(42, Category::Gratitude, "나는 내 주변의 사랑에 감사합니다"),
        entry(43, Category::Gratitude, "나는 건강한 몸에 감사합니다"),
        entry(44, Category::Gratitude, "나는 작은 것에도 감사할 줄 압니다"),
        entry(45, Category::Gratitude, "나는 지금 이 순간에 감사합니다"),
        entry(46, Category::Gratitude, "나는 내가 가진 것에 만족합니다"),
        entry(47, Category::Gratitude, "나는 행복한 순간들을 기억합니다"),
        entry(48, Category::Gratitude, "나는 배움의 기회에 감사합니다"),
        entry(49, Category::Gratitude, "나는 삶의 모든 경험에 감사합니다"),
        entry(50, Category::Gratitude, "나는 나를 지지하는 사람들에게 감사합니다"),
        entry(51, Category::Gratitude, "나는 안전한 공간이 있음에 감사합니다"),
        entry(52, Category::Gratitude, "나는 새로운 하루가 주어짐에 감사합니다"),
        entry(53, Category::Gratitude, "나는 자연의 아름다움에 감사합니다"),
        entry(54, Category::Gratitude, "나는 음식이 있음에 감사합니다"),
        entry(55, Category::Gratitude, "나는 웃을 수 있음에 감사합니다"),
        entry(56, Category::Gratitude, "나는 호흡할 수 있음에 감사합니다"),
        entry(57, Category::Gratitude, "나는 평화로운 순간에 감사합니다"),
        entry(58, Category::Gratitude, "나는 내 능력에 감사합니다"),
        entry(59, Category::Gratitude, "나는 풍요로운 삶에 감사합니다"),
        entry(60, Category::Gratitude, "나는 지금 이 자리에 있음에 감사합니다"),
        entry(61, Category::Relationships, "나는 건강한 관계를 만들어갑니다"),
        entry(62, Category::Relationships, "나는 사람들에게 긍정적인 영향을 줍니다"),
        entry(63, Category::Relationships, "나는 진심으로 소통합니다"),
        entry(64, Category::Relationships, "나는 타인을 존중합니다"),
        entry(65, Category::Relationships, "나는 경청하는 법을 압니다"),
        entry(66, Category::Relationships, "나는 건강한 경계를 설정합니다"),
        entry(67, Category::Relationships, "나는 용서할 줄 압니다"),
        entry(68, Category::Relationships, "나는 진정한 친구입니다"),
        entry(69, Category::Relationships, "나는 사랑을 주고받습니다"),
        entry(70, Category::Relationships, "나는 타인의 행복을 응원합니다"),
        entry(71, Category::Relationships, "나는 공감 능력이 뛰어납니다"),
        entry(72, Category::Relationships, "나는 신뢰할 수 있는 사람입니다"),
        entry(73, Category::Relationships, "나는 갈등을 건설적으로 해결합니다"),
        entry(74, Category::Relationships, "나는 감사를 표현합니다"),
        entry(75, Category::Relationships, "나는 다양성을 존중합니다"),
        entry(76, Category::Relationships, "나는 도움을 요청할 수 있습니다"),
        entry(77, Category::Relationships, "나는 다른 사람을 판단하지 않습니다"),
        entry(78, Category::Relationships, "나는 따뜻한 말을 건넵니다"),
        entry(79, Category::Relationships, "나는 좋은 에너지를 전파합니다"),
        entry(80, Category::Relationships, "나는 의미 있는 연결을 만듭니다"),
        entry(81, Category::Success, "나는 성공할 자격이 있습니다"),
        entry(82, Category::Success, "나는 풍요로움을 받아들입니다"),
        entry(83, Category::Success, "나는 기회를 만들어냅니다"),
        entry(84, Category::Success, "나는 목표를 달성합니다"),
        entry(85, Category::Success, "나는 현명한 결정을 내립니다"),
        entry(86, Category::Success, "나는 성장 마인드셋을 가지고 있습니다"),
        entry(87, Category::Success, "나는 창의적인 해결책을 찾습니다"),
        entry(88, Category::Success, "나는 내 일을 사랑합니다"),
        entry(89, Category::Success, "나는 리더십을 발휘합니다"),
        entry(90, Category::Success, "나는 전문성을 키워갑니다"),
        entry(91, Category::Success, "나는 기회를 포착합니다"),
        entry(92, Category::Success, "나는 효율적으로 일합니다"),
        entry(93, Category::Success, "나는 비전이 명확합니다"),
        entry(94, Category::Success, "나는 계획을 실행합니다"),
        entry(95, Category::Success, "나는 위험을 감수할 용기가 있습니다"),
        entry(96, Category::Success, "나는 네트워크를 확장합니다"),
        entry(97, Category::Success, "나는 우선순위를 정확히 파악합니다"),
        entry(98, Category::Success, "나는 혁신적입니다"),
        entry(99, Category::Success, "나는 성취감을 느낍니다"),
        entry(100, Category::Success, "나는 나만의 길을 만들어갑니다"),
    ]
}
