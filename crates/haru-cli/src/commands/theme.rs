use haru_application::AffirmationSession;
use haru_core::theme::Theme;

pub async fn run(session: &mut AffirmationSession) {
    let theme = session.toggle_theme().await;
    let icon = match theme {
        Theme::Light => "☀️",
        Theme::Dark => "🌙",
    };
    println!("{} {}", icon, theme);
}
