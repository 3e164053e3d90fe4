use std::time::Duration;

use anyhow::Result;
use chrono::Utc;

use haru_application::AffirmationSession;
use haru_core::card::CategoryFilter;
use haru_core::locale::Locale;
use haru_core::premium::GateState;

use super::print_card;

pub async fn run(
    session: &mut AffirmationSession,
    filter: CategoryFilter,
    locale: Locale,
) -> Result<()> {
    session.set_filter(filter);
    let card = session.draw_card(Utc::now()).await?;
    print_card(&card, locale);
    println!();

    let Some((mut gate, content)) = session.premium_content(Utc::now()) else {
        return Ok(());
    };

    // Run the countdown against the wall clock, one tick per second.
    while gate.state(Utc::now()) == GateState::Pending {
        let remaining = gate.remaining_secs(Utc::now());
        match locale {
            Locale::Ko => print!("\r광고 시청 중... {}초", remaining),
            Locale::En => print!("\rWatching ad... {}s", remaining),
        }
        use std::io::Write;
        let _ = std::io::stdout().flush();
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    gate.close(Utc::now());
    println!();
    println!();

    match locale {
        Locale::Ko => {
            println!("✦ 심층 해석");
            println!("{}", content.interpretation);
            println!();
            println!("✦ 실천 가이드");
            for practice in &content.practices {
                println!("- {}", practice);
            }
            println!();
            println!("✦ 명상");
            println!("\"{}\"", content.meditation);
            println!();
            println!("✦ 저널 질문");
            println!("{}", content.journal);
        }
        Locale::En => {
            println!("✦ Deep interpretation");
            println!("{}", content.interpretation);
            println!();
            println!("✦ Practice guide");
            for practice in &content.practices {
                println!("- {}", practice);
            }
            println!();
            println!("✦ Meditation");
            println!("\"{}\"", content.meditation);
            println!();
            println!("✦ Journal prompt");
            println!("{}", content.journal);
        }
    }

    Ok(())
}
