//! End-to-end companion demo.
//!
//! Runs the conversation pipeline, a reminder that fires on the next minute
//! boundary, and the analysis report. Fully functional without any
//! credentials: every provider serves its deterministic canned output.
//!
//! Run with: cargo run -p orchestrator --example care_chat
//!
//! Configuration via .env file or environment variables:
//!   CLAUDE_API_KEY       - Anthropic key (optional; canned replies without it)
//!   ELEVENLABS_API_KEY   - ElevenLabs key (optional; silent clips without it)
//!   OPENAI_API_KEY       - OpenAI key for Whisper (optional)

use orchestrator::{assemble_transcript, Companion, InputMode, TurnRole};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let dir = tempfile::tempdir()?;
    let companion = Companion::from_env(dir.path().join("care.json"))?;

    // Conversation: a couple of turns in text mode, then voice mode (which
    // stays silent here because no child voice is registered).
    let mut session = companion.session();

    for utterance in ["오늘 날씨가 참 좋네.", "우리 아들은 잘 지내니?"] {
        for turn in session.process_utterance(utterance).await {
            let label = match turn.role {
                TurnRole::User => "부모",
                TurnRole::Assistant => "자녀(AI)",
            };
            println!("{}: {}", label, turn.text);
        }
    }

    session.set_mode(InputMode::Voice);
    let turns = session.process_utterance("저녁은 뭘 먹을까?").await;
    info!(
        "Voice-mode reply carries audio: {}",
        turns.last().map(|t| t.has_audio()).unwrap_or(false)
    );

    // Reminders: add one for the current minute and let a few scheduler
    // ticks pick it up (spoken when a voice is registered, visible alert
    // otherwise).
    let now = chrono::Local::now().format("%H:%M").to_string();
    companion.reminders().add(&now, "약 드실 시간이에요").await?;

    let mut scheduler = companion.scheduler();
    scheduler.tick().await;
    scheduler.tick().await; // same minute, no second firing

    // Report: analyze the transcript of the session so far.
    let transcript = assemble_transcript(session.turns());
    let report = companion.analysis().analyze(&transcript).await;

    println!();
    println!("오늘의 마음 리포트");
    println!("  긍정 지수: {}/100", report.sentiment_score);
    println!("  요약: {}", report.summary);
    println!("  키워드: {}", report.keywords.join(", "));
    if report.risk_factors.is_empty() {
        println!("  위험 징후 없음");
    } else {
        println!("  위험 징후: {}", report.risk_factors.join(", "));
    }
    println!("  제안: {}", report.recommendation);

    Ok(())
}
