//! Simple test for ClaudeBrain persona replies.
//!
//! Run with: cargo run -p claude-brain --example test_chat
//! Or with a custom message: cargo run -p claude-brain --example test_chat -- "하고 싶은 말"
//!
//! Make sure to set environment variables in .env:
//!   CLAUDE_API_KEY - Anthropic API key (leave unset to see the canned reply)

use claude_brain::{Brain, ClaudeBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get message from command line args or use default
    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "엄마, 오늘 날씨가 참 좋네요. 산책 다녀오셨어요?".to_string()
    };

    println!("Initializing ClaudeBrain...");
    let brain = ClaudeBrain::from_env()?;

    println!("Brain initialized: {}", brain.name());
    println!("API URL: {}", brain.config().api_url);
    println!("Model chain: {}", brain.config().models.join(" -> "));
    println!(
        "Credentials: {}",
        if brain.config().has_credentials() {
            "configured"
        } else {
            "absent (canned responses)"
        }
    );
    println!();

    println!("Sending: \"{}\"", message_text);
    println!("Waiting for response...\n");

    let reply = brain.reply(&message_text).await?;

    println!("=== Reply ===");
    println!("{}", reply);
    println!("=============");

    Ok(())
}
