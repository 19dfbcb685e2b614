use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use game::config::game::GameConfig;
use game::domain::{GameState, Phase};
use game::{GameService, HttpCatalog};

mod telemetry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let base_url = std::env::var("WHOZAT_API_URL")
        .unwrap_or_else(|_| HttpCatalog::DEFAULT_BASE_URL.to_string());

    let catalog = match HttpCatalog::new(&base_url) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            eprintln!("❌ Failed to build catalog client: {e}");
            std::process::exit(1);
        }
    };

    let service = match GameService::new(catalog, config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    println!("🎮 Whozat! Guess the creature (catalog: {base_url})");
    println!("   Answer with the option number, or q to quit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("… loading a new round");
        let state = service.start().await;

        match state.phase {
            Phase::Ready => {
                if !play_round(&service, &state, &mut lines).await? {
                    break;
                }
            }
            // start() settles in Failed when generation fails; anything else
            // unexpected gets the same retry prompt.
            _ => {
                let message = state.error_message.as_deref().unwrap_or("unknown failure");
                eprintln!("❌ {message}");
                println!("Press Enter to retry, q to quit.");
                match lines.next_line().await? {
                    Some(line) if !is_quit(&line) => {}
                    _ => break,
                }
            }
        }
    }

    println!("👋 Thanks for playing!");
    Ok(())
}

/// Present one round, read the pick, reveal the result.
/// Returns false when the player wants to stop.
async fn play_round(
    service: &GameService,
    state: &GameState,
    lines: &mut Lines<BufReader<Stdin>>,
) -> std::io::Result<bool> {
    let round = match &state.round {
        Some(round) => round,
        None => return Ok(true),
    };

    println!("❓ Who's that creature?");
    for (i, option) in round.options.iter().enumerate() {
        println!("   {}) {option}", i + 1);
    }

    let pick = loop {
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => return Ok(false),
        };
        let line = line.trim();
        if is_quit(line) {
            return Ok(false);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=round.options.len()).contains(&n) => {
                break round.options[n - 1].clone();
            }
            _ => println!("Pick a number between 1 and {}.", round.options.len()),
        }
    };

    let answered = service.submit_answer(&pick);
    if answered.is_correct == Some(true) {
        println!("✅ Correct! It was {}.", round.correct.name);
    } else {
        println!("❌ It was {}.", round.correct.name);
    }
    if let Some(url) = &round.correct.image_url {
        println!("   {url}");
    }

    println!("\nPress Enter for the next round, q to quit.");
    match lines.next_line().await? {
        Some(line) if !is_quit(&line) => Ok(true),
        _ => Ok(false),
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "q" | "quit" | "exit")
}
