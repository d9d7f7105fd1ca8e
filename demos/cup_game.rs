//! Cup Game
//!
//! A line-oriented terminal front end over `GameShell`.
//!
//! Commands:
//! - `guess <symbols>`: e.g. `guess bdac`
//! - `reset`: start a new game
//! - `save [name]`: record a solved game
//! - `board`: show the best results
//! - `quit`
//!
//! Run with: cargo run --example cup_game -- [config.toml]

use cup_match::logging::init_logging;
use cup_match::{Action, GameConfig, GameShell, Notice, Reply};
use std::io::{self, BufRead, Write};

fn parse_command(line: &str) -> Option<Action> {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match command {
        "guess" | "g" => Some(Action::SubmitGuess(rest.to_string())),
        "reset" | "r" => Some(Action::Reset),
        "save" | "s" => Some(Action::SaveScore((!rest.is_empty()).then(|| rest.to_string()))),
        _ => None,
    }
}

fn describe(notice: &Notice) -> String {
    match notice {
        Notice::NewGame => "New game. Four symbols A-D are hidden under the cups.".to_string(),
        Notice::Scored { attempt, score } => {
            format!("Attempt {attempt}: {score} of 4 in the right place.")
        }
        Notice::Solved {
            attempts,
            recording,
        } => {
            let mut text = format!("Solved in {attempts} attempts!");
            match recording {
                Some(recording) => {
                    text.push('\n');
                    text.push_str(&describe(recording));
                }
                None => text.push_str(" Use `save <name>` to record it."),
            }
            text
        }
        Notice::InvalidGuess(message) | Notice::GuessRejected(message) => {
            format!("Warning: {message}")
        }
        Notice::Recorded(record) => format!(
            "Saved: {} in {} attempts.",
            record.player_name.as_deref().unwrap_or("anonymous"),
            record.attempt_count
        ),
        Notice::AlreadyRecorded => "This game has already been saved.".to_string(),
        Notice::NotSolved => "Warning: finish the game before saving.".to_string(),
        Notice::RecordingFailed(message) => format!("Warning: {message}. Try `save` again."),
        Notice::ResultsUnavailable(message) => format!("Warning: {message}"),
    }
}

fn render(reply: &Reply) {
    println!("{}", describe(&reply.notice));
    for entry in &reply.snapshot.history {
        println!("  #{:<3} {}  {}", entry.attempt, entry.guess, entry.score);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    init_logging(&config);

    let mut shell = GameShell::from_config(&config);
    println!("=== Cup Game ===");
    println!("{}", describe(&Notice::NewGame));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "board" | "b" => {
                match shell.recorder().leaderboard(10).await {
                    Ok(board) if board.is_empty() => println!("No results yet."),
                    Ok(board) => {
                        for (rank, record) in board.iter().enumerate() {
                            println!(
                                "{:>2}. {:<16} {:>3}  {}",
                                rank + 1,
                                record.player_name.as_deref().unwrap_or("anonymous"),
                                record.attempt_count,
                                record.timestamp.format("%Y-%m-%d %H:%M")
                            );
                        }
                    }
                    Err(e) => println!("{}", describe(&Notice::from(e))),
                }
                continue;
            }
            _ => {}
        }

        match parse_command(&line) {
            Some(action) => render(&shell.handle(action).await),
            None => println!("Commands: guess <symbols>, reset, save [name], board, quit"),
        }
    }

    Ok(())
}
