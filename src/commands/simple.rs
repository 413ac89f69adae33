//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: one word per line.

use crate::clock::Clock;
use crate::core::normalize_letter;
use crate::error::Result;
use crate::game::{GameStatus, Session, Submission, format_countdown};
use crate::output::{print_board, print_game_over};
use crate::storage::Storage;
use colored::Colorize;
use std::io::{self, Write};

use super::{share_reply, share_summary};

/// Replace the current guess with `word` and submit it
///
/// Words of the wrong length or with characters outside a-z are refused
/// before anything is typed. A rejected word is cleared again so the next
/// line starts from an empty row.
pub fn enter_word<S: Storage>(session: &mut Session<S>, word: &str) -> Submission {
    let letters: Option<String> = word.trim().chars().map(normalize_letter).collect();
    let Some(letters) = letters.filter(|l| l.chars().count() == session.word_length()) else {
        return Submission::Unavailable;
    };
    if session.status() != GameStatus::Playing {
        return Submission::Unavailable;
    }

    while session.backspace() {}
    for letter in letters.chars() {
        session.append_letter(letter);
    }

    let submission = session.submit();
    if !matches!(submission, Submission::Accepted(_)) {
        while session.backspace() {}
    }
    submission
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Storage, C: Clock + ?Sized>(
    session: &mut Session<S>,
    clock: &C,
    origin: &str,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Who's that Pokémon?           ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Type a guess and press enter.");
    println!("Commands: 'quit' to exit, 'share' to copy your result\n");

    loop {
        print_board(session);

        if session.status().is_finished() {
            let countdown = format_countdown(clock.now(), session.game().ends_at());
            let share = share_summary(session, origin).unwrap_or_default();
            print_game_over(session, &countdown, &share);
            return Ok(());
        }

        let Some(input) = get_user_input(&format!(
            "Guess ({} letters, {} left after this one)",
            session.word_length(),
            session.attempts_remaining()
        ))?
        else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "share" => {
                println!("\n{}\n", share_reply(session, origin));
                continue;
            }
            _ => {}
        }

        match enter_word(session, &input) {
            Submission::Accepted(_) => {}
            Submission::NotAWord(word) => {
                println!(
                    "{}",
                    format!("❌ Sorry, {} is not a pokémon", word.to_uppercase()).red()
                );
            }
            Submission::Unavailable => {
                println!(
                    "{}",
                    format!(
                        "❌ Guesses must be exactly {} letters (a-z)",
                        session.word_length()
                    )
                    .red()
                );
            }
        }
    }
}

/// Get user input with a prompt, or `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
