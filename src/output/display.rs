//! Display functions for command results

use super::formatters::{guess_row, keyboard_rows, pending_row};
use crate::commands::StatusReport;
use crate::game::{GAME_TITLE, GameStatus, Session};
use crate::storage::Storage;
use colored::Colorize;

/// Print the board: submitted guesses, the row being typed and empty rows
pub fn print_board<S: Storage>(session: &Session<S>) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        " {} {}",
        GAME_TITLE.bright_cyan().bold(),
        format!("#{}", session.game().day()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    for guess in session.guesses() {
        println!("  {}", guess_row(guess));
    }
    if session.status() == GameStatus::Playing {
        println!(
            "  {}",
            pending_row(session.current_guess(), session.word_length())
        );
    }
    for _ in 0..session.attempts_remaining() {
        println!("  {}", pending_row("", session.word_length()).bright_black());
    }

    println!();
    for row in keyboard_rows(&session.keyboard_hints()) {
        println!("  {row}");
    }
    println!();
}

/// Print a status summary for today's game
pub fn print_status_report(report: &StatusReport) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} ",
        format!("{GAME_TITLE} #{}", report.day).bright_cyan().bold()
    );
    println!("{}", "═".repeat(40).cyan());

    let status = match report.status {
        GameStatus::Playing => "in progress".yellow(),
        GameStatus::Won => "won".green().bold(),
        GameStatus::Lost => "lost".red().bold(),
    };
    println!("   Status:       {status}");
    println!("   Word length:  {}", report.word_length);
    println!(
        "   Guesses:      {}/{}",
        report.attempts_used, report.max_attempts
    );
    println!("   Next game in: {}", report.countdown.bright_yellow());
    println!();
}

/// Print the end-of-game message and the shareable summary
pub fn print_game_over<S: Storage>(session: &Session<S>, countdown: &str, share: &str) {
    let solution = session.game().solution().to_uppercase();
    match session.status() {
        GameStatus::Won => println!(
            "{}",
            format!("🎉 Gotcha! {solution} was caught!").green().bold()
        ),
        GameStatus::Lost => println!(
            "{}",
            format!("Oh no! {solution} got away!").red().bold()
        ),
        GameStatus::Playing => return,
    }

    println!("The next pokémon will appear in {}", countdown.bright_yellow());
    println!("\n{share}\n");
}
