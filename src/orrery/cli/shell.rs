use super::commands::{execute, AppContext};
use super::render::print_messages;
use super::setup::{split_words, ShellLine};
use clap::Parser;
use colored::Colorize;
use orrery::api::CmdMessage;
use orrery::error::{OrreryError, Result};
use std::io::{self, BufRead, IsTerminal, Write};

const PROMPT: &str = "orrery> ";

/// Reads commands from stdin until EOF or `quit`. Errors are reported and the
/// session continues; the sort toggles live as long as the session.
pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!(
            "{}",
            "Type a command (list, add, edit, remove, sort, reset, config) or `quit`.".dimmed()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush().map_err(OrreryError::Io)?;
        }

        let line = match lines.next() {
            Some(line) => line.map_err(OrreryError::Io)?,
            None => break,
        };
        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                report(&e);
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => continue,
            Some("quit") | Some("exit") | Some("q") => break,
            Some(_) => {}
        }

        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => {
                if let Err(e) = execute(ctx, parsed.command) {
                    report(&e.to_string());
                }
            }
            Err(e) => {
                // clap renders its own help and usage errors
                let _ = e.print();
            }
        }
    }
    Ok(())
}

fn report(message: &str) {
    print_messages(&[CmdMessage::error(format!("Error: {}", message))], false);
}
