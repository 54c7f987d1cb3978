//! Terminal front end for the match predictor.
//!
//! Collects the roster (argv or stdin), then drives a session through
//! an interactive command loop. The core never reads input or prints;
//! this binary owns the session lifecycle.

use std::io::{self, BufRead, Write};

use predictor_core::{Roster, Session, MIN_PLAYERS};

/// How many slots the `seq` command shows.
const PREVIEW_WINDOW: usize = 24;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let names = if args.is_empty() {
        prompt_names(&mut lines)
    } else {
        args
    };

    let roster = match Roster::confirm(names) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut session = Session::start(roster);
    println!("Players: {}", session.roster().names().join(", "));
    println!("Next opponent: {}", session.current_label());
    println!("Commands: next, ko <name>, seq, json, reset, quit");

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let input = line.trim();
        match input {
            "" => continue,
            "next" => match session.advance() {
                Some(label) => println!("Next opponent: {label}"),
                None => println!("Nothing to show yet."),
            },
            "seq" => {
                for slot in session.display_sequence(PREVIEW_WINDOW) {
                    println!("  {}", slot.label());
                }
            }
            "json" => match serde_json::to_string_pretty(&session.display_sequence(PREVIEW_WINDOW))
            {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("error: {err}"),
            },
            "reset" => {
                session.reset();
                println!("Session cleared.");
            }
            "quit" | "exit" => break,
            _ => {
                if let Some(name) = input.strip_prefix("ko ") {
                    let name = name.trim();
                    if session.toggle_knockout(name) {
                        let state = if session.is_knocked_out(name) {
                            "knocked out"
                        } else {
                            "back in"
                        };
                        println!("{name} is {state}.");
                        println!("Next opponent: {}", session.current_label());
                    } else {
                        println!("{name} is not on the roster.");
                    }
                } else {
                    println!("Unknown command: {input}");
                }
            }
        }
    }
}

/// Read names from stdin, one per line, until a blank line. At least
/// [`MIN_PLAYERS`] are expected; validation happens in the core.
fn prompt_names(lines: &mut impl Iterator<Item = io::Result<String>>) -> Vec<String> {
    println!("Enter at least {MIN_PLAYERS} opponent names, one per line (blank line to finish):");
    let mut names = Vec::new();
    loop {
        print!("{}. ", names.len() + 1);
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) => {
                if line.trim().is_empty() {
                    break;
                }
                names.push(line);
            }
            _ => break,
        }
    }
    names
}
