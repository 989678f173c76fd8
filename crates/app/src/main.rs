//! Console entry point: drives one registration form session over stdin.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::NaiveDate;

use campuspass_app::session::FormSession;
use campuspass_core::Entity;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

fn main() -> Result<()> {
    campuspass_observability::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = FormSession::new();

    println!("campuspass commands: save, example, buy, show, quit");
    loop {
        let Some(line) = prompt(&mut lines, "> ")? else {
            break;
        };
        match line.trim() {
            "save" => {
                let Some(name) = prompt(&mut lines, "name: ")? else {
                    break;
                };
                let Some(date) = prompt(&mut lines, "date of birth (YYYY-MM-DD): ")? else {
                    break;
                };
                let Some(email) = prompt(&mut lines, "email: ")? else {
                    break;
                };
                let date_of_birth = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok();
                let outcome = session.save(name, date_of_birth, email);
                report_save(&session, outcome);
            }
            "example" => {
                let outcome = session.load_example();
                report_save(&session, outcome);
            }
            "buy" => {
                match session.buy_pass() {
                    Ok(()) => tracing::info!("parking pass purchased"),
                    Err(message) => println!("{RED}{message}{RESET}"),
                }
                render_status(&session);
            }
            "show" => {
                if let Some(person) = session.person() {
                    println!("{person}");
                } else {
                    println!("{RED}No person has been saved yet.{RESET}");
                }
                render_status(&session);
            }
            "quit" | "exit" => break,
            "" => {}
            other => println!("unknown command: {other}"),
        }
    }

    Ok(())
}

fn report_save(session: &FormSession, outcome: Result<String, String>) {
    match outcome {
        Ok(confirmation) => {
            if let Some(person) = session.person() {
                tracing::info!(person_id = %person.id(), "person saved");
            }
            println!("{confirmation}");
            render_status(session);
        }
        Err(message) => println!("{RED}{message}{RESET}"),
    }
}

fn render_status(session: &FormSession) {
    if let Some(status) = session.pass_status() {
        let color = if status.affirmative { GREEN } else { RED };
        println!("{color}{}{RESET}", status.message);
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
