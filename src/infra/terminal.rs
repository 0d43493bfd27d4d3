use std::io::{self, BufRead, Write};

use crate::error::AppResult;
use crate::services::ConsoleService;

/// Console backed by stdin/stdout.
pub struct TerminalConsole;

impl TerminalConsole {
    fn read_answer(prompt: &str) -> AppResult<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }
}

impl ConsoleService for TerminalConsole {
    fn say(&self, text: &str) {
        println!("{text}");
    }

    fn confirm(&self, question: &str) -> AppResult<bool> {
        loop {
            let Some(answer) = Self::read_answer(&format!("{question} [y/N]: "))? else {
                return Ok(false);
            };
            match parse_confirmation(&answer) {
                Some(decision) => return Ok(decision),
                None => println!("Error: invalid input"),
            }
        }
    }

    fn ask(&self, question: &str) -> AppResult<String> {
        Ok(Self::read_answer(&format!("{question}: "))?.unwrap_or_default())
    }
}

/// Interprets a yes/no answer. Empty input means no.
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "" | "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
