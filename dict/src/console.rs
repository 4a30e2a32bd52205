use std::io;

use crate::utilities::input;

/// Where the game reads player input from and writes its text to.
pub trait Console {
    /// Blocking read of one line of player input.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Writes one user-visible line. Lines appear in the order they are emitted.
    fn emit(&mut self, line: &str);

    /// Re-prompts until the trimmed input is one of `choices`.
    fn prompt_choice(&mut self, prompt: &str, choices: &[&str]) -> io::Result<String> {
        loop {
            let line = self.read_line(prompt)?;
            let line = line.trim();
            if let Some(choice) = choices.iter().find(|choice| **choice == line) {
                return Ok((*choice).to_owned());
            }
            self.emit(&format!("Please enter one of: {}.", choices.join(", ")));
        }
    }
}

/// Console on the process' stdin and stdout.
pub struct Terminal;

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        input(prompt)
    }

    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}
