//! Yes/no prompting for interactive commits.

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait Prompter {
    /// Returns the user's answer, or `default` when they give none.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    fn confirm(&self, question: &str, default: bool) -> io::Result<bool>;
}

/// Prompts on stdout and reads answers from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str, default: bool) -> io::Result<bool> {
        let stdin = io::stdin();
        ask(&mut stdin.lock(), &mut io::stdout(), question, default)
    }
}

fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    default: bool,
) -> io::Result<bool> {
    let choices = if default { "[Yes/no]" } else { "[yes/No]" };
    loop {
        write!(output, "{question} {choices} ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(default);
        }

        match parse_answer(&line) {
            Some(Answer::Yes) => return Ok(true),
            Some(Answer::No) => return Ok(false),
            Some(Answer::Default) => return Ok(default),
            None => writeln!(output, "Please answer 'yes' or 'no'.")?,
        }
    }
}

enum Answer {
    Yes,
    No,
    Default,
}

fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => Some(Answer::Default),
        "y" | "yes" => Some(Answer::Yes),
        "n" | "no" => Some(Answer::No),
        _ => None,
    }
}
