//! Operator prompts.
//!
//! Uses `dialoguer` when the `interactive` feature is on and both stdin and
//! stderr are terminals. Otherwise falls back to line-based prompts on
//! stderr/stdin so answers can be piped in.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{CliError, CliResult, IntoCli};

/// Asks the operator for text and yes/no answers.
pub struct Prompter {
    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    rich: bool,
}

impl Prompter {
    /// Pick the prompt backend for the current process.
    pub fn detect() -> Self {
        Self {
            rich: cfg!(feature = "interactive")
                && io::stdin().is_terminal()
                && io::stderr().is_terminal(),
        }
    }

    /// Ask for a free-text answer.
    ///
    /// An empty answer takes `default`; with no default the question repeats.
    pub fn text(&self, prompt: &str, default: Option<&str>) -> CliResult<String> {
        #[cfg(feature = "interactive")]
        {
            if self.rich {
                let mut input = dialoguer::Input::<String>::new().with_prompt(prompt);
                if let Some(default) = default {
                    input = input.default(default.to_string());
                }
                return Ok(input.interact_text()?);
            }
        }

        let stdin = io::stdin();
        read_text(&mut stdin.lock(), &mut io::stderr(), prompt, default)
    }

    /// Ask a yes/no question.
    pub fn confirm(&self, prompt: &str, default: bool) -> CliResult<bool> {
        #[cfg(feature = "interactive")]
        {
            if self.rich {
                return Ok(dialoguer::Confirm::new()
                    .with_prompt(prompt)
                    .default(default)
                    .interact()?);
            }
        }

        let stdin = io::stdin();
        read_confirm(&mut stdin.lock(), &mut io::stderr(), prompt, default)
    }
}

fn read_line(input: &mut impl BufRead) -> CliResult<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_cli_context(|| "failed to read answer")?;
    if read == 0 {
        return Err(CliError::Cancelled);
    }
    Ok(line.trim().to_string())
}

fn read_text(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    default: Option<&str>,
) -> CliResult<String> {
    loop {
        match default {
            Some(default) => write!(output, "{prompt} [{default}]: "),
            None => write!(output, "{prompt}: "),
        }
        .and_then(|()| output.flush())
        .with_cli_context(|| "failed to write prompt")?;

        let answer = read_line(input)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        if let Some(default) = default {
            return Ok(default.to_string());
        }
    }
}

fn read_confirm(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    default: bool,
) -> CliResult<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        write!(output, "{prompt} [{hint}] ")
            .and_then(|()| output.flush())
            .with_cli_context(|| "failed to write prompt")?;

        match read_line(input)?.to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn text_takes_trimmed_answer() {
        let mut input = Cursor::new("  bomber \n");
        let mut output = Vec::new();
        let answer = read_text(&mut input, &mut output, "Project name", None).unwrap();
        assert_eq!(answer, "bomber");
        assert_eq!(String::from_utf8(output).unwrap(), "Project name: ");
    }

    #[test]
    fn empty_text_falls_back_to_default() {
        let mut input = Cursor::new("\n");
        let answer = read_text(&mut input, &mut Vec::new(), "Email", Some("ada@example.com"))
            .unwrap();
        assert_eq!(answer, "ada@example.com");
    }

    #[test]
    fn empty_text_without_default_asks_again() {
        let mut input = Cursor::new("\n\nAda\n");
        let mut output = Vec::new();
        let answer = read_text(&mut input, &mut output, "Username", None).unwrap();
        assert_eq!(answer, "Ada");
        assert_eq!(String::from_utf8(output).unwrap().matches("Username").count(), 3);
    }

    #[test]
    fn closed_input_cancels() {
        let mut input = Cursor::new("");
        let err = read_text(&mut input, &mut Vec::new(), "Project name", None).unwrap_err();
        assert!(matches!(err, CliError::Cancelled));
    }

    #[test]
    fn confirm_understands_answers_and_default() {
        let mut input = Cursor::new("YES\nn\n\nmaybe\ny\n");
        let mut sink = Vec::new();
        assert!(read_confirm(&mut input, &mut sink, "Init git?", false).unwrap());
        assert!(!read_confirm(&mut input, &mut sink, "Init git?", true).unwrap());
        assert!(read_confirm(&mut input, &mut sink, "Init git?", true).unwrap());
        assert!(read_confirm(&mut input, &mut sink, "Init git?", false).unwrap());
    }
}
