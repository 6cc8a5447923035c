use std::io::{BufRead, IsTerminal, Write};

use dhll_core::enums::RatingCode;
use dhll_state::{Challenge, OverrideScope, PinPrompt};

use crate::cli::subcommands::ChallengeArgs;

/// Reads one answer for a prompt.
type Reader = fn(&str) -> std::io::Result<String>;

/// Answers PIN prompts from command-line flags first, then from the terminal
/// when stdin is one. PINs are read without echo. An empty or closed input is
/// a cancellation.
pub struct TerminalChallenge {
    pin: Option<String>,
    confirm_pin: Option<String>,
    scope: Option<OverrideScope>,
    interactive: bool,
    read_secret: Reader,
    read_line: Reader,
}

impl TerminalChallenge {
    pub fn new(args: &ChallengeArgs) -> Self {
        Self::with_readers(
            args,
            std::io::stdin().is_terminal(),
            read_hidden,
            read_visible,
        )
    }

    fn with_readers(
        args: &ChallengeArgs,
        interactive: bool,
        read_secret: Reader,
        read_line: Reader,
    ) -> Self {
        let scope = if args.once {
            Some(OverrideScope::Once)
        } else if args.raise {
            Some(OverrideScope::RaiseCap)
        } else {
            None
        };
        Self {
            pin: args.pin.clone(),
            confirm_pin: args.confirm_pin.clone(),
            scope,
            interactive,
            read_secret,
            read_line,
        }
    }

    fn ask(&self, reader: Reader, question: &str) -> Option<String> {
        if !self.interactive {
            return None;
        }
        match reader(&format!("{question}: ")) {
            Ok(answer) => Some(answer.trim().to_string()).filter(|answer| !answer.is_empty()),
            Err(error) => {
                tracing::debug!(%error, "prompt aborted");
                None
            }
        }
    }
}

fn read_hidden(prompt: &str) -> std::io::Result<String> {
    rpassword::prompt_password(prompt)
}

fn read_visible(prompt: &str) -> std::io::Result<String> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(std::io::ErrorKind::UnexpectedEof.into());
    }
    Ok(line)
}

impl Challenge for TerminalChallenge {
    fn prompt_pin(&mut self, prompt: PinPrompt) -> Option<String> {
        let given = match prompt {
            PinPrompt::Confirm => self.confirm_pin.take(),
            _ => self.pin.take(),
        };
        given.or_else(|| self.ask(self.read_secret, &prompt.to_string()))
    }

    fn choose_scope(&mut self, requested: RatingCode) -> Option<OverrideScope> {
        if let Some(scope) = self.scope {
            return Some(scope);
        }
        let answer = self.ask(
            self.read_line,
            &format!("Allow {requested} this time only, or raise the maximum to it? [once/raise]"),
        )?;
        parse_scope(&answer)
    }
}

fn parse_scope(answer: &str) -> Option<OverrideScope> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "o" | "once" => Some(OverrideScope::Once),
        "r" | "raise" => Some(OverrideScope::RaiseCap),
        _ => None,
    }
}
