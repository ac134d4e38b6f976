use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Selected(String),
    Cancelled,
}

/// Asks the user which extension to decode into.
pub trait ExtensionPrompt {
    fn choose_extension(&mut self, choices: &[&str], default: usize) -> io::Result<PromptOutcome>;
}

/// Numbered single-select menu over any reader/writer pair.
///
/// An empty answer picks the default, `q` or end of input cancels, anything
/// unrecognised asks again.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ExtensionPrompt for LinePrompt<R, W> {
    fn choose_extension(&mut self, choices: &[&str], default: usize) -> io::Result<PromptOutcome> {
        writeln!(self.output, "? Choose an extension")?;
        for (i, choice) in choices.iter().enumerate() {
            let marker = if i == default { " (default)" } else { "" };
            writeln!(self.output, "  {}) {choice}{marker}", i + 1)?;
        }

        loop {
            write!(self.output, "Enter choice [1-{}], or q to cancel: ", choices.len())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(PromptOutcome::Cancelled);
            }

            match parse_answer(line.trim(), choices, default) {
                Some(outcome) => return Ok(outcome),
                None => writeln!(self.output, "Not a valid choice: {}", line.trim())?,
            }
        }
    }
}

fn parse_answer(answer: &str, choices: &[&str], default: usize) -> Option<PromptOutcome> {
    if answer.is_empty() {
        return choices
            .get(default)
            .map(|choice| PromptOutcome::Selected(choice.to_string()));
    }
    if answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit") {
        return Some(PromptOutcome::Cancelled);
    }
    let picked = match answer.parse::<usize>() {
        Ok(n) => n.checked_sub(1).and_then(|i| choices.get(i)),
        Err(_) => choices
            .iter()
            .find(|choice| choice.eq_ignore_ascii_case(answer)),
    };
    picked.map(|choice| PromptOutcome::Selected(choice.to_string()))
}
