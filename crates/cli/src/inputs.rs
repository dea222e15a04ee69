use std::collections::VecDeque;
use std::io::{self, Write};

/// Where prompt answers come from. `None` means the source ran out of
/// lines (EOF on stdin, or an exhausted script), which callers treat as a
/// clean abort.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// The interactive source: prints the prompt, flushes, reads one line.
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).ok()? == 0 {
            return None;
        }
        Some(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }
}

/// Canned answers for tests and non-interactive runs.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.lines.pop_front()
    }
}
