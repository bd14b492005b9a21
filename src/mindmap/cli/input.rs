//! Where shell lines come from. A terminal gets a rustyline editor with
//! history and command-name completion; piped input is read line by line.

use super::setup::ShellLine;
use clap::CommandFactory;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::io::{BufRead, Lines, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

pub(super) enum ReadLine {
    Line(String),
    Interrupted,
    Eof,
}

pub(super) trait LineSource {
    fn read_line(&mut self, prompt: &str) -> ReadLine;

    /// Called once when the shell ends.
    fn finish(&mut self) {}
}

/// Lines from a pipe or a file. The prompt is still printed so a transcript
/// reads like a session.
pub(super) struct PipedInput<R> {
    lines: Lines<R>,
}

impl<R: BufRead> PipedInput<R> {
    pub(super) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> LineSource for PipedInput<R> {
    fn read_line(&mut self, prompt: &str) -> ReadLine {
        print!("{}", prompt);
        if let Err(e) = std::io::stdout().flush() {
            warn!(error = %e, "failed to flush prompt");
        }

        match self.lines.next() {
            Some(Ok(line)) => ReadLine::Line(line),
            Some(Err(e)) => {
                warn!(error = %e, "failed to read shell input");
                ReadLine::Eof
            }
            None => {
                println!();
                ReadLine::Eof
            }
        }
    }
}

pub(super) struct Terminal {
    editor: Editor<ShellHelper, DefaultHistory>,
    history: Option<PathBuf>,
}

impl Terminal {
    pub(super) fn new(history: Option<PathBuf>) -> rustyline::Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(ShellHelper::new()));
        if let Some(path) = &history {
            if let Err(e) = editor.load_history(path) {
                debug!(path = %path.display(), error = %e, "no shell history loaded");
            }
        }
        Ok(Self { editor, history })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> ReadLine {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!(error = %e, "history entry dropped");
                    }
                }
                ReadLine::Line(line)
            }
            Err(ReadlineError::Interrupted) => ReadLine::Interrupted,
            Err(ReadlineError::Eof) => ReadLine::Eof,
            Err(e) => {
                warn!(error = %e, "failed to read shell input");
                ReadLine::Eof
            }
        }
    }

    fn finish(&mut self) {
        let Some(path) = &self.history else {
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!(path = %dir.display(), error = %e, "cannot create history directory");
                return;
            }
        }
        if let Err(e) = self.editor.save_history(path) {
            warn!(path = %path.display(), error = %e, "failed to save shell history");
        }
    }
}

/// Completes the first word of a line against the shell's command names and
/// aliases.
pub(super) struct ShellHelper {
    commands: Vec<String>,
}

impl ShellHelper {
    pub(super) fn new() -> Self {
        let mut commands: Vec<String> = ShellLine::command()
            .get_subcommands()
            .flat_map(|sub| {
                std::iter::once(sub.get_name().to_string())
                    .chain(sub.get_all_aliases().map(str::to_string))
            })
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    /// Candidates for the word under the cursor, with the offset they replace
    /// from. Only the command word completes.
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let start = head.len() - head.trim_start().len();
        let word = &head[start..];
        if word.contains(char::is_whitespace) {
            return (pos, Vec::new());
        }

        let word = word.to_lowercase();
        let matches = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&word))
            .cloned()
            .collect();
        (start, matches)
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = self.candidates(line, pos);
        let pairs = names
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn completes_command_names_and_aliases() {
        let helper = ShellHelper::new();
        let (start, names) = helper.candidates("mo", 2);
        assert_eq!(start, 0);
        assert_eq!(names, vec!["move"]);

        let (_, names) = helper.candidates("e", 1);
        assert!(names.contains(&"edit".to_string()));
        assert!(names.contains(&"exit".to_string()));
        assert!(names.contains(&"export".to_string()));

        let (_, names) = helper.candidates("", 0);
        assert!(names.contains(&"pwd".to_string()));
        assert!(names.contains(&"quit".to_string()));
    }

    #[test]
    fn completion_ignores_case_and_leading_space() {
        let helper = ShellHelper::new();
        let (start, names) = helper.candidates("  SEA", 5);
        assert_eq!(start, 2);
        assert_eq!(names, vec!["search"]);
    }

    #[test]
    fn arguments_do_not_complete() {
        let helper = ShellHelper::new();
        let (start, names) = helper.candidates("add mo", 6);
        assert_eq!(start, 6);
        assert!(names.is_empty());
    }

    #[test]
    fn piped_input_ends_with_eof() {
        let mut input = PipedInput::new(Cursor::new("list\n"));
        assert!(matches!(input.read_line("> "), ReadLine::Line(ref l) if l == "list"));
        assert!(matches!(input.read_line("> "), ReadLine::Eof));
    }
}
