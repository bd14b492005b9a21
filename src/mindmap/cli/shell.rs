//! The interactive shell: read a line, split it with shell-style quoting, parse
//! it with clap and hand it to the same handlers the one-shot commands use.
//! The command word is matched case-insensitively. Ctrl-C abandons the current
//! line only.
//! Mutations are saved by the session as they happen, so leaving the shell
//! (`exit`, `quit` or end of input) never loses work.

use super::commands::{
    handle_add, handle_delete, handle_edit, handle_export, handle_list, handle_move, handle_new,
    handle_search,
};
use super::input::{LineSource, ReadLine};
use super::print::{print_info, print_outcome};
use super::setup::{shell_help, ShellCommand, ShellLine};
use clap::Parser;
use colored::Colorize;
use mindmap::api::MindmapApi;
use mindmap::commands::Status;
use mindmap::error::{MindmapError, Result};
use mindmap::store::MapStore;
use tracing::{debug, warn};

const PROMPT_TITLE_WIDTH: usize = 20;

pub(super) fn run<S: MapStore, L: LineSource>(api: &mut MindmapApi<S>, input: &mut L) -> Status {
    print_info("Type 'help' for commands, 'exit' to leave.");

    loop {
        let line = match input.read_line(&prompt(api)) {
            ReadLine::Line(line) => line,
            ReadLine::Interrupted => {
                println!("{}", "Interrupted. Type 'exit' or 'quit' to leave.".yellow());
                continue;
            }
            ReadLine::Eof => break,
        };

        let mut words = match split_line(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                println!("{}", e.to_string().red());
                continue;
            }
        };
        words[0] = words[0].to_lowercase();

        let parsed = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed,
            Err(e) => {
                if let Err(io) = e.print() {
                    warn!(error = %io, "failed to print usage error");
                }
                continue;
            }
        };

        debug!(command = ?parsed.command, "shell");
        if !execute(api, parsed.command) {
            break;
        }
    }

    input.finish();
    Status::Success
}

/// Runs one shell command. Returns false when the shell should stop.
fn execute<S: MapStore>(api: &mut MindmapApi<S>, command: ShellCommand) -> bool {
    match command {
        ShellCommand::New { title, file, force } => {
            handle_new(api, &title.join(" "), file, force);
        }
        ShellCommand::Load { path } => {
            let outcome = match path {
                Some(path) => api.load_from(path),
                None => api.load(),
            };
            print_outcome(&outcome);
        }
        ShellCommand::Save { path } => {
            let outcome = match path {
                Some(path) => api.save_as(path),
                None => api.save(),
            };
            print_outcome(&outcome);
        }
        ShellCommand::Add(args) => {
            handle_add(api, args);
        }
        ShellCommand::List => {
            handle_list(api);
        }
        ShellCommand::Delete(args) => {
            handle_delete(api, args);
        }
        ShellCommand::Search(args) => {
            handle_search(api, args);
        }
        ShellCommand::Edit(args) => {
            handle_edit(api, args);
        }
        ShellCommand::Move(args) => {
            handle_move(api, args);
        }
        ShellCommand::Export { output } => {
            handle_export(api, output.as_deref());
        }
        ShellCommand::File => {
            print_info(&format!("Current mind map file: {}", api.path().display()));
        }
        ShellCommand::Help { command } => {
            print!("{}", shell_help(command.as_deref()));
        }
        ShellCommand::Exit => return false,
    }
    true
}

fn prompt<S: MapStore>(api: &MindmapApi<S>) -> String {
    let file = api
        .path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "no file".to_string());

    match api.map().root() {
        Some(root) => format!("mindmap [{} ({})]> ", file, truncate(&root.text)),
        None => format!("mindmap [{}]> ", file),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= PROMPT_TITLE_WIDTH {
        return text.to_string();
    }
    let head: String = text.chars().take(PROMPT_TITLE_WIDTH).collect();
    format!("{}...", head)
}

/// Splits a line into words. Single quotes are literal, double quotes allow
/// backslash escapes, and a backslash outside quotes escapes the next char.
fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err(unclosed('\'')),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err(unclosed('"')),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err(unclosed('"')),
                    }
                }
            }
            '\\' => {
                in_word = true;
                if let Some(ch) = chars.next() {
                    current.push(ch);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn unclosed(quote: char) -> MindmapError {
    MindmapError::InvalidOperation(format!("No closing quotation ({})", quote))
}
