//! # CLI Layer
//!
//! One possible UI client for mindmap. This is the **only** place that knows
//! about stdout, stderr and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument parsing**: clap turns argv (or a shell line) into typed commands
//! 2. **Context setup**: resolve the map file from `--file` or the config, and
//!    open a [`MindmapApi`] session on it
//! 3. **Dispatch**: call the session and print the outcome
//! 4. **Logging**: install the `tracing` subscriber from `-v`
//!
//! One-shot commands load the map, run one action and report the outcome's
//! [`Status`]; anything but `Success` makes the process exit with 1. With no
//! command, or `shell`, the same handlers are driven line by line from the
//! interactive shell.

use super::print::{print_diagram, print_export, print_info, print_outcome, print_search_hits};
use super::setup::{AddArgs, Cli, Commands, DeleteArgs, EditArgs, MoveArgs, SearchArgs};
use super::input::{PipedInput, Terminal};
use super::shell;
use clap::Parser;
use mindmap::api::MindmapApi;
use mindmap::commands::{Outcome, Status};
use mindmap::config::{self, MindmapConfig};
use mindmap::error::Result;
use mindmap::store::fs::FileStore;
use mindmap::store::MapStore;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const HISTORY_FILE: &str = "shell_history";

struct AppContext {
    api: MindmapApi<FileStore>,
}

pub fn run() -> Result<Status> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    debug!(command = ?cli.command, path = %ctx.api.path().display(), "dispatch");

    let status = match cli.command {
        Some(Commands::New { title, force }) => {
            handle_new(&mut ctx.api, &title.join(" "), None, force)
        }
        Some(Commands::Shell) | None => {
            open_session(&mut ctx.api, true);
            run_shell(&mut ctx.api)
        }
        Some(cmd) => {
            if let Some(failed) = open_session(&mut ctx.api, false) {
                return Ok(failed);
            }
            match cmd {
                Commands::Add(args) => handle_add(&mut ctx.api, args),
                Commands::List => handle_list(&ctx.api),
                Commands::Delete(args) => handle_delete(&mut ctx.api, args),
                Commands::Search(args) => handle_search(&ctx.api, args),
                Commands::Edit(args) => handle_edit(&mut ctx.api, args),
                Commands::Move(args) => handle_move(&mut ctx.api, args),
                Commands::Export { output } => handle_export(&mut ctx.api, output.as_deref()),
                Commands::New { .. } | Commands::Shell => Status::Success,
            }
        }
    };
    Ok(status)
}

/// A terminal gets line editing and history; anything else is read as a
/// script.
fn run_shell(api: &mut MindmapApi<FileStore>) -> Status {
    if std::io::stdin().is_terminal() {
        let history = config::data_dir().ok().map(|dir| dir.join(HISTORY_FILE));
        match Terminal::new(history) {
            Ok(mut terminal) => return shell::run(api, &mut terminal),
            Err(e) => warn!(error = %e, "line editor unavailable, reading plain stdin"),
        }
    }
    shell::run(api, &mut PipedInput::new(std::io::stdin().lock()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let path = match &cli.file {
        Some(path) => path.clone(),
        None => default_map_path()?,
    };
    Ok(AppContext {
        api: MindmapApi::new(FileStore::new(), path),
    })
}

fn default_map_path() -> Result<PathBuf> {
    let data_dir = config::data_dir()?;
    let config = MindmapConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        MindmapConfig::default()
    });
    Ok(config.map_path(&data_dir))
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init();
}

/// Loads the session file. Returns the status to stop with when the file
/// exists but could not be used. A missing file is only reported.
pub(super) fn open_session<S: MapStore>(api: &mut MindmapApi<S>, announce: bool) -> Option<Status> {
    let outcome = api.load();
    match outcome.status() {
        Status::Success => {
            if announce {
                print_outcome(&outcome);
            }
            None
        }
        Status::NotFound => {
            print_info(outcome.message());
            None
        }
        status => {
            print_outcome(&outcome);
            Some(status)
        }
    }
}

fn report<T>(outcome: &Outcome<T>) -> Status {
    print_outcome(outcome);
    outcome.status()
}

pub(super) fn handle_new<S: MapStore>(
    api: &mut MindmapApi<S>,
    title: &str,
    file: Option<PathBuf>,
    force: bool,
) -> Status {
    report(&api.new_map(title, file, force))
}

pub(super) fn handle_add<S: MapStore>(api: &mut MindmapApi<S>, args: AddArgs) -> Status {
    let text = args.text.join(" ");
    report(&api.add_node(&text, args.parent_id.as_deref()))
}

pub(super) fn handle_list<S: MapStore>(api: &MindmapApi<S>) -> Status {
    let outcome = api.list();
    match outcome.result() {
        Some(Some(diagram)) => print_diagram(diagram),
        Some(None) => print_info(outcome.message()),
        None => print_outcome(&outcome),
    }
    outcome.status()
}

pub(super) fn handle_delete<S: MapStore>(api: &mut MindmapApi<S>, args: DeleteArgs) -> Status {
    report(&api.delete_node(&args.id, args.yes))
}

pub(super) fn handle_search<S: MapStore>(api: &MindmapApi<S>, args: SearchArgs) -> Status {
    let term = args.text.join(" ");
    let outcome = api.search(&term);
    match outcome.result() {
        Some(hits) if !hits.is_empty() => {
            print_outcome(&outcome);
            print_search_hits(hits);
        }
        Some(_) => print_info(outcome.message()),
        None => print_outcome(&outcome),
    }
    outcome.status()
}

pub(super) fn handle_edit<S: MapStore>(api: &mut MindmapApi<S>, args: EditArgs) -> Status {
    let text = args.text.join(" ");
    report(&api.edit_node(&args.id, &text))
}

pub(super) fn handle_move<S: MapStore>(api: &mut MindmapApi<S>, args: MoveArgs) -> Status {
    report(&api.move_node(&args.id, &args.new_parent_id))
}

pub(super) fn handle_export<S: MapStore>(api: &mut MindmapApi<S>, output: Option<&Path>) -> Status {
    let outcome = api.export(output);
    match outcome.result() {
        Some(Some(diagram)) => print_export(diagram),
        Some(None) if output.is_none() => print_info(outcome.message()),
        _ => print_outcome(&outcome),
    }
    outcome.status()
}
