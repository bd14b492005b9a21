use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mindmap", bin_name = "mindmap", version)]
#[command(about = "Depth-bounded mind map outliner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Map file to operate on (defaults to the configured file in the data directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new mind map with the given root title
    #[command(alias = "n")]
    New {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Add a node (under the root unless a parent is given)
    #[command(alias = "a")]
    Add(AddArgs),

    /// Show the tree with node IDs
    #[command(alias = "ls")]
    List,

    /// Delete a node and its children
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Find nodes containing text
    Search(SearchArgs),

    /// Change a node's text
    Edit(EditArgs),

    /// Move a node under a new parent
    #[command(alias = "mv")]
    Move(MoveArgs),

    /// Export the tree as a text diagram
    Export {
        /// Write to this file instead of stdout
        output: Option<PathBuf>,
    },

    /// Start the interactive shell (default)
    Shell,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Parent node ID (defaults to the root)
    #[arg(short = 'p', long = "parent-id", value_name = "ID")]
    pub parent_id: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    pub id: String,

    /// Confirm deleting the root, which clears the map
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    pub id: String,

    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct MoveArgs {
    pub id: String,
    pub new_parent_id: String,
}

/// One line typed at the shell prompt.
#[derive(Parser, Debug)]
#[command(
    name = "mindmap",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Create a new map and switch to it
    New {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// File for the new map (defaults to the current file)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Load a map file (reloads the current file without a path)
    Load { path: Option<PathBuf> },

    /// Save the map (to a new file when a path is given)
    Save { path: Option<PathBuf> },

    /// Add a node (under the root unless a parent is given)
    #[command(alias = "a")]
    Add(AddArgs),

    /// Show the tree with node IDs
    #[command(alias = "ls")]
    List,

    /// Delete a node and its children
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Find nodes containing text
    Search(SearchArgs),

    /// Change a node's text
    Edit(EditArgs),

    /// Move a node under a new parent
    #[command(alias = "mv")]
    Move(MoveArgs),

    /// Export the tree as a text diagram
    Export { output: Option<PathBuf> },

    /// Show the current map file
    #[command(alias = "pwd")]
    File,

    /// Show commands, or help for one command
    #[command(alias = "h")]
    Help { command: Option<String> },

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Help text for the shell, or for one of its commands.
pub fn shell_help(name: Option<&str>) -> String {
    let mut cmd = ShellLine::command();
    match name {
        None => {
            let mut out = String::from("Commands:\n");
            for sub in cmd.get_subcommands() {
                let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
                out.push_str(&format!("  {:<10} {}\n", sub.get_name(), about));
            }
            out
        }
        Some(name) => match cmd.find_subcommand_mut(name) {
            Some(sub) => sub.render_help().to_string(),
            None => format!("Unknown command: {}\n", name),
        },
    }
}
