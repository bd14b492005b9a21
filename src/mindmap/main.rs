use colored::Colorize;
use mindmap::commands::Status;

mod cli;

fn main() {
    match cli::run() {
        Ok(Status::Success) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}
