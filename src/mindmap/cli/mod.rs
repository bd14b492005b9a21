mod commands;
mod input;
mod print;
mod setup;
mod shell;

pub use commands::run;
