use colored::Colorize;
use mindmap::commands::search::SearchHit;
use mindmap::commands::{Outcome, Status};

const EXPORT_BANNER: &str = "--- Mind Map Text Export ---";
const EXPORT_FOOTER: &str = "--- End of Export ---";

pub(super) fn print_outcome<T>(outcome: &Outcome<T>) {
    let message = outcome.message();
    match outcome.status() {
        Status::Success => println!("{}", message.green()),
        Status::NotFound | Status::AlreadyExists | Status::MaxDepthReached => {
            println!("{}", message.yellow())
        }
        Status::InvalidOperation | Status::Error => println!("{}", message.red()),
    }
}

pub(super) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn print_diagram(diagram: &str) {
    println!("{}", diagram);
}

pub(super) fn print_export(diagram: &str) {
    println!("{}", EXPORT_BANNER.bold());
    println!("{}", diagram);
    println!("{}", EXPORT_FOOTER.bold());
}

pub(super) fn print_search_hits(hits: &[SearchHit]) {
    print!("{}", format_search_hits(hits));
}

fn format_search_hits(hits: &[SearchHit]) -> String {
    let mut out = String::new();
    for hit in hits {
        out.push_str(&format!("- '{}' (ID: {})\n", hit.node.text, hit.node.id));
        if !hit.path.is_empty() {
            out.push_str(&format!("    Path: {}\n", hit.path_label()));
        }
    }
    out
}
