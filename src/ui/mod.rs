//! Styled terminal output.
//!
//! Warnings and errors go to stderr; status lines go to stdout. Multi-line
//! remediation text keeps its own layout, with continuation lines indented
//! under the marker.

use console::style;

/// Display a success line.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Display an informational line.
pub fn note(msg: &str) {
    println!("{} {}", style("•").dim(), msg);
}

/// Display a warning on the diagnostic stream.
pub fn warn(msg: &str) {
    print_prefixed(&style("!").yellow().bold().to_string(), msg);
}

/// Display an error on the diagnostic stream.
pub fn error(msg: &str) {
    print_prefixed(&style("✗").red().bold().to_string(), msg);
}

fn print_prefixed(prefix: &str, msg: &str) {
    let mut lines = msg.lines();
    if let Some(first) = lines.next() {
        eprintln!("{} {}", prefix, first);
    }
    for line in lines {
        eprintln!("  {}", line);
    }
}
