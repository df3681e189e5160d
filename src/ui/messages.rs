use std::fmt;
use std::io::IsTerminal;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Status lines go to stderr so stdout only carries results.
fn status(color: &str, icon: &str, msg: impl fmt::Display) {
    if std::io::stderr().is_terminal() {
        eprintln!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    } else {
        eprintln!("{} {}", icon, msg);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    status(FG_BLUE, ICON_INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    status(FG_GREEN, ICON_OK, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    status(FG_YELLOW, ICON_WARN, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    status(FG_RED, ICON_ERR, msg);
}
