//! Shared terminal formatting: colors, symbols, quiet/json switches.

use std::io::IsTerminal;

/// Whether ANSI color should be emitted on stdout.
pub fn color_enabled() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() || std::env::var_os("MSCOUT_NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    pub fn plain() -> Self {
        Self { use_color: false }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn ok_sym(&self) -> String {
        self.paint(GREEN, "\u{2713}")
    }

    pub fn fail_sym(&self) -> String {
        self.paint(RED, "\u{2717}")
    }

    pub fn green(&self, s: &str) -> String {
        self.paint(GREEN, s)
    }

    pub fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    pub fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    pub fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    /// Score colored by outreach bucket: red for targets, green for mature sites.
    pub fn score(&self, score: u8) -> String {
        let text = score.to_string();
        match score {
            0..=40 => self.red(&text),
            41..=55 => self.yellow(&text),
            _ => self.green(&text),
        }
    }
}

/// Print the tool name and version.
pub fn print_header(s: &Styled) {
    eprintln!(
        "  {} {}",
        s.bold("Maturity Scout"),
        s.dim(&format!("v{}", env!("CARGO_PKG_VERSION")))
    );
    eprintln!();
}

pub fn print_section(s: &Styled, title: &str) {
    println!("  {}", s.bold(title));
}

/// One label/value line, aligned.
pub fn print_field(label: &str, value: &str) {
    println!("    {label:<18} {value}");
}

/// Text bar of `points` out of `max`, `width` cells wide.
pub fn meter(points: u8, max: u8, width: usize) -> String {
    if max == 0 {
        return "\u{2591}".repeat(width);
    }
    let filled = usize::from(points) * width / usize::from(max);
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

pub fn yes_no(s: &Styled, flag: bool) -> String {
    if flag {
        s.green("yes")
    } else {
        s.dim("no")
    }
}

pub fn is_quiet() -> bool {
    std::env::var_os("MSCOUT_QUIET").is_some()
}

pub fn is_verbose() -> bool {
    std::env::var_os("MSCOUT_VERBOSE").is_some()
}

pub fn is_json() -> bool {
    std::env::var_os("MSCOUT_JSON").is_some()
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_widths() {
        assert_eq!(meter(0, 10, 10), "\u{2591}".repeat(10));
        assert_eq!(meter(10, 10, 10), "\u{2588}".repeat(10));
        assert_eq!(meter(5, 10, 4).chars().count(), 4);
    }

    #[test]
    fn test_plain_has_no_escapes() {
        let s = Styled::plain();
        assert_eq!(s.red("x"), "x");
        assert_eq!(s.score(90), "90");
    }
}
