//! Styled terminal output for CLI commands.
//!
//! Wraps `termcolor` and honors the `NO_COLOR` environment variable and
//! the `--color` flag.

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Resolve `ColorChoice` from the `--color` flag and environment.
///
/// `NO_COLOR` takes priority over the flag; anything other than
/// `always`/`never` auto-detects.
pub fn resolve_color_choice(flag: &str) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match flag {
        "always" => ColorChoice::Always,
        "never" => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

/// Styled writer over stdout and stderr.
pub struct StyledOutput {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl StyledOutput {
    /// Create a styled writer with the given color choice.
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(choice),
        }
    }

    /// Bold heading line.
    pub fn heading(&mut self, text: &str) {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        let _ = self.stdout.set_color(&spec);
        let _ = writeln!(self.stdout, "{}", text);
        let _ = self.stdout.reset();
    }

    /// Aligned label/value row with a cyan label.
    pub fn field(&mut self, label: &str, value: &str) {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        let _ = self.stdout.set_color(&spec);
        let _ = write!(self.stdout, "  {:<12}", label);
        let _ = self.stdout.reset();
        let _ = writeln!(self.stdout, "{}", value);
    }

    /// Plain line to stdout.
    pub fn line(&mut self, text: &str) {
        let _ = writeln!(self.stdout, "{}", text);
    }

    /// Blank line.
    pub fn newline(&mut self) {
        let _ = writeln!(self.stdout);
    }

    /// Error line to stderr with a red bold prefix.
    pub fn error(&mut self, text: &str) {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        let _ = self.stderr.set_color(&spec);
        let _ = write!(self.stderr, "error");
        let _ = self.stderr.reset();
        let _ = writeln!(self.stderr, ": {}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the NO_COLOR manipulation cannot race a parallel case
    #[test]
    fn test_resolve_color_choice() {
        let saved = std::env::var_os("NO_COLOR");
        std::env::remove_var("NO_COLOR");

        assert_eq!(resolve_color_choice("always"), ColorChoice::Always);
        assert_eq!(resolve_color_choice("never"), ColorChoice::Never);
        assert_eq!(resolve_color_choice("auto"), ColorChoice::Auto);
        // Unrecognized values auto-detect rather than erroring
        assert_eq!(resolve_color_choice("sometimes"), ColorChoice::Auto);

        // NO_COLOR wins over the flag
        std::env::set_var("NO_COLOR", "1");
        assert_eq!(resolve_color_choice("always"), ColorChoice::Never);
        assert_eq!(resolve_color_choice("auto"), ColorChoice::Never);

        match saved {
            Some(value) => std::env::set_var("NO_COLOR", value),
            None => std::env::remove_var("NO_COLOR"),
        }
    }
}
