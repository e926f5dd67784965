//! ANSI color helpers for CLI output.

use std::io::IsTerminal;

/// Applies ANSI styles when enabled and passes text through untouched otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Palette { enabled }
    }

    /// Plain text, no escapes.
    pub fn plain() -> Self {
        Palette { enabled: false }
    }

    /// Color only when requested, `NO_COLOR` is unset, and stdout is a terminal.
    pub fn for_stdout(requested: bool) -> Self {
        let allowed = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        Palette::new(requested && allowed)
    }

    /// Same as [`Palette::for_stdout`] but checks stderr.
    pub fn for_stderr(requested: bool) -> Self {
        let allowed = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        Palette::new(requested && allowed)
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }

    /// Format text in green.
    pub fn green(&self, s: &str) -> String {
        self.paint("32", s)
    }

    /// Format text in red.
    pub fn red(&self, s: &str) -> String {
        self.paint("31", s)
    }

    /// Format text in cyan.
    pub fn cyan(&self, s: &str) -> String {
        self.paint("36", s)
    }

    /// Format text in bold.
    pub fn bold(&self, s: &str) -> String {
        self.paint("1", s)
    }

    /// Format text in gray.
    pub fn gray(&self, s: &str) -> String {
        self.paint("90", s)
    }
}
