//! ANSI painters. A painter is a pure `line -> line` transform, so a level's
//! color can be a palette entry or any closure the caller supplies.

use std::fmt;

/// Wraps a rendered line for display. Implementations must be pure: the same
/// input always produces the same output and nothing else is touched.
pub trait Paint: Send + Sync {
    fn paint(&self, line: &str) -> String;
}

impl<F> Paint for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn paint(&self, line: &str) -> String {
        self(line)
    }
}

/// Returns the line untouched. Used for levels nobody gave a color.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Paint for Identity {
    fn paint(&self, line: &str) -> String {
        line.to_string()
    }
}

/// One SGR parameter string, e.g. `31` or `1;31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ansi {
    code: &'static str,
}

impl Ansi {
    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    pub const RED: Self = Self::new("31");
    pub const GREEN: Self = Self::new("32");
    pub const YELLOW: Self = Self::new("33");
    pub const BLUE: Self = Self::new("34");
    pub const PURPLE: Self = Self::new("35");
    pub const CYAN: Self = Self::new("36");
    pub const WHITE: Self = Self::new("37");
    pub const RED_BOLD: Self = Self::new("1;31");
    pub const YELLOW_BOLD: Self = Self::new("1;33");
    pub const PURPLE_BOLD: Self = Self::new("1;35");

    /// Every palette entry with the name config files use for it.
    pub const PALETTE: &'static [(&'static str, Self)] = &[
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("yellow", Self::YELLOW),
        ("blue", Self::BLUE),
        ("purple", Self::PURPLE),
        ("cyan", Self::CYAN),
        ("white", Self::WHITE),
        ("red_bold", Self::RED_BOLD),
        ("yellow_bold", Self::YELLOW_BOLD),
        ("purple_bold", Self::PURPLE_BOLD),
    ];

    /// `const` so palette entries can be associated constants.
    #[must_use]
    pub const fn new(code: &'static str) -> Self {
        Self { code }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        self.code
    }

    /// The escape that switches this style on.
    #[must_use]
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.code)
    }

    /// Looks up a palette entry; accepts `-` or `_` separators and any case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace('-', "_");
        Self::PALETTE
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, color)| *color)
    }
}

impl Paint for Ansi {
    fn paint(&self, line: &str) -> String {
        colorize(line, *self)
    }
}

impl fmt::Display for Ansi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::PALETTE.iter().find(|(_, c)| c == self) {
            Some((name, _)) => f.write_str(name),
            None => write!(f, "ansi({})", self.code),
        }
    }
}

/// Wraps `text` in the style's escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Ansi) -> String {
    let code = color.code;
    let reset = Ansi::RESET;
    format!("\x1b[{code}m{text}{reset}")
}
