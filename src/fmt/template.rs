//! Per-level line templates. `%s` marks where the message goes; the
//! `{{suffix}}` and `{{prefix}}` tokens are filled by decorators at render time
//! so a template never hardcodes a clock or request id.

/// Replaced with the suffix decorator's output.
pub const SUFFIX_TOKEN: &str = "{{suffix}}";
/// Replaced with the prefix decorator's output.
pub const PREFIX_TOKEN: &str = "{{prefix}}";

/// Produces the dynamic text for a decorator token, typically the current time.
pub trait Decorator: Send + Sync {
    fn decorate(&self) -> String;
}

impl<F> Decorator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn decorate(&self) -> String {
        self()
    }
}

/// Parsed once, rendered on every emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Copied verbatim. Decorator tokens live here and are substituted after interpolation.
    Literal(String),
    /// `%s` or `%v`.
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// Splits `"[warn] %s"` into literal and value segments. `%%` becomes a
    /// literal `%`; any other `%x` pair is kept as written.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                current.push(c);
                continue;
            }

            match chars.peek() {
                Some('s' | 'v') => {
                    chars.next();
                    if !current.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(Segment::Value);
                }
                Some('%') => {
                    chars.next();
                    current.push('%');
                }
                _ => current.push('%'),
            }
        }

        if !current.is_empty() {
            segments.push(Segment::Literal(current));
        }

        Self {
            source: template.to_string(),
            segments,
        }
    }

    /// The generic template used for levels without one: `"[<name>] %s"`.
    #[must_use]
    pub fn generic(name: &str) -> Self {
        Self::parse(&format!("[{name}] %s"))
    }

    /// The string this template was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn has_value_slot(&self) -> bool {
        self.segments.iter().any(|s| *s == Segment::Value)
    }

    /// Interpolates `value` into every value slot. A template without a slot
    /// gets the value appended after a space so the message is never lost.
    #[must_use]
    pub fn render(&self, value: &str) -> String {
        let mut result = String::with_capacity(self.source.len() + value.len());

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => result.push_str(s),
                Segment::Value => result.push_str(value),
            }
        }

        if !self.has_value_slot() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(value);
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse("%s")
    }
}

impl From<&str> for FormatTemplate {
    fn from(template: &str) -> Self {
        Self::parse(template)
    }
}

/// Replaces every occurrence of `token` with a single `decorator` result. The
/// decorator is not called when the token is absent.
#[must_use]
pub fn substitute(line: String, token: &str, decorator: &dyn Decorator) -> String {
    if line.contains(token) {
        line.replace(token, &decorator.decorate())
    } else {
        line
    }
}

/// Full formatter: interpolate, substitute `{{suffix}}` then `{{prefix}}`, and
/// terminate with a newline unless the template itself ends in one. A message
/// ending in `\n` still gets its own terminator.
#[must_use]
pub fn format_line(
    template: &FormatTemplate,
    message: &str,
    suffix: &dyn Decorator,
    prefix: &dyn Decorator,
) -> String {
    let line = template.render(message);
    let line = substitute(line, SUFFIX_TOKEN, suffix);
    let mut line = substitute(line, PREFIX_TOKEN, prefix);
    let terminated = template.has_value_slot() && template.source().ends_with('\n');
    if !terminated {
        line.push('\n');
    }
    line
}
