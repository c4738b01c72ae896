//! Line rendering: templates and decorators in one module, ANSI painters in the other.

mod color;
mod template;

pub use color::{Ansi, Identity, Paint, colorize};
pub use template::{
    Decorator, FormatTemplate, PREFIX_TOKEN, SUFFIX_TOKEN, Segment, format_line, substitute,
};
