//! Placeholder rendering for log messages.
//!
//! `{}` is replaced by the next argument, `{{` and `}}` are literal braces.
//! Placeholders without a matching argument stay as `{}`; surplus arguments
//! are ignored.

use std::fmt::Write;

use crate::logger::Arg;

/// Render `template` with `args` substituted in order.
pub fn render(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) => {
                chars.next();
                out.push('{');
            }
            ('}', Some('}')) => {
                chars.next();
                out.push('}');
            }
            ('{', Some('}')) => {
                chars.next();
                match args.next() {
                    // Writing into a String cannot fail.
                    Some(arg) => {
                        let _ = write!(out, "{}", arg);
                    }
                    None => out.push_str("{}"),
                }
            }
            _ => out.push(c),
        }
    }

    out
}
