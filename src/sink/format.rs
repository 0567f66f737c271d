//! Line formats shared by the writer-backed sinks.

use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::logger::message::render;
use crate::logger::{Arg, Cause};
use crate::sink::Level;

/// How a record is laid out on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFormat {
    /// `2026-01-01T00:00:00.000Z INFO  app - message`
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: String,
    level: &'static str,
    logger: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

/// Write one rendered record followed by a newline.
///
/// A record is always exactly one line; the cause chain is joined with `": "`.
pub(crate) fn write_record(
    out: &mut dyn Write,
    format: LineFormat,
    logger: &str,
    level: Level,
    message: &str,
    cause: Option<Cause<'_>>,
    args: &[Arg<'_>],
) -> io::Result<()> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let text = render(message, args);

    match format {
        LineFormat::Plain => {
            write!(out, "{} {:<5} {} - {}", timestamp, level, logger, text)?;
            if let Some(cause) = cause {
                for source in cause_chain(cause) {
                    write!(out, ": {}", source)?;
                }
            }
            writeln!(out)
        }
        LineFormat::Json => {
            let line = JsonLine {
                timestamp,
                level: level.as_str(),
                logger,
                message: text,
                cause: cause.map(|c| cause_chain(c).join(": ")),
            };
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)
        }
    }
}

/// The cause followed by each of its `source()`s.
fn cause_chain(cause: Cause<'_>) -> Vec<String> {
    let mut chain = vec![cause.to_string()];
    let mut current = cause.source();
    while let Some(source) = current {
        chain.push(source.to_string());
        current = source.source();
    }
    chain
}
