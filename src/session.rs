use crate::command::Command;
use crate::domain::Polygon;
use crate::output::Sink;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Counters collected over one command session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub unknown: usize,
}

/// Execute every command line from `input` against `polygons`.
///
/// The first word of a line selects `AREA`, `MAX` or `MIN`; that command reads
/// its parameter from the rest of the line. Words after the parameter are
/// ignored. Blank lines produce no output.
pub fn run_session<R, W>(
    polygons: &[Polygon],
    input: R,
    sink: &mut Sink<W>,
) -> io::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };

        summary.commands += 1;
        match Command::from_name(name) {
            Some(command) => command.execute(polygons, &mut tokens, sink)?,
            None => {
                debug!(name, "unknown command");
                summary.unknown += 1;
                sink.write_invalid()?;
            }
        }
    }

    sink.flush()?;
    Ok(summary)
}
