//! Command dispatch
//!
//! Each entry point reads one parameter token, resolves it against a static
//! keyword table and writes exactly one line: the statistic, or
//! `<INVALID COMMAND>` when the parameter is unknown or the statistic is
//! undefined for the collection.

pub mod query;

pub use query::{AreaQuery, Extremum};

use crate::domain::Polygon;
use crate::output::Sink;
use crate::stats::{CommandError, Stat};
use std::io::{self, Write};
use tracing::debug;

/// Top-level command named by the first word of a command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Area,
    Max,
    Min,
}

const COMMAND_TABLE: &[(&str, Command)] = &[
    ("AREA", Command::Area),
    ("MAX", Command::Max),
    ("MIN", Command::Min),
];

impl Command {
    pub fn from_name(name: &str) -> Option<Command> {
        COMMAND_TABLE
            .iter()
            .find(|(keyword, _)| *keyword == name)
            .map(|&(_, command)| command)
    }

    /// Read this command's parameter from `tokens` and write its result line
    pub fn execute<'t, I, W>(
        self,
        polygons: &[Polygon],
        tokens: &mut I,
        sink: &mut Sink<W>,
    ) -> io::Result<()>
    where
        I: Iterator<Item = &'t str>,
        W: Write,
    {
        match self {
            Command::Area => area(polygons, tokens, sink),
            Command::Max => max(polygons, tokens, sink),
            Command::Min => min(polygons, tokens, sink),
        }
    }
}

pub fn area<'t, I, W>(polygons: &[Polygon], tokens: &mut I, sink: &mut Sink<W>) -> io::Result<()>
where
    I: Iterator<Item = &'t str>,
    W: Write,
{
    let outcome = next_parameter(tokens)
        .and_then(AreaQuery::parse)
        .and_then(|query| {
            debug!(?query, "AREA");
            query.evaluate(polygons)
        });
    report(outcome, sink)
}

pub fn max<'t, I, W>(polygons: &[Polygon], tokens: &mut I, sink: &mut Sink<W>) -> io::Result<()>
where
    I: Iterator<Item = &'t str>,
    W: Write,
{
    let outcome = next_parameter(tokens)
        .and_then(Extremum::parse)
        .and_then(|extremum| {
            debug!(?extremum, "MAX");
            extremum.max(polygons)
        });
    report(outcome, sink)
}

pub fn min<'t, I, W>(polygons: &[Polygon], tokens: &mut I, sink: &mut Sink<W>) -> io::Result<()>
where
    I: Iterator<Item = &'t str>,
    W: Write,
{
    let outcome = next_parameter(tokens)
        .and_then(Extremum::parse)
        .and_then(|extremum| {
            debug!(?extremum, "MIN");
            extremum.min(polygons)
        });
    report(outcome, sink)
}

fn next_parameter<'t, I>(tokens: &mut I) -> Result<&'t str, CommandError>
where
    I: Iterator<Item = &'t str>,
{
    tokens
        .next()
        .ok_or_else(|| CommandError::UnknownCommand(String::new()))
}

/// Unknown parameters and empty collections are reported identically
fn report<W: Write>(outcome: Result<Stat, CommandError>, sink: &mut Sink<W>) -> io::Result<()> {
    match outcome {
        Ok(stat) => stat.write_to(sink),
        Err(err) => {
            debug!(%err, "command rejected");
            sink.write_invalid()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Polygon> {
        vec![
            Polygon::try_from(vec![(0, 0), (4, 0), (0, 3)]).unwrap(),
            Polygon::try_from(vec![(0, 0), (2, 0), (2, 2), (0, 2)]).unwrap(),
        ]
    }

    fn run(command: Command, polygons: &[Polygon], line: &str) -> String {
        let mut sink = Sink::new(Vec::new());
        let mut tokens = line.split_whitespace();
        command.execute(polygons, &mut tokens, &mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_area_commands() {
        let polygons = sample();
        assert_eq!(run(Command::Area, &polygons, "EVEN"), "4.0\n");
        assert_eq!(run(Command::Area, &polygons, "ODD"), "6.0\n");
        assert_eq!(run(Command::Area, &polygons, "MEAN"), "5.0\n");
        assert_eq!(run(Command::Area, &polygons, "3"), "6.0\n");
        assert_eq!(run(Command::Area, &polygons, "4"), "4.0\n");
        assert_eq!(run(Command::Area, &polygons, "5"), "0.0\n");
    }

    #[test]
    fn test_area_invalid_parameters() {
        let polygons = sample();
        for param in ["2", "1", "MEDIAN", "even", ""] {
            assert_eq!(
                run(Command::Area, &polygons, param),
                "<INVALID COMMAND>\n",
                "parameter {:?}",
                param
            );
        }
    }

    #[test]
    fn test_extremum_commands() {
        let polygons = sample();
        assert_eq!(run(Command::Max, &polygons, "AREA"), "6.0\n");
        assert_eq!(run(Command::Max, &polygons, "VERTEXES"), "4\n");
        assert_eq!(run(Command::Min, &polygons, "AREA"), "4.0\n");
        assert_eq!(run(Command::Min, &polygons, "VERTEXES"), "3\n");
        assert_eq!(run(Command::Max, &polygons, "AREAS"), "<INVALID COMMAND>\n");
        assert_eq!(run(Command::Min, &polygons, "4"), "<INVALID COMMAND>\n");
    }

    #[test]
    fn test_empty_collection_reports_invalid() {
        assert_eq!(run(Command::Area, &[], "MEAN"), "<INVALID COMMAND>\n");
        assert_eq!(run(Command::Max, &[], "AREA"), "<INVALID COMMAND>\n");
        assert_eq!(run(Command::Min, &[], "VERTEXES"), "<INVALID COMMAND>\n");
        assert_eq!(run(Command::Area, &[], "EVEN"), "0.0\n");
        assert_eq!(run(Command::Area, &[], "7"), "0.0\n");
    }

    #[test]
    fn test_reads_single_token() {
        let polygons = sample();
        let mut sink = Sink::new(Vec::new());
        let mut tokens = "ODD EVEN".split_whitespace();
        area(&polygons, &mut tokens, &mut sink).unwrap();
        assert_eq!(tokens.next(), Some("EVEN"));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::from_name("AREA"), Some(Command::Area));
        assert_eq!(Command::from_name("MAX"), Some(Command::Max));
        assert_eq!(Command::from_name("MIN"), Some(Command::Min));
        assert_eq!(Command::from_name("Max"), None);
    }
}
