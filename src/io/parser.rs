use crate::domain::{Point, Polygon, PolygonError};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing vertex count")]
    MissingCount,
    #[error("invalid vertex count: {0:?}")]
    BadCount(String),
    #[error("invalid point: {0:?}")]
    BadPoint(String),
    #[error("declared {declared} vertices but found {found}")]
    CountMismatch { declared: usize, found: usize },
    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// How to treat lines that do not describe a polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Skip bad lines and keep going
    #[default]
    Lenient,
    /// Stop at the first bad line
    Strict,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Polygons read from a source plus the number of lines that were dropped
#[derive(Debug, Default)]
pub struct LoadReport {
    pub polygons: Vec<Polygon>,
    pub skipped: usize,
}

/// Parse one `(x;y)` token
fn parse_point(token: &str) -> Result<Point, ParseError> {
    let bad = || ParseError::BadPoint(token.to_string());

    let inner = token
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(bad)?;
    let (x, y) = inner.split_once(';').ok_or_else(bad)?;

    let x: i32 = x.parse().map_err(|_| bad())?;
    let y: i32 = y.parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

/// Parse a polygon line of the form `N (x1;y1) (x2;y2) ... (xN;yN)`
pub fn parse_polygon(line: &str) -> Result<Polygon, ParseError> {
    let mut tokens = line.split_whitespace();

    let count_token = tokens.next().ok_or(ParseError::MissingCount)?;
    let declared: usize = count_token
        .parse()
        .map_err(|_| ParseError::BadCount(count_token.to_string()))?;

    let points = tokens.map(parse_point).collect::<Result<Vec<_>, _>>()?;
    if points.len() != declared {
        return Err(ParseError::CountMismatch {
            declared,
            found: points.len(),
        });
    }

    Ok(Polygon::new(points)?)
}

/// Read one polygon per line from `reader`, skipping blank lines
pub fn read_polygons<R: BufRead>(reader: R, mode: LoadMode) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_polygon(&line) {
            Ok(polygon) => report.polygons.push(polygon),
            Err(source) if mode == LoadMode::Strict => {
                return Err(LoadError::Line {
                    line: index + 1,
                    source,
                });
            }
            Err(err) => {
                warn!(line = index + 1, %err, "skipping polygon");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Load polygons from the file at `path`
pub fn load_polygons(path: &Path, mode: LoadMode) -> Result<LoadReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open polygon file: {}", path.display()))?;
    let report = read_polygons(BufReader::new(file), mode)
        .with_context(|| format!("Failed to read polygons from {}", path.display()))?;

    debug!(
        loaded = report.polygons.len(),
        skipped = report.skipped,
        "loaded polygons from {}",
        path.display()
    );
    Ok(report)
}
