//! Statistic computations over a polygon collection
//!
//! Sums over a filtered subset are defined for an empty subset and yield
//! `0.0`. Means, maxima and minima are not, and return
//! [`CommandError::EmptyCollection`] instead of a misleading number.

pub mod aggregate;

pub use aggregate::sum_areas;

use crate::domain::Polygon;
use crate::output::Sink;
use std::io::{self, Write};
use thiserror::Error;

/// Decimals printed for area results
pub const AREA_PRECISION: usize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("statistic is undefined for an empty polygon collection")]
    EmptyCollection,
    #[error("unknown command parameter: {0:?}")]
    UnknownCommand(String),
}

/// Result of one statistic command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stat {
    Area(f64),
    Count(usize),
}

impl Stat {
    /// Write the value as one line: areas in fixed notation, counts as integers
    pub fn write_to<W: Write>(&self, sink: &mut Sink<W>) -> io::Result<()> {
        let mut out = sink.guard();
        match *self {
            Stat::Area(area) => {
                out.set_fixed(AREA_PRECISION);
                out.write_real(area)?;
            }
            Stat::Count(count) => out.write_count(count)?,
        }
        out.newline()
    }
}

pub fn area_even(polygons: &[Polygon]) -> Stat {
    Stat::Area(sum_areas(polygons.iter().filter(|p| p.has_even_vertices())))
}

pub fn area_odd(polygons: &[Polygon]) -> Stat {
    Stat::Area(sum_areas(polygons.iter().filter(|p| !p.has_even_vertices())))
}

pub fn area_mean(polygons: &[Polygon]) -> Result<Stat, CommandError> {
    if polygons.is_empty() {
        return Err(CommandError::EmptyCollection);
    }
    Ok(Stat::Area(sum_areas(polygons) / polygons.len() as f64))
}

/// Total area of the polygons with exactly `vertices` points
pub fn area_with_vertices(polygons: &[Polygon], vertices: usize) -> Stat {
    Stat::Area(sum_areas(
        polygons.iter().filter(|p| p.vertex_count() == vertices),
    ))
}

pub fn max_area(polygons: &[Polygon]) -> Result<Stat, CommandError> {
    polygons
        .iter()
        .map(Polygon::area)
        .max_by(f64::total_cmp)
        .map(Stat::Area)
        .ok_or(CommandError::EmptyCollection)
}

pub fn min_area(polygons: &[Polygon]) -> Result<Stat, CommandError> {
    polygons
        .iter()
        .map(Polygon::area)
        .min_by(f64::total_cmp)
        .map(Stat::Area)
        .ok_or(CommandError::EmptyCollection)
}

pub fn max_vertexes(polygons: &[Polygon]) -> Result<Stat, CommandError> {
    polygons
        .iter()
        .map(Polygon::vertex_count)
        .max()
        .map(Stat::Count)
        .ok_or(CommandError::EmptyCollection)
}

pub fn min_vertexes(polygons: &[Polygon]) -> Result<Stat, CommandError> {
    polygons
        .iter()
        .map(Polygon::vertex_count)
        .min()
        .map(Stat::Count)
        .ok_or(CommandError::EmptyCollection)
}
