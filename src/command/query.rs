use crate::domain::{MIN_VERTICES, Polygon};
use crate::stats::{self, CommandError, Stat};

/// Parameter accepted by the `AREA` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaQuery {
    Even,
    Odd,
    Mean,
    /// Only polygons with exactly this many vertices
    Vertices(usize),
}

/// Parameter accepted by the `MAX` and `MIN` commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Area,
    Vertexes,
}

const AREA_TABLE: &[(&str, AreaQuery)] = &[
    ("EVEN", AreaQuery::Even),
    ("ODD", AreaQuery::Odd),
    ("MEAN", AreaQuery::Mean),
];

const EXTREMUM_TABLE: &[(&str, Extremum)] =
    &[("AREA", Extremum::Area), ("VERTEXES", Extremum::Vertexes)];

fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, value)| value)
}

/// Vertex count written as plain decimal digits, at least [`MIN_VERTICES`]
fn parse_vertex_count(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token
        .parse::<usize>()
        .ok()
        .filter(|&count| count >= MIN_VERTICES)
}

impl AreaQuery {
    /// Keyword lookup is case-sensitive; a miss falls back to a vertex count
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        lookup(AREA_TABLE, token)
            .or_else(|| parse_vertex_count(token).map(AreaQuery::Vertices))
            .ok_or_else(|| CommandError::UnknownCommand(token.to_string()))
    }

    pub fn evaluate(self, polygons: &[Polygon]) -> Result<Stat, CommandError> {
        match self {
            AreaQuery::Even => Ok(stats::area_even(polygons)),
            AreaQuery::Odd => Ok(stats::area_odd(polygons)),
            AreaQuery::Mean => stats::area_mean(polygons),
            AreaQuery::Vertices(count) => Ok(stats::area_with_vertices(polygons, count)),
        }
    }
}

impl Extremum {
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        lookup(EXTREMUM_TABLE, token)
            .ok_or_else(|| CommandError::UnknownCommand(token.to_string()))
    }

    pub fn max(self, polygons: &[Polygon]) -> Result<Stat, CommandError> {
        match self {
            Extremum::Area => stats::max_area(polygons),
            Extremum::Vertexes => stats::max_vertexes(polygons),
        }
    }

    pub fn min(self, polygons: &[Polygon]) -> Result<Stat, CommandError> {
        match self {
            Extremum::Area => stats::min_area(polygons),
            Extremum::Vertexes => stats::min_vertexes(polygons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_keywords() {
        assert_eq!(AreaQuery::parse("EVEN"), Ok(AreaQuery::Even));
        assert_eq!(AreaQuery::parse("ODD"), Ok(AreaQuery::Odd));
        assert_eq!(AreaQuery::parse("MEAN"), Ok(AreaQuery::Mean));
    }

    #[test]
    fn test_area_keywords_case_sensitive() {
        assert_eq!(
            AreaQuery::parse("even"),
            Err(CommandError::UnknownCommand("even".to_string()))
        );
    }

    #[test]
    fn test_area_vertex_count_fallback() {
        assert_eq!(AreaQuery::parse("3"), Ok(AreaQuery::Vertices(3)));
        assert_eq!(AreaQuery::parse("12"), Ok(AreaQuery::Vertices(12)));
        assert_eq!(AreaQuery::parse("007"), Ok(AreaQuery::Vertices(7)));
    }

    #[test]
    fn test_area_rejects_small_or_malformed_counts() {
        for token in ["0", "1", "2", "-4", "+4", "4x", "3.0", "", "99999999999999999999999"] {
            assert!(AreaQuery::parse(token).is_err(), "{:?} accepted", token);
        }
    }

    #[test]
    fn test_extremum_keywords() {
        assert_eq!(Extremum::parse("AREA"), Ok(Extremum::Area));
        assert_eq!(Extremum::parse("VERTEXES"), Ok(Extremum::Vertexes));
        assert!(Extremum::parse("AREAS").is_err());
        assert!(Extremum::parse("5").is_err());
    }
}
