pub mod parser;

pub use parser::{
    LoadError, LoadMode, LoadReport, ParseError, load_polygons, parse_polygon, read_polygons,
};
