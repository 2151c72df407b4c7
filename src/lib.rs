//! polystat - area and vertex-count queries over a collection of polygons

pub mod command;
pub mod config;
pub mod domain;
pub mod io;
pub mod output;
pub mod session;
pub mod stats;

pub use session::{SessionSummary, run_session};
