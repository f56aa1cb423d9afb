//! Layout engine for computing player positions on the pitch
//!
//! This module takes a roster and a formation label and computes a
//! [`FieldPosition`] for every player, producing [`ArrangedPlayer`]s in
//! roster order.

pub mod config;
pub mod engine;
pub mod grid;
pub mod heuristic;
pub mod trace;
pub mod types;

pub use config::{ArrangeConfig, SpreadStrategy};
pub use engine::{arrange, arrange_traced, arrange_with_config, GroupCounters};
pub use grid::{grid_to_field, parse_grid, GridCell};
pub use heuristic::{position_to_field, InterpolatedSpread, LineSpread, TabulatedSpread};
pub use trace::{LogTrace, NoTrace, PlacementTrace, TraceSink};
pub use types::*;
