//! Provider grid cells ("row:col") to pitch coordinates
//!
//! Rows count from the goalkeeper forward, columns from the left touchline.
//! The mapping is a pure table lookup and knows nothing about formations.

use super::types::FieldPosition;

/// A parsed "row:col" cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
}

impl GridCell {
    pub fn to_field(self) -> FieldPosition {
        FieldPosition::new(column_x(self.col), row_y(self.row))
    }
}

/// Parse a "row:col" cell; any other shape yields `None`.
pub fn parse_grid(grid: &str) -> Option<GridCell> {
    let mut parts = grid.split(':');
    let row = parts.next()?.trim().parse().ok()?;
    let col = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(GridCell { row, col })
}

/// Map a grid cell to a pitch coordinate, centering on anything unparseable.
///
/// # Example
///
/// ```rust
/// use lineup_layout::layout::{grid_to_field, FieldPosition};
///
/// assert_eq!(grid_to_field("1:1"), FieldPosition::new(15.0, 90.0));
/// assert_eq!(grid_to_field("not a cell"), FieldPosition::center());
/// ```
pub fn grid_to_field(grid: &str) -> FieldPosition {
    parse_grid(grid)
        .map(GridCell::to_field)
        .unwrap_or_else(FieldPosition::center)
}

/// Lateral position of a grid column; columns outside 1..=5 sit in the middle
pub fn column_x(col: i32) -> f64 {
    match col {
        1 => 15.0,
        2 => 35.0,
        3 => 50.0,
        4 => 65.0,
        5 => 85.0,
        _ => 50.0,
    }
}

/// Depth of a grid row: goalkeeper, back line, second back line, holding
/// midfield, attacking midfield, wide forwards, striker
pub fn row_y(row: i32) -> f64 {
    match row {
        1 => 90.0,
        2 => 75.0,
        3 => 70.0,
        4 => 55.0,
        5 => 45.0,
        6 => 30.0,
        7 => 20.0,
        _ => 50.0,
    }
}
