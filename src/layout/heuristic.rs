//! Position-code placement from per-line coordinate tables
//!
//! Used when a player has no grid cell. The formation decides how many
//! players share a line; the player's index within its line picks a slot.

use crate::formation::{self, Formation};

use super::types::{FieldPosition, Role};

/// Chooses a coordinate for the `index`-th player of a tactical line
///
/// `line_size` is the size the formation assigns to the role's line, or
/// `None` when that token of the formation was malformed.
pub trait LineSpread {
    fn slot(&self, role: Role, line_size: Option<u32>, index: usize) -> FieldPosition;

    /// Number of slots to spread a line over, given the formation's size for
    /// it and the number of roster players actually placed on it
    fn line_size(&self, formation_size: Option<u32>, _players: usize) -> Option<u32> {
        formation_size
    }
}

const fn p(x: f64, y: f64) -> FieldPosition {
    FieldPosition::new(x, y)
}

const DEFENDERS_2: [FieldPosition; 2] = [p(35.0, 75.0), p(65.0, 75.0)];
const DEFENDERS_3: [FieldPosition; 3] = [p(30.0, 75.0), p(50.0, 75.0), p(70.0, 75.0)];
const DEFENDERS_4: [FieldPosition; 4] = [p(20.0, 75.0), p(40.0, 75.0), p(60.0, 75.0), p(80.0, 75.0)];
const DEFENDERS_5: [FieldPosition; 5] = [
    p(15.0, 70.0),
    p(32.0, 75.0),
    p(50.0, 75.0),
    p(68.0, 75.0),
    p(85.0, 70.0),
];

const MIDFIELDERS_2: [FieldPosition; 2] = [p(35.0, 50.0), p(65.0, 50.0)];
const MIDFIELDERS_3: [FieldPosition; 3] = [p(30.0, 50.0), p(50.0, 50.0), p(70.0, 50.0)];
const MIDFIELDERS_4: [FieldPosition; 4] = [p(20.0, 50.0), p(40.0, 50.0), p(60.0, 50.0), p(80.0, 50.0)];
const MIDFIELDERS_5: [FieldPosition; 5] = [
    p(15.0, 50.0),
    p(32.0, 52.0),
    p(50.0, 55.0),
    p(68.0, 52.0),
    p(85.0, 50.0),
];

const FORWARDS_2: [FieldPosition; 2] = [p(35.0, 25.0), p(65.0, 25.0)];
const FORWARDS_3: [FieldPosition; 3] = [p(25.0, 25.0), p(50.0, 25.0), p(75.0, 25.0)];
const FORWARDS_4: [FieldPosition; 4] = [p(20.0, 25.0), p(40.0, 25.0), p(60.0, 25.0), p(80.0, 25.0)];
const FORWARDS_5: [FieldPosition; 5] = [
    p(15.0, 30.0),
    p(32.0, 25.0),
    p(50.0, 20.0),
    p(68.0, 25.0),
    p(85.0, 30.0),
];

/// Fixed slots for a role's line of `size` players, left to right
pub fn table(role: Role, size: u32) -> Option<&'static [FieldPosition]> {
    let slots: &'static [FieldPosition] = match (role, size) {
        (Role::Defender, 2) => &DEFENDERS_2,
        (Role::Defender, 3) => &DEFENDERS_3,
        (Role::Defender, 4) => &DEFENDERS_4,
        (Role::Defender, 5) => &DEFENDERS_5,
        (Role::Midfielder, 2) => &MIDFIELDERS_2,
        (Role::Midfielder, 3) => &MIDFIELDERS_3,
        (Role::Midfielder, 4) => &MIDFIELDERS_4,
        (Role::Midfielder, 5) => &MIDFIELDERS_5,
        (Role::Forward, 2) => &FORWARDS_2,
        (Role::Forward, 3) => &FORWARDS_3,
        (Role::Forward, 4) => &FORWARDS_4,
        (Role::Forward, 5) => &FORWARDS_5,
        _ => return None,
    };
    Some(slots)
}

/// Where the goalkeeper stands absent a grid cell
pub const GOALKEEPER_POSITION: FieldPosition = FieldPosition::new(50.0, 90.0);

/// Centre of a role's band, used when no slot table applies
pub fn band_center(role: Role) -> FieldPosition {
    FieldPosition::new(50.0, role.band_y())
}

/// Slots from the fixed tables; uncovered sizes stack on the band centre
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedSpread;

impl LineSpread for TabulatedSpread {
    fn slot(&self, role: Role, line_size: Option<u32>, index: usize) -> FieldPosition {
        if role == Role::Goalkeeper {
            return GOALKEEPER_POSITION;
        }
        match line_size.and_then(|size| table(role, size)) {
            Some(slots) => slots[index % slots.len()],
            None => band_center(role),
        }
    }
}

/// Fixed tables where they exist, even spacing across [15, 85] otherwise
///
/// A line holding more players than the formation gives it is widened to
/// the actual head count instead of wrapping onto occupied slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterpolatedSpread;

impl InterpolatedSpread {
    const LEFT: f64 = 15.0;
    const RIGHT: f64 = 85.0;
}

impl LineSpread for InterpolatedSpread {
    fn slot(&self, role: Role, line_size: Option<u32>, index: usize) -> FieldPosition {
        if role == Role::Goalkeeper {
            return GOALKEEPER_POSITION;
        }
        let size = match line_size {
            Some(size) if size > 0 => size,
            _ => return band_center(role),
        };
        if let Some(slots) = table(role, size) {
            return slots[index % slots.len()];
        }
        if size == 1 {
            return band_center(role);
        }

        let i = (index % size as usize) as f64;
        let step = (Self::RIGHT - Self::LEFT) / f64::from(size - 1);
        FieldPosition::new(Self::LEFT + step * i, role.band_y())
    }

    fn line_size(&self, formation_size: Option<u32>, players: usize) -> Option<u32> {
        match (formation_size, u32::try_from(players)) {
            (Some(size), Ok(players)) if players > size => Some(players),
            (size, _) => size,
        }
    }
}

/// Place a coded player using the given formation and the fixed tables.
///
/// Goalkeeper codes short-circuit to (50, 90). Codes that name no role
/// land on the pitch centre.
///
/// # Example
///
/// ```rust
/// use lineup_layout::layout::{position_to_field, FieldPosition};
///
/// assert_eq!(position_to_field("RB", 3, "4-3-3"), FieldPosition::new(80.0, 75.0));
/// assert_eq!(position_to_field("ST", 1, "4-3-3"), FieldPosition::new(50.0, 25.0));
/// ```
pub fn position_to_field(
    position_code: &str,
    index_within_group: usize,
    formation: &str,
) -> FieldPosition {
    match Role::from_code(position_code) {
        Some(role) => place(
            &TabulatedSpread,
            role,
            index_within_group,
            0,
            &formation::parse(formation),
        ),
        None => FieldPosition::center(),
    }
}

/// Place the `index`-th of `players` players of `role` within an already
/// parsed formation
pub fn place(
    spread: &dyn LineSpread,
    role: Role,
    index: usize,
    players: usize,
    formation: &Formation,
) -> FieldPosition {
    let formation_size = role.line_index().map_or(Some(0), |line| formation.line(line));
    spread.slot(role, spread.line_size(formation_size, players), index)
}
