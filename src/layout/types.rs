//! Core types for lineup arrangement

use serde::{Deserialize, Serialize};

/// A normalized pitch coordinate, as percentages of the field
///
/// `x` runs from the left touchline (0) to the right touchline (100);
/// `y` runs from the attacking line (0) back to the goalkeeper's own line (100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPosition {
    pub x: f64,
    pub y: f64,
}

impl FieldPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The middle of the pitch
    pub const fn center() -> Self {
        Self::new(50.0, 50.0)
    }

    /// Clamp both coordinates into `[0, 100]`; NaN becomes 50
    pub fn clamped(self) -> Self {
        fn clamp(v: f64) -> f64 {
            if v.is_nan() {
                50.0
            } else {
                v.clamp(0.0, 100.0)
            }
        }
        Self::new(clamp(self.x), clamp(self.y))
    }

    /// Whether both coordinates lie in `[0, 100]`
    pub fn is_on_pitch(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

impl Default for FieldPosition {
    fn default() -> Self {
        Self::center()
    }
}

/// A squad member as delivered by the match-data provider
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Free-text position code such as "G", "LB", "CM" or "ST"
    #[serde(default, rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position_code: Option<String>,
    /// Provider grid cell in "row:col" notation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<String>,
}

impl Player {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_position_code(mut self, code: impl Into<String>) -> Self {
        self.position_code = Some(code.into());
        self
    }

    pub fn with_grid(mut self, grid: impl Into<String>) -> Self {
        self.grid = Some(grid.into());
        self
    }
}

/// A player paired with its computed pitch coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangedPlayer {
    #[serde(flatten)]
    pub player: Player,
    #[serde(rename = "fieldPosition")]
    pub field_position: FieldPosition,
}

/// Broad tactical role of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Role {
    /// Classify a free-text position code, case-insensitively.
    ///
    /// Goalkeeper codes are exact ("G", "GK"). Outfield roles match either
    /// the provider's single-letter code or a letter inside a detailed code:
    /// `B` for backs, `M` for midfielders, `W`/`S` for wingers and strikers,
    /// checked in that order.
    pub fn from_code(code: &str) -> Option<Role> {
        let code = code.trim().to_ascii_uppercase();
        match code.as_str() {
            "" => None,
            "G" | "GK" => Some(Role::Goalkeeper),
            "D" => Some(Role::Defender),
            "M" => Some(Role::Midfielder),
            "F" => Some(Role::Forward),
            c if c.contains('B') => Some(Role::Defender),
            c if c.contains('M') => Some(Role::Midfielder),
            c if c.contains('W') || c.contains('S') => Some(Role::Forward),
            _ => None,
        }
    }

    /// Role assumed from a roster slot when nothing else is known
    pub fn from_roster_index(index: usize) -> Role {
        match index {
            0 => Role::Goalkeeper,
            1..=4 => Role::Defender,
            5..=7 => Role::Midfielder,
            _ => Role::Forward,
        }
    }

    /// Formation line this role occupies (goalkeepers have none)
    pub fn line_index(&self) -> Option<usize> {
        match self {
            Role::Goalkeeper => None,
            Role::Defender => Some(0),
            Role::Midfielder => Some(1),
            Role::Forward => Some(2),
        }
    }

    /// Typical depth of the role on the pitch
    pub fn band_y(&self) -> f64 {
        match self {
            Role::Goalkeeper => 90.0,
            Role::Defender => 75.0,
            Role::Midfielder => 50.0,
            Role::Forward => 25.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "goalkeeper",
            Role::Defender => "defender",
            Role::Midfielder => "midfielder",
            Role::Forward => "forward",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a player's coordinate comes from, resolved once before dispatch
///
/// Variant order is precedence order: a grid cell beats a position code,
/// which beats the roster slot.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerSource<'a> {
    Grid { cell: &'a str },
    Coded { role: Role },
    Inferred { role: Role },
}

impl<'a> PlayerSource<'a> {
    pub fn resolve(player: &'a Player, roster_index: usize) -> Self {
        if let Some(cell) = player.grid.as_deref().filter(|g| !g.trim().is_empty()) {
            return PlayerSource::Grid { cell };
        }

        match player.position_code.as_deref().and_then(Role::from_code) {
            Some(role) => PlayerSource::Coded { role },
            None => PlayerSource::Inferred {
                role: Role::from_roster_index(roster_index),
            },
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            PlayerSource::Grid { .. } => Strategy::Grid,
            PlayerSource::Coded { .. } => Strategy::PositionCode,
            PlayerSource::Inferred { .. } => Strategy::RosterIndex,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            PlayerSource::Grid { .. } => None,
            PlayerSource::Coded { role } | PlayerSource::Inferred { role } => Some(*role),
        }
    }
}

/// Placement strategy picked for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Grid,
    PositionCode,
    RosterIndex,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Grid => write!(f, "grid"),
            Strategy::PositionCode => write!(f, "position code"),
            Strategy::RosterIndex => write!(f, "roster index"),
        }
    }
}
