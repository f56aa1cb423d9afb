//! Lineup Layout - pitch coordinates for football lineups
//!
//! This library turns a roster plus a formation label into an (x, y)
//! percentage coordinate for every player, using provider grid cells where
//! present, position codes otherwise, and roster order as a last resort.
//!
//! # Example
//!
//! ```rust
//! use lineup_layout::{arrange, Player};
//!
//! let roster: Vec<Player> = (1..=11).map(|n| Player::new(n, format!("Player {}", n))).collect();
//! let arranged = arrange(&roster, "4-3-3");
//! assert_eq!(arranged.len(), 11);
//! assert_eq!((arranged[0].field_position.x, arranged[0].field_position.y), (50.0, 90.0));
//! ```

pub mod error;
pub mod formation;
pub mod layout;
pub mod report;
pub mod roster;

pub use error::LineupError;
pub use formation::{normalize, parse, Formation};
pub use layout::{
    arrange, arrange_traced, arrange_with_config, grid_to_field, position_to_field,
    ArrangeConfig, ArrangedPlayer, FieldPosition, Player, SpreadStrategy,
};
pub use report::format_table;
pub use roster::RosterInput;

/// Arrange a JSON roster and return the augmented roster as JSON
///
/// The formation is taken from `formation` if given, else from the lineup
/// document, else the configured default.
///
/// # Example
///
/// ```rust
/// use lineup_layout::{arrange_json, ArrangeConfig};
///
/// let json = arrange_json(
///     r#"{"formation": "4-4-2", "startXI": [{"player": {"id": 1, "name": "Keeper", "pos": "G"}}]}"#,
///     None,
///     &ArrangeConfig::default(),
/// )
/// .unwrap();
/// assert!(json.contains("fieldPosition"));
/// ```
pub fn arrange_json(
    source: &str,
    formation: Option<&str>,
    config: &ArrangeConfig,
) -> Result<String, LineupError> {
    let (arranged, _) = arrange_input(source, formation, config)?;
    roster::to_json(&arranged)
}

/// Parse a JSON roster and arrange it, returning the players with the
/// formation that was actually applied
pub fn arrange_input(
    source: &str,
    formation: Option<&str>,
    config: &ArrangeConfig,
) -> Result<(Vec<ArrangedPlayer>, String), LineupError> {
    let input = RosterInput::from_json(source)?;
    let requested = formation
        .or_else(|| input.formation())
        .unwrap_or(config.default_formation.as_str());
    let applied = config.resolve_formation(requested);

    let players = input.into_players();
    let arranged = arrange_with_config(&players, &applied, config);
    Ok((arranged, applied))
}
