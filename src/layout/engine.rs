//! Arrangement of a roster into pitch coordinates
//!
//! Players are visited in roster order. Each is resolved to a
//! [`PlayerSource`] and dispatched: grid cells go through the grid mapper,
//! everything else through the line heuristics with a running index per
//! outfield role. Those indices are the only state and they are threaded
//! through the fold explicitly, so the Nth defender in roster order always
//! takes the Nth defender slot. A first pass over the roster counts the
//! players each line will receive, for spreads that size lines by head
//! count.

use crate::formation::{self, Formation};

use super::config::ArrangeConfig;
use super::grid::grid_to_field;
use super::heuristic::{self, LineSpread};
use super::trace::{LogTrace, PlacementTrace, TraceSink};
use super::types::{ArrangedPlayer, Player, PlayerSource, Role};

/// Next free index within each outfield line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounters {
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl GroupCounters {
    /// Take the next index for `role`; goalkeepers never consume one
    pub fn advance(&mut self, role: Role) -> Option<usize> {
        let counter = match role {
            Role::Goalkeeper => return None,
            Role::Defender => &mut self.defenders,
            Role::Midfielder => &mut self.midfielders,
            Role::Forward => &mut self.forwards,
        };
        let index = *counter;
        *counter += 1;
        Some(index)
    }

    /// Indices taken so far for `role`
    pub fn count(&self, role: Role) -> usize {
        match role {
            Role::Goalkeeper => 0,
            Role::Defender => self.defenders,
            Role::Midfielder => self.midfielders,
            Role::Forward => self.forwards,
        }
    }

    /// Players per outfield line that the heuristics will place
    pub fn totals(roster: &[Player]) -> Self {
        roster
            .iter()
            .enumerate()
            .filter_map(|(roster_index, player)| PlayerSource::resolve(player, roster_index).role())
            .fold(Self::default(), |mut totals, role| {
                totals.advance(role);
                totals
            })
    }
}

/// Arrange a roster with the default configuration.
///
/// # Example
///
/// ```rust
/// use lineup_layout::{arrange, FieldPosition, Player};
///
/// let roster = vec![
///     Player::new(1, "Keeper").with_position_code("G"),
///     Player::new(2, "Back").with_position_code("D"),
/// ];
/// let arranged = arrange(&roster, "4-4-2");
/// assert_eq!(arranged[0].field_position, FieldPosition::new(50.0, 90.0));
/// assert_eq!(arranged[1].field_position, FieldPosition::new(20.0, 75.0));
/// ```
pub fn arrange(roster: &[Player], formation: &str) -> Vec<ArrangedPlayer> {
    arrange_with_config(roster, formation, &ArrangeConfig::default())
}

/// Arrange a roster, reporting placements to the `log` facade
pub fn arrange_with_config(
    roster: &[Player],
    formation: &str,
    config: &ArrangeConfig,
) -> Vec<ArrangedPlayer> {
    arrange_traced(roster, formation, config, &mut LogTrace)
}

/// Arrange a roster, reporting each placement to `trace`
pub fn arrange_traced(
    roster: &[Player],
    formation: &str,
    config: &ArrangeConfig,
    trace: &mut dyn TraceSink,
) -> Vec<ArrangedPlayer> {
    let formation = formation::parse(&config.resolve_formation(formation));
    let spread = config.spread.spread();
    let totals = GroupCounters::totals(roster);

    let (arranged, _) = roster.iter().enumerate().fold(
        (Vec::with_capacity(roster.len()), GroupCounters::default()),
        |(mut arranged, mut counters), (roster_index, player)| {
            let placement =
                place_player(player, roster_index, &formation, spread, &totals, &mut counters);
            trace.record(&placement);
            arranged.push(ArrangedPlayer {
                player: player.clone(),
                field_position: placement.position,
            });
            (arranged, counters)
        },
    );

    arranged
}

fn place_player(
    player: &Player,
    roster_index: usize,
    formation: &Formation,
    spread: &dyn LineSpread,
    totals: &GroupCounters,
    counters: &mut GroupCounters,
) -> PlacementTrace {
    let source = PlayerSource::resolve(player, roster_index);

    let (slot, position) = match &source {
        PlayerSource::Grid { cell } => (None, grid_to_field(cell)),
        PlayerSource::Coded { role } | PlayerSource::Inferred { role } => {
            let slot = counters.advance(*role);
            let position = heuristic::place(
                spread,
                *role,
                slot.unwrap_or(0),
                totals.count(*role),
                formation,
            );
            (slot, position)
        }
    };

    PlacementTrace {
        roster_index,
        player_id: player.id,
        strategy: source.strategy(),
        role: source.role(),
        slot,
        position: position.clamped(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::SpreadStrategy;
    use crate::layout::types::{FieldPosition, Strategy};

    fn coded(codes: &[&str]) -> Vec<Player> {
        codes
            .iter()
            .enumerate()
            .map(|(i, code)| {
                Player::new(i as u64 + 1, format!("P{}", i + 1)).with_position_code(*code)
            })
            .collect()
    }

    fn positions(arranged: &[ArrangedPlayer]) -> Vec<(f64, f64)> {
        arranged
            .iter()
            .map(|a| (a.field_position.x, a.field_position.y))
            .collect()
    }

    #[test]
    fn test_counters_advance_per_role() {
        let mut counters = GroupCounters::default();
        assert_eq!(counters.advance(Role::Defender), Some(0));
        assert_eq!(counters.advance(Role::Forward), Some(0));
        assert_eq!(counters.advance(Role::Defender), Some(1));
        assert_eq!(counters.advance(Role::Goalkeeper), None);
        assert_eq!(
            counters,
            GroupCounters {
                defenders: 2,
                midfielders: 0,
                forwards: 1
            }
        );
    }

    #[test]
    fn test_empty_roster() {
        assert!(arrange(&[], "4-3-3").is_empty());
    }

    #[test]
    fn test_back_four_by_code() {
        let arranged = arrange(&coded(&["LB", "CB", "CB", "RB"]), "4-3-3");
        assert_eq!(
            positions(&arranged),
            vec![(20.0, 75.0), (40.0, 75.0), (60.0, 75.0), (80.0, 75.0)]
        );
    }

    #[test]
    fn test_grid_does_not_consume_counter() {
        let mut roster = coded(&["D", "D", "D"]);
        roster[0].grid = Some("2:1".to_string());
        let arranged = arrange(&roster, "4-4-2");
        assert_eq!(
            positions(&arranged),
            vec![(15.0, 75.0), (20.0, 75.0), (40.0, 75.0)]
        );
    }

    #[test]
    fn test_goalkeeper_does_not_consume_counter() {
        let arranged = arrange(&coded(&["M", "G", "M"]), "4-4-2");
        assert_eq!(
            positions(&arranged),
            vec![(20.0, 50.0), (50.0, 90.0), (40.0, 50.0)]
        );
    }

    #[test]
    fn test_inferred_players_share_counters_with_coded() {
        // index 2 has no code and is inferred as a defender, after one coded defender
        let roster = coded(&["G", "D", "", "D"]);
        let arranged = arrange(&roster, "4-4-2");
        assert_eq!(
            positions(&arranged),
            vec![(50.0, 90.0), (20.0, 75.0), (40.0, 75.0), (60.0, 75.0)]
        );
    }

    #[test]
    fn test_unknown_formation_uses_default() {
        let roster = coded(&["F", "F", "F"]);
        assert_eq!(arrange(&roster, "8-1-1"), arrange(&roster, "4-3-3"));
    }

    #[test]
    fn test_configured_default_formation() {
        let roster = coded(&["F", "F"]);
        let config = ArrangeConfig::new().with_default_formation("4-4-2");
        let arranged = arrange_with_config(&roster, "bogus", &config);
        assert_eq!(positions(&arranged), vec![(35.0, 25.0), (65.0, 25.0)]);
    }

    #[test]
    fn test_order_dependence() {
        let roster = coded(&["CB", "RB"]);
        let reversed: Vec<Player> = roster.iter().rev().cloned().collect();
        let a = arrange(&roster, "4-3-3");
        let b = arrange(&reversed, "4-3-3");
        assert_eq!(a[0].player.id, b[1].player.id);
        assert_ne!(a[0].field_position, b[1].field_position);
    }

    #[test]
    fn test_trace_records_each_placement() {
        let mut roster = coded(&["G", "CB", "??"]);
        roster.push(Player::new(9, "Gridded").with_grid("4:3"));

        let mut events: Vec<PlacementTrace> = Vec::new();
        let arranged = arrange_traced(&roster, "4-3-3", &ArrangeConfig::default(), &mut events);

        assert_eq!(events.len(), 4);
        assert_eq!(events[0].strategy, Strategy::PositionCode);
        assert_eq!(events[0].slot, None);
        assert_eq!(events[1].role, Some(Role::Defender));
        assert_eq!(events[1].slot, Some(0));
        assert_eq!(events[2].strategy, Strategy::RosterIndex);
        assert_eq!(events[2].role, Some(Role::Defender));
        assert_eq!(events[2].slot, Some(1));
        assert_eq!(events[3].strategy, Strategy::Grid);
        assert_eq!(events[3].position, FieldPosition::new(50.0, 55.0));

        for (event, player) in events.iter().zip(&arranged) {
            assert_eq!(event.position, player.field_position);
        }
    }

    #[test]
    fn test_totals_skip_grid_and_goalkeeper() {
        let mut roster = coded(&["G", "D", "D", "M", ""]);
        roster[1].grid = Some("2:1".to_string());
        // index 4 has no code and is inferred as a defender
        let totals = GroupCounters::totals(&roster);
        assert_eq!(
            totals,
            GroupCounters {
                defenders: 2,
                midfielders: 1,
                forwards: 0
            }
        );
        assert_eq!(totals.count(Role::Goalkeeper), 0);
    }

    #[test]
    fn test_interpolated_spreads_overfull_line() {
        let roster = coded(&["M", "M", "M", "M", "M", "M"]);
        let xs = |spread: SpreadStrategy| -> Vec<f64> {
            let config = ArrangeConfig::new().with_spread(spread);
            arrange_with_config(&roster, "4-3-3", &config)
                .iter()
                .map(|a| a.field_position.x)
                .collect()
        };

        // A three-man midfield table wraps after three
        assert_eq!(
            xs(SpreadStrategy::Tabulated),
            vec![30.0, 50.0, 70.0, 30.0, 50.0, 70.0]
        );

        let interpolated = xs(SpreadStrategy::Interpolated);
        let expected = [15.0, 29.0, 43.0, 57.0, 71.0, 85.0];
        for (x, e) in interpolated.iter().zip(expected) {
            assert!((x - e).abs() < 1e-9, "{} vs {}", x, e);
        }
    }

    #[test]
    fn test_interpolated_keeps_tables_when_line_fits() {
        let roster = coded(&["G", "LB", "CB", "CB", "RB", "CM", "CM", "CM", "LW", "ST", "RW"]);
        let config = ArrangeConfig::new().with_spread(SpreadStrategy::Interpolated);
        assert_eq!(
            arrange_with_config(&roster, "4-3-3", &config),
            arrange(&roster, "4-3-3")
        );
    }

    #[test]
    fn test_whitespace_grid_falls_through_to_code() {
        let roster = vec![
            Player::new(1, "Blank keeper").with_grid("   "),
            Player::new(2, "Blank back").with_grid("\t").with_position_code("D"),
        ];
        let arranged = arrange(&roster, "4-4-2");
        assert_eq!(positions(&arranged), vec![(50.0, 90.0), (20.0, 75.0)]);
    }
}
