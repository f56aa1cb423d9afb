//! Plain-text listing of an arranged lineup

use std::fmt::Write;

use crate::layout::ArrangedPlayer;

/// One line per player: `#<number> <name> (<x>, <y>)`, unnumbered players as `#-`
pub fn format_table(arranged: &[ArrangedPlayer]) -> String {
    let mut out = String::new();
    for entry in arranged {
        let number = entry
            .player
            .number
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        // Writing to a String never fails
        let _ = writeln!(
            out,
            "#{} {} ({:.1}, {:.1})",
            number, entry.player.name, entry.field_position.x, entry.field_position.y
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FieldPosition, Player};

    #[test]
    fn test_format_table() {
        let arranged = vec![
            ArrangedPlayer {
                player: Player::new(1, "Keeper").with_number(1),
                field_position: FieldPosition::new(50.0, 90.0),
            },
            ArrangedPlayer {
                player: Player::new(2, "Trialist"),
                field_position: FieldPosition::new(38.333, 75.0),
            },
        ];
        assert_eq!(
            format_table(&arranged),
            "#1 Keeper (50.0, 90.0)\n#- Trialist (38.3, 75.0)\n"
        );
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[]), "");
    }
}
