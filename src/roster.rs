//! JSON shapes exchanged with the match-data provider and the renderer
//!
//! Input is either a bare list of `{ "player": {...} }` entries or a lineup
//! document carrying its own `formation` and a `startXI` list. Output is the
//! same entry list with `fieldPosition` added to every player.

use serde::{Deserialize, Serialize};

use crate::error::LineupError;
use crate::layout::{ArrangedPlayer, Player};

/// A wrapped roster item, `{ "player": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry<P = Player> {
    pub player: P,
}

/// A team lineup as published by the provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LineupDocument {
    #[serde(default)]
    pub formation: Option<String>,
    #[serde(rename = "startXI")]
    pub start_xi: Vec<RosterEntry>,
}

/// Any accepted roster input
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RosterInput {
    Entries(Vec<RosterEntry>),
    Lineup(LineupDocument),
}

impl RosterInput {
    pub fn from_json(source: &str) -> Result<Self, LineupError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Formation carried by the input, if any
    pub fn formation(&self) -> Option<&str> {
        match self {
            RosterInput::Entries(_) => None,
            RosterInput::Lineup(doc) => doc.formation.as_deref(),
        }
    }

    pub fn into_players(self) -> Vec<Player> {
        let entries = match self {
            RosterInput::Entries(entries) => entries,
            RosterInput::Lineup(doc) => doc.start_xi,
        };
        entries.into_iter().map(|entry| entry.player).collect()
    }
}

/// Serialize arranged players as pretty-printed `{ "player": ... }` entries
pub fn to_json(arranged: &[ArrangedPlayer]) -> Result<String, LineupError> {
    let entries: Vec<RosterEntry<&ArrangedPlayer>> = arranged
        .iter()
        .map(|player| RosterEntry { player })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
