use std::collections::{BTreeSet, HashMap};

use crate::models::{PlayerRecord, StatKind};

/// Position tokens matched against the position string, in encoding order
pub const POSITION_TOKENS: [char; 3] = ['G', 'F', 'C'];

/// Slots taken by the stat-bin segment: low/mid/high for each stat
pub const STAT_BIN_DIM: usize = StatKind::ALL.len() * 3;

/// The categorical dimensions every player is encoded against.
///
/// Team slots follow first-seen catalog order and era slots are sorted, so two
/// spaces built from the same catalog snapshot are identical.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpace {
    teams: Vec<i64>,
    team_slots: HashMap<i64, usize>,
    eras: Vec<String>,
    era_slots: HashMap<String, usize>,
}

impl FeatureSpace {
    /// Derives team and era dimensions from a single pass over the catalog
    pub fn build(catalog: &[PlayerRecord]) -> Self {
        let mut teams = Vec::new();
        let mut team_slots = HashMap::new();
        let mut eras = BTreeSet::new();

        for player in catalog {
            if let Some(team) = player.team_id {
                if !team_slots.contains_key(&team) {
                    team_slots.insert(team, teams.len());
                    teams.push(team);
                }
            }
            if let Some(era) = era_bucket(player.from_year, player.to_year) {
                eras.insert(era);
            }
        }

        let eras: Vec<String> = eras.into_iter().collect();
        let era_slots = eras
            .iter()
            .enumerate()
            .map(|(slot, era)| (era.clone(), slot))
            .collect();

        Self {
            teams,
            team_slots,
            eras,
            era_slots,
        }
    }

    pub fn teams(&self) -> &[i64] {
        &self.teams
    }

    pub fn eras(&self) -> &[String] {
        &self.eras
    }

    pub fn team_slot(&self, team: i64) -> Option<usize> {
        self.team_slots.get(&team).copied()
    }

    pub fn era_slot(&self, era: &str) -> Option<usize> {
        self.era_slots.get(era).copied()
    }

    pub fn team_offset(&self) -> usize {
        POSITION_TOKENS.len()
    }

    pub fn era_offset(&self) -> usize {
        self.team_offset() + self.teams.len()
    }

    pub fn stat_offset(&self) -> usize {
        self.era_offset() + self.eras.len()
    }

    /// Length of every vector encoded in this space
    pub fn dimension(&self) -> usize {
        self.stat_offset() + STAT_BIN_DIM
    }
}

/// Decade of the midpoint of a career, e.g. 1991..=2003 gives "1990s"
pub fn era_bucket(first_year: Option<i32>, last_year: Option<i32>) -> Option<String> {
    let (first, last) = (first_year?, last_year?);
    let mid = (f64::from(first) + f64::from(last)) / 2.0;
    let decade = (mid / 10.0).floor() as i64 * 10;
    Some(format!("{}s", decade))
}
