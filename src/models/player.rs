use serde::{Deserialize, Serialize};

/// A catalog entry for one player, as read from the catalog store.
///
/// Every attribute except the identifier is optional; missing values are
/// handled by the encoder's fallback policies rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerRecord {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Free-form position string such as "G", "F-C" or "Guard-Forward"
    pub position: Option<String>,
    pub team_id: Option<i64>,
    pub pts: Option<f64>,
    pub reb: Option<f64>,
    pub ast: Option<f64>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
}

impl PlayerRecord {
    /// Creates a record with only an identifier and a name
    pub fn new(id: impl Into<String>, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.into(),
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            position: None,
            team_id: None,
            pts: None,
            reb: None,
            ast: None,
            from_year: None,
            to_year: None,
        }
    }

    /// "First Last", skipping whichever part is missing
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The value of a scoring stat, if present and finite
    pub fn stat(&self, kind: StatKind) -> Option<f64> {
        let value = match kind {
            StatKind::Points => self.pts,
            StatKind::Rebounds => self.reb,
            StatKind::Assists => self.ast,
        };
        value.filter(|v| v.is_finite())
    }
}

/// The per-player scoring stats that are binned into the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Points,
    Rebounds,
    Assists,
}

impl StatKind {
    /// Fixed encoding order of the stat-bin segment
    pub const ALL: [StatKind; 3] = [StatKind::Points, StatKind::Rebounds, StatKind::Assists];

    pub fn index(self) -> usize {
        match self {
            StatKind::Points => 0,
            StatKind::Rebounds => 1,
            StatKind::Assists => 2,
        }
    }
}

/// Position of a stat value relative to the catalog mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatBin {
    Low,
    Mid,
    High,
}

impl StatBin {
    /// Offset of this bin inside a [low, mid, high] triple
    pub fn offset(self) -> usize {
        match self {
            StatBin::Low => 0,
            StatBin::Mid => 1,
            StatBin::High => 2,
        }
    }
}
