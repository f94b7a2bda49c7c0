use crate::models::{PlayerRecord, StatBin};

use super::feature_space::{era_bucket, FeatureSpace, POSITION_TOKENS};
use super::statistics::Statistics;
use super::vector::FeatureVector;

/// Encodes players into vectors of one shared feature space.
///
/// Encoding is a pure function of the player, the space and the statistics;
/// the same inputs always give a bit-identical vector.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    space: &'a FeatureSpace,
    stats: &'a Statistics,
}

impl<'a> Encoder<'a> {
    pub fn new(space: &'a FeatureSpace, stats: &'a Statistics) -> Self {
        Self { space, stats }
    }

    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    pub fn encode(&self, player: &PlayerRecord) -> FeatureVector {
        let mut vector = FeatureVector::zeros(self.dimension());

        // Multi-hot: "G-F" lights both G and F
        let position = player
            .position
            .as_deref()
            .unwrap_or_default()
            .to_uppercase();
        for (slot, token) in POSITION_TOKENS.iter().enumerate() {
            if position.contains(*token) {
                vector.set(slot);
            }
        }

        if let Some(slot) = player.team_id.and_then(|team| self.space.team_slot(team)) {
            vector.set(self.space.team_offset() + slot);
        }

        if let Some(slot) = self.era(player).and_then(|era| self.space.era_slot(&era)) {
            vector.set(self.space.era_offset() + slot);
        }

        let stat_offset = self.space.stat_offset();
        for (i, bin) in self.stat_bins(player).iter().enumerate() {
            vector.set(stat_offset + i * 3 + bin.offset());
        }

        vector
    }

    pub fn stat_bins(&self, player: &PlayerRecord) -> [StatBin; 3] {
        self.stats.bins(player)
    }

    pub fn era(&self, player: &PlayerRecord) -> Option<String> {
        era_bucket(player.from_year, player.to_year)
    }
}
