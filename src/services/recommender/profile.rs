use std::collections::{HashMap, HashSet};

use crate::models::{InteractionRecord, PlayerRecord};

use super::encoder::Encoder;
use super::vector::FeatureVector;

/// Lookup from player id to catalog record; a later duplicate id wins
pub fn index_catalog(catalog: &[PlayerRecord]) -> HashMap<&str, &PlayerRecord> {
    catalog.iter().map(|p| (p.id.as_str(), p)).collect()
}

/// A user's taste expressed in the catalog's feature space, plus every item
/// id the user has already interacted with.
#[derive(Debug, Clone)]
pub struct UserProfile {
    vector: FeatureVector,
    seen: HashSet<String>,
    resolved: usize,
    unresolved: usize,
}

impl UserProfile {
    /// Weighted sum of the encoded players in the history.
    ///
    /// Ids missing from the catalog add nothing to the vector but are still
    /// recorded as seen.
    pub fn aggregate(
        interactions: &[InteractionRecord],
        players: &HashMap<&str, &PlayerRecord>,
        encoder: &Encoder<'_>,
    ) -> Self {
        let mut vector = FeatureVector::zeros(encoder.dimension());
        let mut seen = HashSet::new();
        let mut resolved = 0;
        let mut unresolved = 0;

        for interaction in interactions {
            let id = interaction.item_id.as_str();
            seen.insert(id.to_string());

            match players.get(id) {
                Some(player) => {
                    vector.add_scaled(&encoder.encode(player), interaction.effective_weight());
                    resolved += 1;
                }
                None => unresolved += 1,
            }
        }

        Self {
            vector,
            seen,
            resolved,
            unresolved,
        }
    }

    pub fn vector(&self) -> &FeatureVector {
        &self.vector
    }

    pub fn has_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    /// Interactions that matched a catalog entry
    pub fn resolved(&self) -> usize {
        self.resolved
    }

    pub fn unresolved(&self) -> usize {
        self.unresolved
    }
}
