//! Content-based player recommendations.
//!
//! The catalog defines a shared feature space (positions, teams, eras and
//! binned scoring stats). Players are one-hot encoded into it, a user's
//! history is folded into a weighted profile vector, and unseen players are
//! ranked by cosine similarity to that profile.
//!
//! Everything here is synchronous and pure: the feature space and statistics
//! are rebuilt from the inputs of each call and nothing is shared between calls.

mod encoder;
mod feature_space;
mod profile;
mod ranker;
mod statistics;
mod vector;

pub use encoder::Encoder;
pub use feature_space::{era_bucket, FeatureSpace, POSITION_TOKENS, STAT_BIN_DIM};
pub use profile::{index_catalog, UserProfile};
pub use ranker::{cosine_similarity, rank, round_similarity};
pub use statistics::{StatSummary, Statistics};
pub use vector::FeatureVector;

use crate::models::{EmptyReason, InteractionRecord, PlayerRecord, RecommendationOutcome};

pub const MODE: &str = "content-based-cosine-user-profile";

/// Attribute groups that make up the feature space
pub const USED_FEATURES: [&str; 4] = [
    "POSITION(G/F/C)",
    "TEAM_ID",
    "ERA(decade)",
    "PTS/REB/AST(buckets)",
];

/// Number of recommendations returned by default
pub const DEFAULT_LIMIT: usize = 6;

/// Ranks the catalog players a user has not interacted with yet.
///
/// An empty history or an empty catalog is not an error; both produce an
/// empty outcome carrying the reason.
pub fn recommend(
    catalog: &[PlayerRecord],
    interactions: &[InteractionRecord],
    k: usize,
) -> RecommendationOutcome {
    if interactions.is_empty() {
        return RecommendationOutcome::empty(EmptyReason::NoInteractions);
    }
    if catalog.is_empty() {
        return RecommendationOutcome::empty(EmptyReason::NoPlayers);
    }

    let space = FeatureSpace::build(catalog);
    let stats = Statistics::estimate(catalog);
    let encoder = Encoder::new(&space, &stats);

    let players = index_catalog(catalog);
    let profile = UserProfile::aggregate(interactions, &players, &encoder);

    tracing::debug!(
        dimension = space.dimension(),
        teams = space.teams().len(),
        eras = space.eras().len(),
        resolved = profile.resolved(),
        unresolved = profile.unresolved(),
        "User profile built"
    );

    RecommendationOutcome::Ranked {
        mode: MODE,
        recommendations: rank(&profile, catalog, &encoder, k),
        used_features: USED_FEATURES.to_vec(),
    }
}
