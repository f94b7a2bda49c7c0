use crate::models::{PlayerRecord, Recommendation};

use super::encoder::Encoder;
use super::profile::UserProfile;
use super::vector::FeatureVector;

/// Cosine of the angle between two vectors.
///
/// 0 when either vector has zero norm, or when a norm or the dot product
/// overflows, so scores always stay finite.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 || !norm_a.is_finite() || !norm_b.is_finite() {
        return 0.0;
    }

    let dot = a.dot(b);
    if !dot.is_finite() {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Rounds a similarity to 3 decimals for display
pub fn round_similarity(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

/// Scores every unseen catalog player against the profile and keeps the top `k`.
///
/// Sorting is stable, so equal scores keep catalog order. Scores are compared
/// at full precision and only rounded in the returned records.
pub fn rank(
    profile: &UserProfile,
    catalog: &[PlayerRecord],
    encoder: &Encoder<'_>,
    k: usize,
) -> Vec<Recommendation> {
    let mut scored: Vec<(&PlayerRecord, f64)> = catalog
        .iter()
        .filter(|player| !profile.has_seen(&player.id))
        .map(|player| {
            let score = cosine_similarity(profile.vector(), &encoder.encode(player));
            (player, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(k);

    scored
        .into_iter()
        .map(|(player, score)| {
            let [pts_bin, reb_bin, ast_bin] = encoder.stat_bins(player);
            Recommendation {
                id: player.id.clone(),
                name: player.display_name(),
                team: player.team_id,
                similarity: round_similarity(score),
                pts_bin,
                reb_bin,
                ast_bin,
                era: encoder.era(player),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InteractionRecord;
    use crate::services::recommender::{index_catalog, FeatureSpace, Statistics};
    use chrono::Utc;

    #[test]
    fn test_self_similarity() {
        let v = FeatureVector::from(vec![1.0, 0.0, 2.0, 3.5]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_similarity() {
        let v = FeatureVector::from(vec![1.0, 1.0]);
        let zero = FeatureVector::zeros(2);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = FeatureVector::from(vec![1.0, 0.0]);
        let b = FeatureVector::from(vec![0.0, 1.0]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_overflowing_vectors_score_zero() {
        let huge = FeatureVector::from(vec![f64::INFINITY, 1.0]);
        let v = FeatureVector::from(vec![1.0, 1.0]);
        assert_eq!(cosine_similarity(&huge, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &huge), 0.0);

        // Finite entries whose squares overflow
        let big = FeatureVector::from(vec![1e200, 1e200]);
        assert_eq!(cosine_similarity(&big, &big), 0.0);
    }

    #[test]
    fn test_round_similarity() {
        assert_eq!(round_similarity(0.81649658), 0.816);
        assert_eq!(round_similarity(0.0), 0.0);
        assert_eq!(round_similarity(1.0), 1.0);
    }

    fn team_player(id: &str, team: i64) -> PlayerRecord {
        let mut p = PlayerRecord::new(id, "P", id);
        p.team_id = Some(team);
        p
    }

    #[test]
    fn test_ties_keep_catalog_order_and_truncate() {
        // Only the stat bins are shared, so every candidate scores the same
        let catalog: Vec<PlayerRecord> = (1..=8).map(|i| team_player(&i.to_string(), i)).collect();
        let space = FeatureSpace::build(&catalog);
        let stats = Statistics::estimate(&catalog);
        let encoder = Encoder::new(&space, &stats);

        let history = vec![InteractionRecord::new("u", "1", None, Utc::now())];
        let profile = UserProfile::aggregate(&history, &index_catalog(&catalog), &encoder);

        let ranked = rank(&profile, &catalog, &encoder, 6);
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_teammate_outranks_stranger() {
        let catalog = vec![team_player("a", 1), team_player("b", 2), team_player("c", 1)];
        let space = FeatureSpace::build(&catalog);
        let stats = Statistics::estimate(&catalog);
        let encoder = Encoder::new(&space, &stats);

        let history = vec![InteractionRecord::new("u", "a", None, Utc::now())];
        let profile = UserProfile::aggregate(&history, &index_catalog(&catalog), &encoder);

        let ranked = rank(&profile, &catalog, &encoder, 6);
        assert_eq!(ranked[0].id, "c");
        assert_eq!(ranked[1].id, "b");
        assert!(ranked[0].similarity > ranked[1].similarity);
    }

    fn positioned(id: &str, position: &str, team: i64) -> PlayerRecord {
        let mut p = team_player(id, team);
        p.position = Some(position.to_string());
        p
    }

    #[test]
    fn test_order_uses_unrounded_scores() {
        // "y" precedes "x" in the catalog and both round to 0.894, but the
        // slightly heavier team-1 history gives "x" the higher raw score
        let catalog = vec![
            positioned("p1", "G", 1),
            positioned("p2", "F", 2),
            positioned("y", "G", 2),
            positioned("x", "G", 1),
        ];
        let space = FeatureSpace::build(&catalog);
        let stats = Statistics::estimate(&catalog);
        let encoder = Encoder::new(&space, &stats);

        let history = vec![
            InteractionRecord::new("u", "p1", Some(1.0005), Utc::now()),
            InteractionRecord::new("u", "p2", Some(1.0), Utc::now()),
        ];
        let profile = UserProfile::aggregate(&history, &index_catalog(&catalog), &encoder);

        let raw_x = cosine_similarity(profile.vector(), &encoder.encode(&catalog[3]));
        let raw_y = cosine_similarity(profile.vector(), &encoder.encode(&catalog[2]));
        assert!(raw_x > raw_y);

        let ranked = rank(&profile, &catalog, &encoder, 6);
        assert_eq!(ranked[0].id, "x");
        assert_eq!(ranked[1].id, "y");
        assert_eq!(ranked[0].similarity, 0.894);
        assert_eq!(ranked[1].similarity, 0.894);
    }

    #[test]
    fn test_overflowing_profile_scores_stay_finite() {
        let catalog = vec![positioned("a", "G", 1), positioned("b", "C", 2)];
        let space = FeatureSpace::build(&catalog);
        let stats = Statistics::estimate(&catalog);
        let encoder = Encoder::new(&space, &stats);

        let history = vec![
            InteractionRecord::new("u", "a", Some(1e308), Utc::now()),
            InteractionRecord::new("u", "a", Some(1e308), Utc::now()),
        ];
        let profile = UserProfile::aggregate(&history, &index_catalog(&catalog), &encoder);

        let ranked = rank(&profile, &catalog, &encoder, 6);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "b");
        assert!(ranked[0].similarity.is_finite());
    }

    #[test]
    fn test_empty_candidate_pool() {
        let catalog = vec![team_player("a", 1)];
        let space = FeatureSpace::build(&catalog);
        let stats = Statistics::estimate(&catalog);
        let encoder = Encoder::new(&space, &stats);

        let history = vec![InteractionRecord::new("u", "a", None, Utc::now())];
        let profile = UserProfile::aggregate(&history, &index_catalog(&catalog), &encoder);

        assert!(rank(&profile, &catalog, &encoder, 6).is_empty());
    }
}
