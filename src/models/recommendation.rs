use serde::Serialize;

use super::StatBin;

/// One ranked candidate, with the bins and era that explain its score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub team: Option<i64>,
    /// Cosine similarity rounded to 3 decimals
    pub similarity: f64,
    pub pts_bin: StatBin,
    pub reb_bin: StatBin,
    pub ast_bin: StatBin,
    pub era: Option<String>,
}

/// Why no ranking could be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    NoInteractions,
    NoPlayers,
}

/// Result of a recommendation request.
///
/// Serializes either as `{ mode, recommendations, usedFeatures }` or, for
/// sparse inputs, as `{ recommendations: [], reason }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendationOutcome {
    Ranked {
        mode: &'static str,
        recommendations: Vec<Recommendation>,
        #[serde(rename = "usedFeatures")]
        used_features: Vec<&'static str>,
    },
    Empty {
        recommendations: Vec<Recommendation>,
        reason: EmptyReason,
    },
}

impl RecommendationOutcome {
    pub fn empty(reason: EmptyReason) -> Self {
        RecommendationOutcome::Empty {
            recommendations: Vec::new(),
            reason,
        }
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            RecommendationOutcome::Ranked {
                recommendations, ..
            }
            | RecommendationOutcome::Empty {
                recommendations, ..
            } => recommendations,
        }
    }

    pub fn reason(&self) -> Option<EmptyReason> {
        match self {
            RecommendationOutcome::Ranked { .. } => None,
            RecommendationOutcome::Empty { reason, .. } => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_outcome_shape() {
        let outcome = RecommendationOutcome::empty(EmptyReason::NoInteractions);
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "recommendations": [], "reason": "no_interactions" })
        );
    }

    #[test]
    fn test_recommendation_field_names() {
        let rec = Recommendation {
            id: "76003".to_string(),
            name: "Kareem Abdul-Jabbar".to_string(),
            team: Some(1610612747),
            similarity: 0.816,
            pts_bin: StatBin::High,
            reb_bin: StatBin::High,
            ast_bin: StatBin::Mid,
            era: Some("1970s".to_string()),
        };

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["ptsBin"], "high");
        assert_eq!(value["astBin"], "mid");
        assert_eq!(value["era"], "1970s");
        assert_eq!(value["similarity"], 0.816);
    }
}
