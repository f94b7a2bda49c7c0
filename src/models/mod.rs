mod interaction;
mod player;
mod recommendation;

pub use interaction::{InteractionEvent, InteractionRecord, ItemRef, NewInteraction};
pub use player::{PlayerRecord, StatBin, StatKind};
pub use recommendation::{EmptyReason, Recommendation, RecommendationOutcome};
