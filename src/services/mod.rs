pub mod interactions;
pub mod recommendations;
pub mod recommender;
