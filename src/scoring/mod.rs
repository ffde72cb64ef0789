//! Multi-factor investment scoring

mod input;
mod result;
mod scorer;

pub use input::InvestmentScoreInput;
pub use result::{InvestmentScoreResult, RiskLevel, ScoreWeights};
pub use scorer::score;
