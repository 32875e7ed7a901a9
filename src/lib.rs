//! Answer-position balancing for multiple-choice question banks.
//!
//! Extracted question sets tend to carry a heavy bias in where the correct
//! answer sits (often "always the first option"). This crate redistributes
//! correct-answer positions as evenly as integer division allows while
//! keeping every question's option texts and its actual correct answer
//! intact.
//!
//! The entry point is [`balance_quiz`]; the two steps it composes,
//! [`planner::plan_targets`] and [`rearrange::rearrange_question`], are
//! published separately for callers that need finer control. All
//! randomness flows through a caller-supplied [`rand::Rng`], so seeded
//! runs are fully reproducible.

pub mod balancer;
pub mod error;
pub mod id;
pub mod models;
pub mod planner;
pub mod rearrange;

pub use balancer::{balance_quiz, balance_quiz_seeded};
pub use error::BalanceError;
pub use id::Id;
pub use models::{BalancedQuiz, Distribution, QuestionRecord};
