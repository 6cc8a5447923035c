mod audit;
mod curl;
mod rating;

pub use audit::AuditCommands;
pub use curl::CurlCommands;
pub use rating::{ChallengeArgs, RatingCommands};
