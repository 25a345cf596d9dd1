// Core algorithm exports
pub mod aggregate;
pub mod distance;
pub mod matcher;
pub mod selection;
pub mod skills;

pub use aggregate::aggregate;
pub use distance::{combined_distance, max_group_distance, similarity_percent};
pub use matcher::{MatchResult, Matcher};
pub use selection::{select_partner, select_rival};
pub use skills::recommend_skills;
