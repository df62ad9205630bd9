mod health;
pub mod reality;

pub use health::health;
pub use reality::{
    age_extremes, api_index, audience_by_broadcaster, cast_vote, get_votes, list_prizes,
    prize_totals, prizes_at_least,
};
