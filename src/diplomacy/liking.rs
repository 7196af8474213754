//! Sentiment bands derived from summed bonus weights

use serde::{Deserialize, Serialize};

/// Lowest sentiment still counted as neutral
const LOW_NEUTRAL: i32 = -5;
/// Highest sentiment still counted as neutral
const HIGH_NEUTRAL: i32 = 5;
/// Lowest sentiment still counted as dislike
const LOW_DISLIKE: i32 = -15;
/// Highest sentiment still counted as like
const HIGH_LIKE: i32 = 15;

/// How much one player likes another
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Liking {
    Hate = -2,
    Dislike = -1,
    #[default]
    Neutral = 0,
    Like = 1,
    Friends = 2,
}

impl Liking {
    pub const ALL: [Liking; 5] = [
        Liking::Hate,
        Liking::Dislike,
        Liking::Neutral,
        Liking::Like,
        Liking::Friends,
    ];

    /// Map a summed sentiment onto a band.
    ///
    /// Thresholds go loosest first, each later check overriding the earlier.
    pub fn from_sentiment(value: i32) -> Self {
        let mut result = Liking::Neutral;
        if value < LOW_NEUTRAL {
            result = Liking::Dislike;
        }
        if value < LOW_DISLIKE {
            result = Liking::Hate;
        }
        if value > HIGH_NEUTRAL {
            result = Liking::Like;
        }
        if value > HIGH_LIKE {
            result = Liking::Friends;
        }
        result
    }
}
