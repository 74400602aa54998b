//! Color tiers for 0-100 scores.

#[cfg(test)]
#[path = "score_test.rs"]
mod score_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Warn,
    Bad,
}

impl ScoreTier {
    /// `>= 70` good, `>= 40` warn, else bad.
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        match score {
            70.. => Self::Good,
            40..70 => Self::Warn,
            _ => Self::Bad,
        }
    }

    /// Difficulty runs the other way: easy keywords are good.
    #[must_use]
    pub fn for_difficulty(difficulty: u32) -> Self {
        Self::for_score(100u32.saturating_sub(difficulty))
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "tier--good",
            Self::Warn => "tier--warn",
            Self::Bad => "tier--bad",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warn => "Needs work",
            Self::Bad => "Poor",
        }
    }
}
