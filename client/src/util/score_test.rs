use super::*;

#[test]
fn score_85_is_good() {
    assert_eq!(ScoreTier::for_score(85), ScoreTier::Good);
    assert_eq!(ScoreTier::for_score(85).css_class(), "tier--good");
}

#[test]
fn tier_boundaries() {
    assert_eq!(ScoreTier::for_score(100), ScoreTier::Good);
    assert_eq!(ScoreTier::for_score(70), ScoreTier::Good);
    assert_eq!(ScoreTier::for_score(69), ScoreTier::Warn);
    assert_eq!(ScoreTier::for_score(40), ScoreTier::Warn);
    assert_eq!(ScoreTier::for_score(39), ScoreTier::Bad);
    assert_eq!(ScoreTier::for_score(0), ScoreTier::Bad);
}

#[test]
fn difficulty_is_inverted() {
    assert_eq!(ScoreTier::for_difficulty(20), ScoreTier::Good);
    assert_eq!(ScoreTier::for_difficulty(42), ScoreTier::Warn);
    assert_eq!(ScoreTier::for_difficulty(75), ScoreTier::Bad);
    assert_eq!(ScoreTier::for_difficulty(150), ScoreTier::Bad);
}
