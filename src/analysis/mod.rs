pub mod activity;
pub mod engagement;
pub mod flags;
pub mod originality;
pub mod ownership;

use crate::models::authenticity::SUB_SCORE_MAX;

/// Round a raw sub-score to the nearest point and cap it to 0..=25.
pub fn to_sub_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, SUB_SCORE_MAX as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_scores_are_rounded_and_capped() {
        assert_eq!(to_sub_score(12.5), 13);
        assert_eq!(to_sub_score(12.49), 12);
        assert_eq!(to_sub_score(31.0), 25);
        assert_eq!(to_sub_score(-1.0), 0);
        assert_eq!(to_sub_score(f64::NAN), 0);
    }
}
