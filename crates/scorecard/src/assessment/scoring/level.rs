use serde::{Deserialize, Serialize};

/// Qualitative classification of a score-to-max ratio. Always derived from
/// a `(score, max_score)` pair, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Classify a score against its maximum. A zero maximum classifies as
    /// `Low`: a criterion with nothing to score cannot show strength, and
    /// the guard keeps the ratio well defined.
    ///
    /// Band edges are inclusive on the lower side (exactly 70% is `High`,
    /// exactly 40% is `Medium`), computed on the unrounded ratio.
    pub fn classify(score: f64, max_score: f64) -> Self {
        if max_score == 0.0 {
            return Self::Low;
        }

        let pct = score / max_score * 100.0;
        if pct >= 70.0 {
            Self::High
        } else if pct >= 40.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// General guidance shown next to the per-question recommendations.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::High => {
                "Strong result. Keep the practices systematic and make targeted refinements."
            }
            Self::Medium => {
                "Mid-level maturity. Prioritize improvements in the processes with the largest gaps."
            }
            Self::Low => {
                "Low maturity. Systemic change and formalized processes are needed; start with the basics."
            }
        }
    }
}

/// Unrounded percentage of `score` against `max_score`, 0 when the maximum
/// is 0. Classification uses this value directly.
pub fn percent(score: f64, max_score: f64) -> f64 {
    if max_score == 0.0 {
        0.0
    } else {
        score / max_score * 100.0
    }
}

/// Display percentage, rounded half-up. Cosmetic only; never feed this back
/// into classification.
pub fn rounded_percent(score: f64, max_score: f64) -> u8 {
    percent(score, max_score).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_max_is_always_low() {
        assert_eq!(Level::classify(0.0, 0.0), Level::Low);
        assert_eq!(Level::classify(42.0, 0.0), Level::Low);
        assert_eq!(percent(42.0, 0.0), 0.0);
        assert_eq!(rounded_percent(42.0, 0.0), 0);
    }

    #[test]
    fn band_edges_round_up_to_the_higher_band() {
        assert_eq!(Level::classify(70.0, 100.0), Level::High);
        assert_eq!(Level::classify(40.0, 100.0), Level::Medium);
        assert_eq!(Level::classify(69.9, 100.0), Level::Medium);
        assert_eq!(Level::classify(39.9, 100.0), Level::Low);
        assert_eq!(Level::classify(0.0, 100.0), Level::Low);
        assert_eq!(Level::classify(100.0, 100.0), Level::High);
    }

    #[test]
    fn classification_uses_the_unrounded_ratio() {
        // 69.5 would round to 70 for display but must stay Medium.
        assert_eq!(Level::classify(69.5, 100.0), Level::Medium);
        assert_eq!(rounded_percent(69.5, 100.0), 70);
    }

    #[test]
    fn classify_is_monotonic_in_score() {
        let max = 37.0;
        let mut previous = Level::classify(0.0, max);
        for step in 1..=37 {
            let current = Level::classify(f64::from(step), max);
            assert!(
                rank(current) >= rank(previous),
                "classification regressed at score {step}"
            );
            previous = current;
        }
    }

    fn rank(level: Level) -> u8 {
        match level {
            Level::Low => 0,
            Level::Medium => 1,
            Level::High => 2,
        }
    }

    #[test]
    fn labels_and_hints_are_stable() {
        assert_eq!(Level::High.label(), "High");
        assert_eq!(Level::Medium.label(), "Medium");
        assert_eq!(Level::Low.label(), "Low");
        assert!(Level::Low.hint().contains("start with the basics"));
    }
}
