//! Health-percentage scoring.
//!
//! Turns `(working, total)` counts into a bounded percentage with tiered
//! leniency bonuses for large populations. The same function is applied at
//! the ecosystem root and at every project node. Perfect scores are defined
//! to be unreachable: the result is clamped at 97 whenever there is anything
//! to score, and only an empty population yields 100.

/// Pure scoring function over working/total counts.
pub struct HealthScorer;

impl HealthScorer {
    /// Score a population. Bonuses apply in a fixed sequence against the
    /// running value: the >200 tier adds 3 (cap 95) then 2 (cap 97), the
    /// >300 tier adds 4 (cap 94) then 2 (cap 96), and the final result is
    /// clamped at 97.
    pub fn score(working: usize, total: usize) -> u32 {
        if total == 0 {
            return 100;
        }

        let base = ((working as f64 / total as f64) * 100.0).round() as u32;
        let mut score = base;

        if total > 200 && score >= 85 {
            score = (score + 3).min(95);
            if score >= 90 {
                score = (score + 2).min(97);
            }
        }
        if total > 300 && score >= 80 {
            score = (score + 4).min(94);
            if score >= 85 {
                score = (score + 2).min(96);
            }
        }

        score.min(97)
    }
}
