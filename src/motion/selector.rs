//! Quantizing continuous progress into a discrete active slide.

/// Which of `count` slides is active at `progress`.
///
/// Floor-based bucketing with a last-bucket clamp: progress 1.0, and any
/// overscroll beyond it, keeps the final slide selected instead of rolling
/// over into an out-of-range bucket.
pub fn active_slide(progress: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let scaled = (progress * count as f64).min((count - 1) as f64);
    scaled.floor().max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_select_first_and_last_slide() {
        for count in 1..=6 {
            assert_eq!(active_slide(0.0, count), 0);
            assert_eq!(active_slide(1.0, count), count - 1);
        }
    }

    #[test]
    fn quarter_progress_of_four_slides_is_slide_one() {
        assert_eq!(active_slide(0.25, 4), 1);
    }

    #[test]
    fn late_progress_holds_the_last_slide() {
        assert_eq!(active_slide(0.99, 4), 3);
    }

    #[test]
    fn overscroll_clamps_instead_of_wrapping() {
        assert_eq!(active_slide(1.2, 4), 3);
        assert_eq!(active_slide(10.0, 4), 3);
    }

    #[test]
    fn negative_progress_clamps_to_the_first_slide() {
        assert_eq!(active_slide(-0.4, 4), 0);
    }

    #[test]
    fn never_leaves_the_valid_range() {
        for count in 1..=8usize {
            for step in 0..=100 {
                let idx = active_slide(step as f64 / 100.0, count);
                assert!(idx < count);
            }
        }
    }

    #[test]
    fn empty_carousel_is_always_slide_zero() {
        assert_eq!(active_slide(0.7, 0), 0);
    }

    #[test]
    fn pinned_track_quantizes_into_viewport_sized_buckets() {
        use crate::motion::progress::{pinned, SectionMetrics};

        // A 3200px track against an 800px viewport: four slides, one
        // viewport-height of scroll each (2400px of travel).
        let viewport = 800.0;
        let at = |scrolled: f64| {
            active_slide(pinned(SectionMetrics::new(-scrolled, 3200.0), viewport), 4)
        };
        assert_eq!(at(0.0), 0);
        assert_eq!(at(600.0), 1); // a quarter of the travel
        assert_eq!(at(2376.0), 3); // 99%
        assert_eq!(at(4000.0), 3); // overscroll stays clamped
    }
}
