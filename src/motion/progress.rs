//! Scroll position to normalized section progress.
//!
//! Progress is always recomputed from the section's absolute geometry on the
//! current tick. Nothing here accumulates deltas, so a resting scroll
//! position maps to the same value no matter how the user arrived at it.

/// Viewport-relative geometry of a section, measured from its bounding box
/// on a scroll or resize tick.
///
/// `top` is the distance in pixels from the viewport top to the section top
/// (negative once the section has scrolled past it). `height` is the height
/// of the section itself, or of the full scroll track for pinned sections.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionMetrics {
    pub top: f64,
    pub height: f64,
}

impl SectionMetrics {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Progress of a section travelling through the viewport: 0.0 when its top
/// sits at the viewport bottom, 1.0 once its bottom reaches the viewport
/// top, linear in between.
///
/// A viewport with no height yet (first paint) yields 0.0 rather than
/// dividing by zero.
pub fn entry_to_exit(metrics: SectionMetrics, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let span = viewport_height + metrics.height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - metrics.top) / span).clamp(0.0, 1.0)
}

/// Progress through a pinned section's extended scroll distance.
///
/// The track is taller than the viewport (typically a whole-number multiple
/// of it) and its content stays stuck on screen while the track is consumed.
/// Progress is the fraction of the extra travel already scrolled.
pub fn pinned(metrics: SectionMetrics, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    let travel = metrics.height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    (-metrics.top / travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_starts_at_zero_when_top_reaches_viewport_bottom() {
        let metrics = SectionMetrics::new(800.0, 600.0);
        assert_eq!(entry_to_exit(metrics, 800.0), 0.0);
    }

    #[test]
    fn exit_ends_at_one_when_bottom_reaches_viewport_top() {
        let metrics = SectionMetrics::new(-600.0, 600.0);
        assert_eq!(entry_to_exit(metrics, 800.0), 1.0);
    }

    #[test]
    fn entry_to_exit_is_monotone_in_scroll() {
        let viewport = 800.0;
        let mut last = -1.0;
        // Scrolling down moves the section top upward through the viewport.
        for step in 0..=20 {
            let top = 800.0 - step as f64 * 100.0;
            let p = entry_to_exit(SectionMetrics::new(top, 600.0), viewport);
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn zero_viewport_is_zero_progress() {
        let metrics = SectionMetrics::new(100.0, 600.0);
        assert_eq!(entry_to_exit(metrics, 0.0), 0.0);
        assert_eq!(pinned(metrics, 0.0), 0.0);
    }

    #[test]
    fn unmeasured_section_is_zero_progress() {
        assert_eq!(entry_to_exit(SectionMetrics::default(), 0.0), 0.0);
        assert_eq!(pinned(SectionMetrics::default(), 800.0), 0.0);
    }

    #[test]
    fn pinned_spans_the_extra_travel() {
        // A 4x track: 3200px tall against an 800px viewport.
        let viewport = 800.0;
        assert_eq!(pinned(SectionMetrics::new(0.0, 3200.0), viewport), 0.0);
        assert_eq!(pinned(SectionMetrics::new(-1200.0, 3200.0), viewport), 0.5);
        assert_eq!(pinned(SectionMetrics::new(-2400.0, 3200.0), viewport), 1.0);
    }

    #[test]
    fn pinned_clamps_overscroll() {
        let viewport = 800.0;
        assert_eq!(pinned(SectionMetrics::new(400.0, 3200.0), viewport), 0.0);
        assert_eq!(pinned(SectionMetrics::new(-9000.0, 3200.0), viewport), 1.0);
    }

    #[test]
    fn pinned_track_shorter_than_viewport_never_progresses() {
        assert_eq!(pinned(SectionMetrics::new(-100.0, 600.0), 800.0), 0.0);
    }
}
