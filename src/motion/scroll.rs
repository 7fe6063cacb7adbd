/// Snapshot of the document's vertical scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    /// Largest offset the document can be scrolled to.
    pub fn max_offset(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Normalized progress through the scrollable range, always in `[0, 1]`.
    ///
    /// A document that fits the viewport has nowhere to scroll and reports 0.
    /// Overscroll (negative offsets, rubber-banding past the end) is clamped.
    pub fn progress(&self) -> f64 {
        let max = self.max_offset();
        if max <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / max).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn halfway_down_a_two_viewport_document() {
        let metrics = ScrollMetrics::new(500.0, 2000.0, 1000.0);
        assert_eq!(metrics.max_offset(), 1000.0);
        assert_eq!(metrics.progress(), 0.5);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-80.0, 0.0)]
    #[case(1000.0, 1.0)]
    #[case(1250.0, 1.0)]
    #[case(250.0, 0.25)]
    fn progress_is_clamped(#[case] offset: f64, #[case] expected: f64) {
        assert_eq!(ScrollMetrics::new(offset, 2000.0, 1000.0).progress(), expected);
    }

    #[test]
    fn short_document_has_no_progress() {
        assert_eq!(ScrollMetrics::new(0.0, 600.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(10.0, 1000.0, 1000.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::default().progress(), 0.0);
    }
}
