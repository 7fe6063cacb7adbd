/// Options for tracking whether an element is in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewOptions {
    /// Stop tracking after the first time the element is seen.
    pub once: bool,
    /// Fraction of the element that must overlap the viewport, in `[0, 1]`.
    /// Zero means any overlap at all.
    pub amount: f64,
    /// Pixels added to every side of the viewport before testing.
    /// Negative values shrink it.
    pub margin: f64,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            once: false,
            amount: 0.0,
            margin: 0.0,
        }
    }
}

impl InViewOptions {
    pub fn once() -> Self {
        Self {
            once: true,
            ..Self::default()
        }
    }

    /// `rootMargin` string understood by `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.margin)
    }

    /// Whether an intersection sample with the given ratio counts as "in view".
    pub fn accepts(&self, intersecting: bool, ratio: f64) -> bool {
        if self.amount <= 0.0 {
            intersecting
        } else {
            intersecting && ratio >= self.amount.min(1.0)
        }
    }
}

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    pub fn expand(&self, by: f64) -> Self {
        Self::new(
            self.left - by,
            self.top - by,
            (self.width + 2.0 * by).max(0.0),
            (self.height + 2.0 * by).max(0.0),
        )
    }

    /// Overlapping region, if the rectangles touch at all.
    ///
    /// Edge contact counts, matching `IntersectionObserver`, so a zero-sized
    /// element sitting inside the viewport is still intersecting.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left > right || top > bottom {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Share of `self` that lies inside `viewport`, in `[0, 1]`.
    pub fn intersection_ratio(&self, viewport: &Rect) -> f64 {
        match self.intersection(viewport) {
            None => 0.0,
            Some(_) if self.area() == 0.0 => 1.0,
            Some(overlap) => (overlap.area() / self.area()).clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Per-element hidden/visible state machine.
///
/// Fed with intersection samples; a one-shot tracker latches on the first
/// visible sample and ignores everything after it.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTracker {
    options: InViewOptions,
    state: Visibility,
    detached: bool,
}

impl VisibilityTracker {
    pub fn new(options: InViewOptions) -> Self {
        Self {
            options,
            state: Visibility::Hidden,
            detached: false,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// True once the tracker no longer wants samples: it was detached, or it
    /// is one-shot and has already been seen.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Applies one intersection sample. Returns the new state when it changed.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> Option<Visibility> {
        if self.detached {
            return None;
        }
        let next = if self.options.accepts(intersecting, ratio) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        if next.is_visible() && self.options.once {
            self.detached = true;
        }
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    /// Samples the element geometry directly, used at mount so an element
    /// that is already on screen does not wait for the first observer callback.
    pub fn observe_rect(&mut self, element: &Rect, viewport: &Rect) -> Option<Visibility> {
        let viewport = viewport.expand(self.options.margin);
        let intersecting = element.intersects(&viewport);
        let ratio = element.intersection_ratio(&viewport);
        self.observe(intersecting, ratio)
    }

    /// Stops accepting samples. Calling it again has no effect.
    pub fn detach(&mut self) -> bool {
        !std::mem::replace(&mut self.detached, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn starts_hidden() {
        let tracker = VisibilityTracker::new(InViewOptions::once());
        assert_eq!(tracker.state(), Visibility::Hidden);
        assert!(!tracker.is_detached());
    }

    #[test]
    fn one_shot_never_reverts() {
        let mut tracker = VisibilityTracker::new(InViewOptions::once());
        assert_eq!(tracker.observe(true, 0.4), Some(Visibility::Visible));
        assert!(tracker.is_detached());
        for _ in 0..3 {
            assert_eq!(tracker.observe(false, 0.0), None);
            assert!(tracker.is_visible());
        }
    }

    #[test]
    fn continuous_toggles_on_exit_and_reentry() {
        let mut tracker = VisibilityTracker::new(InViewOptions::default());
        assert_eq!(tracker.observe(true, 1.0), Some(Visibility::Visible));
        assert_eq!(tracker.observe(true, 0.5), None);
        assert_eq!(tracker.observe(false, 0.0), Some(Visibility::Hidden));
        assert_eq!(tracker.observe(true, 0.1), Some(Visibility::Visible));
        assert!(!tracker.is_detached());
    }

    #[test]
    fn amount_threshold_is_respected() {
        let options = InViewOptions {
            amount: 0.5,
            ..InViewOptions::default()
        };
        let mut tracker = VisibilityTracker::new(options);
        assert_eq!(tracker.observe(true, 0.2), None);
        assert_eq!(tracker.observe(true, 0.5), Some(Visibility::Visible));
    }

    #[test]
    fn already_on_screen_is_visible_on_first_check() {
        let mut tracker = VisibilityTracker::new(InViewOptions::once());
        let hero = Rect::new(100.0, 120.0, 600.0, 300.0);
        assert_eq!(tracker.observe_rect(&hero, &VIEWPORT), Some(Visibility::Visible));
    }

    #[test]
    fn below_the_fold_stays_hidden_until_margin_reaches_it() {
        let card = Rect::new(0.0, 850.0, 300.0, 200.0);
        let mut plain = VisibilityTracker::new(InViewOptions::once());
        assert_eq!(plain.observe_rect(&card, &VIEWPORT), None);
        assert!(!plain.is_visible());

        let mut eager = VisibilityTracker::new(InViewOptions {
            margin: 100.0,
            ..InViewOptions::once()
        });
        assert_eq!(eager.observe_rect(&card, &VIEWPORT), Some(Visibility::Visible));
    }

    #[test]
    fn detach_is_idempotent() {
        let mut tracker = VisibilityTracker::new(InViewOptions::default());
        assert!(tracker.detach());
        assert!(!tracker.detach());
        assert_eq!(tracker.observe(true, 1.0), None);
        assert!(!tracker.is_visible());
    }

    #[test]
    fn intersection_ratio_of_partially_visible_element() {
        let element = Rect::new(0.0, 700.0, 100.0, 200.0);
        assert_eq!(element.intersection_ratio(&VIEWPORT), 0.5);
        assert_eq!(Rect::new(0.0, 900.0, 10.0, 10.0).intersection_ratio(&VIEWPORT), 0.0);
        assert_eq!(Rect::new(5.0, 5.0, 0.0, 0.0).intersection_ratio(&VIEWPORT), 1.0);
    }
}
