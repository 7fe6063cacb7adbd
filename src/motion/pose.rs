use std::fmt::Write;
use std::time::Duration;

/// Visual parameters an element animates from. The shown pose is always
/// [`Pose::REST`]: fully opaque, untransformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent and pushed down by `y` pixels.
    pub fn rise(y: f64) -> Self {
        Self {
            opacity: 0.0,
            y,
            ..Self::REST
        }
    }

    /// Transparent and shifted sideways by `x` pixels.
    pub fn slide(x: f64) -> Self {
        Self {
            opacity: 0.0,
            x,
            ..Self::REST
        }
    }

    /// Transparent and scaled down.
    pub fn grow(scale: f64) -> Self {
        Self {
            opacity: 0.0,
            scale,
            ..Self::REST
        }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn transform(&self) -> String {
        if self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 {
            return "none".to_string();
        }
        let mut out = String::new();
        if self.x != 0.0 || self.y != 0.0 {
            let _ = write!(out, "translate({}px, {}px)", self.x, self.y);
        }
        if self.scale != 1.0 {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "scale({})", self.scale);
        }
        out
    }
}

/// How a reveal plays out once triggered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
}

impl Timing {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

/// Formats a duration the way CSS expects it, e.g. `0.15s`.
pub fn css_seconds(duration: Duration) -> String {
    format!("{}s", duration.as_millis() as f64 / 1000.0)
}

/// Inline style for an element that sits at `hidden` until `shown` flips,
/// then transitions to rest.
pub fn reveal_style(hidden: Pose, shown: bool, timing: Timing) -> String {
    let pose = if shown { Pose::REST } else { hidden };
    format!(
        "opacity: {}; transform: {}; transition: opacity {dur} ease-out {delay}, transform {dur} ease-out {delay};",
        pose.opacity,
        pose.transform(),
        dur = css_seconds(timing.duration),
        delay = css_seconds(timing.delay),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_has_no_transform() {
        assert_eq!(Pose::REST.transform(), "none");
    }

    #[test]
    fn hidden_pose_combines_translate_and_scale() {
        assert_eq!(
            Pose::rise(50.0).with_scale(0.9).transform(),
            "translate(0px, 50px) scale(0.9)"
        );
        assert_eq!(Pose::grow(0.8).transform(), "scale(0.8)");
        assert_eq!(Pose::slide(-20.0).transform(), "translate(-20px, 0px)");
    }

    #[test]
    fn css_seconds_keeps_fractions() {
        assert_eq!(css_seconds(Duration::from_millis(150)), "0.15s");
        assert_eq!(css_seconds(Duration::from_millis(800)), "0.8s");
        assert_eq!(css_seconds(Duration::ZERO), "0s");
        assert_eq!(css_seconds(Duration::from_secs(1)), "1s");
    }

    #[test]
    fn style_switches_pose_but_keeps_timing() {
        let timing = Timing::new(Duration::from_millis(800)).delayed(Duration::from_millis(200));
        let hidden = reveal_style(Pose::rise(50.0), false, timing);
        let shown = reveal_style(Pose::rise(50.0), true, timing);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 50px);"));
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("opacity 0.8s ease-out 0.2s"));
        assert!(hidden.ends_with("transform 0.8s ease-out 0.2s;"));
    }
}
