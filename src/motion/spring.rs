/// Damped spring used to smooth the cursor follower. One instance per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    position: f64,
    velocity: f64,
}

const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;
// Larger frames (a backgrounded tab) are split so the integration stays stable.
const MAX_SUBSTEP: f64 = 1.0 / 120.0;

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: mass.max(f64::EPSILON),
            position: 0.0,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Jumps straight to `position` with no motion.
    pub fn snap(&mut self, position: f64) {
        self.position = position;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self, target: f64) -> bool {
        (target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advances the spring toward `target` by `dt` seconds and returns the
    /// new position. Settles exactly on the target once at rest.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest(target) {
            self.snap(target);
        }
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follower() -> Spring {
        Spring::new(500.0, 28.0, 1.0)
    }

    #[test]
    fn converges_to_target() {
        let mut spring = follower();
        for _ in 0..120 {
            spring.step(108.0, 1.0 / 60.0);
        }
        assert_eq!(spring.position(), 108.0);
        assert!(spring.is_at_rest(108.0));
    }

    #[test]
    fn moves_toward_target_on_first_frame() {
        let mut spring = follower();
        let after = spring.step(100.0, 1.0 / 60.0);
        assert!(after > 0.0 && after < 100.0);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut spring = follower();
        spring.snap(5.0);
        assert_eq!(spring.step(50.0, 0.0), 5.0);
        assert_eq!(spring.velocity(), 0.0);
    }
}
