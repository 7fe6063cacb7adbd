/// Last known pointer coordinates in viewport pixels.
///
/// The default is the origin, which is what consumers see before the first
/// pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for PointerPosition {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        assert_eq!(PointerPosition::default(), PointerPosition::ORIGIN);
    }

    #[test]
    fn follower_is_centered_on_pointer() {
        let pointer = PointerPosition::from((120, 80));
        assert_eq!(pointer, PointerPosition::new(120.0, 80.0));
        assert_eq!(pointer.offset(-12.0, -12.0), PointerPosition::new(108.0, 68.0));
    }
}
