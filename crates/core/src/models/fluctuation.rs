/// Lower bound of a daily swing, in whole percent (inclusive).
pub const MIN_SWING_PERCENT: u32 = 1;

/// Upper bound of a daily swing, in whole percent (inclusive).
pub const MAX_SWING_PERCENT: u32 = 10;

/// Direction of a daily price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

/// One bounded daily move: a direction plus a whole-percent magnitude in
/// `MIN_SWING_PERCENT..=MAX_SWING_PERCENT`.
///
/// A zero magnitude is excluded from the drawn range, so every trading day
/// moves. Constructing an out-of-range `Fluctuation` by hand is possible
/// (tests force exact moves this way); the bounds constrain the random
/// sources, not the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fluctuation {
    /// Which way the price moves
    pub direction: Direction,

    /// Whole-percent magnitude (1..=10 when drawn)
    pub percent: u32,
}

impl Fluctuation {
    pub fn new(direction: Direction, percent: u32) -> Self {
        Self { direction, percent }
    }

    /// Convenience constructors for forced moves
    pub fn up(percent: u32) -> Self {
        Self::new(Direction::Up, percent)
    }

    pub fn down(percent: u32) -> Self {
        Self::new(Direction::Down, percent)
    }

    /// Apply this move to a price: `price ± (percent/100) * price`.
    #[must_use]
    pub fn apply(&self, price: f64) -> f64 {
        let delta = (f64::from(self.percent) / 100.0) * price;
        match self.direction {
            Direction::Up => price + delta,
            Direction::Down => price - delta,
        }
    }
}
