//! Dashboard time model.
//!
//! Time is a monotonically increasing `Tick` counter: the number of seconds
//! elapsed since the driver's logical origin.  The driver owns the counter
//! and advances it (by one per refresh, or in bulk jumps); nothing in the
//! core ever advances it on its own.
//!
//! Using an integer tick means all schedule arithmetic is exact.  Tick
//! arithmetic saturates: the counter sticks at `u64::MAX` instead of wrapping
//! back to the origin, and differences bottom out at zero.

use std::fmt;

/// An absolute tick counter, one tick per second.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` seconds after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Seconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl std::ops::AddAssign<u64> for Tick {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        *self = self.offset(rhs);
    }
}

/// Same as [`Tick::since`]: zero when `rhs` is later.
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
