use std::fmt;

pub type Flow = i64;

/// Edge capacity. Unbounded arcs are used for super-source/super-sink
/// wiring and are never the bottleneck of an augmenting path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Finite(Flow),
    Unbounded,
}

impl Capacity {
    #[inline]
    pub fn is_positive(&self) -> bool {
        match self {
            Capacity::Finite(value) => *value > 0,
            Capacity::Unbounded => true,
        }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    // amounts are always finite Flow values, so Unbounded arithmetic
    // never meets another Unbounded
    #[inline]
    pub fn increase(self, amount: Flow) -> Capacity {
        match self {
            Capacity::Finite(value) => Capacity::Finite(value + amount),
            Capacity::Unbounded => Capacity::Unbounded,
        }
    }

    #[inline]
    pub fn min(self, other: Capacity) -> Capacity {
        match (self, other) {
            (Capacity::Finite(a), Capacity::Finite(b)) => Capacity::Finite(a.min(b)),
            (Capacity::Finite(a), Capacity::Unbounded) => Capacity::Finite(a),
            (Capacity::Unbounded, other) => other,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Finite(value) => write!(f, "{}", value),
            Capacity::Unbounded => write!(f, "inf"),
        }
    }
}
