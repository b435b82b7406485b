use std::fmt::{Debug, Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::Time;

/// An abstraction of the time keys samples can be tagged with.
/// Only the primary time ever participates in kernel weighting
/// or in window tests.
pub trait PrimaryTime: Copy + Debug {
    /// Returns the primary coupling time of the key.
    fn primary(&self) -> Time;
}

impl PrimaryTime for Time {
    fn primary(&self) -> Time {
        *self
    }
}

/// A compound time key for samples which share a primary coupling time
/// but are distinguished by a sub-iteration marker.
/// Ordering is lexicographic: primary first, then sub.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct SubIterationTime {
    pub primary: Time,
    pub sub: Time,
}

impl SubIterationTime {
    pub fn new(primary: Time, sub: Time) -> Self {
        Self { primary, sub }
    }
}

impl PrimaryTime for SubIterationTime {
    fn primary(&self) -> Time {
        self.primary
    }
}

impl From<(Time, Time)> for SubIterationTime {
    fn from((primary, sub): (Time, Time)) -> Self {
        Self { primary, sub }
    }
}

impl Display for SubIterationTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:{}", self.primary, self.sub)
    }
}
