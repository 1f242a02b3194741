//! Binary probe outcome.

/// Result of one bounded-time check against one target.
///
/// Every probe maps every error, timeout, and refusal to `Down` at its own
/// boundary, so "never propagates a fault" is enforced by the signature
/// `check() -> ProbeStatus` rather than by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Up,
    Down,
}

impl ProbeStatus {
    /// Gauge representation: 1 for up, 0 for down.
    pub fn as_gauge(self) -> f64 {
        match self {
            ProbeStatus::Up => 1.0,
            ProbeStatus::Down => 0.0,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, ProbeStatus::Up)
    }
}

impl From<bool> for ProbeStatus {
    fn from(up: bool) -> Self {
        if up {
            ProbeStatus::Up
        } else {
            ProbeStatus::Down
        }
    }
}
