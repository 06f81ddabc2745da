use serde::{Deserialize, Serialize};

use crate::DomainError;

/// One of the three fixed stages a project progresses through.
///
/// Wire format matches the stored column values: `"Phase 1"` .. `"Phase 3"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    #[serde(rename = "Phase 1")]
    One,
    #[serde(rename = "Phase 2")]
    Two,
    #[serde(rename = "Phase 3")]
    Three,
}

impl Phase {
    pub const ALL: [Self; 3] = [Self::One, Self::Two, Self::Three];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "Phase 1",
            Self::Two => "Phase 2",
            Self::Three => "Phase 3",
        }
    }

    /// Human-readable stage title used in notifications and phase views.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::One => "Research & Planning",
            Self::Two => "Build",
            Self::Three => "Marketing & Launch",
        }
    }

    /// The phase after this one, `None` after Phase 3.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::One => Some(Self::Two),
            Self::Two => Some(Self::Three),
            Self::Three => None,
        }
    }

    /// The phase whose completion gates this one, `None` for Phase 1.
    #[must_use]
    pub const fn prior(self) -> Option<Self> {
        match self {
            Self::One => None,
            Self::Two => Some(Self::One),
            Self::Three => Some(Self::Two),
        }
    }
}

impl std::str::FromStr for Phase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Phase 1" | "phase1" | "1" => Ok(Self::One),
            "Phase 2" | "phase2" | "2" => Ok(Self::Two),
            "Phase 3" | "phase3" | "3" => Ok(Self::Three),
            _ => Err(DomainError::InvalidPhase(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_ordering_chain() {
        assert_eq!(Phase::One.next(), Some(Phase::Two));
        assert_eq!(Phase::Two.next(), Some(Phase::Three));
        assert_eq!(Phase::Three.next(), None);
        assert_eq!(Phase::One.prior(), None);
        assert_eq!(Phase::Three.prior(), Some(Phase::Two));
    }

    #[test]
    fn phase_wire_roundtrip() {
        for phase in Phase::ALL {
            assert_eq!(phase.as_str().parse::<Phase>().unwrap(), phase);
        }
        assert!("Phase 4".parse::<Phase>().is_err());
    }

    #[test]
    fn phase_accepts_url_form() {
        assert_eq!("phase2".parse::<Phase>().unwrap(), Phase::Two);
    }
}
