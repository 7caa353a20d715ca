use serde::{Deserialize, Serialize};

/// Independently scored aspect of proctoring compliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    PresenceContinuity,
    VisualBehavior,
    AudioQuality,
    IdentityConsistency,
    NavigationSecurity,
    SessionContinuity,
    LipSync,
    Lighting,
}

impl Dimension {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::PresenceContinuity,
            Self::VisualBehavior,
            Self::AudioQuality,
            Self::IdentityConsistency,
            Self::NavigationSecurity,
            Self::SessionContinuity,
            Self::LipSync,
            Self::Lighting,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PresenceContinuity => "Presence Continuity",
            Self::VisualBehavior => "Visual Behavior",
            Self::AudioQuality => "Audio Quality",
            Self::IdentityConsistency => "Identity Consistency",
            Self::NavigationSecurity => "Navigation & Security",
            Self::SessionContinuity => "Session Continuity",
            Self::LipSync => "Lip-Sync Synchronization",
            Self::Lighting => "Lighting Conditions",
        }
    }

    /// Percentage points contributed to the overall score; all eight sum to 100.
    pub const fn weight(self) -> u8 {
        match self {
            Self::PresenceContinuity => 30,
            Self::VisualBehavior | Self::AudioQuality => 15,
            Self::IdentityConsistency | Self::NavigationSecurity | Self::SessionContinuity => 10,
            Self::LipSync | Self::Lighting => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_partition_one_hundred() {
        let total: u32 = Dimension::ordered()
            .iter()
            .map(|dimension| u32::from(dimension.weight()))
            .sum();
        assert_eq!(total, 100);
    }
}
