//! The four named stages of the competence axis and their descriptions.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::geometry::MAX_COMPETENCE;

/// Categorical color family of a stage. Styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Red,
    Orange,
    Blue,
    Green,
}

/// Icon shown next to a stage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageIcon {
    AlertTriangle,
    HelpCircle,
    TrendingUp,
    CheckCircle,
}

/// Static description of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageInfo {
    /// Display name.
    pub name: &'static str,
    /// Short caption drawn on the chart itself, if any.
    pub caption: Option<&'static str>,
    pub tone: Tone,
    /// Psychological framing.
    pub psychology: &'static str,
    /// Management / HR strategy framing.
    pub strategy: &'static str,
    pub icon: StageIcon,
}

/// A stage on the competence axis, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    MountStupid,
    ValleyOfDespair,
    SlopeOfEnlightenment,
    PlateauOfSustainability,
}

const MOUNT_STUPID: StageInfo = StageInfo {
    name: "Peak of 'Mount Stupid'",
    caption: Some("Mount\nStupid"),
    tone: Tone::Red,
    psychology: "Cognitive Bias: The individual lacks the metacognitive ability to recognize their own incompetence.",
    strategy: "Risk: High confidence but low skill leads to reckless errors. Requires careful supervision and structured feedback to reveal knowledge gaps.",
    icon: StageIcon::AlertTriangle,
};

const VALLEY_OF_DESPAIR: StageInfo = StageInfo {
    name: "Valley of Despair",
    caption: Some("Valley of\nDespair"),
    tone: Tone::Orange,
    psychology: "Realization: Awareness of incompetence sets in. Confidence plummets as they realize how much they don't know.",
    strategy: "Risk: Burnout or quitting. Needs mentorship, reassurance, and validation of progress to prevent disengagement.",
    icon: StageIcon::HelpCircle,
};

const SLOPE_OF_ENLIGHTENMENT: StageInfo = StageInfo {
    name: "Slope of Enlightenment",
    caption: None,
    tone: Tone::Blue,
    psychology: "Growth: Competence increases, and realistic confidence begins to return.",
    strategy: "Strategy: Provide challenging projects with autonomy. The employee is becoming reliable and self-correcting.",
    icon: StageIcon::TrendingUp,
};

const PLATEAU_OF_SUSTAINABILITY: StageInfo = StageInfo {
    name: "Plateau of Sustainability",
    caption: Some("Plateau of\nSustainability"),
    tone: Tone::Green,
    psychology: "Mastery: Confidence is now accurately aligned with high competence. Intuitive understanding.",
    strategy: "Strategy: Leadership potential. Use them as mentors. Warning: May have trouble understanding why beginners struggle (Curse of Knowledge).",
    icon: StageIcon::CheckCircle,
};

impl Stage {
    /// All stages in ascending competence order.
    pub const ALL: [Stage; 4] = [
        Stage::MountStupid,
        Stage::ValleyOfDespair,
        Stage::SlopeOfEnlightenment,
        Stage::PlateauOfSustainability,
    ];

    /// Select the stage a competence value falls into.
    pub fn for_competence(competence: u8) -> Self {
        if competence < Stage::ValleyOfDespair.min_competence() {
            Stage::MountStupid
        } else if competence < Stage::SlopeOfEnlightenment.min_competence() {
            Stage::ValleyOfDespair
        } else if competence < Stage::PlateauOfSustainability.min_competence() {
            Stage::SlopeOfEnlightenment
        } else {
            Stage::PlateauOfSustainability
        }
    }

    /// Lowest competence belonging to this stage.
    pub const fn min_competence(self) -> u8 {
        match self {
            Stage::MountStupid => 0,
            Stage::ValleyOfDespair => 22,
            Stage::SlopeOfEnlightenment => 45,
            Stage::PlateauOfSustainability => 80,
        }
    }

    /// Competence values covered by this stage.
    pub fn range(self) -> RangeInclusive<u8> {
        let end = match self {
            Stage::MountStupid => Stage::ValleyOfDespair.min_competence() - 1,
            Stage::ValleyOfDespair => Stage::SlopeOfEnlightenment.min_competence() - 1,
            Stage::SlopeOfEnlightenment => Stage::PlateauOfSustainability.min_competence() - 1,
            Stage::PlateauOfSustainability => MAX_COMPETENCE,
        };
        self.min_competence()..=end
    }

    /// Static description.
    pub fn info(self) -> &'static StageInfo {
        match self {
            Stage::MountStupid => &MOUNT_STUPID,
            Stage::ValleyOfDespair => &VALLEY_OF_DESPAIR,
            Stage::SlopeOfEnlightenment => &SLOPE_OF_ENLIGHTENMENT,
            Stage::PlateauOfSustainability => &PLATEAU_OF_SUSTAINABILITY,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn tone(self) -> Tone {
        self.info().tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Stage::for_competence(0), Stage::MountStupid);
        assert_eq!(Stage::for_competence(20), Stage::MountStupid);
        assert_eq!(Stage::for_competence(21), Stage::MountStupid);
        assert_eq!(Stage::for_competence(22), Stage::ValleyOfDespair);
        assert_eq!(Stage::for_competence(44), Stage::ValleyOfDespair);
        assert_eq!(Stage::for_competence(45), Stage::SlopeOfEnlightenment);
        assert_eq!(Stage::for_competence(79), Stage::SlopeOfEnlightenment);
        assert_eq!(Stage::for_competence(80), Stage::PlateauOfSustainability);
        assert_eq!(Stage::for_competence(100), Stage::PlateauOfSustainability);
    }

    #[test]
    fn test_exactly_one_stage_matches() {
        for competence in 0..=MAX_COMPETENCE {
            let matching: Vec<Stage> = Stage::ALL
                .iter()
                .copied()
                .filter(|stage| stage.range().contains(&competence))
                .collect();
            assert_eq!(matching.len(), 1, "competence {}", competence);
            assert_eq!(matching[0], Stage::for_competence(competence));
        }
    }

    #[test]
    fn test_ranges_are_contiguous() {
        assert_eq!(*Stage::ALL[0].range().start(), 0);
        for pair in Stage::ALL.windows(2) {
            assert_eq!(*pair[0].range().end() + 1, *pair[1].range().start());
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(*Stage::ALL[3].range().end(), MAX_COMPETENCE);
    }

    #[test]
    fn test_stage_info() {
        let info = Stage::MountStupid.info();
        assert_eq!(info.name, "Peak of 'Mount Stupid'");
        assert_eq!(info.tone, Tone::Red);
        assert_eq!(info.icon, StageIcon::AlertTriangle);

        assert_eq!(Stage::ValleyOfDespair.tone(), Tone::Orange);
        assert_eq!(Stage::SlopeOfEnlightenment.name(), "Slope of Enlightenment");
        assert!(Stage::SlopeOfEnlightenment.info().caption.is_none());
        assert_eq!(Stage::PlateauOfSustainability.info().icon, StageIcon::CheckCircle);

        for stage in Stage::ALL {
            assert!(!stage.info().psychology.is_empty());
            assert!(!stage.info().strategy.is_empty());
        }
    }

    #[test]
    fn test_stage_serializes_by_name() {
        let json = serde_json::to_string(&Stage::ValleyOfDespair).unwrap();
        assert_eq!(json, "\"ValleyOfDespair\"");
        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stage::ValleyOfDespair);
    }
}
