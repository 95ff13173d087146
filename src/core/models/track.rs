//! Diploma track selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credits needed for a single diploma
pub const SINGLE_TRACK_CREDITS: u32 = 27;

/// Projects needed for a single diploma
pub const SINGLE_TRACK_PROJECTS: usize = 2;

/// The diploma pathway the student is planning for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    /// Diploma in Programming
    Programming,
    /// Diploma in Data Science, Business Analytics path
    DataScienceBa,
    /// Diploma in Data Science, Deep Learning & GenAI path
    DataScienceDl,
    /// Both diplomas
    #[default]
    Both,
}

impl Track {
    /// Identifier as stored in the plan file
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Programming => "programming",
            Self::DataScienceBa => "data-science-ba",
            Self::DataScienceDl => "data-science-dl",
            Self::Both => "both",
        }
    }

    /// Human-readable label used in summaries
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Programming => "Programming Diploma",
            Self::DataScienceBa => "Data Science Diploma (Business Analytics Track)",
            Self::DataScienceDl => "Data Science Diploma (Deep Learning & AI Track)",
            Self::Both => "Both Diplomas (Programming + Data Science)",
        }
    }

    /// Credits needed to finish the track
    #[must_use]
    pub const fn required_credits(&self) -> u32 {
        match self {
            Self::Both => SINGLE_TRACK_CREDITS * 2,
            _ => SINGLE_TRACK_CREDITS,
        }
    }

    /// Projects needed to finish the track
    #[must_use]
    pub const fn required_projects(&self) -> usize {
        match self {
            Self::Both => SINGLE_TRACK_PROJECTS * 2,
            _ => SINGLE_TRACK_PROJECTS,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_both() {
        assert_eq!(Track::default(), Track::Both);
    }

    #[test]
    fn test_requirements() {
        assert_eq!(Track::Both.required_credits(), 54);
        assert_eq!(Track::Both.required_projects(), 4);
        for track in [Track::Programming, Track::DataScienceBa, Track::DataScienceDl] {
            assert_eq!(track.required_credits(), 27);
            assert_eq!(track.required_projects(), 2);
        }
    }

    #[test]
    fn test_display_matches_stored_name() {
        for track in [Track::Programming, Track::DataScienceBa, Track::DataScienceDl, Track::Both] {
            let json = serde_json::to_string(&track).expect("Failed to serialize");
            assert_eq!(json, format!("\"{track}\""));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Track::DataScienceDl).expect("Failed to serialize");
        assert_eq!(json, "\"data-science-dl\"");
    }
}
