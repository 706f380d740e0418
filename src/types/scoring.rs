use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = u32;

/// Upper bound of every scorer's total.
pub const MAX_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Danger => "✗",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::APlus => "Excellent",
            Self::A => "Very good",
            Self::BPlus => "Good",
            Self::B => "Fair",
            Self::C => "Average",
            Self::D => "Weak",
            Self::F => "Needs urgent improvement",
        }
    }

    pub fn class(self) -> Severity {
        match self {
            Self::APlus | Self::A => Severity::Success,
            Self::BPlus | Self::B => Severity::Info,
            Self::C | Self::D => Severity::Warning,
            Self::F => Severity::Danger,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evaluated rule outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: Score,
    pub grade: Grade,
    pub grade_text: String,
    pub grade_class: Severity,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub checklist: Vec<ChecklistEntry>,
}

impl ScoreResult {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
