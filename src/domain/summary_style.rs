use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Report style presets. Each maps to a distinct instruction string; the
/// summarization request shape is identical for all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    #[default]
    Professional,
    BulletPoints,
    DetailedMinutes,
}

impl SummaryStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Professional => "professional",
            SummaryStyle::BulletPoints => "bullet_points",
            SummaryStyle::DetailedMinutes => "detailed_minutes",
        }
    }

    /// The style-specific instruction prepended to the summarization prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            SummaryStyle::Professional => {
                "Write a professional, neutral, well-structured meeting report \
                 with clear headings and sub-headings."
            }
            SummaryStyle::BulletPoints => {
                "Write a very concise summary as bullet-point lists, \
                 highlighting the key ideas and the important figures."
            }
            SummaryStyle::DetailedMinutes => {
                "Write a detailed report close to formal minutes of meeting, \
                 staying faithful to the content without inventing facts."
            }
        }
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(SummaryStyle::Professional),
            "bullet_points" => Ok(SummaryStyle::BulletPoints),
            "detailed_minutes" => Ok(SummaryStyle::DetailedMinutes),
            other => Err(format!(
                "Invalid summary style: {}. Expected: professional, bullet_points, or detailed_minutes",
                other
            )),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
