//! User-selectable summary settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How many points the summary should aim for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    /// 7 points
    Short,
    /// 14 points
    #[default]
    Medium,
    /// 22 points
    Detailed,
}

impl SummaryLength {
    /// Target number of summary points for this length.
    pub fn target_points(self) -> usize {
        match self {
            SummaryLength::Short => 7,
            SummaryLength::Medium => 14,
            SummaryLength::Detailed => 22,
        }
    }

    /// Setting name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Detailed => "detailed",
        }
    }
}

/// Output layout of the rendered summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// One block per point
    #[default]
    Bullets,
    /// Points grouped into short prose sections
    Paragraphs,
    /// Points grouped under "Part N" headings
    Outline,
}

impl SummaryStyle {
    /// Setting name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryStyle::Bullets => "bullets",
            SummaryStyle::Paragraphs => "paragraphs",
            SummaryStyle::Outline => "outline",
        }
    }
}

/// Topical lens that decides which keywords are rewarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFocus {
    /// Conclusions and key findings
    #[default]
    Overview,
    /// Results and quantitative statements
    Data,
    /// Methodology and procedure
    Methods,
}

impl SummaryFocus {
    /// Keywords rewarded under this focus, all lowercase.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SummaryFocus::Overview => &[
                "important",
                "significant",
                "key",
                "main",
                "primary",
                "conclude",
                "result",
                "finding",
            ],
            SummaryFocus::Data => &[
                "result",
                "data",
                "found",
                "showed",
                "demonstrated",
                "percent",
                "increase",
                "decrease",
                "significant",
            ],
            SummaryFocus::Methods => &[
                "method",
                "methodology",
                "approach",
                "procedure",
                "technique",
                "protocol",
                "measured",
                "analyzed",
            ],
        }
    }

    /// Setting name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SummaryFocus::Overview => "overview",
            SummaryFocus::Data => "data",
            SummaryFocus::Methods => "methods",
        }
    }
}

macro_rules! impl_setting_name {
    ($ty:ty, $kind:literal, [$($name:literal => $variant:expr),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($variant),)+
                    _ => Err(Error::InvalidSetting {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_setting_name!(SummaryLength, "length", [
    "short" => SummaryLength::Short,
    "medium" => SummaryLength::Medium,
    "detailed" => SummaryLength::Detailed,
]);

impl_setting_name!(SummaryStyle, "style", [
    "bullets" => SummaryStyle::Bullets,
    "paragraphs" => SummaryStyle::Paragraphs,
    "outline" => SummaryStyle::Outline,
]);

impl_setting_name!(SummaryFocus, "focus", [
    "overview" => SummaryFocus::Overview,
    "data" => SummaryFocus::Data,
    "methods" => SummaryFocus::Methods,
]);

/// Settings for one summary generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Target summary length
    pub length: SummaryLength,

    /// Output layout
    pub style: SummaryStyle,

    /// Keyword focus
    pub focus: SummaryFocus,
}

impl SelectionSettings {
    /// Create settings with defaults (medium, bullets, overview).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build settings from raw option names.
    ///
    /// Unrecognized names fall back to the default for that option
    /// instead of failing.
    pub fn from_names(length: &str, style: &str, focus: &str) -> Self {
        Self {
            length: parse_or_default(length),
            style: parse_or_default(style),
            focus: parse_or_default(focus),
        }
    }

    /// Set the summary length.
    pub fn with_length(mut self, length: SummaryLength) -> Self {
        self.length = length;
        self
    }

    /// Set the output style.
    pub fn with_style(mut self, style: SummaryStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the keyword focus.
    pub fn with_focus(mut self, focus: SummaryFocus) -> Self {
        self.focus = focus;
        self
    }

    /// Target number of summary points.
    pub fn target_points(&self) -> usize {
        self.length.target_points()
    }
}

fn parse_or_default<T>(name: &str) -> T
where
    T: FromStr<Err = Error> + Default + fmt::Display,
{
    name.parse().unwrap_or_else(|err: Error| {
        let fallback = T::default();
        log::warn!("{}, using {}", err, fallback);
        fallback
    })
}
