// src/view.rs
use crate::types::MatchResult;
use serde::Serialize;

/// Stroke geometry of the score circle (radius 75 viewbox units).
pub const GAUGE_CIRCUMFERENCE: f64 = 471.0;

/// Color bucket for a match score. Boundary values belong to the higher
/// bucket: 40 is already Medium, 75 is already High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreClass {
    Low,
    Medium,
    High,
}

impl ScoreClass {
    pub fn of(percent: f64) -> Self {
        if percent < 40.0 {
            Self::Low
        } else if percent < 75.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "score-low",
            Self::Medium => "score-medium",
            Self::High => "score-high",
        }
    }
}

/// Dash parameters for the circular gauge. The fill is a continuous function
/// of the unrounded percent; only the label is rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub dash_array: f64,
    pub dash_offset: f64,
}

impl Gauge {
    fn of(percent: f64) -> Self {
        Self {
            dash_array: GAUGE_CIRCUMFERENCE,
            dash_offset: GAUGE_CIRCUMFERENCE - (percent / 100.0) * GAUGE_CIRCUMFERENCE,
        }
    }
}

/// One skills panel: heading with count, then either tags or a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSection {
    pub heading: String,
    pub tags: Vec<String>,
    pub placeholder: Option<&'static str>,
}

impl SkillSection {
    fn new(title: &str, skills: &[String], placeholder: &'static str) -> Self {
        Self {
            heading: format!("{} ({})", title, skills.len()),
            tags: skills.to_vec(),
            placeholder: if skills.is_empty() {
                Some(placeholder)
            } else {
                None
            },
        }
    }
}

/// Fully derived rendering of one [`MatchResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreView {
    pub percent_label: String,
    pub score_class: ScoreClass,
    pub gauge: Gauge,
    pub matched: SkillSection,
    pub missing: SkillSection,
}

impl ScoreView {
    fn of(result: &MatchResult) -> Self {
        Self {
            percent_label: format!("{}%", result.match_percent.round() as i64),
            score_class: ScoreClass::of(result.match_percent),
            gauge: Gauge::of(result.match_percent),
            matched: SkillSection::new("Matched Skills", &result.found, "No matches found"),
            missing: SkillSection::new("Missing Skills", &result.missing, "All requirements met!"),
        }
    }
}

/// What the results panel shows. Loading suppresses both the empty state and
/// any stale result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ResultsView {
    Idle,
    Busy,
    Scored(ScoreView),
}

impl ResultsView {
    pub fn render(loading: bool, result: Option<&MatchResult>) -> Self {
        if loading {
            return Self::Busy;
        }
        match result {
            Some(result) => Self::Scored(ScoreView::of(result)),
            None => Self::Idle,
        }
    }
}

/// Snapshot handed to a frontend: the results panel plus whether the submit
/// control should accept clicks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowView {
    pub submit_enabled: bool,
    pub results: ResultsView,
}

impl WorkflowView {
    pub fn of(loading: bool, result: Option<&MatchResult>) -> Self {
        Self {
            submit_enabled: !loading,
            results: ResultsView::render(loading, result),
        }
    }
}
