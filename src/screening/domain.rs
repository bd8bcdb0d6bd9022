use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Raw output of the passage-reading test, as analyzed upstream.
///
/// Every field carries `serde(default)` so collaborators that skipped a test
/// can submit an empty record; absent numbers degrade to 0, which biases the
/// dimension toward "difficulty detected". Callers must supply complete data
/// to avoid false positives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadingResult {
    pub accuracy_percent: f64,
    pub wpm: f64,
    pub phonological_issues: Vec<String>,
    pub visual_issues: Vec<String>,
    pub error_type: Option<String>,
    pub dyslexia_likelihood: f64,
}

/// Raw output of the spelling-dictation test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellingResult {
    pub accuracy_percent: f64,
    pub orthographic_weakness: f64,
    pub phoneme_grapheme_mismatch: f64,
    pub error_types: Vec<String>,
    pub error_classifications: Vec<String>,
}

/// Raw output of the letter-search visual test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualResult {
    pub hits: u32,
    pub false_positives: u32,
    pub correct_count: u32,
    pub selected_count: u32,
    pub time_elapsed: f64,
    pub accuracy: f64,
    pub target: Option<String>,
}

/// Raw output of the memory-sequence cognitive test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CognitiveResult {
    pub correct: u32,
    pub total: u32,
    pub time_elapsed: f64,
    pub accuracy: f64,
    pub max_length_reached: u32,
    pub sequence: Vec<String>,
    pub user_sequence: Vec<String>,
    pub response_times: Vec<f64>,
}

/// One assessment's four raw test payloads, passed by value into the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentSubmission {
    pub assessment_id: AssessmentId,
    pub reading: ReadingResult,
    pub spelling: SpellingResult,
    pub visual: VisualResult,
    pub cognitive: CognitiveResult,
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self(String::new())
    }
}

/// Ordinal difficulty classification, within a dimension or overall.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    NoSignificantDifficulty,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::NoSignificantDifficulty => "No significant difficulty",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

/// The five screening axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ReadingAndLanguage,
    WritingAndSpelling,
    VisualProcessing,
    AuditoryProcessing,
    CognitiveAndAttention,
}

impl Dimension {
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::ReadingAndLanguage => "Reading & Language",
            Dimension::WritingAndSpelling => "Writing & Spelling",
            Dimension::VisualProcessing => "Visual Processing",
            Dimension::AuditoryProcessing => "Auditory Processing",
            Dimension::CognitiveAndAttention => "Cognitive & Attention",
        }
    }

    pub fn ordered() -> [Dimension; 5] {
        [
            Dimension::ReadingAndLanguage,
            Dimension::WritingAndSpelling,
            Dimension::VisualProcessing,
            Dimension::AuditoryProcessing,
            Dimension::CognitiveAndAttention,
        ]
    }
}

/// Severity classification for one dimension with its composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSeverity {
    pub severity: Severity,
    pub score: f64,
}

/// Severity classifications across all five dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityByDimension {
    pub reading_and_language: DimensionSeverity,
    pub writing_and_spelling: DimensionSeverity,
    pub visual_processing: DimensionSeverity,
    pub auditory_processing: DimensionSeverity,
    pub cognitive_and_attention: DimensionSeverity,
}

impl SeverityByDimension {
    pub fn get(&self, dimension: Dimension) -> DimensionSeverity {
        match dimension {
            Dimension::ReadingAndLanguage => self.reading_and_language,
            Dimension::WritingAndSpelling => self.writing_and_spelling,
            Dimension::VisualProcessing => self.visual_processing,
            Dimension::AuditoryProcessing => self.auditory_processing,
            Dimension::CognitiveAndAttention => self.cognitive_and_attention,
        }
    }

    /// The worst (most severe) classification across the five dimensions.
    pub fn worst(&self) -> Severity {
        Dimension::ordered()
            .into_iter()
            .map(|dimension| self.get(dimension).severity)
            .max()
            .unwrap_or(Severity::NoSignificantDifficulty)
    }
}
