use serde::{Deserialize, Serialize};
use std::fmt;

/// Which detector produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionType {
    /// Folded substring containment against the taxonomy
    Lexical,
    /// Accepted answer from the semantic retrieval collaborator
    Semantic,
}

impl DetectionType {
    /// Human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for DetectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a detection was found: one section, or several cited together by a
/// single finding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceRef {
    /// A single section id
    Section(String),
    /// Several section ids cited as one piece of evidence
    Sections(Vec<String>),
}

impl SourceRef {
    /// Reference a single section
    #[must_use]
    pub fn section(id: impl Into<String>) -> Self {
        Self::Section(id.into())
    }

    /// Key form used by the merger. Multi-section sources are sorted so that
    /// citation order does not split otherwise identical findings.
    #[must_use]
    pub fn merge_key(&self) -> Self {
        match self {
            Self::Section(id) => Self::Section(id.clone()),
            Self::Sections(ids) => {
                let mut sorted = ids.clone();
                sorted.sort();
                Self::Sections(sorted)
            }
        }
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Section(id) => f.write_str(id),
            Self::Sections(ids) => f.write_str(&ids.join(", ")),
        }
    }
}

/// One matched occurrence of a risk factor or subtype in the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDetection {
    /// Name of the matched factor or subtype
    pub risk_name: String,

    /// Weight copied from the taxonomy at detection time
    pub weight: u32,

    /// Description copied from the taxonomy at detection time
    pub description: String,

    /// Which detector produced this detection
    pub detection_type: DetectionType,

    /// Where the risk was found
    pub source: SourceRef,
}

impl RiskDetection {
    /// Create a new detection
    #[must_use]
    pub fn new(
        risk_name: impl Into<String>,
        weight: u32,
        description: impl Into<String>,
        detection_type: DetectionType,
        source: SourceRef,
    ) -> Self {
        Self {
            risk_name: risk_name.into(),
            weight,
            description: description.into(),
            detection_type,
            source,
        }
    }
}

/// A deduplicated detection with weights summed over all duplicates sharing
/// the merge key `(risk_name, normalized source)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedRisk {
    /// Name of the matched factor or subtype
    pub risk_name: String,

    /// Sum of the weights of every merged detection
    pub weight: u32,

    /// Description of the first detection seen for this key
    pub description: String,

    /// Detector of the first detection seen for this key
    pub detection_type: DetectionType,

    /// Source of the first detection seen for this key
    pub source: SourceRef,
}

impl From<RiskDetection> for MergedRisk {
    fn from(detection: RiskDetection) -> Self {
        Self {
            risk_name: detection.risk_name,
            weight: detection.weight,
            description: detection.description,
            detection_type: detection.detection_type,
            source: detection.source,
        }
    }
}

impl MergedRisk {
    /// Fold another duplicate detection's weight into this entry
    pub fn add_weight(&mut self, weight: u32) {
        self.weight += weight;
    }
}

/// Question/answer pair from the semantic collaborator, retained for the
/// report whether or not the answer was accepted as a risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticFinding {
    /// The question issued for one risk factor
    pub question: String,

    /// The collaborator's verbatim answer
    pub answer: String,

    /// Section ids the collaborator cited as evidence
    pub source_sections: Vec<String>,
}

/// Final signing advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Total risk weight is below the threshold
    Sign,
    /// Total risk weight reached the threshold
    DoNotSign,
}

impl Recommendation {
    /// Human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sign => "sign",
            Self::DoNotSign => "do_not_sign",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated weight compared against the caller's threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Sum of all merged risk weights
    pub total_weight: u32,

    /// Caller-supplied cutoff
    pub threshold: u32,

    /// The resulting advice
    pub recommendation: Recommendation,
}

/// Complete, ordered, typed payload of one analysis run.
///
/// This is everything a report sink needs: the renderer decides layout, the
/// payload carries the data. Merged risks follow first-seen detection order;
/// the semantic log follows taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of paragraphs the contract was segmented into
    pub paragraph_count: usize,

    /// Deduplicated risks from both detectors
    pub risks: Vec<MergedRisk>,

    /// Every question/answer pair, acceptance independent
    pub semantic_log: Vec<SemanticFinding>,

    /// Total weight, threshold, recommendation
    pub score: ScoreResult,
}

impl AnalysisReport {
    /// True when neither detector produced anything to report
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.risks.is_empty() && self.semantic_log.is_empty()
    }
}
