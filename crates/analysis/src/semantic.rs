use crate::types::{DetectionType, RiskDetection, SemanticFinding, SourceRef};
use contract_retrieval::SemanticIndex;
use contract_taxonomy::RiskTaxonomy;

/// Configuration for the semantic findings adapter
#[derive(Debug, Clone)]
pub struct SemanticScanConfig {
    /// Question issued per factor; `{risk}` is replaced by the factor name
    pub question_template: String,

    /// Lower-cased answers containing any of these markers are rejected.
    ///
    /// This is fragile string matching tied to the collaborator's phrasing;
    /// there is no guarantee it generalizes to arbitrary model output, which
    /// is why the set is configuration and not hard-coded.
    pub negative_markers: Vec<String>,
}

impl Default for SemanticScanConfig {
    fn default() -> Self {
        Self {
            question_template: "Najděte zmínky o '{risk}' v tomto textu.".to_string(),
            negative_markers: vec!["nenalezeno".to_string(), "není".to_string()],
        }
    }
}

/// Result of one semantic pass over the taxonomy
#[derive(Debug, Clone, Default)]
pub struct SemanticScanOutcome {
    /// Accepted findings, one detection per cited section
    pub detections: Vec<RiskDetection>,

    /// Every successful question/answer pair, in taxonomy order
    pub log: Vec<SemanticFinding>,
}

/// Adapter normalizing collaborator answers into risk detections.
///
/// One question is issued per top-level factor, sequentially in taxonomy
/// order; subtypes are not queried. A failing query is logged and skipped
/// without touching the other factors: it contributes neither detections nor
/// a log entry. Rejected answers keep their log entry but contribute no
/// detections.
pub struct SemanticScan {
    config: SemanticScanConfig,
}

impl SemanticScan {
    /// Create an adapter with the given configuration
    #[must_use]
    pub fn new(config: SemanticScanConfig) -> Self {
        Self { config }
    }

    /// The question issued for one risk factor
    #[must_use]
    pub fn question_for(&self, risk_name: &str) -> String {
        self.config.question_template.replace("{risk}", risk_name)
    }

    /// An answer is negative when it is empty or carries a negative marker
    fn is_negative(&self, answer: &str) -> bool {
        let lowered = answer.to_lowercase();
        if lowered.trim().is_empty() {
            return true;
        }
        self.config
            .negative_markers
            .iter()
            .any(|marker| lowered.contains(&marker.to_lowercase()))
    }

    /// Query the collaborator for every top-level factor
    pub async fn run(
        &self,
        index: &dyn SemanticIndex,
        taxonomy: &RiskTaxonomy,
    ) -> SemanticScanOutcome {
        let mut outcome = SemanticScanOutcome::default();

        for factor in &taxonomy.factors {
            let question = self.question_for(&factor.name);
            log::debug!("Semantic query: {question}");

            let retrieved = match index.answer(&question).await {
                Ok(retrieved) => retrieved,
                Err(err) => {
                    log::warn!("Semantic query for '{}' failed: {err}", factor.name);
                    continue;
                }
            };

            let answer = retrieved.answer.trim().to_string();
            let accepted = !self.is_negative(&answer);
            log::debug!(
                "Answer for '{}' ({}): {answer}",
                factor.name,
                if accepted { "accepted" } else { "rejected" }
            );

            outcome.log.push(SemanticFinding {
                question,
                answer,
                source_sections: retrieved.source_sections.clone(),
            });

            if !accepted {
                continue;
            }

            for section in &retrieved.source_sections {
                outcome.detections.push(RiskDetection::new(
                    &factor.name,
                    factor.weight,
                    &factor.description,
                    DetectionType::Semantic,
                    SourceRef::section(section),
                ));
            }
        }

        log::debug!(
            "Semantic scan: {} detections, {} logged answers",
            outcome.detections.len(),
            outcome.log.len()
        );
        outcome
    }
}
