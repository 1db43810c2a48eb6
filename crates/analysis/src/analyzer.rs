use crate::lexical::LexicalMatcher;
use crate::merge::merge;
use crate::score::score;
use crate::semantic::{SemanticScan, SemanticScanConfig};
use crate::types::{AnalysisReport, RiskDetection, SemanticFinding};
use contract_retrieval::SemanticIndex;
use contract_segmenter::{segment, Paragraph};
use contract_taxonomy::RiskTaxonomy;

/// Stock recommendation threshold
pub const DEFAULT_THRESHOLD: u32 = 20;

/// Options for one analyzer instance
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Weight cutoff at which signing is discouraged
    pub threshold: u32,

    /// Semantic adapter configuration (question template, negative markers)
    pub semantic: SemanticScanConfig,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            semantic: SemanticScanConfig::default(),
        }
    }
}

/// End-to-end risk analysis: segment, detect, merge, score.
///
/// The analyzer owns the taxonomy and the detector configuration; the
/// contract text and the semantic collaborator arrive per call, so one
/// analyzer serves any number of documents.
pub struct ContractAnalyzer {
    taxonomy: RiskTaxonomy,
    matcher: LexicalMatcher,
    semantic: SemanticScan,
    threshold: u32,
}

impl ContractAnalyzer {
    /// Create an analyzer over a loaded taxonomy
    #[must_use]
    pub fn new(taxonomy: RiskTaxonomy, options: AnalysisOptions) -> Self {
        let matcher = LexicalMatcher::new(&taxonomy);
        Self {
            taxonomy,
            matcher,
            semantic: SemanticScan::new(options.semantic),
            threshold: options.threshold,
        }
    }

    /// The taxonomy this analyzer scores against
    #[must_use]
    pub fn taxonomy(&self) -> &RiskTaxonomy {
        &self.taxonomy
    }

    /// Full analysis: both detectors, then merge and score
    pub async fn analyze(&self, text: &str, index: &dyn SemanticIndex) -> AnalysisReport {
        let paragraphs = segment(text);
        self.analyze_paragraphs(&paragraphs, index).await
    }

    /// Full analysis over already-segmented paragraphs.
    ///
    /// Callers that segment up front (to build a retrieval index over the
    /// same paragraphs) use this entry point to avoid segmenting twice.
    pub async fn analyze_paragraphs(
        &self,
        paragraphs: &[Paragraph],
        index: &dyn SemanticIndex,
    ) -> AnalysisReport {
        if paragraphs.is_empty() {
            log::warn!("Contract produced no paragraphs; nothing to analyze");
            return self.empty_report();
        }

        log::info!(
            "Analyzing {} paragraphs against {} risk factors",
            paragraphs.len(),
            self.taxonomy.len()
        );

        let mut detections = self.matcher.scan(paragraphs);
        let semantic = self.semantic.run(index, &self.taxonomy).await;
        detections.extend(semantic.detections);

        self.finish(paragraphs.len(), detections, semantic.log)
    }

    /// Lexical-only analysis, for offline runs without any collaborator
    #[must_use]
    pub fn analyze_lexical(&self, text: &str) -> AnalysisReport {
        let paragraphs = segment(text);
        if paragraphs.is_empty() {
            log::warn!("Contract produced no paragraphs; nothing to analyze");
            return self.empty_report();
        }

        let detections = self.matcher.scan(&paragraphs);
        self.finish(paragraphs.len(), detections, Vec::new())
    }

    fn finish(
        &self,
        paragraph_count: usize,
        detections: Vec<RiskDetection>,
        semantic_log: Vec<SemanticFinding>,
    ) -> AnalysisReport {
        let risks = merge(detections);
        let score = score(&risks, &semantic_log, self.threshold);

        log::info!(
            "Analysis complete: {} merged risks, total weight {} against threshold {} -> {}",
            risks.len(),
            score.total_weight,
            score.threshold,
            score.recommendation
        );

        AnalysisReport {
            paragraph_count,
            risks,
            semantic_log,
            score,
        }
    }

    fn empty_report(&self) -> AnalysisReport {
        self.finish(0, Vec::new(), Vec::new())
    }
}
