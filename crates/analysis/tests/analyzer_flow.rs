//! End-to-end analysis flows over the built-in taxonomy, using the bundled
//! keyword index and hand-rolled collaborator fakes.

use async_trait::async_trait;
use contract_analysis::{
    AnalysisOptions, ContractAnalyzer, DetectionType, Recommendation, SourceRef,
};
use contract_retrieval::{
    KeywordIndex, Result as RetrievalResult, RetrievalError, RetrievedAnswer, SemanticIndex,
};
use contract_segmenter::segment;
use contract_taxonomy::RiskTaxonomy;
use pretty_assertions::assert_eq;

fn analyzer(threshold: u32) -> ContractAnalyzer {
    ContractAnalyzer::new(
        RiskTaxonomy::builtin().clone(),
        AnalysisOptions {
            threshold,
            ..AnalysisOptions::default()
        },
    )
}

/// Always fails, as a collaborator with no reachable backend would
struct DownIndex;

#[async_trait]
impl SemanticIndex for DownIndex {
    async fn answer(&self, _question: &str) -> RetrievalResult<RetrievedAnswer> {
        Err(RetrievalError::Unavailable("no backend".to_string()))
    }
}

#[test]
fn termination_clause_scores_above_threshold_lexically() {
    // "vypověď" (5) hits inside "vypovědět", "bez udání důvodu" (20) hits
    // verbatim; 25 >= 20 advises against signing.
    let report =
        analyzer(20).analyze_lexical("1. Nájemce může vypovědět smlouvu bez udání důvodu.");

    assert_eq!(report.paragraph_count, 1);
    assert_eq!(report.risks.len(), 2);
    assert_eq!(report.risks[0].risk_name, "vypověď");
    assert_eq!(report.risks[0].weight, 5);
    assert_eq!(report.risks[0].source, SourceRef::section("1"));
    assert_eq!(report.risks[1].risk_name, "bez udání důvodu");
    assert_eq!(report.risks[1].weight, 20);
    assert_eq!(report.score.total_weight, 25);
    assert_eq!(report.score.recommendation, Recommendation::DoNotSign);
}

#[tokio::test]
async fn keyword_collaborator_reinforces_lexical_hits() {
    let text = "1. Nájemce může vypovědět smlouvu bez udání důvodu.";
    let paragraphs = segment(text);
    let index = KeywordIndex::from_paragraphs(&paragraphs);

    let report = analyzer(20).analyze_paragraphs(&paragraphs, &index).await;

    // The semantic pass confirms "vypověď" in section 1 and merges into the
    // lexical detection, doubling that factor's weight: 5+5+20 = 30.
    let termination = report
        .risks
        .iter()
        .find(|risk| risk.risk_name == "vypověď")
        .expect("termination risk present");
    assert_eq!(termination.weight, 10);
    assert_eq!(termination.detection_type, DetectionType::Lexical);
    assert_eq!(report.score.total_weight, 30);
    assert_eq!(report.score.recommendation, Recommendation::DoNotSign);

    // One question per top-level factor, in taxonomy order.
    assert_eq!(report.semantic_log.len(), RiskTaxonomy::builtin().len());
    assert!(report.semantic_log[0].question.contains("vypověď"));
    assert_eq!(report.semantic_log[0].source_sections, vec!["1"]);
    // Factors absent from the text are logged as rejected answers.
    let arbitration = report
        .semantic_log
        .iter()
        .find(|finding| finding.question.contains("rozhodčí doložka"))
        .expect("arbitration query logged");
    assert_eq!(arbitration.answer, "nenalezeno");
}

#[tokio::test]
async fn empty_contract_signs_regardless_of_threshold() {
    let paragraphs = segment("");
    let index = KeywordIndex::from_paragraphs(&paragraphs);

    let report = analyzer(0).analyze_paragraphs(&paragraphs, &index).await;

    assert_eq!(report.paragraph_count, 0);
    assert!(report.is_empty());
    assert_eq!(report.score.total_weight, 0);
    assert_eq!(report.score.recommendation, Recommendation::Sign);
}

#[tokio::test]
async fn unreachable_collaborator_leaves_lexical_results_intact() {
    let text = "2. Pokuta za prodlení činí 500 Kč.\n2. Další pokuta za prodlení.";

    let report = analyzer(20).analyze(text, &DownIndex).await;

    // Duplicate-section detections merge: "pokuta" 3+3 and
    // "za prodlení" 3+3 under the shared key "2".
    assert!(report.semantic_log.is_empty());
    assert_eq!(report.risks.len(), 2);
    assert_eq!(report.risks[0].risk_name, "pokuta");
    assert_eq!(report.risks[0].weight, 6);
    assert_eq!(report.risks[1].risk_name, "za prodlení");
    assert_eq!(report.risks[1].weight, 6);
    assert_eq!(report.score.total_weight, 12);
    assert_eq!(report.score.recommendation, Recommendation::Sign);
}

#[tokio::test]
async fn clean_contract_keeps_semantic_log_but_signs() {
    let text = "1. Smlouva nabývá účinnosti dnem podpisu.";
    let paragraphs = segment(text);
    let index = KeywordIndex::from_paragraphs(&paragraphs);

    let report = analyzer(20).analyze_paragraphs(&paragraphs, &index).await;

    assert!(report.risks.is_empty());
    // Every factor was queried and answered "nenalezeno"; the log is kept
    // even though nothing was accepted.
    assert_eq!(report.semantic_log.len(), RiskTaxonomy::builtin().len());
    assert!(report
        .semantic_log
        .iter()
        .all(|finding| finding.answer == "nenalezeno"));
    assert_eq!(report.score.recommendation, Recommendation::Sign);
}

#[test]
fn report_payload_serializes_to_json() {
    let report = analyzer(20).analyze_lexical("1. Pokuta za prodlení.");

    let value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(value["score"]["recommendation"], "sign");
    assert_eq!(value["risks"][0]["source"], "1");
    assert_eq!(value["risks"][0]["detection_type"], "lexical");
}
