use contract_analysis::{AnalysisReport, Recommendation};

const RULE_WIDTH: usize = 50;

/// Human-readable phrasing of the signing advice
pub fn recommendation_label(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Sign => "The document can be signed.",
        Recommendation::DoNotSign => "Do not sign the document.",
    }
}

/// Render the analysis payload as the plain-text report file.
///
/// Layout follows the established report shape: a merged-risk section, the
/// semantic question/answer log, then the totals and the recommendation. A
/// run with no evidence of any kind collapses to the short "safe to sign"
/// form.
pub fn render_text_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("No risks were found.\n");
        out.push('\n');
        out.push_str("Recommendation: the document is safe to sign.\n");
        return out;
    }

    if !report.risks.is_empty() {
        out.push_str("Risks detected in the contract (merged across detectors):\n");
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        for risk in &report.risks {
            out.push_str(&format!("Risk: {}\n", risk.risk_name));
            out.push_str(&format!("Description: {}\n", risk.description));
            out.push_str(&format!("Weight: {}\n", risk.weight));
            out.push_str(&format!("Detection: {}\n", risk.detection_type));
            out.push_str(&format!("Section: {}\n", risk.source));
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }
    }

    if !report.semantic_log.is_empty() {
        out.push('\n');
        out.push_str("Semantic retrieval log:\n");
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
        for finding in &report.semantic_log {
            out.push_str(&format!("Question: {}\n", finding.question));
            out.push_str(&format!("Answer: {}\n", finding.answer));
            if !finding.source_sections.is_empty() {
                out.push_str(&format!(
                    "Sections: {}\n",
                    finding.source_sections.join(", ")
                ));
            }
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&format!("Total risk weight: {}\n", report.score.total_weight));
    out.push_str(&format!("Threshold: {}\n", report.score.threshold));
    out.push_str(&format!(
        "Recommendation: {}\n",
        recommendation_label(report.score.recommendation)
    ));

    out
}
