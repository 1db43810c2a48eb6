use crate::types::{DetectionType, RiskDetection, SourceRef};
use contract_segmenter::{fold, Paragraph};
use contract_taxonomy::RiskTaxonomy;

/// Deterministic lexical detector over the risk taxonomy.
///
/// Matching is folded substring containment (see [`contract_segmenter::fold`]):
/// no stemming, no tokenization, no word-boundary enforcement. A risk name
/// that happens to be a substring of a longer unrelated word still matches;
/// that is accepted policy, the merger and threshold absorb the noise.
///
/// Factor and subtype needles fire independently: a paragraph containing
/// `bez udání důvodu` inside a `vypověď` clause produces two detections.
/// Duplicates are legitimate output here; deduplication belongs to the
/// merger.
pub struct LexicalMatcher {
    needles: Vec<Needle>,
}

struct Needle {
    folded: String,
    risk_name: String,
    weight: u32,
    description: String,
}

impl LexicalMatcher {
    /// Pre-fold every factor and subtype name of the taxonomy
    #[must_use]
    pub fn new(taxonomy: &RiskTaxonomy) -> Self {
        let mut needles = Vec::new();
        for factor in &taxonomy.factors {
            needles.push(Needle {
                folded: fold(&factor.name),
                risk_name: factor.name.clone(),
                weight: factor.weight,
                description: factor.description.clone(),
            });
            for subtype in &factor.subtypes {
                needles.push(Needle {
                    folded: fold(&subtype.name),
                    risk_name: subtype.name.clone(),
                    weight: subtype.weight,
                    description: subtype.description.clone(),
                });
            }
        }
        Self { needles }
    }

    /// Scan paragraphs in order, emitting one detection per needle hit
    #[must_use]
    pub fn scan(&self, paragraphs: &[Paragraph]) -> Vec<RiskDetection> {
        let mut detections = Vec::new();
        for paragraph in paragraphs {
            let haystack = fold(&paragraph.text);
            for needle in &self.needles {
                if haystack.contains(&needle.folded) {
                    detections.push(RiskDetection::new(
                        &needle.risk_name,
                        needle.weight,
                        &needle.description,
                        DetectionType::Lexical,
                        SourceRef::section(&paragraph.section_id),
                    ));
                }
            }
        }

        log::debug!(
            "Lexical scan: {} detections across {} paragraphs",
            detections.len(),
            paragraphs.len()
        );
        detections
    }
}
