use crate::types::{MergedRisk, RiskDetection, SourceRef};
use std::collections::HashMap;

/// Merge detections from both detectors into deduplicated risks.
///
/// Detections are grouped by `(risk_name, normalized source)`. The first
/// detection under a key seeds the merged entry (its description, detector
/// and source become representative); every later duplicate only adds its
/// weight. Output order is first-seen key order, so lexical detections
/// (which callers pass first) anchor the report layout. No upper bound is
/// imposed on merged weight.
#[must_use]
pub fn merge(detections: impl IntoIterator<Item = RiskDetection>) -> Vec<MergedRisk> {
    let mut order: Vec<(String, SourceRef)> = Vec::new();
    let mut merged: HashMap<(String, SourceRef), MergedRisk> = HashMap::new();

    for detection in detections {
        let key = (detection.risk_name.clone(), detection.source.merge_key());
        match merged.get_mut(&key) {
            Some(entry) => entry.add_weight(detection.weight),
            None => {
                order.push(key.clone());
                merged.insert(key, MergedRisk::from(detection));
            }
        }
    }

    order
        .into_iter()
        .map(|key| merged.remove(&key).expect("every key was inserted once"))
        .collect()
}
