use crate::error::{Result, RetrievalError};
use crate::index::{RetrievedAnswer, SemanticIndex};
use async_trait::async_trait;
use contract_segmenter::{fold, Paragraph};

/// Deterministic [`SemanticIndex`] backed by folded substring retrieval.
///
/// The index keeps one entry per paragraph: the section id plus the folded
/// clause text. A question is answered by extracting its quoted term (the
/// risk name inside `'...'`), folding it, and citing every paragraph whose
/// folded text contains it. No hit answers `nenalezeno`, which downstream
/// negative-marker filtering rejects.
///
/// This is the stand-in for the external embedding/LLM retrieval chain: same
/// contract, none of the infrastructure, fully reproducible in tests.
pub struct KeywordIndex {
    entries: Vec<IndexEntry>,
}

struct IndexEntry {
    section_id: String,
    folded_text: String,
}

impl KeywordIndex {
    /// Build the index over segmented paragraphs, in document order
    #[must_use]
    pub fn from_paragraphs(paragraphs: &[Paragraph]) -> Self {
        let entries = paragraphs
            .iter()
            .map(|paragraph| IndexEntry {
                section_id: paragraph.section_id.clone(),
                folded_text: fold(&paragraph.text),
            })
            .collect::<Vec<_>>();
        log::debug!("Keyword index built over {} paragraphs", entries.len());
        Self { entries }
    }

    /// Number of indexed paragraphs
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no paragraphs are indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The searchable term of a question: the text between the first pair of
    /// single quotes, or the whole question when it carries no quotes
    fn query_term(question: &str) -> &str {
        let mut quoted = question.splitn(3, '\'');
        match (quoted.next(), quoted.next(), quoted.next()) {
            (Some(_), Some(term), Some(_)) => term,
            _ => question,
        }
    }
}

#[async_trait]
impl SemanticIndex for KeywordIndex {
    async fn answer(&self, question: &str) -> Result<RetrievedAnswer> {
        let term = fold(Self::query_term(question).trim());
        if term.is_empty() {
            return Err(RetrievalError::QueryFailed(
                "question contains no searchable term".to_string(),
            ));
        }

        let source_sections: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.folded_text.contains(&term))
            .map(|entry| entry.section_id.clone())
            .collect();

        log::debug!(
            "Keyword retrieval for '{term}': {} matching paragraphs",
            source_sections.len()
        );

        if source_sections.is_empty() {
            return Ok(RetrievedAnswer::without_sources("nenalezeno"));
        }

        Ok(RetrievedAnswer {
            answer: format!("Nalezeno v {} odstavcích.", source_sections.len()),
            source_sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_index() -> KeywordIndex {
        KeywordIndex::from_paragraphs(&[
            Paragraph::new("1", "1. Nájemce může vypovědět smlouvu bez udání důvodu."),
            Paragraph::new("2", "2. Pokuta za prodlení činí 500 Kč denně."),
            Paragraph::new("2", "2. Další pokuta za opožděnou platbu."),
        ])
    }

    #[test]
    fn query_term_prefers_quoted_text() {
        assert_eq!(
            KeywordIndex::query_term("Najděte zmínky o 'pokuta' v tomto textu."),
            "pokuta"
        );
        assert_eq!(KeywordIndex::query_term("pokuta"), "pokuta");
    }

    #[tokio::test]
    async fn hit_cites_matching_sections_in_document_order() {
        let index = sample_index();
        let answer = index
            .answer("Najděte zmínky o 'pokuta' v tomto textu.")
            .await
            .expect("query succeeds");

        assert_eq!(answer.source_sections, vec!["2", "2"]);
        assert_eq!(answer.answer, "Nalezeno v 2 odstavcích.");
    }

    #[tokio::test]
    async fn inflected_form_is_found_via_folding() {
        let index = sample_index();
        let answer = index
            .answer("Najděte zmínky o 'vypověď' v tomto textu.")
            .await
            .expect("query succeeds");

        assert_eq!(answer.source_sections, vec!["1"]);
    }

    #[tokio::test]
    async fn miss_answers_nenalezeno_without_sources() {
        let index = sample_index();
        let answer = index
            .answer("Najděte zmínky o 'rozhodčí doložka' v tomto textu.")
            .await
            .expect("query succeeds");

        assert_eq!(answer.answer, "nenalezeno");
        assert!(answer.source_sections.is_empty());
    }

    #[tokio::test]
    async fn blank_question_is_rejected() {
        let index = sample_index();
        let result = index.answer("''").await;

        assert!(matches!(result, Err(RetrievalError::QueryFailed(_))));
    }
}
