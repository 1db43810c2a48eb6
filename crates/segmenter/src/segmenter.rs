use crate::paragraph::Paragraph;
use once_cell::sync::Lazy;
use regex::Regex;

/// One or more dot-separated integers followed by a literal dot, anchored to
/// the line start: `3.`, `3.2.`, `12.4.1.`
static SECTION_NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)\.").expect("valid section numbering pattern"));

/// Extract the section numbering from a line, without the trailing dot
#[must_use]
pub fn section_id_of(line: &str) -> Option<&str> {
    SECTION_NUMBERING
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split raw contract text into ordered paragraphs.
///
/// Lines are trimmed; blank lines are skipped. A line that opens with a
/// section numbering closes the accumulating paragraph and starts a new one
/// seeded with that line. Non-boundary lines are space-joined onto the open
/// paragraph. Text before the first boundary accumulates under
/// [`Paragraph::UNKNOWN_SECTION`].
///
/// Empty or whitespace-only input yields an empty vector. That is a valid
/// terminal state, not an error: callers treat it as "no paragraphs to
/// analyze".
#[must_use]
pub fn segment(text: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut open: Option<(String, String)> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(section_id) = section_id_of(line) {
            if let Some((id, body)) = open.take() {
                paragraphs.push(Paragraph::new(id, body));
            }
            open = Some((section_id.to_string(), line.to_string()));
        } else {
            match &mut open {
                Some((_, body)) => {
                    body.push(' ');
                    body.push_str(line);
                }
                None => open = Some((Paragraph::UNKNOWN_SECTION.to_string(), line.to_string())),
            }
        }
    }

    if let Some((id, body)) = open.take() {
        paragraphs.push(Paragraph::new(id, body));
    }

    log::info!("Segmented contract into {} paragraphs", paragraphs.len());
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbered_lines_start_new_paragraphs() {
        let text = "1. První odstavec.\npokračování textu\n2.1. Druhý odstavec.";
        let paragraphs = segment(text);

        assert_eq!(
            paragraphs,
            vec![
                Paragraph::new("1", "1. První odstavec. pokračování textu"),
                Paragraph::new("2.1", "2.1. Druhý odstavec."),
            ]
        );
    }

    #[test]
    fn text_without_numbering_yields_single_unknown_paragraph() {
        let paragraphs = segment("Smluvní strany se dohodly takto.\nBez číslování.");

        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].is_unnumbered());
        assert_eq!(
            paragraphs[0].text,
            "Smluvní strany se dohodly takto. Bez číslování."
        );
    }

    #[test]
    fn empty_input_yields_no_paragraphs() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n\t\n").is_empty());
    }

    #[test]
    fn preamble_before_first_boundary_is_unknown() {
        let paragraphs = segment("Preambule smlouvy.\n1. První bod.");

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].section_id, Paragraph::UNKNOWN_SECTION);
        assert_eq!(paragraphs[1].section_id, "1");
    }

    #[test]
    fn consecutive_boundaries_produce_numbering_only_paragraphs() {
        let paragraphs = segment("1.\n2.\n3. Tělo.");

        assert_eq!(
            paragraphs,
            vec![
                Paragraph::new("1", "1."),
                Paragraph::new("2", "2."),
                Paragraph::new("3", "3. Tělo."),
            ]
        );
    }

    #[test]
    fn duplicate_section_ids_are_preserved() {
        let paragraphs = segment("2. Pokuta za prodlení.\n2. Další pokuta.");

        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].section_id, "2");
        assert_eq!(paragraphs[1].section_id, "2");
    }

    #[test]
    fn blank_lines_do_not_split_paragraphs() {
        let text = "1. První věta.\n\n   \ndruhá věta.";
        let paragraphs = segment(text);

        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "1. První věta. druhá věta.");
    }

    #[test]
    fn round_trip_preserves_non_blank_lines_in_order() {
        let text = "Preambule.\n1. Bod jedna.\ndovětek\n2. Bod dva.\n\nposlední řádek";
        let expected: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let joined = segment(text)
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(joined, expected.join(" "));
    }

    #[test]
    fn section_id_requires_trailing_dot() {
        assert_eq!(section_id_of("3.2. Nájemné"), Some("3.2"));
        assert_eq!(section_id_of("12. Pokuta"), Some("12"));
        assert_eq!(section_id_of("3,2 Nájemné"), None);
        assert_eq!(section_id_of("bez čísla"), None);
        assert_eq!(section_id_of("3 Nájemné"), None);
    }
}
