use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for detection matching: decompose (NFD), strip combining marks,
/// lowercase.
///
/// Czech risk phrases must hit inside inflected forms: the taxonomy entry
/// `vypověď` has to match `vypovědět` in clause text, and plain lowercasing
/// cannot bridge `ď`/`d`. Folding both needle and haystack makes containment
/// checks case- and diacritic-insensitive while staying purely textual (no
/// stemming, no tokenization, no word boundaries).
///
/// ```rust
/// use contract_segmenter::fold;
///
/// assert_eq!(fold("Vypověď"), "vypoved");
/// assert!(fold("Nájemce může vypovědět smlouvu").contains(&fold("vypověď")));
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
