use crate::error::Result;
use crate::types::RiskTaxonomy;
use std::path::Path;

impl RiskTaxonomy {
    /// Parse and validate a taxonomy from a TOML string.
    ///
    /// Expected shape:
    ///
    /// ```toml
    /// [[factor]]
    /// name = "pokuta"
    /// weight = 3
    /// description = "Pokuty mohou být rizikové."
    ///
    /// [[factor.subtype]]
    /// name = "za prodlení"
    /// weight = 3
    /// description = "Pokuty za prodlení mohou být nepřiměřené."
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let taxonomy: RiskTaxonomy = toml::from_str(raw)?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Load and validate a taxonomy from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let taxonomy = Self::from_toml_str(&raw)?;
        log::info!(
            "Loaded {} risk factors from {}",
            taxonomy.len(),
            path.display()
        );
        Ok(taxonomy)
    }

    /// Serialize the taxonomy to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskFactor;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
[[factor]]
name = "pokuta"
weight = 3
description = "Pokuty mohou být rizikové."

[[factor.subtype]]
name = "za prodlení"
weight = 3
description = "Pokuty za prodlení."

[[factor]]
name = "pojištění"
weight = 2
description = "Požadavek na pojištění může být zbytečný."
"#;

    #[test]
    fn parses_factors_in_document_order() {
        let taxonomy = RiskTaxonomy::from_toml_str(SAMPLE).expect("valid taxonomy");

        assert_eq!(taxonomy.len(), 2);
        assert_eq!(taxonomy.factors[0].name, "pokuta");
        assert_eq!(taxonomy.factors[0].subtypes[0].name, "za prodlení");
        assert_eq!(taxonomy.factors[1].name, "pojištění");
        assert!(taxonomy.factors[1].subtypes.is_empty());
    }

    #[test]
    fn toml_round_trip() {
        let original = RiskTaxonomy::new(vec![
            RiskFactor::new("vypověď", 5, "Výpověď smlouvy.").subtype(
                "bez udání důvodu",
                20,
                "Výpověď bez důvodu.",
            ),
            RiskFactor::new("pojištění", 2, "Pojištění."),
        ])
        .unwrap();

        let raw = original.to_toml().expect("serializes");
        let reloaded = RiskTaxonomy::from_toml_str(&raw).expect("parses back");
        assert_eq!(reloaded, original);
    }

    #[test]
    fn duplicate_names_rejected_at_load() {
        let raw = r#"
[[factor]]
name = "pokuta"
weight = 3
description = "a"

[[factor]]
name = "pokuta"
weight = 5
description = "b"
"#;
        assert!(RiskTaxonomy::from_toml_str(raw).is_err());
    }

    #[test]
    fn builtin_round_trips_through_toml() {
        let raw = RiskTaxonomy::builtin().to_toml().expect("serializes");
        let reloaded = RiskTaxonomy::from_toml_str(&raw).expect("parses back");
        assert_eq!(&reloaded, RiskTaxonomy::builtin());
    }
}
