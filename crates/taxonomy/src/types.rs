use crate::error::{Result, TaxonomyError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A specialization of a risk factor with its own weight and description.
///
/// Subtypes are independently detectable: a subtype hit neither implies nor
/// suppresses a hit on its parent factor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskSubtype {
    /// Trigger phrase, unique among the siblings of one factor
    pub name: String,

    /// Weight added to the total when this subtype is detected
    pub weight: u32,

    /// Human-readable explanation shown in the report
    pub description: String,
}

/// A named category of contractual risk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskFactor {
    /// Trigger phrase, unique among top-level factors
    pub name: String,

    /// Weight added to the total when this factor is detected
    pub weight: u32,

    /// Human-readable explanation shown in the report
    pub description: String,

    /// Specializations of this factor; no further nesting
    #[serde(default, rename = "subtype", skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<RiskSubtype>,
}

impl RiskFactor {
    /// Create a factor with no subtypes
    pub fn new(name: impl Into<String>, weight: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            description: description.into(),
            subtypes: Vec::new(),
        }
    }

    /// Builder: append a subtype
    #[must_use]
    pub fn subtype(
        mut self,
        name: impl Into<String>,
        weight: u32,
        description: impl Into<String>,
    ) -> Self {
        self.subtypes.push(RiskSubtype {
            name: name.into(),
            weight,
            description: description.into(),
        });
        self
    }
}

/// An ordered, validated set of risk factors.
///
/// Order is significant: semantic queries are issued and logged in factor
/// order, so two runs over the same taxonomy produce reports in the same
/// order regardless of detection timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskTaxonomy {
    /// Top-level risk factors in definition order
    #[serde(rename = "factor")]
    pub factors: Vec<RiskFactor>,
}

impl RiskTaxonomy {
    /// Create a taxonomy from factors, rejecting empty or duplicate names
    pub fn new(factors: Vec<RiskFactor>) -> Result<Self> {
        let taxonomy = Self { factors };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Number of top-level factors
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// True when the taxonomy has no factors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Look up a top-level factor by name
    #[must_use]
    pub fn factor(&self, name: &str) -> Option<&RiskFactor> {
        self.factors.iter().find(|factor| factor.name == name)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for factor in &self.factors {
            if factor.name.trim().is_empty() {
                return Err(TaxonomyError::EmptyName);
            }
            if !seen.insert(factor.name.as_str()) {
                return Err(TaxonomyError::DuplicateName(factor.name.clone()));
            }

            let mut sub_seen = HashSet::new();
            for subtype in &factor.subtypes {
                if subtype.name.trim().is_empty() {
                    return Err(TaxonomyError::EmptyName);
                }
                if !sub_seen.insert(subtype.name.as_str()) {
                    return Err(TaxonomyError::DuplicateName(subtype.name.clone()));
                }
            }
        }
        Ok(())
    }
}
