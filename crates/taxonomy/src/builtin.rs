use crate::types::{RiskFactor, RiskTaxonomy};
use once_cell::sync::Lazy;

/// Default taxonomy for Czech rental contracts.
///
/// Weights are on an open scale; the stock recommendation threshold of 20
/// means a single "bez udání důvodu" clause is enough to advise against
/// signing.
static BUILTIN: Lazy<RiskTaxonomy> = Lazy::new(|| {
    RiskTaxonomy::new(vec![
        RiskFactor::new(
            "vypověď",
            5,
            "Různé formy výpovědi smlouvy mohou obsahovat rizikové prvky.",
        )
        .subtype(
            "bez udání důvodu",
            20,
            "Možnost vypovědět smlouvu bez uvedení důvodu je velkým rizikem.",
        )
        .subtype(
            "jednostranné vypovězení",
            3,
            "Jednostranné vypovězení smlouvy může být zneužitelné.",
        ),
        RiskFactor::new(
            "pokuta",
            3,
            "Pokuty mohou být rizikovými prvky, pokud nejsou spravedlivě nastaveny.",
        )
        .subtype(
            "za prodlení",
            3,
            "Nepřiměřeně vysoké pokuty za prodlení mohou být nepřijemné.",
        )
        .subtype(
            "za opožděnou platbu",
            3,
            "Pokuty za opožděné platby mohou být zneužitelné.",
        ),
        RiskFactor::new(
            "omezení práv",
            5,
            "Omezení právního nároku nájemce může být nespravedlivé.",
        )
        .subtype(
            "právního nároku",
            5,
            "Omezení právního nároku nájemce může být nespravedlivé.",
        ),
        RiskFactor::new(
            "rozhodčí doložka",
            3,
            "Rozhodčí doložky mohou omezit právo na právní ochranu.",
        ),
        RiskFactor::new(
            "zpoplatnění údržby",
            2,
            "Poplatky za údržbu mohou být rizikovým prvkem, pokud nejsou spravedlivé.",
        )
        .subtype(
            "běžné údržby",
            2,
            "Poplatky za běžnou údržbu by měly být hrazeny pronajímatelem.",
        ),
        RiskFactor::new(
            "pojištění",
            2,
            "Požadavek na sjednání pojištění může být zbytečný.",
        ),
    ])
    .expect("built-in taxonomy is valid")
});

impl RiskTaxonomy {
    /// The built-in default taxonomy, constructed once per process
    #[must_use]
    pub fn builtin() -> &'static RiskTaxonomy {
        &BUILTIN
    }
}
