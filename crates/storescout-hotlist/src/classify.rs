//! Name-based theme and brand classification.
//!
//! Case-insensitive substring scans over fixed lookup lists, applied when a
//! catalogue entry arrives without flags.

/// Model-name substrings that mark a casting as JDM.
const JDM_MARKERS: &[&str] = &[
    "nissan", "skyline", "gtr", "silvia", "fairlady", "datsun", "toyota", "supra", "ae86",
    "celica", "mr2", "trueno", "honda", "civic", "nsx", "integra", "s2000", "crx", "mazda",
    "rx-7", "rx7", "miata", "mx-5", "rx-8", "subaru", "wrx", "sti", "brz", "mitsubishi", "evo",
    "lancer", "eclipse", "3000gt", "acura", "lexus",
];

/// Exotic/premium marques.
const PREMIUM_MARKERS: &[&str] = &[
    "porsche",
    "ferrari",
    "lamborghini",
    "mclaren",
    "bugatti",
    "koenigsegg",
    "pagani",
    "aston martin",
    "bentley",
    "rolls-royce",
];

/// American muscle castings.
const MUSCLE_MARKERS: &[&str] = &[
    "camaro", "mustang", "challenger", "charger", "cuda", "barracuda", "corvette", "firebird",
    "trans am", "gto", "chevelle", "impala",
];

/// Manufacturer table: the first matching marker wins.
const BRAND_TABLE: &[(&str, &[&str])] = &[
    ("Porsche", &["porsche"]),
    ("Ferrari", &["ferrari"]),
    ("Lamborghini", &["lamborghini"]),
    ("Nissan", &["nissan", "skyline", "gtr"]),
    ("Toyota", &["toyota", "supra"]),
    ("Honda", &["honda"]),
    ("Mazda", &["mazda"]),
    ("Chevrolet", &["chevrolet", "chevy", "camaro", "corvette"]),
    ("Ford", &["ford", "mustang"]),
    ("Dodge", &["dodge", "challenger", "charger"]),
    ("McLaren", &["mclaren"]),
    ("BMW", &["bmw"]),
    ("Mercedes-Benz", &["mercedes"]),
    ("Audi", &["audi"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub is_jdm: bool,
    pub is_premium: bool,
    pub is_muscle: bool,
    pub brand: String,
}

/// Classify a casting by its model name.
#[must_use]
pub fn classify(name: &str) -> Classification {
    let name_lower = name.to_lowercase();
    let contains_any = |markers: &[&str]| markers.iter().any(|m| name_lower.contains(m));

    let brand = BRAND_TABLE
        .iter()
        .find(|(_, markers)| contains_any(markers))
        .map_or_else(|| "Unknown".to_string(), |(brand, _)| (*brand).to_string());

    Classification {
        is_jdm: contains_any(JDM_MARKERS),
        is_premium: contains_any(PREMIUM_MARKERS),
        is_muscle: contains_any(MUSCLE_MARKERS),
        brand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skyline_is_jdm_nissan() {
        let c = classify("Nissan Skyline GT-R (BNR34)");
        assert!(c.is_jdm);
        assert!(!c.is_premium);
        assert!(!c.is_muscle);
        assert_eq!(c.brand, "Nissan");
    }

    #[test]
    fn porsche_is_premium() {
        let c = classify("Porsche 911 GT3 RS");
        assert!(c.is_premium);
        assert!(!c.is_jdm);
        assert_eq!(c.brand, "Porsche");
    }

    #[test]
    fn camaro_is_muscle_chevrolet() {
        let c = classify("'69 Camaro SS");
        assert!(c.is_muscle);
        assert_eq!(c.brand, "Chevrolet");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(classify("TOYOTA SUPRA").is_jdm);
        assert_eq!(classify("toyota supra").brand, "Toyota");
    }

    #[test]
    fn unknown_name_gets_no_flags() {
        let c = classify("Twin Mill");
        assert!(!c.is_jdm && !c.is_premium && !c.is_muscle);
        assert_eq!(c.brand, "Unknown");
    }

    #[test]
    fn brand_table_first_match_wins() {
        // "Dodge Charger" matches Dodge before anything else.
        assert_eq!(classify("Dodge Charger R/T").brand, "Dodge");
        // A Charger without "dodge" still resolves via the marker list.
        assert_eq!(classify("'69 Charger Daytona").brand, "Dodge");
    }
}
