//! Static nationality membership lists.
//!
//! Four read-only country-code sets drive the passenger-mix classification:
//! B5JSSK (nationalities eligible for automated clearance), EEA, visa
//! nationals and non-visa nationals. The visa and non-visa lists are
//! disjoint from each other but independently overlap B5JSSK and EEA, so a
//! passenger can contribute to several unrelated counters at once.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Australia, Canada, Japan, New Zealand, Singapore, South Korea, USA.
pub static B5JSSK: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["USA", "AUS", "CAN", "NZL", "JPN", "KOR", "SGP"]
        .into_iter()
        .collect()
});

/// EU/EEA members plus GBR, ISL, NOR, LIE and CHE.
pub static EEA: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "GBR", "AUT", "BEL", "BGR", "HRV", "CYP", "CZE", "DNK", "EST", "FIN", "FRA", "DEU",
        "GRC", "HUN", "IRL", "ITA", "LVA", "LTU", "LUX", "MLT", "NLD", "POL", "PRT", "ROU",
        "SVK", "SVN", "ESP", "SWE", "ISL", "NOR", "LIE", "CHE",
    ]
    .into_iter()
    .collect()
});

pub static VISA_NATIONALS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AFG", "AGO", "ALB", "ARM", "AZE", "BDI", "BEN", "BES", "BFA", "BGD", "BHR", "BIH",
        "BLR", "BOL", "BTN", "CAF", "CHN", "CIV", "CMR", "COD", "COG", "COL", "COM", "CPV",
        "CUB", "CUW", "DJI", "DOM", "DZA", "ECU", "EGY", "ERI", "ESH", "ETH", "FJI", "GAB",
        "GEO", "GGY", "GHA", "GIN", "GMB", "GNB", "GNQ", "GUY", "HTI", "IDN", "IND", "IRN",
        "IRQ", "JAM", "JOR", "KAZ", "KEN", "KGZ", "KHM", "LAO", "LBN", "LBR", "LBY", "LKA",
        "LSO", "MAR", "MDA", "MDG", "MKD", "MLI", "MMR", "MNE", "MNG", "MOZ", "MRT", "MWI",
        "NER", "NGA", "NPL", "PAK", "PER", "PHL", "PRK", "PSE", "RUS", "RWA", "SAU", "SDN",
        "SEN", "SLE", "SOM", "SRB", "SSD", "STP", "SUR", "SWZ", "SXM", "SYR", "TCD", "TGO",
        "THA", "TJK", "TKM", "TMP", "TUN", "TUR", "TZA", "UGA", "UKR", "UNA", "UNO", "UZB",
        "VAT", "VEN", "VNM", "XXB", "YEM", "ZAF", "ZMB", "ZWE",
    ]
    .into_iter()
    .collect()
});

pub static NON_VISA_NATIONALS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ABW", "AIA", "ALA", "AND", "ANT", "ARG", "ASM", "ATA", "ATF", "ATG", "AUS", "BHS",
        "BLM", "BLZ", "BMU", "BRA", "BRB", "BRN", "BVT", "BWA", "CAN", "CCK", "CHL", "COK",
        "CRI", "CXR", "CYM", "DMA", "FLK", "FRO", "FSM", "GIB", "GLP", "GRD", "GRL", "GTM",
        "GUF", "GUM", "HKG", "HMD", "HND", "IMN", "IOT", "ISL", "ISR", "JEY", "JPN", "KIR",
        "KNA", "KOR", "LCA", "LIE", "MAC", "MAF", "MCO", "MDV", "MEX", "MHL", "MNP", "MSR",
        "MTQ", "MUS", "MYS", "MYT", "NAM", "NCL", "NFK", "NIC", "NIU", "NRU", "NZL", "PAN",
        "PCN", "PLW", "PNG", "PRI", "PRY", "PYF", "REU", "SGP", "SGS", "SHN", "SJM", "SLB",
        "SLV", "SMR", "SPM", "SUN", "SYC", "TCA", "TKL", "TLS", "TON", "TTO", "TUV", "TWN",
        "UMI", "URY", "USA", "VCT", "VGB", "VIR", "VUT", "WLF", "WSM",
    ]
    .into_iter()
    .collect()
});

pub fn is_b5jssk(code: &str) -> bool {
    B5JSSK.contains(code)
}

pub fn is_eea(code: &str) -> bool {
    EEA.contains(code)
}

pub fn is_visa_national(code: &str) -> bool {
    VISA_NATIONALS.contains(code)
}

pub fn is_non_visa_national(code: &str) -> bool {
    NON_VISA_NATIONALS.contains(code)
}

/// Whether the code appears in any of the four lists.
pub fn is_listed(code: &str) -> bool {
    is_b5jssk(code) || is_eea(code) || is_visa_national(code) || is_non_visa_national(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gbr_is_eea_only() {
        assert!(is_eea("GBR"));
        assert!(!is_b5jssk("GBR"));
        assert!(!is_visa_national("GBR"));
        assert!(!is_non_visa_national("GBR"));
    }

    #[test]
    fn b5jssk_overlaps_non_visa_list() {
        for code in ["USA", "AUS", "CAN", "NZL", "JPN", "KOR", "SGP"] {
            assert!(is_b5jssk(code), "{code} should be B5JSSK");
            assert!(is_non_visa_national(code), "{code} should be non-visa");
        }
    }

    #[test]
    fn visa_lists_are_disjoint() {
        for code in VISA_NATIONALS.iter() {
            assert!(
                !NON_VISA_NATIONALS.contains(code),
                "{code} is in both visa lists"
            );
        }
    }

    #[test]
    fn unknown_code_is_unlisted() {
        assert!(!is_listed("ZZZ"));
    }
}
