//! NOC-to-Continent Mapping Module
//! Static lookup from 3-letter National Olympic Committee codes to continents.

/// Label used for codes that have no continent assignment.
pub const UNKNOWN_CONTINENT: &str = "Unknown";

/// All continent labels the mapping can produce, `Unknown` excluded.
pub const CONTINENTS: [&str; 6] = [
    "Africa",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

/// Map a 3-letter NOC code to its continent name.
///
/// NOC codes are IOC codes, not ISO 3166 alpha-3; they differ for a number
/// of countries (GER, NED, SUI, ...). Codes without a continent (including
/// the refugee and independent-participant teams) map to `"Unknown"` rather
/// than being dropped.
pub fn continent_for_noc(code: &str) -> &'static str {
    match code.trim() {
        // Special Olympic delegations that are not country codes
        "ROC" | "AIN" => "Europe",
        "EOR" | "IOP" => UNKNOWN_CONTINENT,

        "ALG" | "ANG" | "BEN" | "BOT" | "BUR" | "BDI" | "CPV" | "CMR" | "CAF" | "CHA"
        | "COM" | "CGO" | "COD" | "CIV" | "DJI" | "EGY" | "GEQ" | "ERI" | "SWZ" | "ETH"
        | "GAB" | "GAM" | "GHA" | "GUI" | "GBS" | "KEN" | "LES" | "LBR" | "LBA" | "MAD"
        | "MAW" | "MLI" | "MTN" | "MRI" | "MAR" | "MOZ" | "NAM" | "NIG" | "NGR" | "RWA"
        | "STP" | "SEN" | "SEY" | "SLE" | "SOM" | "RSA" | "SSD" | "SUD" | "TAN" | "TOG"
        | "TUN" | "UGA" | "ZAM" | "ZIM" => "Africa",

        // Armenia, Azerbaijan, Cyprus, Georgia, Israel and Turkey follow the
        // upstream dataset's convention and sit in Asia.
        "AFG" | "ARM" | "AZE" | "BRN" | "BAN" | "BHU" | "BRU" | "CAM" | "CHN" | "CYP"
        | "GEO" | "TPE" | "HKG" | "IND" | "INA" | "IRI" | "IRQ" | "ISR" | "JPN" | "JOR"
        | "KAZ" | "KUW" | "KGZ" | "LAO" | "LBN" | "MAS" | "MDV" | "MGL" | "MYA" | "NEP"
        | "PRK" | "OMA" | "PAK" | "PLE" | "PHI" | "QAT" | "KSA" | "SGP" | "KOR" | "SRI"
        | "SYR" | "TJK" | "THA" | "TLS" | "TKM" | "TUR" | "UAE" | "UZB" | "VIE" | "YEM" => {
            "Asia"
        }

        "ALB" | "AND" | "AUT" | "BEL" | "BIH" | "BUL" | "CRO" | "CZE" | "DEN" | "ESP"
        | "EST" | "FIN" | "FRA" | "GBR" | "GER" | "GRE" | "HUN" | "IRL" | "ISL" | "ITA"
        | "KOS" | "LAT" | "LIE" | "LTU" | "LUX" | "MLT" | "MDA" | "MON" | "MNE" | "MKD"
        | "NED" | "NOR" | "POL" | "POR" | "ROU" | "RUS" | "SMR" | "SRB" | "SVK" | "SLO"
        | "SUI" | "SWE" | "UKR" | "BLR" => "Europe",

        "ANT" | "ARU" | "BAH" | "BAR" | "BIZ" | "BER" | "IVB" | "CAN" | "CAY" | "CRC"
        | "CUB" | "DMA" | "DOM" | "ESA" | "GRN" | "GUA" | "HAI" | "HON" | "JAM" | "MEX"
        | "NCA" | "PAN" | "PUR" | "SKN" | "LCA" | "VIN" | "TTO" | "USA" | "ISV" => {
            "North America"
        }

        "ARG" | "BOL" | "BRA" | "CHI" | "COL" | "ECU" | "GUY" | "PAR" | "PER" | "SUR"
        | "URU" | "VEN" => "South America",

        "ASA" | "AUS" | "COK" | "FIJ" | "GUM" | "KIR" | "MHL" | "FSM" | "NRU" | "NZL"
        | "PLW" | "PNG" | "SAM" | "SOL" | "TGA" | "TUV" | "VAN" => "Oceania",

        _ => UNKNOWN_CONTINENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_one_code_per_continent() {
        assert_eq!(continent_for_noc("KEN"), "Africa");
        assert_eq!(continent_for_noc("JPN"), "Asia");
        assert_eq!(continent_for_noc("FRA"), "Europe");
        assert_eq!(continent_for_noc("USA"), "North America");
        assert_eq!(continent_for_noc("AUS"), "Oceania");
        assert_eq!(continent_for_noc("BRA"), "South America");
    }

    #[test]
    fn maps_ioc_codes_that_differ_from_iso() {
        assert_eq!(continent_for_noc("GER"), "Europe");
        assert_eq!(continent_for_noc("NED"), "Europe");
        assert_eq!(continent_for_noc("SUI"), "Europe");
        assert_eq!(continent_for_noc("TPE"), "Asia");
    }

    #[test]
    fn maps_special_delegations() {
        assert_eq!(continent_for_noc("ROC"), "Europe");
        assert_eq!(continent_for_noc("AIN"), "Europe");
        assert_eq!(continent_for_noc("EOR"), UNKNOWN_CONTINENT);
        assert_eq!(continent_for_noc("IOP"), UNKNOWN_CONTINENT);
    }

    #[test]
    fn every_mapped_label_is_a_known_continent() {
        let codes = [
            "KEN", "JPN", "FRA", "USA", "AUS", "BRA", "ROC", "AIN", "GER", "TPE", "KOS",
        ];
        for code in codes {
            assert!(
                CONTINENTS.contains(&continent_for_noc(code)),
                "{code} mapped outside the known continents"
            );
        }
        assert!(!CONTINENTS.contains(&UNKNOWN_CONTINENT));
    }

    #[test]
    fn unrecognized_codes_are_unknown_not_missing() {
        assert_eq!(continent_for_noc("ZZZ"), UNKNOWN_CONTINENT);
        assert_eq!(continent_for_noc(""), UNKNOWN_CONTINENT);
        assert_eq!(continent_for_noc("  "), UNKNOWN_CONTINENT);
    }
}
