//! GST state codes for Indian states and union territories.
//!
//! The two-digit census codes used as the leading digits of a GSTIN.
//! Lookup is by exact name, case-insensitively — no abbreviation or
//! spelling canonicalization, matching the supply-type classification.

/// (code, name) pairs, sorted by code.
static STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
];

/// Look up the GST state code for a state/UT name (case-insensitive).
pub fn state_code_for(name: &str) -> Option<&'static str> {
    let name = name.trim();
    STATE_CODES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}

/// Check whether `name` is a known state/UT name.
pub fn is_known_state(name: &str) -> bool {
    state_code_for(name).is_some()
}

/// Check whether `code` is an assigned GST state code.
pub fn is_known_state_code(code: &str) -> bool {
    STATE_CODES.binary_search_by(|(c, _)| c.cmp(&code)).is_ok()
}

/// Look up the state/UT name for a GST state code.
pub fn state_name_for(code: &str) -> Option<&'static str> {
    STATE_CODES
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|i| STATE_CODES[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states() {
        assert_eq!(state_code_for("Tamil Nadu"), Some("33"));
        assert_eq!(state_code_for("kerala"), Some("32"));
        assert_eq!(state_code_for("MAHARASHTRA"), Some("27"));
        assert!(is_known_state("Delhi"));
    }

    #[test]
    fn unknown_states() {
        assert_eq!(state_code_for("TN"), None);
        assert_eq!(state_code_for("Bombay"), None);
        assert!(!is_known_state(""));
    }

    #[test]
    fn code_lookup() {
        assert!(is_known_state_code("33"));
        assert!(!is_known_state_code("25"));
        assert!(!is_known_state_code("99"));
        assert_eq!(state_name_for("36"), Some("Telangana"));
    }
}
