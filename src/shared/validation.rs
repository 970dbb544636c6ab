use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::features::regions::models::is_known_region;

lazy_static! {
    /// Regex for public tracking ids: PREFIX-RANDOM-TIME
    /// - Valid: "CATEM-AB12CD-X7Z9", "ORG1-000000-0001"
    /// - Invalid: "catem-ab12cd-x7z9", "CATEM-AB12C-X7Z9", "CATEM_AB12CD_X7Z9"
    pub static ref TRACKING_ID_REGEX: Regex =
        Regex::new(r"^[A-Z0-9]+-[A-Z0-9]{6}-[A-Z0-9]{4}$").unwrap();
}

/// Rejects strings that are empty after trimming
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Accepts only names from the regions catalog
pub fn validate_region(value: &str) -> Result<(), ValidationError> {
    if !is_known_region(value) {
        let mut error = ValidationError::new("unknown_region");
        error.message = Some(format!("'{}' is not a known state", value).into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_id_regex_valid() {
        assert!(TRACKING_ID_REGEX.is_match("CATEM-AB12CD-X7Z9"));
        assert!(TRACKING_ID_REGEX.is_match("CATEM-ABC123-F4A1"));
        assert!(TRACKING_ID_REGEX.is_match("ORG1-000000-0001"));
    }

    #[test]
    fn test_tracking_id_regex_invalid() {
        assert!(!TRACKING_ID_REGEX.is_match("catem-ab12cd-x7z9")); // lowercase
        assert!(!TRACKING_ID_REGEX.is_match("CATEM-AB12C-X7Z9")); // short random segment
        assert!(!TRACKING_ID_REGEX.is_match("CATEM-AB12CD-X7Z")); // short time segment
        assert!(!TRACKING_ID_REGEX.is_match("CATEM_AB12CD_X7Z9")); // wrong separator
        assert!(!TRACKING_ID_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("No hay EPP").is_ok());
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_validate_region() {
        assert!(validate_region("Jalisco").is_ok());
        assert!(validate_region("Nuevo León").is_ok());
        assert!(validate_region("Seleccione su estado...").is_err());
    }
}
