use crate::error::{CertError, Result};
use crate::roster::{Participant, RosterSource};
use log::{info, warn};

/// Valida un par (correo, clave) contra el roster.
///
/// Reglas:
/// - Ambos campos deben ser no vacíos después de recortar espacios, si no
///   el resultado es [`CertError::MissingFields`].
/// - Se hace una sola lectura del roster; si falla, el resultado es
///   [`CertError::RosterUnavailable`] (distinto de "sin coincidencia").
/// - La comparación es igualdad exacta de cadenas sobre los valores
///   recortados; sin case-folding ni normalización.
/// - Sin coincidencia: [`CertError::InvalidCredentials`].
pub fn validate(
    email: &str,
    access_key: &str,
    source: &dyn RosterSource,
) -> Result<Participant> {
    let email = email.trim();
    let access_key = access_key.trim();

    if email.is_empty() || access_key.is_empty() {
        warn!("Validation rejected: missing fields");
        return Err(CertError::MissingFields);
    }

    let roster = source.load()?;

    match roster.into_iter().find(|p| p.matches(email, access_key)) {
        Some(participant) => {
            info!("Validated participant: {}", participant.email);
            Ok(participant)
        }
        None => {
            warn!("Validation rejected: no roster match for {}", email);
            Err(CertError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeRoster {
        records: Vec<Participant>,
    }

    impl RosterSource for FakeRoster {
        fn load(&self) -> Result<Vec<Participant>> {
            Ok(self.records.clone())
        }
    }

    struct BrokenRoster;

    impl RosterSource for BrokenRoster {
        fn load(&self) -> Result<Vec<Participant>> {
            Err(CertError::RosterUnavailable("disk on fire".to_string()))
        }
    }

    fn roster() -> FakeRoster {
        FakeRoster {
            records: vec![Participant::new(
                "a@x.com".to_string(),
                "Juan Pérez".to_string(),
                "ABC123".to_string(),
            )],
        }
    }

    #[test]
    fn test_exact_match_authorized() {
        let p = validate("a@x.com", "ABC123", &roster()).unwrap();
        assert_eq!(p.name, "Juan Pérez");
    }

    #[test]
    fn test_inputs_are_trimmed_before_comparison() {
        let p = validate("  a@x.com  ", " ABC123 ", &roster()).unwrap();
        assert_eq!(p.email, "a@x.com");
    }

    #[test]
    fn test_wrong_key_rejected() {
        let err = validate("a@x.com", "WRONG", &roster()).unwrap_err();
        assert!(matches!(err, CertError::InvalidCredentials));
    }

    #[test]
    fn test_wrong_email_rejected() {
        let err = validate("b@x.com", "ABC123", &roster()).unwrap_err();
        assert!(matches!(err, CertError::InvalidCredentials));
    }

    #[test]
    fn test_empty_email_is_missing_fields() {
        let err = validate("", "ABC123", &roster()).unwrap_err();
        assert!(matches!(err, CertError::MissingFields));
    }

    #[test]
    fn test_whitespace_key_is_missing_fields() {
        let err = validate("a@x.com", "   ", &roster()).unwrap_err();
        assert!(matches!(err, CertError::MissingFields));
    }

    #[test]
    fn test_missing_fields_wins_over_source_failure() {
        // Los campos se revisan antes de tocar el roster
        let err = validate("", "", &BrokenRoster).unwrap_err();
        assert!(matches!(err, CertError::MissingFields));
    }

    #[test]
    fn test_broken_source_is_unavailable_not_invalid() {
        let err = validate("a@x.com", "ABC123", &BrokenRoster).unwrap_err();
        assert!(matches!(err, CertError::RosterUnavailable(_)));
    }

    #[test]
    fn test_no_case_folding_on_email() {
        let err = validate("A@X.COM", "ABC123", &roster()).unwrap_err();
        assert!(matches!(err, CertError::InvalidCredentials));
    }
}
