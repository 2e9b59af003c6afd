//! # certserve
//!
//! A library and HTTP service for issuing MasterClass participation
//! certificates as PDF documents.

pub mod cli;
pub mod error;
pub mod pdf;
pub mod roster;
pub mod server;
pub mod validate;

// Re-exports
pub use cli::{Cli, Commands};
pub use error::{CertError, Result};
pub use pdf::{render, CertificateDocument};
pub use roster::{JsonRoster, Participant, RosterSource};
pub use validate::validate;

/// Pipeline completo: validar credenciales y renderizar el certificado.
///
/// Invariante: se produce un [`CertificateDocument`] si y solo si la
/// validación autoriza al participante.
pub fn issue(
    email: &str,
    access_key: &str,
    source: &dyn RosterSource,
) -> Result<CertificateDocument> {
    let participant = validate::validate(email, access_key, source)?;
    pdf::render(&participant)
}
