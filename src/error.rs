use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Faltan el correo o la clave de acceso")]
    MissingFields,

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("Roster no disponible: {0}")]
    RosterUnavailable(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CertError>;
