use crate::error::{CertError, Result};
use crate::roster::Participant;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Fuente de solo lectura de registros de participantes.
///
/// El núcleo nunca crea ni modifica registros; solo pide el roster completo
/// una vez por solicitud. Cualquier fallo de lectura o de formato se reporta
/// como [`CertError::RosterUnavailable`].
pub trait RosterSource {
    fn load(&self) -> Result<Vec<Participant>>;
}

/// Roster respaldado por un archivo JSON (arreglo de participantes).
///
/// El archivo se relee en cada `load()`; no hay caché. A esta escala releer
/// es correcto y evita servir un roster obsoleto.
pub struct JsonRoster {
    path: PathBuf,
}

impl JsonRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsea el contenido JSON de un roster
    pub fn parse(content: &str) -> Result<Vec<Participant>> {
        let roster: Vec<Participant> = serde_json::from_str(content)
            .map_err(|e| CertError::RosterUnavailable(format!("JSON inválido: {}", e)))?;
        Ok(roster)
    }
}

impl RosterSource for JsonRoster {
    fn load(&self) -> Result<Vec<Participant>> {
        debug!("Reading roster file: {}", self.path.display());

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            CertError::RosterUnavailable(format!(
                "no se pudo leer {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let roster = Self::parse(&content)?;
        info!("Roster loaded: {} participants", roster.len());
        Ok(roster)
    }
}
