use serde::{Deserialize, Serialize};

/// Un participante registrado en el roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Correo registrado (único dentro del roster)
    pub email: String,

    /// Nombre tal como debe aparecer en el certificado
    pub name: String,

    /// Clave de acceso compartida por todos los participantes
    pub access_key: String,
}

impl Participant {
    pub fn new(email: String, name: String, access_key: String) -> Self {
        Self {
            email,
            name,
            access_key,
        }
    }

    /// Comparación exacta de credenciales, sin normalización
    pub fn matches(&self, email: &str, access_key: &str) -> bool {
        self.email == email && self.access_key == access_key
    }
}
