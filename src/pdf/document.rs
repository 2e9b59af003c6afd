/// El certificado ya renderizado: un buffer de bytes PDF terminado.
///
/// Se crea una vez por validación exitosa, se entrega al llamador y no se
/// retiene. El buffer siempre contiene un documento completo; un fallo del
/// renderizador nunca produce un `CertificateDocument` parcial.
#[derive(Debug, Clone)]
pub struct CertificateDocument {
    bytes: Vec<u8>,
}

impl CertificateDocument {
    pub const MIME_TYPE: &'static str = "application/pdf";
    pub const FILENAME: &'static str = "Certificado_MasterClass.pdf";

    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Valor para el encabezado Content-Disposition
    pub fn content_disposition() -> String {
        format!("attachment; filename=\"{}\"", Self::FILENAME)
    }
}
