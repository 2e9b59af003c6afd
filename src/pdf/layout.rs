//! Plantilla fija del certificado como datos puros.
//!
//! El contenido y el orden de las líneas viven aquí, separados de la emisión
//! PDF, para que las pruebas puedan verificar el texto visible sin parsear
//! bytes binarios.

/// Ancho de página carta en mm (retrato)
pub const PAGE_WIDTH_MM: f32 = 215.9;
/// Alto de página carta en mm (retrato)
pub const PAGE_HEIGHT_MM: f32 = 279.4;

pub const TITLE: &str = "Certificado de Participación";
pub const INTRO: &str = "Se otorga el presente certificado a:";
pub const DURATION: &str =
    "por su participación en la MasterClass, con una duración de 3 horas académicas.";
pub const CLOSING: &str = "Agradecemos su asistencia y esperamos verle pronto.";

/// Una línea de texto centrada del certificado
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Tamaño de fuente en puntos
    pub size: f32,
    pub bold: bool,
    pub underline: bool,
    /// Espacio vertical en mm antes de la siguiente línea
    pub gap_after: f32,
}

impl TextLine {
    fn new(text: impl Into<String>, size: f32, gap_after: f32) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            underline: false,
            gap_after,
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }
}

/// Construye las líneas del certificado para un participante.
///
/// Función pura del nombre; el mismo nombre produce siempre las mismas
/// líneas. El orden es fijo: título, introducción, nombre destacado,
/// constancia de duración y despedida.
pub fn certificate_lines(name: &str) -> Vec<TextLine> {
    vec![
        TextLine::new(TITLE, 28.0, 25.0).bold(),
        TextLine::new(INTRO, 14.0, 18.0),
        TextLine::new(name, 22.0, 20.0).bold().underlined(),
        TextLine::new(DURATION, 14.0, 16.0),
        TextLine::new(CLOSING, 12.0, 0.0),
    ]
}
