use crate::error::Result;
use crate::pdf::document::CertificateDocument;
use crate::pdf::layout::{self, TextLine};
use crate::roster::Participant;
use log::{debug, info};
use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, Point, Rgb};

const PT_TO_MM: f32 = 0.352_778;

/// Avance promedio de glifo Helvetica en em; las fuentes integradas de
/// printpdf no exponen métricas por glifo.
const AVG_GLYPH_ADVANCE: f32 = 0.5;

/// Renderiza el certificado de un participante como PDF en memoria.
///
/// El documento se termina por completo (save_to_bytes) antes de devolverse;
/// nunca se entrega un buffer parcial. No se escribe nada a disco.
pub fn render(participant: &Participant) -> Result<CertificateDocument> {
    info!("Rendering certificate for: {}", participant.name);

    let lines = layout::certificate_lines(&participant.name);
    let bytes = render_lines(&lines)?;

    debug!("Certificate finished: {} bytes", bytes.len());
    Ok(CertificateDocument::new(bytes))
}

fn render_lines(lines: &[TextLine]) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Certificado de Participación",
        Mm(layout::PAGE_WIDTH_MM),
        Mm(layout::PAGE_HEIGHT_MM),
        "Certificado",
    );

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let canvas = doc.get_page(page).get_layer(layer);
    canvas.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    canvas.set_outline_thickness(0.6);

    // Cursor vertical en mm desde el borde inferior
    let mut y = 190.0_f32;

    for line in lines {
        let font = if line.bold { &bold } else { &regular };
        let width = estimated_width_mm(&line.text, line.size);
        let x = (layout::PAGE_WIDTH_MM - width) / 2.0;

        canvas.use_text(line.text.as_str(), line.size, Mm(x), Mm(y), font);

        if line.underline {
            let rule = Line {
                points: vec![
                    (Point::new(Mm(x), Mm(y - 2.0)), false),
                    (Point::new(Mm(x + width), Mm(y - 2.0)), false),
                ],
                is_closed: false,
            };
            canvas.add_line(rule);
        }

        y -= line.gap_after;
    }

    let bytes = doc.save_to_bytes()?;
    Ok(bytes)
}

/// Ancho estimado de una línea centrada, en mm
fn estimated_width_mm(text: &str, size_pt: f32) -> f32 {
    text.chars().count() as f32 * size_pt * AVG_GLYPH_ADVANCE * PT_TO_MM
}

#[cfg(test)]
mod tests {
    use super::*;

    fn juan() -> Participant {
        Participant::new(
            "a@x.com".to_string(),
            "Juan Pérez".to_string(),
            "ABC123".to_string(),
        )
    }

    #[test]
    fn test_render_produces_complete_pdf() {
        let doc = render(&juan()).unwrap();
        let bytes = doc.bytes();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_render_is_not_empty() {
        let doc = render(&juan()).unwrap();
        assert!(doc.bytes().len() > 500);
    }

    #[test]
    fn test_render_twice_same_visible_content() {
        // Los bytes pueden diferir (metadatos internos); el contenido
        // visible proviene de las mismas líneas.
        let a = layout::certificate_lines(&juan().name);
        let b = layout::certificate_lines(&juan().name);
        assert_eq!(a, b);
        assert!(render(&juan()).is_ok());
        assert!(render(&juan()).is_ok());
    }

    #[test]
    fn test_estimated_width_grows_with_text() {
        let short = estimated_width_mm("Ana", 14.0);
        let long = estimated_width_mm("Maximiliano de la Cruz", 14.0);
        assert!(long > short);
    }

    #[test]
    fn test_lines_fit_on_page() {
        let lines = layout::certificate_lines("Juan Pérez");
        for line in &lines {
            let width = estimated_width_mm(&line.text, line.size);
            assert!(width < layout::PAGE_WIDTH_MM, "line too wide: {}", line.text);
        }
    }
}
