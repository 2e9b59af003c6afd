//! Frontera HTTP del servicio de certificados.
//!
//! El formulario del navegador es un colaborador externo; aquí solo vive el
//! framing de transporte: JSON de entrada, PDF adjunto o `{ "message": ... }`
//! de salida, y el mapeo de errores a códigos de estado.

use crate::error::{CertError, Result};
use crate::pdf::CertificateDocument;
use crate::roster::JsonRoster;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

/// Estado compartido entre solicitudes: solo el roster de solo lectura.
///
/// El roster se relee en cada solicitud; no hay estado mutable compartido.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<JsonRoster>,
}

/// Cuerpo de la solicitud de certificado
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    /// Campo ausente se trata igual que campo vacío
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub access_key: String,
}

/// Arranca el servidor HTTP y atiende solicitudes hasta que el proceso
/// termine.
pub async fn serve(roster: JsonRoster, addr: SocketAddr) -> Result<()> {
    let app = router(AppState {
        roster: Arc::new(roster),
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Certificate server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { "certserve\n\nPOST /certificado - emite el certificado PDF\n" }),
        )
        .route("/certificado", post(issue_certificate))
        .with_state(state)
}

/// POST /certificado
async fn issue_certificate(
    State(state): State<AppState>,
    Json(req): Json<CertificateRequest>,
) -> Response {
    match crate::issue(&req.email, &req.access_key, state.roster.as_ref()) {
        Ok(doc) => pdf_response(doc),
        Err(e) => error_response(&e),
    }
}

fn pdf_response(doc: CertificateDocument) -> Response {
    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                CertificateDocument::MIME_TYPE.to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                CertificateDocument::content_disposition(),
            ),
        ],
        doc.into_bytes(),
    )
        .into_response()
}

fn error_response(err: &CertError) -> Response {
    let status = status_for(err);
    if status.is_server_error() {
        error!("Request failed: {}", err);
    }
    (status, Json(serde_json::json!({ "message": message_for(err) }))).into_response()
}

/// Mapeo error → código de estado: 400 datos incompletos, 401 credenciales,
/// 500 roster o renderizado
pub fn status_for(err: &CertError) -> StatusCode {
    match err {
        CertError::MissingFields => StatusCode::BAD_REQUEST,
        CertError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Mensaje corto para el usuario; los detalles de errores de servidor solo
/// van al log, nunca al cliente.
fn message_for(err: &CertError) -> &'static str {
    match err {
        CertError::MissingFields => "Debe ingresar el correo y la clave de acceso.",
        CertError::InvalidCredentials => "Credenciales inválidas.",
        _ => "No se pudo generar el certificado. Intente nuevamente más tarde.",
    }
}
