pub mod document;
pub mod layout;
pub mod render;

pub use document::CertificateDocument;
pub use render::render;
