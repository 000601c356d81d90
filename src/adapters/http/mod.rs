pub mod effects;
pub mod handlers;
pub mod routes;
pub mod templates;

// Re-export commonly used types
pub use effects::{RedirectSink, ToastSink};
pub use routes::{WebRouteDependencies, configure_web_routes};
pub use templates::TemplateEngine;
