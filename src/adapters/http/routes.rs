use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::domain::signin::ports::Authenticator;

use super::handlers::sign_in::{dashboard_page, login_page, login_submit};
use super::templates::TemplateEngine;

/// Dependencies the web routes need from the composition root
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub authenticator: Arc<dyn Authenticator>,
}

/// Configure the sign-in screen routes
///
/// # Routes
///
/// - GET / - Redirect to the sign-in screen
/// - GET /login - Render the sign-in form
/// - POST /login - Submit the sign-in form
/// - GET /dashboard - Authenticated landing page
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.authenticator))
    .route(
      "/",
      web::get().to(|| async {
        HttpResponse::SeeOther()
          .insert_header(("Location", "/login"))
          .finish()
      }),
    )
    .route("/login", web::get().to(login_page))
    .route("/login", web::post().to(login_submit))
    .route("/dashboard", web::get().to(dashboard_page));
}
