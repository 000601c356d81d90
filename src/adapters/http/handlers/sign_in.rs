use actix_web::{HttpResponse, http::StatusCode, web};
use std::sync::Arc;

use crate::adapters::http::effects::{RedirectSink, ToastSink};
use crate::adapters::http::templates::TemplateEngine;
use crate::application::signin::{SignInFormData, SubmitOutcome, SubmitSignInUseCase};
use crate::domain::signin::ports::Authenticator;
use crate::domain::signin::value_objects::FieldErrors;

const LOGIN_TEMPLATE: &str = "pages/login.html.tera";

/// Render the sign-in screen
pub async fn login_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let context = TemplateEngine::page_context("Log In");

  let html = templates
    .render(LOGIN_TEMPLATE, &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Handle sign-in form submission.
///
/// Wires the submission pipeline to request-scoped notifier/navigator sinks,
/// then maps its terminal outcome onto a response: redirect on success,
/// re-rendered form with inline field errors or the failure toast otherwise.
pub async fn login_submit(
  form: web::Form<SignInFormData>,
  authenticator: web::Data<Arc<dyn Authenticator>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let toasts = Arc::new(ToastSink::new());
  let redirect = Arc::new(RedirectSink::new());

  let pipeline = SubmitSignInUseCase::new(
    authenticator.get_ref().clone(),
    toasts.clone(),
    redirect.clone(),
  );

  // Keep the typed value for re-rendering the form after a failed attempt
  let email = form.email.clone();

  let mut display = FieldErrors::new();
  let outcome = pipeline.execute(form.into_inner(), &mut display).await;

  match outcome {
    SubmitOutcome::Success => {
      tracing::info!(email = %email, "sign-in succeeded");

      // The pipeline pushed the dashboard route into the navigator sink
      let location = redirect.take().unwrap_or_else(|| "/".to_string());

      Ok(
        HttpResponse::SeeOther()
          .insert_header(("Location", location))
          .finish(),
      )
    }
    SubmitOutcome::ValidationFailed(_) => {
      tracing::debug!(email = %email, "sign-in form failed validation");

      let mut context = TemplateEngine::page_context("Log In");
      context.insert("errors", &display);
      context.insert("email", &email);

      let html = templates
        .render(LOGIN_TEMPLATE, &context)
        .map_err(actix_web::error::ErrorInternalServerError)?;

      Ok(
        HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY)
          .content_type("text/html")
          .body(html),
      )
    }
    SubmitOutcome::AuthFailed => {
      tracing::info!(email = %email, "sign-in rejected by auth provider");

      let mut context = TemplateEngine::page_context("Log In");
      context.insert("toasts", &toasts.drain());
      context.insert("email", &email);

      let html = templates
        .render(LOGIN_TEMPLATE, &context)
        .map_err(actix_web::error::ErrorInternalServerError)?;

      Ok(
        HttpResponse::Unauthorized()
          .content_type("text/html")
          .body(html),
      )
    }
  }
}

/// Render the authenticated landing page
pub async fn dashboard_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let context = TemplateEngine::page_context("Dashboard");

  let html = templates
    .render("pages/dashboard.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
