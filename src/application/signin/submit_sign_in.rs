use serde::Deserialize;
use std::sync::Arc;
use validator::{Validate, ValidationErrors};

use crate::domain::signin::ports::{Authenticator, Navigator, Notifier};
use crate::domain::signin::value_objects::{Credentials, FieldErrors, Toast};

/// Route made active after a successful sign-in
pub const DASHBOARD_ROUTE: &str = "/dashboard";

const AUTH_FAILURE_TITLE: &str = "Authentication error";
const AUTH_FAILURE_DESCRIPTION: &str =
  "An error occurred while logging in, check your credentials.";

/// Raw sign-in form values, validated at submit time.
///
/// Both rules per field are evaluated before reporting, so one attempt can
/// surface messages for both fields at once.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInFormData {
  #[validate(
    length(min = 1, message = "E-mail is required."),
    email(message = "Enter a valid e-mail.")
  )]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required."))]
  pub password: String,
}

/// Terminal outcome of one submit attempt. Exactly one per invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
  /// Credentials accepted; the navigator was pushed to the dashboard
  Success,
  /// Schema violations; field messages were applied, no auth attempt made
  ValidationFailed(FieldErrors),
  /// Auth provider rejected or failed; one error toast was emitted
  AuthFailed,
}

/// Use case driving the sign-in submission pipeline.
///
/// Composes the three injected capabilities with one linear control flow:
/// reset field errors, validate, authenticate, then navigate or notify.
/// Holds no state across invocations.
pub struct SubmitSignInUseCase {
  authenticator: Arc<dyn Authenticator>,
  notifier: Arc<dyn Notifier>,
  navigator: Arc<dyn Navigator>,
}

impl SubmitSignInUseCase {
  /// Creates a new instance of SubmitSignInUseCase
  pub fn new(
    authenticator: Arc<dyn Authenticator>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
  ) -> Self {
    Self {
      authenticator,
      notifier,
      navigator,
    }
  }

  /// Executes one submit attempt.
  ///
  /// `display` is the form's owned error-display state; it is cleared at the
  /// start of every attempt and repopulated only when validation fails.
  ///
  /// Per invocation at most one of these side effects occurs: field errors
  /// applied to `display`, one error toast emitted, or one navigation push.
  pub async fn execute(&self, form: SignInFormData, display: &mut FieldErrors) -> SubmitOutcome {
    display.clear();

    if let Err(violations) = form.validate() {
      let errors = map_violations(&violations);
      *display = errors.clone();
      return SubmitOutcome::ValidationFailed(errors);
    }

    let credentials = Credentials::new(form.email, form.password);

    match self.authenticator.sign_in(&credentials).await {
      Ok(()) => {
        self.navigator.push(DASHBOARD_ROUTE);
        SubmitOutcome::Success
      }
      Err(_) => {
        // All non-validation failures collapse to one generic message; the
        // cause is not surfaced to the user or logged here.
        self
          .notifier
          .add_toast(Toast::error(AUTH_FAILURE_TITLE, AUTH_FAILURE_DESCRIPTION));
        SubmitOutcome::AuthFailed
      }
    }
  }
}

/// Flattens collected schema violations into one message per field.
///
/// The required-field rule wins over the format rule when both fail, so an
/// empty email reports "missing" rather than "malformed".
fn map_violations(violations: &ValidationErrors) -> FieldErrors {
  let mut errors = FieldErrors::new();

  for (field, field_violations) in violations.field_errors() {
    let message = field_violations
      .iter()
      .find(|v| v.code == "length")
      .or_else(|| field_violations.first())
      .and_then(|v| v.message.as_ref())
      .map(|m| m.to_string())
      .unwrap_or_else(|| format!("Invalid value for {}", field));

    errors.insert(field.to_string(), message);
  }

  errors
}
