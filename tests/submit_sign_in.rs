use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use agendly::application::signin::{
  DASHBOARD_ROUTE, SignInFormData, SubmitOutcome, SubmitSignInUseCase,
};
use agendly::domain::signin::{
  AuthError, Authenticator, Credentials, FieldErrors, Navigator, Notifier, Toast, ToastKind,
};

struct StubAuthenticator {
  fail: bool,
  calls: AtomicUsize,
}

impl StubAuthenticator {
  fn accepting() -> Arc<Self> {
    Arc::new(Self {
      fail: false,
      calls: AtomicUsize::new(0),
    })
  }

  fn rejecting() -> Arc<Self> {
    Arc::new(Self {
      fail: true,
      calls: AtomicUsize::new(0),
    })
  }

  fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl Authenticator for StubAuthenticator {
  async fn sign_in(&self, _credentials: &Credentials) -> Result<(), AuthError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.fail {
      Err(AuthError::InvalidCredentials)
    } else {
      Ok(())
    }
  }
}

#[derive(Default)]
struct RecordingNotifier {
  toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
  fn toasts(&self) -> Vec<Toast> {
    self.toasts.lock().unwrap().clone()
  }
}

impl Notifier for RecordingNotifier {
  fn add_toast(&self, toast: Toast) {
    self.toasts.lock().unwrap().push(toast);
  }
}

#[derive(Default)]
struct RecordingNavigator {
  pushes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
  fn pushes(&self) -> Vec<String> {
    self.pushes.lock().unwrap().clone()
  }
}

impl Navigator for RecordingNavigator {
  fn push(&self, path: &str) {
    self.pushes.lock().unwrap().push(path.to_string());
  }
}

struct Harness {
  pipeline: SubmitSignInUseCase,
  authenticator: Arc<StubAuthenticator>,
  notifier: Arc<RecordingNotifier>,
  navigator: Arc<RecordingNavigator>,
}

fn harness(authenticator: Arc<StubAuthenticator>) -> Harness {
  let notifier = Arc::new(RecordingNotifier::default());
  let navigator = Arc::new(RecordingNavigator::default());

  Harness {
    pipeline: SubmitSignInUseCase::new(
      authenticator.clone(),
      notifier.clone(),
      navigator.clone(),
    ),
    authenticator,
    notifier,
    navigator,
  }
}

fn form(email: &str, password: &str) -> SignInFormData {
  SignInFormData {
    email: email.to_string(),
    password: password.to_string(),
  }
}

#[tokio::test]
async fn valid_credentials_navigate_to_dashboard() {
  let h = harness(StubAuthenticator::accepting());
  let mut display = FieldErrors::new();

  let outcome = h
    .pipeline
    .execute(form("jhndoe@exemplo.com", "123456"), &mut display)
    .await;

  assert_eq!(outcome, SubmitOutcome::Success);
  assert_eq!(h.navigator.pushes(), vec![DASHBOARD_ROUTE.to_string()]);
  assert!(display.is_empty());
  assert!(h.notifier.toasts().is_empty());
}

#[tokio::test]
async fn malformed_email_never_reaches_the_auth_provider() {
  let h = harness(StubAuthenticator::accepting());
  let mut display = FieldErrors::new();

  let outcome = h
    .pipeline
    .execute(form("not-valid-email", "123456"), &mut display)
    .await;

  assert!(matches!(outcome, SubmitOutcome::ValidationFailed(_)));
  assert_eq!(display.message("email"), Some("Enter a valid e-mail."));
  assert_eq!(h.authenticator.call_count(), 0);
  assert!(h.navigator.pushes().is_empty());
  assert!(h.notifier.toasts().is_empty());
}

#[tokio::test]
async fn empty_password_never_reaches_the_auth_provider() {
  let h = harness(StubAuthenticator::accepting());
  let mut display = FieldErrors::new();

  let outcome = h
    .pipeline
    .execute(form("jhndoe@exemplo.com", ""), &mut display)
    .await;

  assert!(matches!(outcome, SubmitOutcome::ValidationFailed(_)));
  assert_eq!(display.message("password"), Some("Password is required."));
  assert_eq!(h.authenticator.call_count(), 0);
  assert!(h.navigator.pushes().is_empty());
}

#[tokio::test]
async fn rejected_credentials_emit_exactly_one_error_toast() {
  let h = harness(StubAuthenticator::rejecting());
  let mut display = FieldErrors::new();

  let outcome = h
    .pipeline
    .execute(form("jhndoe@exemplo.com", "123456"), &mut display)
    .await;

  assert_eq!(outcome, SubmitOutcome::AuthFailed);

  let toasts = h.notifier.toasts();
  assert_eq!(toasts.len(), 1);
  assert_eq!(toasts[0].kind, ToastKind::Error);
  assert_eq!(toasts[0].title, "Authentication error");

  assert!(h.navigator.pushes().is_empty());
  assert!(display.is_empty());
}

#[tokio::test]
async fn resubmitting_valid_data_clears_previous_field_errors() {
  let h = harness(StubAuthenticator::accepting());
  let mut display = FieldErrors::new();

  h.pipeline
    .execute(form("not-valid-email", ""), &mut display)
    .await;
  assert!(!display.is_empty());

  let outcome = h
    .pipeline
    .execute(form("jhndoe@exemplo.com", "123456"), &mut display)
    .await;

  assert_eq!(outcome, SubmitOutcome::Success);
  assert!(display.is_empty());
}

#[tokio::test]
async fn validation_reports_both_fields_in_one_attempt() {
  let h = harness(StubAuthenticator::accepting());
  let mut display = FieldErrors::new();

  let outcome = h.pipeline.execute(form("", ""), &mut display).await;

  match outcome {
    SubmitOutcome::ValidationFailed(errors) => {
      assert_eq!(errors.len(), 2);
      assert_eq!(errors.message("email"), Some("E-mail is required."));
      assert_eq!(errors.message("password"), Some("Password is required."));
    }
    other => panic!("expected validation failure, got {:?}", other),
  }

  assert_eq!(display.len(), 2);
  assert_eq!(h.authenticator.call_count(), 0);
}
