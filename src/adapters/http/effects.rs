use std::sync::Mutex;

use crate::domain::signin::ports::{Navigator, Notifier};
use crate::domain::signin::value_objects::Toast;

/// Request-scoped notification bus.
///
/// Collects the toasts a pipeline run emits so the handler can render them
/// into the response. One instance per submit request.
#[derive(Debug, Default)]
pub struct ToastSink {
  toasts: Mutex<Vec<Toast>>,
}

impl ToastSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Takes the collected toasts, leaving the sink empty
  pub fn drain(&self) -> Vec<Toast> {
    std::mem::take(&mut *self.toasts.lock().expect("toast sink lock poisoned"))
  }
}

impl Notifier for ToastSink {
  fn add_toast(&self, toast: Toast) {
    self.toasts.lock().expect("toast sink lock poisoned").push(toast);
  }
}

/// Request-scoped navigator.
///
/// Records the path the pipeline pushes; the handler turns it into a
/// redirect response. A later push replaces an earlier one.
#[derive(Debug, Default)]
pub struct RedirectSink {
  target: Mutex<Option<String>>,
}

impl RedirectSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Takes the recorded redirect target, if any
  pub fn take(&self) -> Option<String> {
    self.target.lock().expect("redirect sink lock poisoned").take()
  }
}

impl Navigator for RedirectSink {
  fn push(&self, path: &str) {
    *self.target.lock().expect("redirect sink lock poisoned") = Some(path.to_string());
  }
}
