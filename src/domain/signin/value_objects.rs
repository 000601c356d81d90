use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Credentials Value Object
// ============================================================================

/// The email/password pair handed to the auth provider.
///
/// Built at submit time from the form fields and dropped once the attempt
/// completes. Never persisted.
#[derive(Clone)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

impl Credentials {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      email: email.into(),
      password: password.into(),
    }
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("email", &self.email)
      .field("password", &"***")
      .finish()
  }
}

// ============================================================================
// FieldErrors Value Object
// ============================================================================

/// Per-field validation messages shown inline next to the form inputs.
///
/// Owned by the form's error-display state and replaced wholesale on every
/// submit attempt: cleared first, repopulated only when validation fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
  errors: HashMap<String, String>,
}

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  /// Removes all field messages
  pub fn clear(&mut self) {
    self.errors.clear();
  }

  /// Sets the message for a field, replacing any previous one
  pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
    self.errors.insert(field.into(), message.into());
  }

  /// Returns the message attached to a field, if any
  pub fn message(&self, field: &str) -> Option<&str> {
    self.errors.get(field).map(String::as_str)
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  /// Iterates over (field, message) pairs
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
  }
}

// ============================================================================
// Toast Value Object
// ============================================================================

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
  Info,
  Success,
  Error,
}

impl fmt::Display for ToastKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Info => write!(f, "info"),
      Self::Success => write!(f, "success"),
      Self::Error => write!(f, "error"),
    }
  }
}

/// A transient, dismissible notification handed to the notification bus.
///
/// Not retained by the submission pipeline after emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
  pub kind: ToastKind,
  pub title: String,
  pub description: String,
}

impl Toast {
  pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self::new(ToastKind::Info, title, description)
  }

  pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self::new(ToastKind::Success, title, description)
  }

  pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self::new(ToastKind::Error, title, description)
  }

  fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      kind,
      title: title.into(),
      description: description.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_credentials_debug_redacts_password() {
    let credentials = Credentials::new("jhndoe@exemplo.com", "123456");
    let rendered = format!("{:?}", credentials);

    assert!(rendered.contains("jhndoe@exemplo.com"));
    assert!(!rendered.contains("123456"));
  }

  #[test]
  fn test_field_errors_replace_and_clear() {
    let mut errors = FieldErrors::new();
    errors.insert("email", "E-mail is required.");
    errors.insert("email", "Enter a valid e-mail.");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message("email"), Some("Enter a valid e-mail."));

    errors.clear();
    assert!(errors.is_empty());
    assert_eq!(errors.message("email"), None);
  }

  #[test]
  fn test_field_errors_serialize_as_flat_map() {
    let mut errors = FieldErrors::new();
    errors.insert("password", "Password is required.");

    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json["password"], "Password is required.");
  }

  #[test]
  fn test_toast_kind_serializes_lowercase() {
    let toast = Toast::error("Authentication error", "check your credentials");

    let json = serde_json::to_value(&toast).unwrap();
    assert_eq!(json["kind"], "error");
  }
}
