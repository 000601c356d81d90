use async_trait::async_trait;

use super::errors::AuthError;
use super::value_objects::{Credentials, Toast};

/// Auth provider capability: establishes an authenticated session for the
/// given credentials. Internals (transport, session storage) live behind
/// this seam.
#[async_trait]
pub trait Authenticator: Send + Sync {
  /// Attempts to sign the user in with the given credentials
  async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Notification bus capability: fire-and-forget toast emission.
pub trait Notifier: Send + Sync {
  /// Hands a toast to the notification bus
  fn add_toast(&self, toast: Toast);
}

/// Navigation capability: fire-and-forget screen change.
pub trait Navigator: Send + Sync {
  /// Makes the given path the active screen
  fn push(&self, path: &str);
}
