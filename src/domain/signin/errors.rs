use thiserror::Error;

/// Failures the auth provider can report for a sign-in attempt.
///
/// The submission pipeline never shows these to the user; every variant
/// collapses into the same generic authentication-failure toast.
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Auth provider unreachable: {0}")]
  Transport(String),

  #[error("Auth provider returned an unexpected response: {0}")]
  Provider(String),
}
