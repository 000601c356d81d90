pub mod errors;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use errors::AuthError;
pub use ports::{Authenticator, Navigator, Notifier};
pub use value_objects::{Credentials, FieldErrors, Toast, ToastKind};
