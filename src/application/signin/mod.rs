//! Sign-in use cases
//!
//! Orchestrates the sign-in submission pipeline: validate the form values,
//! delegate to the auth provider, then navigate or notify.

mod submit_sign_in;

pub use submit_sign_in::{DASHBOARD_ROUTE, SignInFormData, SubmitOutcome, SubmitSignInUseCase};
