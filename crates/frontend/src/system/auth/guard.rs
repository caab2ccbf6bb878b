use contracts::system::auth::SessionUser;
use web_sys::window;

use super::storage::SessionProvider;
use crate::config::config;

/// Outcome of the presence check done when an admin page mounts
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    Authenticated(SessionUser),
    RedirectToLogin,
}

/// Pure decision: any stored user lets the page through.
pub fn session_gate(provider: &dyn SessionProvider) -> SessionGate {
    match provider.current_user() {
        Some(user) => SessionGate::Authenticated(user),
        None => SessionGate::RedirectToLogin,
    }
}

/// Runs the check and leaves the page for the login view when nobody is
/// signed in. Does not wait on or cancel anything the page already started.
pub fn redirect_if_signed_out(provider: &dyn SessionProvider) -> Option<SessionUser> {
    match session_gate(provider) {
        SessionGate::Authenticated(user) => Some(user),
        SessionGate::RedirectToLogin => {
            let login_path = &config().session.login_path;
            log::info!("No session user, redirecting to {}", login_path);
            if let Some(w) = window() {
                if let Err(e) = w.location().set_href(login_path) {
                    log::error!("Redirect to {} failed: {:?}", login_path, e);
                }
            }
            None
        }
    }
}
