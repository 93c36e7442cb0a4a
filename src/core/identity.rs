//! Who "the current user" is, and whether a commit author is them.

use super::git::VersionControl;
use super::hosting::HostingClient;
use super::sweep::types::Identity;
use crate::utils::{Result, SweepError};

/// Exact, case-sensitive membership. May under-match; never over-matches.
pub fn is_owned(email: &str, identity: &Identity) -> bool {
    identity.contains(email)
}

/// Builds the identity from the configured git email, adding the hosting
/// platform's noreply address when it can be derived.
///
/// A missing git email is fatal; any failure while deriving the noreply
/// address is logged and ignored.
pub fn resolve_identity(
    vcs: &dyn VersionControl,
    hosting: Option<&dyn HostingClient>,
    noreply_domain: &str,
) -> Result<Identity> {
    let email = vcs.user_email()?.ok_or_else(|| {
        SweepError::identity("git user.email is not set (git config user.email <address>)")
    })?;

    let identity = Identity::new(email.clone());

    if email.contains(noreply_domain) {
        return Ok(identity);
    }

    let Some(hosting) = hosting else {
        return Ok(identity);
    };

    match hosting.authenticated_user() {
        Ok(user) if !user.login.is_empty() => {
            let noreply = noreply_email(user.id, &user.login, noreply_domain);
            tracing::debug!(%noreply, "derived noreply identity");
            Ok(identity.with_email(noreply))
        }
        Ok(_) => {
            tracing::debug!("hosting user has an empty login, skipping noreply identity");
            Ok(identity)
        }
        Err(e) => {
            tracing::debug!(error = %e, "could not derive noreply identity");
            Ok(identity)
        }
    }
}

pub fn noreply_email(id: u64, login: &str, noreply_domain: &str) -> String {
    format!("{}+{}@{}", id, login, noreply_domain)
}
