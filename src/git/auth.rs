//! Authentication callbacks for git operations
//!
//! Delegates to git's native credential system: SSH agent, SSH keys from
//! ~/.ssh/, git credential helpers, and anonymous access for public repos.

use git2::{Cred, CredentialType, RemoteCallbacks};

/// Set up authentication callbacks for clone and fetch operations
pub fn setup_auth_callbacks(callbacks: &mut RemoteCallbacks) {
    callbacks.credentials(|url, username_from_url, allowed_types| {
        if allowed_types.contains(CredentialType::DEFAULT) {
            return Cred::default();
        }

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(username) = username_from_url {
                if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                    return Ok(cred);
                }
                if let Some(cred) = ssh_key_from_disk(username) {
                    return Ok(cred);
                }
            }
        }

        if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
            if let Ok(config) = git2::Config::open_default() {
                if let Ok(cred) = Cred::credential_helper(&config, url, username_from_url) {
                    return Ok(cred);
                }
            }
            // Public HTTPS repos: anonymous access lets the server answer
            // with the real error instead of an auth prompt
            if let Ok(cred) = Cred::userpass_plaintext("", "") {
                return Ok(cred);
            }
        }

        Err(git2::Error::new(
            git2::ErrorCode::Auth,
            git2::ErrorClass::Http,
            "authentication failed",
        ))
    });
}

/// Try the conventional key files under ~/.ssh/
fn ssh_key_from_disk(username: &str) -> Option<Cred> {
    let ssh_dir = dirs::home_dir()?.join(".ssh");
    for key_name in &["id_ed25519", "id_rsa", "id_ecdsa"] {
        let private_key = ssh_dir.join(key_name);
        if !private_key.exists() {
            continue;
        }
        let public_key = ssh_dir.join(format!("{key_name}.pub"));
        let public_key_path = public_key.exists().then_some(public_key.as_path());
        if let Ok(cred) = Cred::ssh_key(username, public_key_path, &private_key, None) {
            return Some(cred);
        }
    }
    None
}
