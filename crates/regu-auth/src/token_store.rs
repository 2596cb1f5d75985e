//! Layered session-token storage.
//!
//! Three tiers, in priority order: OS keyring, `REGUNOVA_AUTH__TOKEN`
//! environment variable, plain file under `~/.regunova/`. The keyring is
//! written first; the file only holds tokens when no keyring backend is
//! available (headless machines, CI).

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::AuthError;

const KEYRING_SERVICE: &str = "regunova-cli";
const KEYRING_USER: &str = "session-jwt";
const TOKEN_ENV_VAR: &str = "REGUNOVA_AUTH__TOKEN";
const CREDENTIALS_FILE: &str = "credentials";

/// Where a resolved token came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyring service name, overridable so tests never touch real credentials.
fn service_name() -> String {
    std::env::var("REGUNOVA_KEYRING_SERVICE").unwrap_or_else(|_| KEYRING_SERVICE.to_string())
}

/// Persist a session JWT, preferring the OS keyring.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` when the keyring is unavailable
/// and the fallback file cannot be written either.
pub fn store(jwt: &str) -> Result<(), AuthError> {
    let keyring_result = keyring::Entry::new(&service_name(), KEYRING_USER)
        .and_then(|entry| entry.set_password(jwt));
    match keyring_result {
        Ok(()) => Ok(()),
        Err(error) => {
            tracing::warn!(%error, "keyring write failed; storing token in a file");
            write_credentials_file(jwt)
        }
    }
}

/// Resolve the stored token, walking the tiers in priority order.
#[must_use]
pub fn load() -> Option<String> {
    load_with_source().map(|(token, _)| token)
}

/// Resolve the stored token along with the tier that produced it.
#[must_use]
pub fn load_with_source() -> Option<(String, TokenSource)> {
    if let Some(token) = keyring_token() {
        return Some((token, TokenSource::Keyring));
    }
    if let Some(token) = env_token() {
        return Some((token, TokenSource::Env));
    }
    file_token().map(|token| (token, TokenSource::File))
}

/// The tier the current token would come from, for status display.
#[must_use]
pub fn detect_token_source() -> Option<TokenSource> {
    load_with_source().map(|(_, source)| source)
}

/// Remove stored credentials from every writable tier.
///
/// The environment tier is left alone; unsetting a parent process's
/// variables is not this function's business.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file exists but
/// cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    if let Ok(entry) = keyring::Entry::new(&service_name(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|error| {
            AuthError::TokenStoreError(format!("cannot remove {}: {error}", path.display()))
        })?;
    }
    Ok(())
}

fn keyring_token() -> Option<String> {
    keyring::Entry::new(&service_name(), KEYRING_USER)
        .and_then(|entry| entry.get_password())
        .ok()
        .and_then(non_empty)
}

fn env_token() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR).ok().and_then(non_empty)
}

fn file_token() -> Option<String> {
    let path = credentials_path().ok()?;
    fs::read_to_string(path).ok().and_then(non_empty)
}

fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|home| home.join(".regunova").join(CREDENTIALS_FILE))
        .ok_or_else(|| AuthError::TokenStoreError("no home directory for credentials".into()))
}

/// Write the token file with owner-only permissions.
fn write_credentials_file(jwt: &str) -> Result<(), AuthError> {
    let path = credentials_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|error| {
            AuthError::TokenStoreError(format!("cannot create {}: {error}", dir.display()))
        })?;
        restrict_permissions(dir, 0o700);
    }

    fs::write(&path, jwt).map_err(|error| {
        AuthError::TokenStoreError(format!("cannot write {}: {error}", path.display()))
    })?;
    restrict_permissions(&path, 0o600);
    Ok(())
}

#[cfg(unix)]
fn restrict_permissions(path: &std::path::Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    if let Err(error) = fs::set_permissions(path, fs::Permissions::from_mode(mode)) {
        tracing::warn!(%error, path = %path.display(), "could not restrict permissions");
    }
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &std::path::Path, _mode: u32) {}
