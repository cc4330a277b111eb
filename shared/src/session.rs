//! Explicit session context.
//!
//! The session (bearer token, signed-in user, theme preference) is a plain
//! value handed to whoever needs it. Persistence happens only through a
//! [`SessionStore`], which the browser backs with `localStorage` and the
//! terminal client with a JSON file.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};

use crate::{api::AuthResponse, models::User};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key of the JSON-encoded user.
pub const USER_KEY: &str = "user";
/// Storage key of the theme flag (`"true"` / `"false"`).
pub const DARK_MODE_KEY: &str = "darkMode";

/// Key-value persistence for the session.
pub trait SessionStore {
    /// Reads a value.
    fn get(&self, key: &str) -> Option<String>;
    /// Writes a value.
    fn set(&mut self, key: &str, value: &str);
    /// Deletes a value.
    fn remove(&mut self, key: &str);
}

/// In-memory [`SessionStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Who is signed in and how the dashboard looks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bearer token, when signed in.
    pub token: Option<String>,
    /// Signed-in user, when known.
    pub user: Option<User>,
    /// Dark theme preference; survives sign-out.
    pub dark_mode: bool,
}

impl Session {
    /// Restores the session from `store`. A user record that no longer
    /// parses is dropped rather than treated as fatal.
    pub fn load(store: &impl SessionStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let user = store
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!("discarding stored user: {err}");
                    None
                },
            });
        let dark_mode = store.get(DARK_MODE_KEY).as_deref() == Some("true");

        Self {
            token,
            user,
            dark_mode,
        }
    }

    /// Whether a bearer token is available.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value for API calls.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Records a successful login and persists it.
    pub fn sign_in(&mut self, store: &mut impl SessionStore, auth: AuthResponse) {
        store.set(TOKEN_KEY, &auth.access_token);
        match serde_json::to_string(&auth.user) {
            Ok(raw) => store.set(USER_KEY, &raw),
            Err(err) => tracing::warn!("failed to persist user: {err}"),
        }
        tracing::debug!(user = %auth.user.email, "signed in");
        self.token = Some(auth.access_token);
        self.user = Some(auth.user);
    }

    /// Forgets the token and user. The theme preference is kept.
    pub fn sign_out(&mut self, store: &mut impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.token = None;
        self.user = None;
    }

    /// Sets and persists the theme preference.
    pub fn set_dark_mode(&mut self, store: &mut impl SessionStore, dark_mode: bool) {
        store.set(DARK_MODE_KEY, if dark_mode { "true" } else { "false" });
        self.dark_mode = dark_mode;
    }

    /// Flips the theme preference and returns the new value.
    pub fn toggle_dark_mode(&mut self, store: &mut impl SessionStore) -> bool {
        let next = !self.dark_mode;
        self.set_dark_mode(store, next);
        next
    }
}

/// Reads the query string the API appends when redirecting back from the
/// federated login.
///
/// `?token=..&user=<url-encoded JSON>` yields the login, `?error=..` yields an
/// error carrying the decoded message, and anything else yields `Ok(None)`.
pub fn parse_oauth_redirect(query: &str) -> Result<Option<AuthResponse>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut token = None;
    let mut user = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "error" => bail!("Authentication failed: {value}"),
            "token" => token = Some(value.into_owned()),
            "user" => user = Some(value.into_owned()),
            _ => {},
        }
    }

    let (Some(access_token), Some(user)) = (token, user) else {
        return Ok(None);
    };
    let user: User =
        serde_json::from_str(&user).context("failed to process authentication data")?;

    Ok(Some(AuthResponse {
        access_token,
        token_type: "bearer".to_string(),
        user,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthResponse {
        AuthResponse {
            access_token: "tok-123".to_string(),
            token_type: "bearer".to_string(),
            user: User {
                id: "u-1".to_string(),
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
            },
        }
    }

    #[test]
    fn sign_in_persists_and_reloads() {
        let mut store = MemoryStore::new();
        let mut session = Session::load(&store);
        assert!(!session.is_authenticated());

        session.sign_in(&mut store, auth());
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok-123"));

        let restored = Session::load(&store);
        assert_eq!(restored, session);
        assert_eq!(restored.user.map(|user| user.name), Some("Ada".to_string()));
    }

    #[test]
    fn sign_out_keeps_theme_preference() {
        let mut store = MemoryStore::new();
        let mut session = Session::default();
        session.sign_in(&mut store, auth());
        assert!(session.toggle_dark_mode(&mut store));

        session.sign_out(&mut store);
        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
        assert!(Session::load(&store).dark_mode);
    }

    #[test]
    fn corrupt_user_is_dropped() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "tok");
        store.set(USER_KEY, "{not json");
        let session = Session::load(&store);
        assert!(session.is_authenticated());
        assert_eq!(session.user, None);
        assert!(!session.dark_mode);
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let mut store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        assert!(!Session::load(&store).is_authenticated());
    }

    #[test]
    fn oauth_redirect_with_token_and_user() {
        let query = "?token=abc.def&user=%7B%22id%22%3A%22u-9%22%2C%22email%22%3A%22g%40x.io%22%2C%22name%22%3A%22Gee%22%7D";
        let auth = parse_oauth_redirect(query).unwrap().unwrap();
        assert_eq!(auth.access_token, "abc.def");
        assert_eq!(auth.user.email, "g@x.io");
    }

    #[test]
    fn oauth_redirect_error_and_noise() {
        let err = parse_oauth_redirect("error=no_user_info").unwrap_err();
        assert_eq!(err.to_string(), "Authentication failed: no_user_info");

        assert_eq!(parse_oauth_redirect("").unwrap(), None);
        assert_eq!(parse_oauth_redirect("?token=only").unwrap(), None);
        assert!(parse_oauth_redirect("token=t&user=garbage").is_err());
    }
}
