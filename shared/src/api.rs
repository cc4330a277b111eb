//! REST contract of the podcast-network API.
//!
//! Paths, request/response bodies and the error type shared by the browser
//! dashboard and the terminal client. No I/O happens here.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// The four managed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Podcast hosts.
    Hosts,
    /// Podcast shows.
    Shows,
    /// Show episodes.
    Episodes,
    /// Sponsors.
    Advertisers,
}

impl EntityKind {
    /// Every collection, in navigation order.
    pub const ALL: [EntityKind; 4] =
        [EntityKind::Hosts, EntityKind::Shows, EntityKind::Episodes, EntityKind::Advertisers];

    /// URL path segment of the collection.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Hosts => "hosts",
            EntityKind::Shows => "shows",
            EntityKind::Episodes => "episodes",
            EntityKind::Advertisers => "advertisers",
        }
    }

    /// Singular noun used in messages ("host deleted").
    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Hosts => "host",
            EntityKind::Shows => "show",
            EntityKind::Episodes => "episode",
            EntityKind::Advertisers => "advertiser",
        }
    }

    /// Number of popular items shown per overview section.
    pub fn overview_limit(self) -> usize {
        match self {
            EntityKind::Hosts => 3,
            EntityKind::Shows | EntityKind::Episodes | EntityKind::Advertisers => 6,
        }
    }
}

/// Location of the backend. All API paths hang off `<origin>/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    backend_origin: String,
}

impl ApiConfig {
    /// Creates a config for `backend_origin`; trailing slashes are dropped.
    pub fn new(backend_origin: impl Into<String>) -> Self {
        let origin: String = backend_origin.into();
        Self {
            backend_origin: origin.trim_end_matches('/').to_string(),
        }
    }

    /// Origin used to resolve relative upload URLs.
    pub fn backend_origin(&self) -> &str {
        &self.backend_origin
    }

    /// Root of the REST API.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_origin)
    }

    fn path(&self, tail: &str) -> String {
        format!("{}/{}", self.api_base(), tail)
    }

    /// Credential login.
    pub fn login_url(&self) -> String {
        self.path("auth/login")
    }

    /// Account registration.
    pub fn register_url(&self) -> String {
        self.path("auth/register")
    }

    /// Current user lookup.
    pub fn me_url(&self) -> String {
        self.path("auth/me")
    }

    /// Start of the federated (Google) login redirect flow.
    pub fn google_login_url(&self) -> String {
        self.path("auth/google")
    }

    /// Collection endpoint (list and create).
    pub fn collection_url(&self, kind: EntityKind) -> String {
        self.path(kind.collection())
    }

    /// Episode listing restricted to one show.
    pub fn episodes_of_show_url(&self, show_id: &str) -> String {
        format!(
            "{}?show_id={}",
            self.collection_url(EntityKind::Episodes),
            url::form_urlencoded::byte_serialize(show_id.as_bytes()).collect::<String>()
        )
    }

    /// Item endpoint (get, update, delete).
    pub fn item_url(&self, kind: EntityKind, id: &str) -> String {
        format!("{}/{}", self.collection_url(kind), urlencoding::encode(id))
    }

    /// Ranked subset computed by the API.
    pub fn popular_url(&self, kind: EntityKind) -> String {
        format!("{}/popular/list", self.collection_url(kind))
    }

    /// Multipart host portrait upload.
    pub fn host_image_upload_url(&self) -> String {
        self.path("upload/host-image")
    }

    /// Bulk deletion of everything owned by the current user.
    pub fn clear_all_url(&self) -> String {
        self.path("clear-all-data")
    }

    /// Seeding of the default catalogue.
    pub fn initialize_defaults_url(&self, force: bool) -> String {
        format!("{}?force={force}", self.path("initialize-defaults"))
    }

    /// See [`resolve_image_url`].
    pub fn resolve_image_url(&self, image_url: Option<&str>) -> Option<String> {
        resolve_image_url(&self.backend_origin, image_url)
    }
}

/// Turns a stored image reference into something a browser can load.
///
/// Missing or empty references give `None`, absolute `http(s)` URLs are kept
/// as they are, and anything else is treated as a path on the backend.
pub fn resolve_image_url(backend_origin: &str, image_url: Option<&str>) -> Option<String> {
    let image_url = image_url.filter(|url| !url.is_empty())?;
    if image_url.starts_with("http://") || image_url.starts_with("https://") {
        return Some(image_url.to_string());
    }
    Some(format!("{}{}", backend_origin.trim_end_matches('/'), image_url))
}

/// Credential login body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Registration body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent calls.
    pub access_token: String,
    /// Always `bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Signed-in user.
    pub user: User,
}

/// Body of `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeResponse {
    /// Current user.
    pub user: User,
}

/// Body returned by the image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Stored image path, relative to the backend origin.
    pub url: String,
}

/// Plain acknowledgement such as `{"message": "Host deleted successfully"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human readable message.
    #[serde(default)]
    pub message: String,
}

/// Per-collection counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntityCounts {
    /// Hosts affected.
    #[serde(default)]
    pub hosts: u64,
    /// Shows affected.
    #[serde(default)]
    pub shows: u64,
    /// Episodes affected.
    #[serde(default)]
    pub episodes: u64,
    /// Advertisers affected.
    #[serde(default)]
    pub advertisers: u64,
}

impl EntityCounts {
    /// Sentence like `3 hosts, 10 shows, 5 episodes, and 12 advertisers`.
    pub fn summary(&self) -> String {
        format!(
            "{} hosts, {} shows, {} episodes, and {} advertisers",
            self.hosts, self.shows, self.episodes, self.advertisers
        )
    }
}

/// Body of `DELETE /clear-all-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearAllResponse {
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Deleted records per collection.
    pub deleted: EntityCounts,
}

/// Body of `POST /initialize-defaults`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeDefaultsResponse {
    /// Whether seeding happened. `false` when data exists and `force` was
    /// not set.
    pub initialized: bool,
    /// Explanation when nothing was seeded.
    #[serde(default)]
    pub message: Option<String>,
    /// Created records per collection.
    #[serde(default)]
    pub counts: Option<EntityCounts>,
}

/// Error body; the API uses `detail`, some proxies use `error`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// FastAPI-style detail message.
    #[serde(default)]
    pub detail: Option<String>,
    /// Alternative error message field.
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure of a call to the API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Missing, expired or rejected bearer token.
    #[error("not authenticated: {0}")]
    Unauthorized(String),
    /// Unknown entity id or route.
    #[error("not found: {0}")]
    NotFound(String),
    /// Any other non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// Status code.
        status: u16,
        /// Message extracted from the body, or the raw body.
        message: String,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-success response from its status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail.or(parsed.error))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("request failed with status {status}")
                } else {
                    trimmed.to_string()
                }
            });

        match status {
            401 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Status {
                status,
                message,
            },
        }
    }

    /// Whether the session should be dropped and the user sent to login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Text suitable for a toast: the server's own message when there is
    /// one, without the classification prefix of `Display`.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(message)
            | ApiError::NotFound(message)
            | ApiError::Status {
                message, ..
            }
            | ApiError::Network(message)
            | ApiError::Decode(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::new("https://podnet.example/")
    }

    #[test]
    fn builds_collection_and_item_paths() {
        let api = config();
        assert_eq!(api.api_base(), "https://podnet.example/api");
        assert_eq!(api.collection_url(EntityKind::Hosts), "https://podnet.example/api/hosts");
        assert_eq!(
            api.item_url(EntityKind::Shows, "0b6c/odd id"),
            "https://podnet.example/api/shows/0b6c%2Fodd%20id"
        );
        assert_eq!(
            api.item_url(EntityKind::Hosts, "é~id"),
            "https://podnet.example/api/hosts/%C3%A9~id"
        );
        assert_eq!(
            api.popular_url(EntityKind::Advertisers),
            "https://podnet.example/api/advertisers/popular/list"
        );
        assert_eq!(
            api.episodes_of_show_url("a b&c"),
            "https://podnet.example/api/episodes?show_id=a+b%26c"
        );
        assert_eq!(
            api.initialize_defaults_url(true),
            "https://podnet.example/api/initialize-defaults?force=true"
        );
        assert_eq!(api.host_image_upload_url(), "https://podnet.example/api/upload/host-image");
        assert_eq!(api.google_login_url(), "https://podnet.example/api/auth/google");
    }

    #[test]
    fn resolves_image_urls_against_backend() {
        let api = config();
        assert_eq!(api.resolve_image_url(None), None);
        assert_eq!(api.resolve_image_url(Some("")), None);
        assert_eq!(
            api.resolve_image_url(Some("/uploads/hosts/a.png")).as_deref(),
            Some("https://podnet.example/uploads/hosts/a.png")
        );
        assert_eq!(
            api.resolve_image_url(Some("https://cdn.example/b.jpg")).as_deref(),
            Some("https://cdn.example/b.jpg")
        );
        assert_eq!(
            resolve_image_url("http://localhost:8001", Some("http://other/c.gif")).as_deref(),
            Some("http://other/c.gif")
        );
    }

    #[test]
    fn error_classification_prefers_detail() {
        let err = ApiError::from_status(401, r#"{"detail":"Invalid authentication credentials"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "not authenticated: Invalid authentication credentials");

        let err = ApiError::from_status(404, r#"{"detail":"Host not found"}"#);
        assert_eq!(err.message(), "Host not found");
        assert_eq!(err, ApiError::NotFound("Host not found".to_string()));

        let err = ApiError::from_status(400, r#"{"error":"File must be an image"}"#);
        assert_eq!(err.to_string(), "HTTP 400: File must be an image");

        let err = ApiError::from_status(502, "  ");
        assert_eq!(err.to_string(), "HTTP 502: request failed with status 502");

        let err = ApiError::from_status(500, "upstream exploded");
        assert_eq!(err.to_string(), "HTTP 500: upstream exploded");
    }

    #[test]
    fn auth_response_defaults_token_type() {
        let parsed: AuthResponse = serde_json::from_str(
            r#"{"access_token":"t","user":{"id":"u","email":"a@b.c","name":"A"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.token_type, "bearer");
    }

    #[test]
    fn counts_summary_reads_naturally() {
        let counts = EntityCounts {
            hosts: 3,
            shows: 10,
            episodes: 5,
            advertisers: 12,
        };
        assert_eq!(counts.summary(), "3 hosts, 10 shows, 5 episodes, and 12 advertisers");
    }

    #[test]
    fn overview_limits_follow_sections() {
        assert_eq!(EntityKind::Hosts.overview_limit(), 3);
        assert_eq!(EntityKind::Episodes.overview_limit(), 6);
    }
}
