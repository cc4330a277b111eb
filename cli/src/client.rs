//! HTTP client for the podcast-network REST API.

use std::time::Duration;

use podnet_shared::{
    api::{
        ApiConfig, ApiError, AuthResponse, ClearAllResponse, EntityKind,
        InitializeDefaultsResponse, LoginRequest, MeResponse, MessageResponse, RegisterRequest,
        UploadResponse,
    },
    forms::EntityForm,
    models::{Entity, Episode, User},
};
use reqwest::{
    multipart::{Form, Part},
    Method, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Payload type sent when creating or updating `E`.
pub type PayloadOf<E> = <<E as Entity>::Form as EntityForm>::Payload;

/// Authenticated client for one backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client for `config`, sending `token` as a bearer credential
    /// when present.
    pub fn new(config: ApiConfig, token: Option<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self {
            http,
            config,
            token,
        })
    }

    /// Backend location.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Replaces the bearer token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!(%method, url, "api request");
        let builder = self.http.request(method, url);
        match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(method, url).json(body)).await
    }

    /// Credential login.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, &self.config.login_url(), request)
            .await
    }

    /// Account registration; signs the new user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, &self.config.register_url(), request)
            .await
    }

    /// User owning the current token.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse = self
            .send(self.request(Method::GET, &self.config.me_url()))
            .await?;
        Ok(response.user)
    }

    /// Every record of `E`'s collection.
    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, ApiError> {
        self.send(self.request(Method::GET, &self.config.collection_url(E::KIND)))
            .await
    }

    /// Episodes of one show.
    pub async fn list_episodes_of_show(&self, show_id: &str) -> Result<Vec<Episode>, ApiError> {
        self.send(self.request(Method::GET, &self.config.episodes_of_show_url(show_id)))
            .await
    }

    /// Popular subset of `E`'s collection, as ranked by the API.
    pub async fn popular<E: Entity>(&self) -> Result<Vec<E>, ApiError> {
        self.send(self.request(Method::GET, &self.config.popular_url(E::KIND)))
            .await
    }

    /// One record by id.
    pub async fn get<E: Entity>(&self, id: &str) -> Result<E, ApiError> {
        self.send(self.request(Method::GET, &self.config.item_url(E::KIND, id)))
            .await
    }

    /// Creates a record and returns it as stored.
    pub async fn create<E: Entity>(&self, payload: &PayloadOf<E>) -> Result<E, ApiError> {
        self.send_json(Method::POST, &self.config.collection_url(E::KIND), payload)
            .await
    }

    /// Replaces a record and returns it as stored.
    pub async fn update<E: Entity>(
        &self,
        id: &str,
        payload: &PayloadOf<E>,
    ) -> Result<E, ApiError> {
        self.send_json(Method::PUT, &self.config.item_url(E::KIND, id), payload)
            .await
    }

    /// Deletes a record.
    pub async fn delete(&self, kind: EntityKind, id: &str) -> Result<MessageResponse, ApiError> {
        self.send(self.request(Method::DELETE, &self.config.item_url(kind, id)))
            .await
    }

    /// Uploads a host portrait. The returned URL is relative to the backend
    /// origin.
    pub async fn upload_host_image(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let form = Form::new().part("image", part);
        self.send(
            self.request(Method::POST, &self.config.host_image_upload_url())
                .multipart(form),
        )
        .await
    }

    /// Deletes every record owned by the current user.
    pub async fn clear_all(&self) -> Result<ClearAllResponse, ApiError> {
        self.send(self.request(Method::DELETE, &self.config.clear_all_url()))
            .await
    }

    /// Seeds the default catalogue.
    pub async fn initialize_defaults(
        &self,
        force: bool,
    ) -> Result<InitializeDefaultsResponse, ApiError> {
        self.send(self.request(Method::POST, &self.config.initialize_defaults_url(force)))
            .await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !status.is_success() {
        let err = ApiError::from_status(status.as_u16(), &body);
        debug!(status = status.as_u16(), error = %err, "api request failed");
        return Err(err);
    }

    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}
