use gloo_net::http::{Request, RequestBuilder, Response};
use podnet_shared::{
    api::{
        ApiError, AuthResponse, ClearAllResponse, EntityKind, InitializeDefaultsResponse,
        LoginRequest, MessageResponse, RegisterRequest, UploadResponse,
    },
    forms::EntityForm,
    models::{Advertiser, Entity, Episode, Host, Show},
    overview::Overview,
};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::config::api_config;

/// Payload type sent when creating or updating `E`.
pub type PayloadOf<E> = <<E as Entity>::Form as EntityForm>::Payload;

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {token}"))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(network)?;

    if !ok {
        return Err(ApiError::from_status(status, &body));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str, token: &str) -> Result<T, ApiError> {
    let response = authorized(Request::get(url), token)
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&api_config().login_url())
        .json(request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&api_config().register_url())
        .json(request)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn list<E: Entity>(token: &str) -> Result<Vec<E>, ApiError> {
    get_json(&api_config().collection_url(E::KIND), token).await
}

pub async fn popular<E: Entity>(token: &str) -> Result<Vec<E>, ApiError> {
    get_json(&api_config().popular_url(E::KIND), token).await
}

pub async fn create<E: Entity>(token: &str, payload: &PayloadOf<E>) -> Result<E, ApiError> {
    let response = authorized(Request::post(&api_config().collection_url(E::KIND)), token)
        .json(payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn update<E: Entity>(
    token: &str,
    id: &str,
    payload: &PayloadOf<E>,
) -> Result<E, ApiError> {
    let response = authorized(Request::put(&api_config().item_url(E::KIND, id)), token)
        .json(payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn delete(token: &str, kind: EntityKind, id: &str) -> Result<MessageResponse, ApiError> {
    let response = authorized(Request::delete(&api_config().item_url(kind, id)), token)
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

/// Uploads a host portrait as the multipart field `image`.
pub async fn upload_host_image(token: &str, file: &File) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let response = authorized(Request::post(&api_config().host_image_upload_url()), token)
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn clear_all(token: &str) -> Result<ClearAllResponse, ApiError> {
    let response = authorized(Request::delete(&api_config().clear_all_url()), token)
        .send()
        .await
        .map_err(network)?;
    decode(response).await
}

pub async fn initialize_defaults(
    token: &str,
    force: bool,
) -> Result<InitializeDefaultsResponse, ApiError> {
    let response =
        authorized(Request::post(&api_config().initialize_defaults_url(force)), token)
            .send()
            .await
            .map_err(network)?;
    decode(response).await
}

/// Every list the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub hosts: Vec<Host>,
    pub shows: Vec<Show>,
    pub episodes: Vec<Episode>,
    pub advertisers: Vec<Advertiser>,
    pub popular: Overview,
}

/// Fetches the four collections and the four popular lists concurrently.
/// All eight requests settle before the first failure is reported.
pub async fn fetch_dashboard(token: &str) -> Result<DashboardData, ApiError> {
    let (
        hosts,
        shows,
        episodes,
        advertisers,
        top_hosts,
        top_shows,
        top_episodes,
        top_advertisers,
    ) = futures::join!(
        list::<Host>(token),
        list::<Show>(token),
        list::<Episode>(token),
        list::<Advertiser>(token),
        popular::<Host>(token),
        popular::<Show>(token),
        popular::<Episode>(token),
        popular::<Advertiser>(token),
    );

    Ok(DashboardData {
        hosts: hosts?,
        shows: shows?,
        episodes: episodes?,
        advertisers: advertisers?,
        popular: Overview {
            hosts: top_hosts?,
            shows: top_shows?,
            episodes: top_episodes?,
            advertisers: top_advertisers?,
        },
    })
}
