use anyhow::{Context, Result};
use podnet_shared::api::{AuthResponse, LoginRequest, RegisterRequest};
use tracing::info;

use super::{print_json, AppState};

pub async fn login(state: &mut AppState, email: String, password: String) -> Result<()> {
    let auth = state
        .client
        .login(&LoginRequest {
            email,
            password,
        })
        .await
        .context("login failed")?;
    remember(state, auth)
}

pub async fn register(
    state: &mut AppState,
    name: String,
    email: String,
    password: String,
) -> Result<()> {
    let auth = state
        .client
        .register(&RegisterRequest {
            name,
            email,
            password,
        })
        .await
        .context("registration failed")?;
    remember(state, auth)
}

fn remember(state: &mut AppState, auth: AuthResponse) -> Result<()> {
    let user = auth.user.clone();
    state.session.sign_in(&mut state.store, auth);
    state.store.save()?;
    state.client.set_token(state.session.token.clone());
    info!(email = %user.email, session = %state.store.path().display(), "signed in");
    print_json(&user)
}

pub fn logout(state: &mut AppState) -> Result<()> {
    state.session.sign_out(&mut state.store);
    state.client.set_token(None);
    state.store.save()?;
    info!("signed out");
    Ok(())
}

pub async fn whoami(state: &mut AppState) -> Result<()> {
    state.require_login()?;
    let result = state.client.me().await;
    let user = state.checked(result)?;
    print_json(&user)
}
