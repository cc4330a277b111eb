//! Command dispatch.

mod auth;
mod data;
mod entities;
pub mod inspect;
mod overview;

use std::path::Path;

use anyhow::{bail, Context, Result};
use podnet_shared::{
    api::{ApiConfig, ApiError},
    session::Session,
};
use serde::Serialize;
use tracing::warn;

use crate::{
    cli::{Cli, Commands},
    client::ApiClient,
    store::FileStore,
};

/// Everything an online command needs: the API client and the session it
/// authenticates with.
#[derive(Debug)]
pub struct AppState {
    /// Client carrying the session's bearer token.
    pub client: ApiClient,
    /// Persistence of the session.
    pub store: FileStore,
    /// Current session.
    pub session: Session,
}

impl AppState {
    /// Restores the session from `session_file` and prepares a client for
    /// `api_base`.
    pub fn open(api_base: &str, session_file: &Path) -> Result<Self> {
        url::Url::parse(api_base).with_context(|| format!("invalid API base `{api_base}`"))?;
        let store = FileStore::open(session_file)?;
        let session = Session::load(&store);
        let client = ApiClient::new(ApiConfig::new(api_base), session.token.clone())?;

        Ok(Self {
            client,
            store,
            session,
        })
    }

    /// Fails early when no one is signed in.
    pub fn require_login(&self) -> Result<()> {
        if !self.session.is_authenticated() {
            bail!("not signed in; run `pn-cli login` first");
        }
        Ok(())
    }

    /// Unwraps an API result. A rejected token also ends the stored session,
    /// the same way the dashboard drops back to its landing page.
    pub fn checked<T>(&mut self, result: Result<T, ApiError>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(err) if err.is_unauthorized() => {
                warn!("session rejected by the API; signing out");
                self.session.sign_out(&mut self.store);
                self.client.set_token(None);
                self.store.save()?;
                Err(err).context("session expired; run `pn-cli login` again")
            },
            Err(err) => Err(err.into()),
        }
    }
}

/// Runs one parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        api_base,
        session_file,
        command,
    } = cli;

    match command {
        Commands::CheckVideo {
            url,
        } => print_json(&inspect::video_report(&url)),
        Commands::Initials {
            name,
        } => {
            println!("{}", inspect::initials(&name));
            Ok(())
        },
        online => {
            let mut state = AppState::open(&api_base, &session_file)?;
            dispatch(&mut state, online).await
        },
    }
}

async fn dispatch(state: &mut AppState, command: Commands) -> Result<()> {
    match command {
        Commands::Login {
            email,
            password,
        } => auth::login(state, email, password).await,
        Commands::Register {
            name,
            email,
            password,
        } => auth::register(state, name, email, password).await,
        Commands::Logout => auth::logout(state),
        Commands::Whoami => auth::whoami(state).await,
        Commands::Hosts {
            command,
        } => entities::run_hosts(state, command).await,
        Commands::Shows {
            command,
        } => entities::run_shows(state, command).await,
        Commands::Episodes {
            command,
        } => entities::run_episodes(state, command).await,
        Commands::Advertisers {
            command,
        } => entities::run_advertisers(state, command).await,
        Commands::Popular {
            kind,
        } => overview::popular(state, kind.map(Into::into)).await,
        Commands::Overview => overview::overview(state).await,
        Commands::UploadImage {
            file,
        } => data::upload_image(state, &file).await,
        Commands::ClearAll {
            yes,
        } => data::clear_all(state, yes).await,
        Commands::InitDefaults {
            force,
        } => data::init_defaults(state, force).await,
        Commands::CheckVideo {
            ..
        }
        | Commands::Initials {
            ..
        } => bail!("offline command routed to the API dispatcher"),
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
