//! Integration tests for the pn-cli command-line interface.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use pn_cli::{
        cli::{Cli, Commands, EpisodeCommands, HostCommands, KindArg, DEFAULT_SESSION_FILE},
        commands::{inspect, AppState},
        store::FileStore,
    };
    use podnet_shared::{
        api::{ApiError, AuthResponse, EntityKind},
        models::User,
        session::{Session, SessionStore, DARK_MODE_KEY, TOKEN_KEY, USER_KEY},
    };

    fn auth() -> AuthResponse {
        AuthResponse {
            access_token: "tok-1".to_string(),
            token_type: "bearer".to_string(),
            user: User {
                id: "u-1".to_string(),
                email: "ada@example.com".to_string(),
                name: "Ada Lovelace".to_string(),
            },
        }
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pn-cli",
            "whoami",
            "--api-base",
            "http://api.test:9000",
            "--session-file",
            "/tmp/pn.json",
        ])
        .expect("valid args");
        assert_eq!(cli.api_base, "http://api.test:9000");
        assert_eq!(cli.session_file, PathBuf::from("/tmp/pn.json"));
        assert!(matches!(cli.command, Commands::Whoami));
    }

    #[test]
    fn session_file_has_a_default() {
        let cli = Cli::try_parse_from(["pn-cli", "logout"]).expect("valid args");
        if std::env::var_os("PODNET_SESSION_FILE").is_none() {
            assert_eq!(cli.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
        }
    }

    #[test]
    fn parses_entity_fields() {
        let cli = Cli::try_parse_from([
            "pn-cli",
            "hosts",
            "create",
            "--name",
            "Nikhil Kamath",
            "--email",
            "nk@example.com",
        ])
        .expect("valid args");
        let Commands::Hosts {
            command: HostCommands::Create {
                fields,
            },
        } = cli.command
        else {
            panic!("expected hosts create");
        };
        assert_eq!(fields.name.as_deref(), Some("Nikhil Kamath"));
        assert_eq!(fields.bio, None);
        assert_eq!(fields.image_file, None);
    }

    #[test]
    fn image_url_and_file_are_exclusive() {
        let result = Cli::try_parse_from([
            "pn-cli",
            "hosts",
            "update",
            "h-1",
            "--image-url",
            "https://cdn/x.png",
            "--image-file",
            "x.png",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn numeric_flags_accept_raw_text() {
        let cli = Cli::try_parse_from([
            "pn-cli",
            "episodes",
            "update",
            "e-1",
            "--episode-number",
            "-3",
            "--duration-minutes",
            "45min",
        ])
        .expect("valid args");
        let Commands::Episodes {
            command: EpisodeCommands::Update {
                id,
                fields,
            },
        } = cli.command
        else {
            panic!("expected episodes update");
        };
        assert_eq!(id, "e-1");
        assert_eq!(fields.episode_number.as_deref(), Some("-3"));
        assert_eq!(fields.duration_minutes.as_deref(), Some("45min"));
    }

    #[test]
    fn popular_kind_maps_to_collection() {
        let cli = Cli::try_parse_from(["pn-cli", "popular", "--kind", "advertisers"])
            .expect("valid args");
        let Commands::Popular {
            kind,
        } = cli.command
        else {
            panic!("expected popular");
        };
        assert_eq!(kind, Some(KindArg::Advertisers));
        assert_eq!(kind.map(EntityKind::from), Some(EntityKind::Advertisers));
    }

    #[test]
    fn file_store_round_trips_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("session.json");

        let mut store = FileStore::open(&path).expect("missing file is empty");
        let mut session = Session::load(&store);
        session.sign_in(&mut store, auth());
        session.set_dark_mode(&mut store, true);
        store.save().expect("saved");

        let reopened = FileStore::open(&path).expect("reopened");
        let restored = Session::load(&reopened);
        assert_eq!(restored, session);
        assert_eq!(restored.bearer().as_deref(), Some("Bearer tok-1"));
    }

    #[test]
    fn logout_keeps_theme_on_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");

        let mut store = FileStore::open(&path).expect("opened");
        let mut session = Session::default();
        session.sign_in(&mut store, auth());
        session.toggle_dark_mode(&mut store);
        session.sign_out(&mut store);
        store.save().expect("saved");

        let reopened = FileStore::open(&path).expect("reopened");
        assert_eq!(reopened.get(TOKEN_KEY), None);
        assert_eq!(reopened.get(USER_KEY), None);
        assert_eq!(reopened.get(DARK_MODE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn corrupt_session_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").expect("written");

        let err = FileStore::open(&path).expect_err("invalid file");
        assert!(err.to_string().contains("invalid session file"));
    }

    #[test]
    fn rejected_token_ends_stored_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        let mut store = FileStore::open(&path).expect("opened");
        Session::default().sign_in(&mut store, auth());
        store.save().expect("saved");

        let mut state = AppState::open("http://localhost:8001", &path).expect("state");
        assert!(state.require_login().is_ok());

        let result: Result<(), ApiError> =
            Err(ApiError::Unauthorized("Token has expired".to_string()));
        let err = state.checked(result).expect_err("unauthorized");
        assert!(err.to_string().contains("session expired"));
        assert!(!state.session.is_authenticated());
        assert!(state.require_login().is_err());

        let reopened = FileStore::open(&path).expect("reopened");
        assert_eq!(reopened.get(TOKEN_KEY), None);
    }

    #[test]
    fn other_errors_keep_the_session() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        let mut store = FileStore::open(&path).expect("opened");
        Session::default().sign_in(&mut store, auth());
        store.save().expect("saved");

        let mut state = AppState::open("http://localhost:8001", &path).expect("state");
        let result: Result<(), ApiError> = Err(ApiError::NotFound("Host not found".to_string()));
        assert!(state.checked(result).is_err());
        assert!(state.session.is_authenticated());
    }

    #[test]
    fn invalid_api_base_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("session.json");
        assert!(AppState::open("not a url", &path).is_err());
    }

    #[test]
    fn video_report_explains_links() {
        let report = inspect::video_report("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42");
        assert!(report.valid);
        assert_eq!(report.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            report.watch_url.as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );

        let report = inspect::video_report("https://vimeo.com/1");
        assert!(!report.valid);
        assert_eq!(report.watch_url, None);
    }

    #[test]
    fn initials_for_names() {
        assert_eq!(inspect::initials("Raj Shamani"), "RS");
        assert_eq!(inspect::initials(""), "??");
    }
}
