//! Integration tests for the pn-cli API client.

#[cfg(test)]
mod tests {
    use pn_cli::client::ApiClient;
    use podnet_shared::{
        api::{ApiConfig, ApiError, EntityKind, LoginRequest},
        forms::{to_submission_payload, EpisodeForm},
        models::{Advertiser, Episode, Host},
    };
    use serde_json::{json, Value};
    use wiremock::{
        matchers::{body_json, header, header_regex, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
        ApiClient::new(ApiConfig::new(server.uri()), token.map(str::to_string))
            .expect("client builds")
    }

    fn host_json(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "bio": "Entrepreneur and podcaster",
            "email": "host@example.com",
            "image_url": "/uploads/hosts/a.png",
            "created_at": "2025-01-01T00:00:00+00:00",
            "user_id": "u-1"
        })
    }

    fn episode_json(id: &str, video_url: Value) -> Value {
        json!({
            "id": id,
            "show_id": "s-1",
            "title": "Building in public",
            "description": "",
            "episode_number": 12,
            "duration_minutes": 45,
            "audio_url": null,
            "video_url": video_url,
            "thumbnail_url": null,
            "status": "published",
            "published_at": null,
            "user_id": "u-1"
        })
    }

    #[tokio::test]
    async fn login_posts_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({"email": "ada@example.com", "password": "hunter2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "jwt-token",
                "token_type": "bearer",
                "user": {"id": "u-1", "email": "ada@example.com", "name": "Ada"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let auth = client(&server, None)
            .login(&LoginRequest {
                email: "ada@example.com".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .expect("login succeeds");
        assert_eq!(auth.access_token, "jwt-token");
        assert_eq!(auth.user.name, "Ada");
    }

    #[tokio::test]
    async fn list_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hosts"))
            .and(header("authorization", "Bearer tok-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([host_json("h-1", "Raj Shamani"), host_json("h-2", "Ranveer")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let hosts = client(&server, Some("tok-1"))
            .list::<Host>()
            .await
            .expect("hosts listed");
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[1].name, "Ranveer");
        assert_eq!(hosts[0].image_url.as_deref(), Some("/uploads/hosts/a.png"));
    }

    #[tokio::test]
    async fn create_episode_sends_coerced_numbers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/episodes"))
            .and(body_json(json!({
                "show_id": "s-1",
                "title": "Building in public",
                "description": "",
                "episode_number": 12,
                "duration_minutes": null,
                "audio_url": "",
                "video_url": "https://vimeo.com/1",
                "thumbnail_url": "",
                "status": "draft"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(episode_json("e-1", json!("https://vimeo.com/1"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let form = EpisodeForm {
            show_id: "s-1".to_string(),
            title: "Building in public".to_string(),
            episode_number: "12th".to_string(),
            duration_minutes: "about an hour".to_string(),
            video_url: "https://vimeo.com/1".to_string(),
            ..EpisodeForm::default()
        };
        let created = client(&server, Some("tok"))
            .create::<Episode>(&to_submission_payload(&form))
            .await
            .expect("episode created");
        assert_eq!(created.id, "e-1");
        assert!(!created.has_playable_video());
    }

    #[tokio::test]
    async fn episodes_can_be_filtered_by_show() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/episodes"))
            .and(query_param("show_id", "s-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([episode_json(
                "e-1",
                json!("https://youtu.be/dQw4w9WgXcQ")
            )])))
            .expect(1)
            .mount(&server)
            .await;

        let episodes = client(&server, Some("tok"))
            .list_episodes_of_show("s-1")
            .await
            .expect("episodes listed");
        assert_eq!(
            episodes[0].watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
    }

    #[tokio::test]
    async fn rejected_token_is_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/advertisers/popular/list"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "Invalid authentication credentials"})),
            )
            .mount(&server)
            .await;

        let err = client(&server, Some("expired"))
            .popular::<Advertiser>()
            .await
            .expect_err("401 is an error");
        assert!(err.is_unauthorized());
        assert_eq!(
            err,
            ApiError::Unauthorized("Invalid authentication credentials".to_string())
        );
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/shows/s-404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Show not found"})))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/shows/s-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Show deleted successfully"})),
            )
            .mount(&server)
            .await;

        let api = client(&server, Some("tok"));
        let err = api
            .delete(EntityKind::Shows, "s-404")
            .await
            .expect_err("unknown show");
        assert_eq!(err, ApiError::NotFound("Show not found".to_string()));

        let deleted = api.delete(EntityKind::Shows, "s-1").await.expect("deleted");
        assert_eq!(deleted.message, "Show deleted successfully");
    }

    #[tokio::test]
    async fn bulk_operations_decode_counts() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/clear-all-data"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "All data cleared successfully",
                "deleted": {"hosts": 3, "shows": 10, "episodes": 0, "advertisers": 12}
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/initialize-defaults"))
            .and(query_param("force", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "initialized": true,
                "counts": {"hosts": 3, "shows": 10, "advertisers": 12}
            })))
            .mount(&server)
            .await;

        let api = client(&server, Some("tok"));
        let cleared = api.clear_all().await.expect("cleared");
        assert_eq!(cleared.deleted.hosts, 3);

        let seeded = api.initialize_defaults(true).await.expect("seeded");
        assert!(seeded.initialized);
        let counts = seeded.counts.expect("counts present");
        assert_eq!(counts.episodes, 0);
        assert_eq!(counts.summary(), "3 hosts, 10 shows, 0 episodes, and 12 advertisers");
    }

    #[tokio::test]
    async fn host_image_is_uploaded_as_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload/host-image"))
            .and(header_regex("content-type", "^multipart/form-data"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": "/uploads/hosts/x.png"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = client(&server, Some("tok"));
        let uploaded = api
            .upload_host_image("portrait.png", "image/png", vec![0x89, b'P', b'N', b'G'])
            .await
            .expect("uploaded");
        assert_eq!(uploaded.url, "/uploads/hosts/x.png");
        assert_eq!(
            api.config().resolve_image_url(Some(&uploaded.url)),
            Some(format!("{}/uploads/hosts/x.png", server.uri()))
        );
    }

    #[tokio::test]
    async fn unexpected_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server)
            .await;

        let err = client(&server, Some("tok")).me().await.expect_err("not json");
        assert!(matches!(err, ApiError::Decode(_)), "{err:?}");
    }
}
