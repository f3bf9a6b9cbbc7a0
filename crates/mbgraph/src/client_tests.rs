// SPDX-License-Identifier: GPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::{
        Artist, BrowseQuery, DiscIdLookup, EntityType, Include, MusicBrainzClient,
        MusicBrainzError, Release, SearchQuery,
    };
    use std::time::Duration;
    use uuid::Uuid;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RADIOHEAD_MBID: &str = "a74b1b7f-71a5-4011-9441-d0b5e4122711";
    const OK_COMPUTER_MBID: &str = "b1392450-e666-3926-a536-22c65f834433";
    const PARANOID_ANDROID_RECORDING_MBID: &str = "e5a3f0c4-1fae-4f2e-8f76-0c3b4f1e4fa6";

    fn client_for(mock_server: &MockServer) -> MusicBrainzClient {
        MusicBrainzClient::builder()
            .base_url(mock_server.uri())
            .rate_limit_interval(Duration::ZERO)
            .build()
            .unwrap()
    }

    fn artist_search_response(offset: u32) -> serde_json::Value {
        serde_json::json!({
            "created": "2026-01-08T12:00:00.000Z",
            "count": 11,
            "offset": offset,
            "artists": [{
                "id": RADIOHEAD_MBID,
                "name": "Radiohead",
                "sort-name": "Radiohead",
                "type": "Group",
                "country": "GB",
                "disambiguation": "",
                "score": 100
            }]
        })
    }

    fn artist_lookup_response() -> serde_json::Value {
        serde_json::json!({
            "id": RADIOHEAD_MBID,
            "name": "Radiohead",
            "sort-name": "Radiohead",
            "type": "Group",
            "country": "GB"
        })
    }

    fn album_lookup_response() -> serde_json::Value {
        serde_json::json!({
            "id": OK_COMPUTER_MBID,
            "title": "OK Computer",
            "primary-type": "Album",
            "secondary-types": [],
            "first-release-date": "1997-05-21",
            "artist-credit": [{
                "name": "Radiohead",
                "artist": {
                    "id": RADIOHEAD_MBID,
                    "name": "Radiohead",
                    "sort-name": "Radiohead"
                }
            }]
        })
    }

    fn recording_lookup_response() -> serde_json::Value {
        serde_json::json!({
            "id": PARANOID_ANDROID_RECORDING_MBID,
            "title": "Paranoid Android",
            "length": 387000,
            "artist-credit": [{
                "name": "Radiohead",
                "artist": {
                    "id": RADIOHEAD_MBID,
                    "name": "Radiohead",
                    "sort-name": "Radiohead"
                }
            }],
            "releases": [{
                "id": OK_COMPUTER_MBID,
                "title": "OK Computer",
                "status": "Official",
                "country": "GB",
                "date": "1997-05-21",
                "release-group": {
                    "id": OK_COMPUTER_MBID,
                    "title": "OK Computer",
                    "primary-type": "Album"
                }
            }]
        })
    }

    fn release_browse_response(offset: usize, count: usize, total: usize) -> serde_json::Value {
        let releases: Vec<serde_json::Value> = (offset..offset + count)
            .map(|n| {
                serde_json::json!({
                    "id": Uuid::from_u128(n as u128).to_string(),
                    "title": format!("Release {n}")
                })
            })
            .collect();
        serde_json::json!({
            "release-count": total,
            "release-offset": offset,
            "releases": releases
        })
    }

    #[tokio::test]
    async fn test_search_artists() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist"))
            .and(query_param("query", "Radiohead"))
            .and(query_param("fmt", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_search_response(0)))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let cursor = client
            .search::<Artist>(SearchQuery::new("Radiohead"))
            .await
            .unwrap();

        assert_eq!(cursor.total_results(), 11);
        assert_eq!(cursor.results().len(), 1);
        assert_eq!(cursor.query(), "Radiohead");
        assert!(cursor.created().is_some());

        let hit = &cursor.results()[0];
        assert_eq!(hit.score, 100);
        assert_eq!(hit.item.name, "Radiohead");
        assert_eq!(hit.item.id, Uuid::parse_str(RADIOHEAD_MBID).unwrap());
        assert_eq!(hit.item.country, Some("GB".to_string()));
    }

    #[tokio::test]
    async fn test_search_artists_with_pagination() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist"))
            .and(query_param("query", "John"))
            .and(query_param("limit", "5"))
            .and(query_param("offset", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_search_response(10)))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let query = SearchQuery::new("John").limit(5).offset(10);
        let cursor = client.search::<Artist>(query).await.unwrap();

        assert_eq!(cursor.offset(), 10);
        assert_eq!(cursor.limit(), Some(5));
        assert!(cursor.window_violation().is_none());
        assert!(!cursor.has_more());
    }

    #[tokio::test]
    async fn test_lookup_artist() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/artist/{}", RADIOHEAD_MBID)))
            .and(query_param("fmt", "json"))
            .and(query_param("inc", "aliases tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_lookup_response()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let mbid = Uuid::parse_str(RADIOHEAD_MBID).unwrap();
        let artist = client
            .lookup_artist(mbid, &[Include::Aliases, Include::Tags])
            .await
            .unwrap();

        assert_eq!(artist.name, "Radiohead");
        assert_eq!(artist.id, mbid);
        assert_eq!(artist.country, Some("GB".to_string()));
        assert_eq!(artist.type_name.as_deref(), Some("Group"));
    }

    #[tokio::test]
    async fn test_lookup_release_group() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/release-group/{}", OK_COMPUTER_MBID)))
            .and(query_param("fmt", "json"))
            .and(query_param("inc", "artist-credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(album_lookup_response()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let mbid = Uuid::parse_str(OK_COMPUTER_MBID).unwrap();
        let album = client.lookup_release_group(mbid).await.unwrap();

        assert_eq!(album.title, "OK Computer");
        assert_eq!(album.id, mbid);
        assert_eq!(album.primary_type, Some("Album".to_string()));
        assert_eq!(
            album.first_release_date.map(|date| date.to_string()),
            Some("1997-05-21".to_string())
        );
        assert_eq!(crate::credit_text(&album.artist_credit), "Radiohead");
    }

    #[tokio::test]
    async fn test_lookup_recording() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!(
                "/recording/{}",
                PARANOID_ANDROID_RECORDING_MBID
            )))
            .and(query_param("fmt", "json"))
            .and(query_param("inc", "artists releases release-groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recording_lookup_response()))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let mbid = Uuid::parse_str(PARANOID_ANDROID_RECORDING_MBID).unwrap();
        let recording = client.lookup_recording(mbid).await.unwrap();

        assert_eq!(recording.id, mbid);
        assert_eq!(recording.title, "Paranoid Android");
        assert_eq!(recording.length, Some(Duration::from_millis(387000)));
        assert_eq!(recording.artist_credit.len(), 1);
        assert_eq!(recording.releases.len(), 1);
        assert_eq!(
            recording.releases[0].release_group.as_ref().map(|rg| rg.id),
            Some(Uuid::parse_str(OK_COMPUTER_MBID).unwrap())
        );
    }

    #[tokio::test]
    async fn test_browse_releases_advances_by_items_received() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/release"))
            .and(query_param("label", "46f0f4cd-8aab-4b33-b698-f459faf64190"))
            .and(query_param("offset", "0"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(release_browse_response(0, 25, 35)),
            )
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/release"))
            .and(query_param("offset", "25"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(release_browse_response(25, 10, 35)),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let query = BrowseQuery::new(EntityType::Label, "46f0f4cd-8aab-4b33-b698-f459faf64190")
            .limit(25);
        let mut cursor = client.browse::<Release>(query).await.unwrap();
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.results().len(), 25);
        assert!(cursor.has_more());

        cursor.next_page_async().await.unwrap();
        assert_eq!(cursor.offset(), 25);
        assert_eq!(cursor.results().len(), 10);
        assert_eq!(cursor.results()[0].title, "Release 25");
        assert!(!cursor.has_more());

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_lookup_discid_stub() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/discid/lwHl8fGzJyLXQR33ug60E8jhf4k-"))
            .and(query_param("cdstubs", "yes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "lwHl8fGzJyLXQR33ug60E8jhf4k-",
                "title": "Doo Wop",
                "artist": "Various",
                "track-count": 1,
                "tracks": [{"title": "Doo Wop (That Thing)", "length": 320000}]
            })))
            .mount(&mock_server)
            .await;

        // The discid endpoint only returns stubs when asked for them.
        let body = crate::AsyncTransport::perform_request_async(
            &client_for(&mock_server),
            "discid",
            Some("lwHl8fGzJyLXQR33ug60E8jhf4k-"),
            "cdstubs=yes",
        )
        .await
        .unwrap();
        let lookup: DiscIdLookup = crate::decode(&body).unwrap();

        match lookup {
            DiscIdLookup::Stub(stub) => {
                assert_eq!(stub.title, "Doo Wop");
                assert_eq!(stub.tracks.len(), 1);
            }
            other => panic!("unexpected lookup {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_found_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/artist/{}", RADIOHEAD_MBID)))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let mbid = Uuid::parse_str(RADIOHEAD_MBID).unwrap();
        let result = client.lookup_artist(mbid, &[]).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), MusicBrainzError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rate_limit_error_is_wrapped_by_cursor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let query = SearchQuery::new("Test").limit(10);
        let error = match client.search::<Artist>(query).await {
            Ok(_) => panic!("expected the search to fail"),
            Err(error) => error,
        };

        assert!(matches!(
            error,
            MusicBrainzError::Paging {
                offset: 0,
                limit: Some(10),
                ..
            }
        ));
        assert!(matches!(error.inner(), MusicBrainzError::RateLimitExceeded));
    }

    #[tokio::test]
    async fn test_api_error_uses_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/artist/not-an-mbid"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Invalid mbid.",
                "help": "For usage, please see: https://musicbrainz.org/development/mmd"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let error = client
            .lookup::<Artist>("not-an-mbid", &[])
            .await
            .unwrap_err();
        match error {
            MusicBrainzError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert!(message.starts_with("Invalid mbid."));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_error_carries_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/artist/{}", RADIOHEAD_MBID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": RADIOHEAD_MBID,
                "name": "Radiohead",
                "area": {"name": "United Kingdom"}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        let error = client
            .lookup::<Artist>(RADIOHEAD_MBID, &[])
            .await
            .unwrap_err();
        let decode_error = error.as_decode_error().expect("decode error");
        assert!(decode_error.is_missing_property("id"));
        assert_eq!(decode_error.path(), "area");
    }

    #[tokio::test]
    async fn test_blocking_client_lookup() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/artist/{}", RADIOHEAD_MBID)))
            .and(query_param("fmt", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_lookup_response()))
            .mount(&mock_server)
            .await;

        let base_url = mock_server.uri();
        let artist = tokio::task::spawn_blocking(move || {
            let client = MusicBrainzClient::builder()
                .base_url(base_url)
                .rate_limit_interval(Duration::ZERO)
                .build_blocking()
                .unwrap();
            client.lookup::<Artist>(RADIOHEAD_MBID, &[])
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(artist.name, "Radiohead");
    }
}
