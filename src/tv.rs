//! TV resource endpoints.
//!
//! Each method is a thin composition: declare the option keys the endpoint
//! recognizes, format the path, append the API key and option suffix, and
//! hand the URL to the fetch pipeline.

use std::collections::HashMap;

use crate::client::TmdbClient;
use crate::error::Result;
use crate::types::{
    TvAccountState, TvAlternativeTitles, TvChanges, TvCredits, TvDetails, TvExternalIds,
    TvImages, TvKeywords, TvPagedResults, TvRecommendations, TvTranslations, TvVideos,
};
use crate::utils::options_query;

/// Caller-supplied query options; keys an endpoint does not recognize are
/// dropped silently.
pub type Options = HashMap<String, String>;

impl TmdbClient {
    /// Primary information about a TV series.
    ///
    /// Recognized options: `language`, `append_to_response`.
    pub async fn tv_info(&self, id: u64, options: &Options) -> Result<TvDetails> {
        let opts = options_query(options, &["language", "append_to_response"]);
        let url = format!(
            "{}/tv/{}?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Whether the show has been rated or added to the session's favourite
    /// or watch lists.
    pub async fn tv_account_states(&self, id: u64, session_id: &str) -> Result<TvAccountState> {
        let url = format!(
            "{}/tv/{}/account_states?api_key={}&session_id={}",
            self.base_url(),
            id,
            self.api_key(),
            session_id
        );
        self.fetch(&url).await
    }

    /// TV shows airing today.
    ///
    /// Recognized options: `page`, `language`, `timezone`.
    pub async fn tv_airing_today(&self, options: &Options) -> Result<TvPagedResults> {
        let opts = options_query(options, &["page", "language", "timezone"]);
        let url = format!(
            "{}/tv/airing_today?api_key={}{}",
            self.base_url(),
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Alternative titles for a series.
    pub async fn tv_alternative_titles(&self, id: u64) -> Result<TvAlternativeTitles> {
        let url = format!(
            "{}/tv/{}/alternative_titles?api_key={}",
            self.base_url(),
            id,
            self.api_key()
        );
        self.fetch(&url).await
    }

    /// Change history for a series.
    ///
    /// Recognized options: `start_date`, `end_date`.
    pub async fn tv_changes(&self, id: u64, options: &Options) -> Result<TvChanges> {
        let opts = options_query(options, &["start_date", "end_date"]);
        let url = format!(
            "{}/tv/{}/changes?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Cast and crew for a series.
    ///
    /// Recognized options: `language`, `append_to_response`.
    pub async fn tv_credits(&self, id: u64, options: &Options) -> Result<TvCredits> {
        let opts = options_query(options, &["language", "append_to_response"]);
        let url = format!(
            "{}/tv/{}/credits?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// External service identifiers for a series.
    ///
    /// Recognized options: `language`.
    pub async fn tv_external_ids(&self, id: u64, options: &Options) -> Result<TvExternalIds> {
        let opts = options_query(options, &["language"]);
        let url = format!(
            "{}/tv/{}/external_ids?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Backdrops and posters for a series.
    ///
    /// Recognized options: `language`, `include_image_language`.
    pub async fn tv_images(&self, id: u64, options: &Options) -> Result<TvImages> {
        let opts = options_query(options, &["language", "include_image_language"]);
        let url = format!(
            "{}/tv/{}/images?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Keywords for a series.
    ///
    /// Recognized options: `append_to_response`.
    pub async fn tv_keywords(&self, id: u64, options: &Options) -> Result<TvKeywords> {
        let opts = options_query(options, &["append_to_response"]);
        let url = format!(
            "{}/tv/{}/keywords?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Recommendations for a series.
    ///
    /// Recognized options: `language`, `page`.
    pub async fn tv_recommendations(
        &self,
        id: u64,
        options: &Options,
    ) -> Result<TvRecommendations> {
        let opts = options_query(options, &["language", "page"]);
        let url = format!(
            "{}/tv/{}/recommendations?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// The most recently created TV show.
    pub async fn tv_latest(&self) -> Result<TvDetails> {
        let url = format!("{}/tv/latest?api_key={}", self.base_url(), self.api_key());
        self.fetch(&url).await
    }

    /// TV shows currently on the air.
    ///
    /// Recognized options: `page`, `language`.
    pub async fn tv_on_the_air(&self, options: &Options) -> Result<TvPagedResults> {
        let opts = options_query(options, &["page", "language"]);
        let url = format!(
            "{}/tv/on_the_air?api_key={}{}",
            self.base_url(),
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Popular TV shows.
    ///
    /// Recognized options: `page`, `language`.
    pub async fn tv_popular(&self, options: &Options) -> Result<TvPagedResults> {
        let opts = options_query(options, &["page", "language"]);
        let url = format!(
            "{}/tv/popular?api_key={}{}",
            self.base_url(),
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Shows similar to a series.
    ///
    /// Recognized options: `page`, `language`, `append_to_response`.
    pub async fn tv_similar(&self, id: u64, options: &Options) -> Result<TvPagedResults> {
        let opts = options_query(options, &["page", "language", "append_to_response"]);
        let url = format!(
            "{}/tv/{}/similar?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Top rated TV shows.
    ///
    /// Recognized options: `page`, `language`.
    pub async fn tv_top_rated(&self, options: &Options) -> Result<TvPagedResults> {
        let opts = options_query(options, &["page", "language"]);
        let url = format!(
            "{}/tv/top_rated?api_key={}{}",
            self.base_url(),
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }

    /// Translations available for a series.
    pub async fn tv_translations(&self, id: u64) -> Result<TvTranslations> {
        let url = format!(
            "{}/tv/{}/translations?api_key={}",
            self.base_url(),
            id,
            self.api_key()
        );
        self.fetch(&url).await
    }

    /// Videos attached to a series.
    ///
    /// Recognized options: `language`.
    pub async fn tv_videos(&self, id: u64, options: &Options) -> Result<TvVideos> {
        let opts = options_query(options, &["language"]);
        let url = format!(
            "{}/tv/{}/videos?api_key={}{}",
            self.base_url(),
            id,
            self.api_key(),
            opts
        );
        self.fetch(&url).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::Config;
    use crate::error::Error;

    async fn client_for(server: &MockServer) -> TmdbClient {
        let config = Config::builder("test-key").base_url(server.uri()).build();
        TmdbClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn success_response_populates_the_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/42"))
            .and(query_param("api_key", "test-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"id":42,"name":"Show"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let details = client_for(&server)
            .await
            .tv_info(42, &Options::new())
            .await
            .unwrap();

        assert_eq!(details.id, 42);
        assert_eq!(details.name, "Show");
    }

    #[tokio::test]
    async fn recognized_options_reach_the_wire() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/popular"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("page", "2"))
            .and(query_param("language", "en-US"))
            .and(query_param_is_missing("timezone"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"page":2,"results":[],"total_pages":10,"total_results":200}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let mut options = Options::new();
        options.insert("page".into(), "2".into());
        options.insert("language".into(), "en-US".into());
        // Not in the recognized set for this endpoint; must stay off the wire.
        options.insert("timezone".into(), "UTC".into());

        let page = client_for(&server)
            .await
            .tv_popular(&options)
            .await
            .unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_results, 200);
    }

    #[tokio::test]
    async fn api_error_envelope_becomes_a_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/42"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#,
            ))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .tv_info(42, &Options::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api { code: 34, .. }));
        let text = err.to_string();
        assert!(text.contains("34"));
        assert!(text.contains("could not be found"));
    }

    #[tokio::test]
    async fn unparseable_success_body_is_wrapped_with_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/42"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .tv_info(42, &Options::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Decode { status: 200, .. }));
        assert!(err.to_string().contains("200"));
    }

    #[tokio::test]
    async fn unparseable_failure_body_carries_the_raw_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/42"))
            .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .await
            .tv_info(42, &Options::new())
            .await
            .unwrap_err();

        match err {
            Error::ErrorBody { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "gateway exploded");
            }
            other => panic!("expected ErrorBody, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn session_id_is_passed_positionally() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/42/account_states"))
            .and(query_param("session_id", "abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":42,"favorite":true,"watchlist":false,"rated":false}"#,
            ))
            .mount(&server)
            .await;

        let state = client_for(&server)
            .await
            .tv_account_states(42, "abc123")
            .await
            .unwrap();
        assert!(state.favorite);
        assert!(!state.watchlist);
    }

    #[tokio::test]
    async fn paged_listing_decodes_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tv/top_rated"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"page":1,"results":[{"id":1399,"name":"Game of Thrones","vote_average":8.4}],"total_pages":1,"total_results":1}"#,
            ))
            .mount(&server)
            .await;

        let page = client_for(&server)
            .await
            .tv_top_rated(&Options::new())
            .await
            .unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].name, "Game of Thrones");
    }
}
