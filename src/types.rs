//! Response shapes for the TV resource family.
//!
//! These are passive records: every field maps straight onto the JSON the
//! API returns. Fields the API may omit or null out are `Option`s; the rest
//! fall back to their default when absent, so partial responses still
//! decode.

use serde::{Deserialize, Serialize};

/// Standard failure envelope returned by the API on non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    /// API-level status code (not the HTTP status).
    pub status_code: i32,
    /// Human-readable message.
    pub status_message: String,
}

/// A genre tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// A broadcasting network.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: String,
}

/// A production company.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: String,
}

/// A series creator credit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvCreator {
    pub id: u64,
    pub name: String,
    pub credit_id: String,
    pub gender: Option<u8>,
    pub profile_path: Option<String>,
}

/// A season summary inside series details.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvSeason {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub air_date: Option<String>,
    pub episode_count: u32,
    pub poster_path: Option<String>,
    pub season_number: u32,
}

/// An episode summary, as in `next_episode_to_air`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvEpisode {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub air_date: Option<String>,
    pub episode_number: u32,
    pub production_code: String,
    pub season_number: u32,
    pub still_path: Option<String>,
    pub vote_average: f32,
    pub vote_count: u32,
}

/// Primary information about a TV series (`/tv/{id}`).
///
/// The trailing `Option` fields are sub-resources the API attaches only when
/// requested through `append_to_response`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvDetails {
    pub id: u64,
    pub name: String,
    pub original_name: String,
    pub original_language: String,
    pub origin_country: Vec<String>,
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub created_by: Vec<TvCreator>,
    pub episode_run_time: Vec<u32>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub genres: Vec<Genre>,
    pub homepage: Option<String>,
    pub in_production: bool,
    pub languages: Vec<String>,
    pub networks: Vec<Network>,
    pub next_episode_to_air: Option<TvEpisode>,
    pub number_of_episodes: u32,
    pub number_of_seasons: u32,
    pub popularity: f32,
    pub production_companies: Vec<ProductionCompany>,
    pub seasons: Vec<TvSeason>,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub vote_average: f32,
    pub vote_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_titles: Option<TvAlternativeTitles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<TvChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<TvCredits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<TvImages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<TvKeywords>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<TvPagedResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translations: Option<TvTranslations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<TvVideos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<TvExternalIds>,
}

/// A series entry in paged listings and search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvShort {
    pub id: u64,
    pub name: String,
    pub original_name: String,
    pub adult: bool,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub genre_ids: Vec<u64>,
    pub origin_country: Vec<String>,
    pub first_air_date: Option<String>,
    pub overview: String,
    pub popularity: f32,
    pub vote_average: f32,
    pub vote_count: u32,
}

/// One page of series entries (`/tv/popular`, `/tv/{id}/similar`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvPagedResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub page: u32,
    pub results: Vec<TvShort>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Rating/favourite/watchlist state for a session (`/tv/{id}/account_states`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvAccountState {
    pub id: u64,
    pub favorite: bool,
    pub watchlist: bool,
    pub rated: bool,
}

/// An alternative title entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeTitle {
    pub iso_3166_1: String,
    pub title: String,
}

/// Alternative titles for a series (`/tv/{id}/alternative_titles`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvAlternativeTitles {
    pub id: u64,
    pub results: Vec<AlternativeTitle>,
}

/// One recorded change to a single key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeItem {
    pub id: String,
    pub action: String,
    pub time: String,
}

/// All recorded changes to a single key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeSet {
    pub key: String,
    pub items: Vec<ChangeItem>,
}

/// Change history for a series (`/tv/{id}/changes`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvChanges {
    pub changes: Vec<ChangeSet>,
}

/// A cast credit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvCastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub credit_id: String,
    pub gender: Option<u8>,
    pub order: u32,
    pub profile_path: Option<String>,
}

/// A crew credit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvCrewMember {
    pub id: u64,
    pub name: String,
    pub credit_id: String,
    pub department: String,
    pub job: String,
    pub gender: Option<u8>,
    pub profile_path: Option<String>,
}

/// Cast and crew for a series (`/tv/{id}/credits`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvCredits {
    pub id: u64,
    pub cast: Vec<TvCastMember>,
    pub crew: Vec<TvCrewMember>,
}

/// Identifiers for a series on external services (`/tv/{id}/external_ids`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvExternalIds {
    pub id: u64,
    pub imdb_id: Option<String>,
    pub freebase_id: Option<String>,
    pub freebase_mid: Option<String>,
    pub tvdb_id: Option<u64>,
    pub tvrage_id: Option<u64>,
    pub facebook_id: Option<String>,
    pub instagram_id: Option<String>,
    pub twitter_id: Option<String>,
}

/// A single backdrop or poster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvImage {
    pub file_path: String,
    pub width: u32,
    pub height: u32,
    pub iso_639_1: Option<String>,
    pub aspect_ratio: f32,
    pub vote_average: f32,
    pub vote_count: u32,
}

/// Images for a series (`/tv/{id}/images`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvImages {
    pub id: u64,
    pub backdrops: Vec<TvImage>,
    pub posters: Vec<TvImage>,
}

/// A keyword tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    pub id: u64,
    pub name: String,
}

/// Keywords for a series (`/tv/{id}/keywords`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvKeywords {
    pub id: u64,
    pub results: Vec<Keyword>,
}

/// Network logo as embedded in recommendation entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkLogo {
    pub path: String,
    pub aspect_ratio: f32,
}

/// Network entry inside a recommendation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationNetwork {
    pub id: u64,
    pub name: String,
    pub logo: NetworkLogo,
    pub origin_country: String,
}

/// A recommended series entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvRecommendation {
    pub id: u64,
    pub name: String,
    pub original_name: String,
    pub original_language: String,
    pub origin_country: Vec<String>,
    pub overview: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
    pub first_air_date: Option<String>,
    pub genre_ids: Vec<u64>,
    pub networks: Vec<RecommendationNetwork>,
    pub popularity: f32,
    pub vote_average: f32,
    pub vote_count: u32,
}

/// Recommendations for a series (`/tv/{id}/recommendations`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvRecommendations {
    pub page: u32,
    pub results: Vec<TvRecommendation>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Localized fields of a translation entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationData {
    pub name: String,
    pub overview: String,
    pub homepage: String,
}

/// One available translation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvTranslation {
    pub iso_3166_1: String,
    pub iso_639_1: String,
    pub name: String,
    pub english_name: String,
    pub data: TranslationData,
}

/// Translations for a series (`/tv/{id}/translations`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvTranslations {
    pub id: u64,
    pub translations: Vec<TvTranslation>,
}

/// A trailer, teaser, or clip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvVideo {
    pub id: String,
    pub iso_639_1: String,
    pub key: String,
    pub name: String,
    pub site: String,
    pub size: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Videos attached to a series (`/tv/{id}/videos`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TvVideos {
    pub id: u64,
    pub results: Vec<TvVideo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_decode_tolerates_missing_and_null_fields() {
        let details: TvDetails = serde_json::from_str(
            r#"{"id":1399,"name":"Game of Thrones","poster_path":null,"genres":[{"id":18,"name":"Drama"}]}"#,
        )
        .unwrap();
        assert_eq!(details.id, 1399);
        assert_eq!(details.name, "Game of Thrones");
        assert_eq!(details.poster_path, None);
        assert_eq!(details.genres, vec![Genre { id: 18, name: "Drama".into() }]);
        assert!(details.credits.is_none());
    }

    #[test]
    fn error_envelope_decodes() {
        let status: ApiStatus = serde_json::from_str(
            r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#,
        )
        .unwrap();
        assert_eq!(status.status_code, 34);
        assert!(status.status_message.contains("could not be found"));
    }

    #[test]
    fn video_type_key_round_trips() {
        let video = TvVideo {
            kind: "Trailer".into(),
            ..TvVideo::default()
        };
        let json = serde_json::to_value(&video).unwrap();
        assert_eq!(json["type"], "Trailer");
    }
}
