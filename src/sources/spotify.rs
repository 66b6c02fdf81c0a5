use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::SpotifyConfig;
use crate::error::{CatalogError, Result};
use crate::models::{PageCursor, PlaylistEntry, PlaylistPage};
use crate::sources::CatalogApi;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE: &str = "https://api.spotify.com/v1";

pub struct SpotifyClient {
    client: reqwest::blocking::Client,
    access_token: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct TracksPage {
    items: Vec<PlaylistItem>,
    next: Option<String>,
}

#[derive(Deserialize)]
struct PlaylistItem {
    track: Option<SpotifyTrack>,
}

#[derive(Deserialize)]
struct SpotifyTrack {
    name: String,
    artists: Vec<SpotifyArtist>,
    album: SpotifyAlbum,
}

#[derive(Deserialize)]
struct SpotifyArtist {
    id: Option<String>,
    name: String,
}

#[derive(Deserialize)]
struct SpotifyAlbum {
    name: String,
    release_date: Option<String>,
    #[serde(default)]
    images: Vec<SpotifyImage>,
}

#[derive(Deserialize)]
struct SpotifyImage {
    url: String,
}

#[derive(Deserialize)]
struct ArtistResponse {
    #[serde(default)]
    genres: Vec<String>,
}

impl SpotifyClient {
    pub fn new(config: &SpotifyConfig) -> anyhow::Result<Self> {
        let client_id = config
            .client_id
            .as_ref()
            .context("Spotify client_id가 설정되지 않았습니다")?;
        let client_secret = config
            .client_secret
            .as_ref()
            .context("Spotify client_secret가 설정되지 않았습니다")?;

        let client = reqwest::blocking::Client::new();
        let access_token = Self::authenticate(&client, client_id, client_secret)?;

        Ok(Self {
            client,
            access_token,
        })
    }

    /// client credentials 방식으로 액세스 토큰을 발급받는다.
    /// 응답에 토큰이 없으면 응답 본문을 그대로 담아 실패한다.
    fn authenticate(
        client: &reqwest::blocking::Client,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String> {
        let body = client
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()?
            .text()?;

        parse_token(&body)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.json()?)
    }
}

fn parse_token(body: &str) -> Result<String> {
    serde_json::from_str::<TokenResponse>(body)
        .ok()
        .and_then(|t| t.access_token)
        .ok_or_else(|| CatalogError::Auth {
            body: body.to_string(),
        })
}

fn first_page_url(playlist_id: &str) -> String {
    format!("{}/playlists/{}/tracks", API_BASE, playlist_id)
}

/// 첫 번째 아티스트와 첫 번째 앨범 이미지를 대표값으로 쓴다.
/// 트랙이 비어 있거나 아티스트가 없는 항목은 건너뛴다.
fn convert_page(page: TracksPage) -> PlaylistPage {
    let entries = page
        .items
        .into_iter()
        .filter_map(|item| {
            let Some(track) = item.track else {
                log::warn!("트랙 정보가 없는 플레이리스트 항목을 건너뜁니다");
                return None;
            };
            let Some(artist) = track.artists.into_iter().next() else {
                log::warn!("아티스트가 없는 트랙을 건너뜁니다: {}", track.name);
                return None;
            };
            Some(PlaylistEntry {
                name: track.name,
                artist_name: artist.name,
                artist_id: artist.id,
                album: track.album.name,
                release_date: track.album.release_date.unwrap_or_default(),
                cover_url: track.album.images.into_iter().next().map(|img| img.url),
            })
        })
        .collect();

    PlaylistPage {
        entries,
        next: page.next.filter(|url| !url.is_empty()),
    }
}

impl CatalogApi for SpotifyClient {
    fn playlist_page(&self, cursor: &PageCursor) -> Result<PlaylistPage> {
        let url = match cursor {
            PageCursor::Start(playlist_id) => first_page_url(playlist_id),
            PageCursor::Next(url) => url.clone(),
        };
        let page: TracksPage = self.get_json(&url)?;
        Ok(convert_page(page))
    }

    fn artist_genres(&self, artist_id: &str) -> Result<Vec<String>> {
        let url = format!("{}/artists/{}", API_BASE, artist_id);
        let artist: ArtistResponse = self.get_json(&url)?;
        Ok(artist.genres)
    }

    fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::ImageDownload {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.bytes()?.to_vec())
    }
}
