use std::collections::HashMap;

use crate::error::Result;
use crate::models::UNKNOWN_GENRE;
use crate::sources::CatalogApi;

/// 아티스트 장르를 `", "`로 이어 붙인 문자열로 만든다.
/// 장르가 하나도 없으면 `"Unknown"`.
pub fn join_genres(genres: &[String]) -> String {
    if genres.is_empty() {
        UNKNOWN_GENRE.to_string()
    } else {
        genres.join(", ")
    }
}

pub struct GenreResolver<'a, A: CatalogApi + ?Sized> {
    api: &'a A,
    cache: Option<HashMap<String, String>>,
}

impl<'a, A: CatalogApi + ?Sized> GenreResolver<'a, A> {
    /// `cache`가 true면 아티스트 ID별로 한 번만 조회한다.
    pub fn new(api: &'a A, cache: bool) -> Self {
        Self {
            api,
            cache: cache.then(HashMap::new),
        }
    }

    pub fn resolve(&mut self, artist_id: Option<&str>) -> Result<String> {
        let Some(artist_id) = artist_id.filter(|id| !id.is_empty()) else {
            return Ok(UNKNOWN_GENRE.to_string());
        };

        if let Some(genre) = self.cache.as_ref().and_then(|c| c.get(artist_id)) {
            return Ok(genre.clone());
        }

        let genre = join_genres(&self.api.artist_genres(artist_id)?);
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(artist_id.to_string(), genre.clone());
        }
        Ok(genre)
    }
}
