pub mod spotify;

use crate::error::Result;
use crate::models::{PageCursor, PlaylistPage};

/// 원격 음악 카탈로그 트레이트.
/// 수집 파이프라인은 이 트레이트만 사용하므로 테스트에서는 가짜 구현으로 바꿔 끼운다.
pub trait CatalogApi {
    /// 플레이리스트 트랙 페이지 하나를 읽는다.
    fn playlist_page(&self, cursor: &PageCursor) -> Result<PlaylistPage>;
    /// 아티스트에 등록된 장르 목록을 가져온다. 비어 있을 수 있다.
    fn artist_genres(&self, artist_id: &str) -> Result<Vec<String>>;
    /// 커버 이미지를 받는다. 성공 응답이 아니면 `CatalogError::ImageDownload`.
    fn fetch_image(&self, url: &str) -> Result<Vec<u8>>;
}
