use std::fmt;

/// 커버 이미지가 없는 트랙의 `Cover Image URL` 칸에 들어가는 값.
pub const NO_IMAGE: &str = "No image available";

/// 장르 정보가 없는 아티스트의 장르 값.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// 플레이리스트 한 항목에서 꺼낸 트랙 정보. 장르는 아직 없다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistEntry {
    pub name: String,
    pub artist_name: String,
    pub artist_id: Option<String>,
    pub album: String,
    pub release_date: String,
    pub cover_url: Option<String>,
}

/// 페이지 하나. `next`가 없으면 마지막 페이지다.
#[derive(Debug, Clone, Default)]
pub struct PlaylistPage {
    pub entries: Vec<PlaylistEntry>,
    pub next: Option<String>,
}

/// 다음에 읽을 페이지 위치.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCursor {
    /// 플레이리스트의 첫 페이지.
    Start(String),
    /// 이전 페이지가 알려준 절대 URL.
    Next(String),
}

/// 카탈로그 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub release_date: String,
    pub cover_image_url: Option<String>,
    pub genre: String,
}

impl TrackRecord {
    pub fn from_entry(entry: PlaylistEntry, genre: String) -> Self {
        Self {
            name: entry.name,
            artist: entry.artist_name,
            album: entry.album,
            release_date: entry.release_date,
            cover_image_url: entry.cover_url,
            genre,
        }
    }

    pub fn display_cover_url(&self) -> &str {
        self.cover_image_url.as_deref().unwrap_or(NO_IMAGE)
    }
}

/// 센트 단위 가격. 항상 소수점 두 자리로 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
