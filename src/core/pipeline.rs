use crate::config::Config;
use crate::core::catalog::CatalogWriter;
use crate::core::covers::CoverDownloader;
use crate::core::genre::GenreResolver;
use crate::core::paginator::PlaylistTracks;
use crate::error::{CatalogError, Result};
use crate::models::TrackRecord;
use crate::sources::CatalogApi;

#[derive(Debug, Default, PartialEq)]
pub struct FetchSummary {
    pub rows: usize,
    pub covers_saved: usize,
    pub covers_failed: usize,
}

/// 플레이리스트 전체를 카탈로그 CSV로 쓰고 커버 이미지를 내려받는다.
///
/// 행은 도착 순서대로 하나씩 기록되고, 그 행의 커버 다운로드는 기록이 끝난 뒤에
/// 시도한다. 커버 응답이 실패면 경고만 남기고 계속하며, 그 밖의 오류는 즉시
/// 중단한다. 이미 쓴 행은 그대로 남는다.
pub fn fetch_catalog<A: CatalogApi + ?Sized>(
    api: &A,
    playlist_id: &str,
    config: &Config,
) -> Result<FetchSummary> {
    let mut writer = CatalogWriter::create(&config.output.catalog)?;
    let mut genres = GenreResolver::new(api, config.playlist.cache_genres);
    let covers = CoverDownloader::new(&config.output.cover_dir);
    let mut summary = FetchSummary::default();

    let mut tracks = PlaylistTracks::new(api, playlist_id);
    for entry in tracks.by_ref() {
        let entry = entry?;
        let genre = genres.resolve(entry.artist_id.as_deref())?;
        let record = TrackRecord::from_entry(entry, genre);

        writer.write(&record)?;
        log::info!("[{}] {} - {}", writer.rows(), record.artist, record.name);

        let Some(url) = record.cover_image_url.as_deref() else {
            continue;
        };
        match covers.download(api, url, &record.name) {
            Ok(path) => {
                log::info!("커버 저장: {}", path.display());
                summary.covers_saved += 1;
            }
            Err(e @ CatalogError::ImageDownload { .. }) => {
                log::warn!("커버 다운로드 실패 ({}): {}", record.name, e);
                summary.covers_failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    summary.rows = writer.rows();
    log::info!(
        "페이지 {}개에서 트랙 {}개를 기록했습니다",
        tracks.pages_fetched(),
        summary.rows
    );
    Ok(summary)
}
