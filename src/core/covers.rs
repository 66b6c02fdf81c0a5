use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::sources::CatalogApi;

/// 영문자/숫자가 아닌 모든 문자를 `_`로 한 글자씩 치환한다.
/// 유니코드 문자(한글 등)는 그대로 둔다.
pub fn sanitize_track_name(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// 커버 이미지를 `<dir>/<정리된 트랙명>.jpg`로 저장한다.
pub struct CoverDownloader {
    dir: PathBuf,
}

impl CoverDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn cover_path(&self, track_name: &str) -> PathBuf {
        self.dir.join(format!("{}.jpg", sanitize_track_name(track_name)))
    }

    /// 이미지를 받아 저장하고 저장한 경로를 돌려준다.
    /// 같은 이름의 파일이 있으면 덮어쓴다. 디렉토리는 처음 쓸 때 만든다.
    pub fn download<A: CatalogApi + ?Sized>(
        &self,
        api: &A,
        url: &str,
        track_name: &str,
    ) -> Result<PathBuf> {
        let data = api.fetch_image(url)?;
        self.save(&data, track_name)
    }

    fn save(&self, data: &[u8], track_name: &str) -> Result<PathBuf> {
        ensure_dir(&self.dir)?;
        let path = self.cover_path(track_name);
        std::fs::write(&path, data)?;
        Ok(path)
    }
}

fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if !dir.is_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
