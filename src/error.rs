use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// 토큰 응답에 `access_token`이 없다. 진단용으로 원문을 그대로 담는다.
    #[error("액세스 토큰 발급에 실패했습니다. 응답: {body}")]
    Auth { body: String },

    #[error("요청 전송에 실패했습니다: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("요청이 실패했습니다 ({status}): {url}")]
    Status { url: String, status: u16 },

    #[error("앨범 커버를 받지 못했습니다 ({status}): {url}")]
    ImageDownload { url: String, status: u16 },

    #[error("카탈로그에 '{0}' 열이 없습니다")]
    MissingColumn(String),

    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 오류: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
