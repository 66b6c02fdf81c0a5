use std::collections::VecDeque;

use crate::error::Result;
use crate::models::{PageCursor, PlaylistEntry};
use crate::sources::CatalogApi;

/// 플레이리스트의 모든 트랙을 페이지 순서대로 내어주는 반복자.
///
/// 페이지는 필요할 때 하나씩 요청한다. 요청이 실패하면 오류를 한 번 내어준 뒤
/// 끝나며, 중간부터 다시 시작할 수 없다.
pub struct PlaylistTracks<'a, A: CatalogApi + ?Sized> {
    api: &'a A,
    cursor: Option<PageCursor>,
    buffer: VecDeque<PlaylistEntry>,
    pages_fetched: usize,
}

impl<'a, A: CatalogApi + ?Sized> PlaylistTracks<'a, A> {
    pub fn new(api: &'a A, playlist_id: &str) -> Self {
        Self {
            api,
            cursor: Some(PageCursor::Start(playlist_id.to_string())),
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }
}

impl<A: CatalogApi + ?Sized> Iterator for PlaylistTracks<'_, A> {
    type Item = Result<PlaylistEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.buffer.pop_front() {
                return Some(Ok(entry));
            }

            let cursor = self.cursor.take()?;
            match self.api.playlist_page(&cursor) {
                Ok(page) => {
                    self.pages_fetched += 1;
                    log::debug!(
                        "페이지 {}: 트랙 {}개",
                        self.pages_fetched,
                        page.entries.len()
                    );
                    self.buffer.extend(page.entries);
                    self.cursor = page.next.map(PageCursor::Next);
                }
                // cursor는 이미 비워졌으므로 이후 호출은 None을 돌려준다.
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
