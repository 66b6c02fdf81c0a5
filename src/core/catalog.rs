use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::models::TrackRecord;

pub const HEADER: [&str; 6] = [
    "Track Name",
    "Artist",
    "Album",
    "Release Date",
    "Cover Image URL",
    "Genre",
];

/// 카탈로그 CSV를 한 행씩 기록한다.
/// 매 행마다 flush하므로 실행이 중간에 끊겨도 이미 쓴 행은 남는다.
pub struct CatalogWriter<W: std::io::Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CatalogWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: std::io::Write> CatalogWriter<W> {
    pub fn from_writer(inner: W) -> Result<Self> {
        let mut writer = csv_writer(inner);
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write(&mut self, record: &TrackRecord) -> Result<()> {
        self.writer.write_record([
            record.name.as_str(),
            record.artist.as_str(),
            record.album.as_str(),
            record.release_date.as_str(),
            record.display_cover_url(),
            record.genre.as_str(),
        ])?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(e) => panic!("CSV writer flush 실패: {}", e.error()),
        }
    }
}

/// 줄바꿈은 플랫폼과 상관없이 `\n`.
pub fn csv_writer<W: std::io::Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// 헤더와 모든 행을 문자열 그대로 읽는다.
pub fn read_table(path: &Path) -> Result<(csv::StringRecord, Vec<csv::StringRecord>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let header = reader.headers()?.clone();
    let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((header, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, cover: Option<&str>, genre: &str) -> TrackRecord {
        TrackRecord {
            name: name.to_string(),
            artist: "Queen".to_string(),
            album: "Jazz".to_string(),
            release_date: "1978-11-10".to_string(),
            cover_image_url: cover.map(str::to_string),
            genre: genre.to_string(),
        }
    }

    #[test]
    fn test_header_only_when_empty() {
        let writer = CatalogWriter::from_writer(Vec::new()).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            out,
            "Track Name,Artist,Album,Release Date,Cover Image URL,Genre\n"
        );
    }

    #[test]
    fn test_rows_in_write_order() {
        let mut writer = CatalogWriter::from_writer(Vec::new()).unwrap();
        writer
            .write(&record("Don't Stop Me Now", Some("https://img/1.jpg"), "rock"))
            .unwrap();
        writer.write(&record("Mustapha", None, "Unknown")).unwrap();
        assert_eq!(writer.rows(), 2);

        let out = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[1],
            "Don't Stop Me Now,Queen,Jazz,1978-11-10,https://img/1.jpg,rock"
        );
        assert_eq!(
            lines[2],
            "Mustapha,Queen,Jazz,1978-11-10,No image available,Unknown"
        );
    }

    #[test]
    fn test_joined_genres_are_quoted() {
        let mut writer = CatalogWriter::from_writer(Vec::new()).unwrap();
        writer
            .write(&record("Jealousy", None, "classic rock, glam rock"))
            .unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert!(out.ends_with(",\"classic rock, glam rock\"\n"));
    }

    #[test]
    fn test_rows_are_on_disk_before_finish() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("catalog.csv");

        let mut writer = CatalogWriter::create(&path).unwrap();
        writer.write(&record("Bicycle Race", None, "rock")).unwrap();

        // writer는 아직 살아 있다.
        let (header, rows) = read_table(&path).unwrap();
        assert_eq!(header.iter().collect::<Vec<_>>(), HEADER);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Bicycle Race");
        drop(writer);
    }
}
