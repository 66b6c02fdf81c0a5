use std::path::Path;

use crate::core::catalog;
use crate::error::{CatalogError, Result};
use crate::models::Price;

pub const RELEASE_DATE_COLUMN: &str = "Release Date";
pub const PRICE_COLUMN: &str = "Price";

pub const PRICE_BEFORE_1980: Price = Price::from_cents(2999);
pub const PRICE_1980S_1990S: Price = Price::from_cents(2799);
pub const PRICE_FROM_2000: Price = Price::from_cents(2499);
pub const PRICE_FALLBACK: Price = Price::from_cents(2199);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseYear {
    Parsed(i32),
    Unparseable,
}

/// 발매일 앞 네 글자를 정수로 읽는다. 앞뒤 공백과 부호는 허용한다.
/// `"1975-03-01"`, `"1975"`처럼 연도로 시작하는 값만 `Parsed`가 된다.
/// 숫자는 ASCII만 받는다. 전각 숫자(`"１９７５"`)나 자릿수 구분자(`"1_97"`)는
/// `Unparseable`로 보고 기본 가격을 매긴다.
pub fn parse_release_year(release_date: &str) -> ReleaseYear {
    let prefix: String = release_date.chars().take(4).collect();
    match prefix.trim().parse::<i32>() {
        Ok(year) => ReleaseYear::Parsed(year),
        Err(_) => ReleaseYear::Unparseable,
    }
}

pub fn price_for_year(year: ReleaseYear) -> Price {
    match year {
        ReleaseYear::Parsed(y) if y < 1980 => PRICE_BEFORE_1980,
        ReleaseYear::Parsed(y) if y < 2000 => PRICE_1980S_1990S,
        ReleaseYear::Parsed(_) => PRICE_FROM_2000,
        ReleaseYear::Unparseable => PRICE_FALLBACK,
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct PriceSummary {
    pub rows: usize,
    pub fallback: usize,
}

/// 카탈로그를 읽어 맨 뒤에 `Price` 열을 붙인 새 파일을 쓴다.
/// 입력 파일의 다른 열은 그대로 옮긴다.
pub fn price_catalog(input: &Path, output: &Path) -> Result<PriceSummary> {
    let (header, rows) = catalog::read_table(input)?;
    let date_index = header
        .iter()
        .position(|h| h == RELEASE_DATE_COLUMN)
        .ok_or_else(|| CatalogError::MissingColumn(RELEASE_DATE_COLUMN.to_string()))?;

    let mut writer = catalog::csv_writer(std::fs::File::create(output)?);
    let mut out_header = header.clone();
    out_header.push_field(PRICE_COLUMN);
    writer.write_record(&out_header)?;

    let mut summary = PriceSummary::default();
    for row in &rows {
        let year = parse_release_year(row.get(date_index).unwrap_or_default());
        if year == ReleaseYear::Unparseable {
            log::debug!("발매 연도를 읽을 수 없어 기본 가격을 적용합니다: {:?}", row.get(0));
            summary.fallback += 1;
        }

        let mut priced = row.clone();
        priced.push_field(&price_for_year(year).to_string());
        writer.write_record(&priced)?;
        summary.rows += 1;
    }
    writer.flush()?;

    Ok(summary)
}
