use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};
use dialoguer::Input;

use crate::config::{self, Config};
use crate::core::{catalog, pipeline, pricer};
use crate::sources::spotify::SpotifyClient;

#[derive(Parser)]
#[command(name = "vinylcat", about = "Spotify 플레이리스트로 LP 카탈로그와 가격표를 만드는 도구")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 플레이리스트를 카탈로그 CSV로 저장하고 커버 이미지를 내려받기
    Fetch,
    /// 카탈로그에 발매 연도별 가격 열 추가
    Price,
    /// 가격이 붙은 카탈로그를 표로 보기
    Show,
    /// Spotify 자격증명과 플레이리스트 설정
    Config,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Fetch) => cmd_fetch(&config::load_config()),
        Some(Commands::Price) => cmd_price(&config::load_config()),
        Some(Commands::Show) => cmd_show(&config::load_config()),
        Some(Commands::Config) => cmd_config(),
        None => {
            println!("사용법: vinylcat <명령어>");
            println!("자세한 정보는 vinylcat --help를 실행하세요.");
            Ok(())
        }
    }
}

fn cmd_fetch(cfg: &Config) -> Result<()> {
    if !cfg.spotify.is_configured() {
        println!("Spotify가 설정되지 않았습니다. 먼저 'vinylcat config'를 실행하세요.");
        return Ok(());
    }
    let Some(playlist_id) = cfg.playlist.playlist_id() else {
        println!("플레이리스트 ID가 없습니다. 먼저 'vinylcat config'를 실행하세요.");
        return Ok(());
    };

    let client = SpotifyClient::new(&cfg.spotify)?;
    let summary = pipeline::fetch_catalog(&client, playlist_id, cfg)
        .context("플레이리스트 수집에 실패했습니다")?;

    println!(
        "\n{}에 트랙 {}개를 저장했습니다 (커버 저장: {}, 실패: {})",
        cfg.output.catalog.display(),
        summary.rows,
        summary.covers_saved,
        summary.covers_failed,
    );
    Ok(())
}

fn cmd_price(cfg: &Config) -> Result<()> {
    let input = &cfg.output.catalog;
    let output = &cfg.output.priced;

    if same_file(input, output) {
        anyhow::bail!(
            "입력과 출력 파일이 같습니다: {}. 설정의 output.priced를 바꾸세요.",
            input.display()
        );
    }

    let summary = pricer::price_catalog(input, output)
        .with_context(|| format!("{}의 가격 계산에 실패했습니다", input.display()))?;

    println!(
        "{}에 {}개 행의 가격을 기록했습니다 (발매 연도 불명: {})",
        output.display(),
        summary.rows,
        summary.fallback,
    );
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn cmd_show(cfg: &Config) -> Result<()> {
    let path = &cfg.output.priced;
    let (header, rows) = catalog::read_table(path).with_context(|| {
        format!(
            "{}을(를) 읽을 수 없습니다. 먼저 'vinylcat price'를 실행하세요.",
            path.display()
        )
    })?;

    if rows.is_empty() {
        println!("{}에 트랙이 없습니다", path.display());
        return Ok(());
    }

    let shown = ["Track Name", "Artist", "Album", "Release Date", "Genre", "Price"];
    let columns: Vec<Option<usize>> = shown
        .iter()
        .map(|name| header.iter().position(|h| h == *name))
        .collect();
    let price_index = header.iter().position(|h| h == pricer::PRICE_COLUMN);

    let mut table = Table::new();
    table.set_header(vec!["제목", "아티스트", "앨범", "발매일", "장르", "가격"]);

    let mut tiers: BTreeMap<String, usize> = BTreeMap::new();
    for row in &rows {
        table.add_row(
            columns
                .iter()
                .map(|idx| Cell::new(idx.and_then(|i| row.get(i)).unwrap_or("-")))
                .collect::<Vec<_>>(),
        );
        if let Some(price) = price_index.and_then(|i| row.get(i)) {
            *tiers.entry(price.to_string()).or_default() += 1;
        }
    }

    println!("{table}");
    println!("\n총 {}곡", rows.len());
    for (price, count) in tiers.iter().rev() {
        println!("  {}: {}곡", price, count);
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let mut cfg = config::load_config();

    println!("Spotify API 설정");
    println!("(자격증명은 https://developer.spotify.com/dashboard 에서 발급받으세요)\n");

    let client_id: String = Input::new()
        .with_prompt("Client ID")
        .with_initial_text(cfg.spotify.client_id.clone().unwrap_or_default())
        .interact_text()?;

    let client_secret: String = Input::new()
        .with_prompt("Client Secret")
        .with_initial_text(cfg.spotify.client_secret.clone().unwrap_or_default())
        .interact_text()?;

    let playlist_id: String = Input::new()
        .with_prompt("Playlist ID")
        .with_initial_text(cfg.playlist.id.clone().unwrap_or_default())
        .interact_text()?;

    cfg.spotify.client_id = Some(client_id);
    cfg.spotify.client_secret = Some(client_secret);
    cfg.playlist.id = Some(playlist_id);

    config::save_config(&cfg)?;
    println!("\n설정이 저장되었습니다!");
    Ok(())
}
