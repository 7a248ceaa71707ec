//! Algo Arcade - command-line client
//!
//! Queries the scoring service and renders puzzle boards locally.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use arcade::{ArcadeConfig, GameKind, HttpArcadeClient};
use arcade_hanoi::{HanoiBoard, PegCount, StackLayout};
use arcade_ladder::{BoardSize, LadderLayout, Origin};
use clap::Parser;
use cli::{Cli, Command};
use std::collections::BTreeMap;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ArcadeConfig::load(cli.config.as_deref())?.with_base_url(cli.base_url);
    info!(base_url = %config.base_url(), "Config ready");

    match cli.command {
        Command::Leaderboard => show_leaderboard(&config).await,
        Command::Stats => show_stats(&config).await,
        Command::Compare { game } => show_comparison(&config, game).await,
        Command::Board { size } => draw_board(size),
        Command::Pegs { pegs, disks } => draw_pegs(pegs, disks),
    }
}

#[instrument(skip(config))]
async fn show_leaderboard(config: &ArcadeConfig) -> Result<()> {
    let client = HttpArcadeClient::new(config)?;
    let entries = client.leaderboard().await?;
    println!("{:<4} {:<20} {:>5} {:>6} {:>10} {:>10}", "#", "Player", "Board", "Throws", "BFS", "Dijkstra");
    for (rank, e) in entries.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>5} {:>6} {:>10} {:>10}",
            rank + 1,
            e.player_name,
            format!("{0}x{0}", e.board_size),
            e.min_dice_throws,
            e.bfs_time,
            e.dijkstra_time
        );
    }
    Ok(())
}

#[instrument(skip(config))]
async fn show_stats(config: &ArcadeConfig) -> Result<()> {
    let client = HttpArcadeClient::new(config)?;
    let stats = client.queens_stats().await?;
    println!(
        "Solutions discovered by players: {}/{}",
        stats.total_discovered_by_players, stats.total_solutions_found
    );
    println!("Sequential solver: {} ns", stats.sequential_time_ns);
    println!("Threaded solver:   {} ns", stats.threaded_time_ns);
    Ok(())
}

#[instrument(skip(config))]
async fn show_comparison(config: &ArcadeConfig, game: GameKind) -> Result<()> {
    let client = HttpArcadeClient::new(config)?;
    let comparison = client.comparison(game).await?;
    println!("{} - {} rounds", game.title(), comparison.count);
    if let (Some(three), Some(four)) = (comparison.count_three_peg, comparison.count_four_peg) {
        println!("3 pegs: {three}, 4 pegs: {four}");
    }
    for bar in comparison.bars() {
        println!("{:<24} {:>12.2} us", bar.algorithm, bar.average);
    }
    if let Some((name, avg)) = comparison.fastest() {
        println!("Fastest: {name} ({avg:.2} us)");
    }
    let trend = comparison.trend(game.draws_trend_lines());
    for series in &trend.series {
        let points: Vec<String> = series
            .values
            .iter()
            .map(|v| v.map_or_else(|| "-".to_string(), |t| format!("{t:.0}")))
            .collect();
        println!("{:<24} {}", series.algorithm, points.join(" "));
    }
    Ok(())
}

#[instrument]
fn draw_board(size: u8) -> Result<()> {
    let size = BoardSize::new(size)?;
    let layout = LadderLayout::new(size, &BTreeMap::new(), &BTreeMap::new(), Origin::TopLeft)?;
    for row in layout.rows() {
        let cells: Vec<String> = row.iter().map(|t| format!("{:>4}", t.number)).collect();
        println!("{}", cells.concat());
    }
    Ok(())
}

#[instrument]
fn draw_pegs(pegs: u8, disks: u8) -> Result<()> {
    let board = HanoiBoard::new(PegCount::try_from(pegs)?, disks);
    let layout = StackLayout::of(&board);
    let scale = layout.max_disk_width().max(1);
    for peg in &layout.pegs {
        let marker = if peg.target { " (target)" } else { "" };
        println!("{}{}", peg.label, marker);
        for disk in peg.disks.iter().rev() {
            let bar = "=".repeat((disk.width * 20 / scale) as usize);
            println!("  {:>2} {}", disk.size, bar);
        }
    }
    Ok(())
}
