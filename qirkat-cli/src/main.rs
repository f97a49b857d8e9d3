use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qirkat_cli::{play_game, SelfPlayConfig};

/// Qirkat AI 自对弈
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON 配置文件路径，省略时使用默认配置
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("qirkat_cli=info".parse()?))
        .init();

    let config = match &cli.config {
        Some(path) => SelfPlayConfig::load(path)?,
        None => SelfPlayConfig::default(),
    };

    info!("Qirkat 自对弈开始: {:?}", config);

    let outcome = play_game(&config)?;
    println!("{}", outcome.board.render_with_legend());
    match outcome.winner {
        Some(winner) => println!("{} wins after {} plies.", winner, outcome.plies),
        None => println!("No winner after {} plies.", outcome.plies),
    }

    Ok(())
}
