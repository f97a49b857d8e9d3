//! Qirkat 自对弈
//!
//! 两个 AI 在同一块棋盘上轮流走棋，直到一方无棋可走或达到步数上限。

use std::path::Path;

use anyhow::{bail, Context, Result};
use qirkat_ai::{AiConfig, AiEngine, Difficulty};
use qirkat_core::{Board, BoardEvent, PieceColor};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 默认步数上限
pub const DEFAULT_MAX_PLIES: usize = 200;

/// 自对弈配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// 白方 AI
    pub white: AiConfig,
    /// 黑方 AI
    pub black: AiConfig,
    /// 步数上限（单方一步算一步）
    pub max_plies: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            white: AiConfig::from_difficulty(Difficulty::Medium),
            black: AiConfig::from_difficulty(Difficulty::Medium),
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl SelfPlayConfig {
    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }
}

/// 对局结果
#[derive(Debug)]
pub struct GameOutcome {
    /// 终局棋盘
    pub board: Board,
    /// 胜方（达到步数上限时为 None）
    pub winner: Option<PieceColor>,
    /// 实际走的步数
    pub plies: usize,
}

/// 进行一局自对弈
pub fn play_game(config: &SelfPlayConfig) -> Result<GameOutcome> {
    let mut board = Board::new();
    let mut white = AiEngine::new(config.white.clone());
    let mut black = AiEngine::new(config.black.clone());

    board.subscribe(Box::new(|event: &BoardEvent| {
        if let BoardEvent::MoveApplied(mv) = event {
            debug!("board changed by {}", mv);
        }
    }));

    let mut plies = 0;
    while !board.is_game_over() && plies < config.max_plies {
        let turn = board.turn();
        let engine = match turn {
            PieceColor::White => &mut white,
            _ => &mut black,
        };

        let Some(mv) = engine.search(&board) else {
            bail!("{} has no move although the game is not over", turn);
        };
        board.apply(&mv)?;
        plies += 1;

        info!("{} moves {}.", turn, mv);
    }

    let winner = board.winner();
    if let Some(winner) = winner {
        info!("{} wins.", winner);
    }

    Ok(GameOutcome {
        board,
        winner,
        plies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn quick_config() -> SelfPlayConfig {
        SelfPlayConfig {
            white: AiConfig::from_difficulty(Difficulty::Easy),
            black: AiConfig {
                difficulty: Difficulty::Easy,
                max_depth: 1,
            },
            max_plies: 40,
        }
    }

    #[test]
    fn test_play_game_respects_limit() {
        let config = quick_config();
        let outcome = play_game(&config).unwrap();

        assert!(outcome.plies <= config.max_plies);
        if outcome.plies < config.max_plies {
            assert!(outcome.board.is_game_over());
            assert!(outcome.winner.is_some());
        }
        let total = outcome.board.count(PieceColor::White)
            + outcome.board.count(PieceColor::Black)
            + outcome.board.count(PieceColor::Empty);
        assert_eq!(total, 25);
    }

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"white":{{"difficulty":"Hard","max_depth":6}},"max_plies":10}}"#
        )
        .unwrap();

        let config = SelfPlayConfig::load(file.path()).unwrap();
        assert_eq!(config.white, AiConfig::from_difficulty(Difficulty::Hard));
        assert_eq!(config.black, AiConfig::default());
        assert_eq!(config.max_plies, 10);
    }

    #[test]
    fn test_load_config_errors() {
        assert!(SelfPlayConfig::load("/nonexistent/qirkat.json").is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = SelfPlayConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
