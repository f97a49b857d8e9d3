//! 搜索引擎
//!
//! 固定深度 Minimax + Alpha-Beta 剪枝

use qirkat_core::{Board, Move, PieceColor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;

/// 搜索深度上限
pub const MAX_DEPTH: u8 = 8;

/// 超过任何子力差的评分，用作 ±∞ 和无棋可走时的输赢分
pub const INFINITY: i32 = 10_000;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// depth=2
    Easy,
    /// depth=4
    Medium,
    /// depth=6
    Hard,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let max_depth = match difficulty {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        };
        Self {
            difficulty,
            max_depth,
        }
    }

    /// 实际使用的搜索深度：至少 1 层，不超过 [`MAX_DEPTH`]
    pub fn depth(&self) -> u8 {
        self.max_depth.clamp(1, MAX_DEPTH)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// 搜索结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// 最佳走法
    pub best_move: Move,
    /// 白方视角的评分
    pub score: i32,
    /// 搜索的节点数
    pub nodes: u64,
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 搜索最佳走法
    ///
    /// 无合法走法时返回 None，调用方应先检查 `is_game_over`。
    pub fn search(&mut self, board: &Board) -> Option<Move> {
        self.search_with_score(board).map(|result| result.best_move)
    }

    /// 搜索最佳走法并返回评分
    ///
    /// 在棋盘的独立拷贝上搜索，不修改调用方的棋盘。
    pub fn search_with_score(&mut self, board: &Board) -> Option<SearchResult> {
        self.nodes_searched = 0;
        let depth = self.config.depth();
        let mut scratch = board.clone();
        let sense = Self::sense(scratch.turn());

        let (score, best_move) = self.find_move(&mut scratch, depth, sense, -INFINITY, INFINITY);
        let best_move = best_move?;

        debug!(
            turn = %board.turn(),
            depth,
            nodes = self.nodes_searched,
            score,
            best = %best_move,
            "search finished"
        );

        Some(SearchResult {
            best_move,
            score,
            nodes: self.nodes_searched,
        })
    }

    /// 极性：白方取最大 (+1)，黑方取最小 (-1)
    fn sense(turn: PieceColor) -> i32 {
        match turn {
            PieceColor::Black => -1,
            _ => 1,
        }
    }

    /// Minimax + Alpha-Beta
    ///
    /// 返回该局面的评分以及取得该评分的第一个走法。
    /// 每个子节点在执行后撤销，兄弟节点看到的棋盘都相同。
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: u8,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes_searched += 1;

        // 到达深度限制，返回评估值
        if depth == 0 {
            return (Evaluator::evaluate(board), None);
        }

        let moves = board.legal_moves();

        // 无棋可走的一方输
        if moves.is_empty() {
            return (-sense * INFINITY, None);
        }

        let mut best: Option<(i32, Move)> = None;

        for mv in moves {
            board.apply_quiet(&mv);
            board.switch_turn();
            let (score, _) = self.find_move(board, depth - 1, -sense, alpha, beta);
            board.switch_turn();
            board.undo(&mv);

            let improves = match &best {
                None => true,
                Some((best_score, _)) => score * sense > best_score * sense,
            };
            if improves {
                best = Some((score, mv));
            }

            if let Some((best_score, _)) = &best {
                if sense > 0 {
                    alpha = alpha.max(*best_score);
                } else {
                    beta = beta.min(*best_score);
                }
            }

            if alpha >= beta {
                break; // 剪枝
            }
        }

        match best {
            Some((score, mv)) => (score, Some(mv)),
            None => (-sense * INFINITY, None),
        }
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(token: &str) -> Move {
        token.parse().unwrap()
    }

    fn engine(depth: u8) -> AiEngine {
        AiEngine::new(AiConfig {
            difficulty: Difficulty::Medium,
            max_depth: depth,
        })
    }

    /// 不剪枝的 Minimax，用于对照
    fn minimax(board: &mut Board, depth: u8) -> i32 {
        if depth == 0 {
            return Evaluator::evaluate(board);
        }
        let sense = AiEngine::sense(board.turn());
        let moves = board.legal_moves();
        if moves.is_empty() {
            return -sense * INFINITY;
        }
        let mut best = -sense * INFINITY;
        for m in moves {
            board.apply_quiet(&m);
            board.switch_turn();
            let score = minimax(board, depth - 1);
            board.switch_turn();
            board.undo(&m);
            if score * sense > best * sense {
                best = score;
            }
        }
        best
    }

    #[test]
    fn test_search_initial_position() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let board = Board::new();
        let mut engine = AiEngine::from_difficulty(Difficulty::Easy);

        let best = engine.search(&board).unwrap();
        assert!(board.legal_moves().contains(&best));
        assert!(engine.nodes_searched() > 1);
    }

    #[test]
    fn test_single_move_depth_one() {
        // 只有 a1 跳吃 b2 一步
        let board = Board::from_layout("w---- -b--- ----- ----- -----", PieceColor::White).unwrap();
        assert_eq!(board.legal_moves().len(), 1);

        let result = engine(1).search_with_score(&board).unwrap();
        assert_eq!(result.best_move, mv("a1-c3"));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_white_prefers_longer_chain() {
        // a1 只能吃一子，e1 可以连吃两子
        let board = Board::from_layout("w---w b---b ---b- ----- -----", PieceColor::White).unwrap();
        assert_eq!(board.legal_moves(), vec![mv("a1-a3"), mv("e1-e3-c3")]);

        let result = engine(1).search_with_score(&board).unwrap();
        assert_eq!(result.best_move, mv("e1-e3-c3"));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_black_minimizes() {
        let board = Board::from_layout("b---b w---w ---w- ----- -----", PieceColor::Black).unwrap();
        let result = engine(1).search_with_score(&board).unwrap();
        assert_eq!(result.best_move, mv("e1-e3-c3"));
        assert_eq!(result.score, -1);
    }

    #[test]
    fn test_ties_keep_first_move() {
        // 初始局面一层搜索所有走法都是 0 分，应返回生成顺序的第一个
        let board = Board::new();
        let result = engine(1).search_with_score(&board).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.best_move, board.legal_moves()[0]);
    }

    #[test]
    fn test_search_does_not_modify_board() {
        let board = Board::new();
        let before = board.clone();
        let _ = engine(3).search(&board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let board = Board::from_layout("----- ----- --b-- ----- -----", PieceColor::White).unwrap();
        assert!(board.is_game_over());
        assert!(engine(2).search(&board).is_none());
    }

    #[test]
    fn test_win_scores_infinity() {
        // 白方吃掉最后一个黑子后黑方无棋可走
        let board = Board::from_layout("w---- -b--- ----- ----- -----", PieceColor::White).unwrap();
        let result = engine(2).search_with_score(&board).unwrap();
        assert_eq!(result.score, INFINITY);
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        let mut board = Board::new();
        for token in ["d3-c3", "b3-d3", "e3-c3"] {
            for depth in 1..=3 {
                let result = engine(depth).search_with_score(&board).unwrap();
                let expected = minimax(&mut board.clone(), depth);
                assert_eq!(result.score, expected, "depth {} after {:?}", depth, board.render());
            }
            board.apply(&mv(token)).unwrap();
        }
    }

    #[test]
    fn test_difficulty_config() {
        let easy = AiConfig::from_difficulty(Difficulty::Easy);
        assert_eq!(easy.max_depth, 2);

        let medium = AiConfig::from_difficulty(Difficulty::Medium);
        assert_eq!(medium.max_depth, 4);
        assert_eq!(AiConfig::default(), medium);

        let hard = AiConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(hard.max_depth, 6);

        let deep = AiConfig {
            difficulty: Difficulty::Hard,
            max_depth: 40,
        };
        assert_eq!(deep.depth(), MAX_DEPTH);
    }

    #[test]
    fn test_config_json() {
        let json = r#"{"difficulty":"Easy","max_depth":3}"#;
        let config: AiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.depth(), 3);
    }
}
