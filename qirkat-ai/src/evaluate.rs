//! 棋局评估函数

use qirkat_core::{Board, PieceColor};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估棋局（白方视角，正值对白方有利）
    ///
    /// 只计子数：白子数减黑子数。
    pub fn evaluate(board: &Board) -> i32 {
        Self::material(board, PieceColor::White) - Self::material(board, PieceColor::Black)
    }

    /// 某一方的子数
    pub fn material(board: &Board, color: PieceColor) -> i32 {
        board.count(color) as i32
    }
}
