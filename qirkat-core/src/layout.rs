//! 棋盘布局字符串
//!
//! 25 个字符（`w`、`b`、`-`），按行优先顺序从左下角 a1 开始，
//! 字符之间可以夹杂任意空白。
//!
//! 初始局面：
//! `wwwww wwwww bb-ww bbbbb bbbbb`

use crate::constants::SQUARE_COUNT;
use crate::error::{QirkatError, Result};
use crate::piece::PieceColor;

/// 初始局面布局
pub const INITIAL_LAYOUT: &str = "wwwww wwwww bb-ww bbbbb bbbbb";

/// 布局处理
pub struct Layout;

impl Layout {
    /// 解析布局字符串为 25 格内容
    pub fn parse(layout: &str) -> Result<[PieceColor; SQUARE_COUNT]> {
        let mut squares = [PieceColor::Empty; SQUARE_COUNT];
        let mut count = 0;

        for c in layout.chars().filter(|c| !c.is_whitespace()) {
            let color = PieceColor::from_short_name(c)
                .ok_or_else(|| QirkatError::layout(format!("invalid character '{}'", c)))?;
            if count >= SQUARE_COUNT {
                return Err(QirkatError::layout(format!(
                    "too many squares, expected {}",
                    SQUARE_COUNT
                )));
            }
            squares[count] = color;
            count += 1;
        }

        if count != SQUARE_COUNT {
            return Err(QirkatError::layout(format!(
                "expected {} squares, got {}",
                SQUARE_COUNT, count
            )));
        }

        Ok(squares)
    }

    /// 生成紧凑的 25 字符布局
    pub fn to_string(squares: &[PieceColor; SQUARE_COUNT]) -> String {
        squares.iter().map(|c| c.short_name()).collect()
    }

    /// 解析初始局面
    pub fn initial() -> [PieceColor; SQUARE_COUNT] {
        Self::parse(INITIAL_LAYOUT).expect("Initial layout should be valid")
    }
}
