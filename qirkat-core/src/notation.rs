//! 走法记号
//!
//! 格式：`<列><行>-<列><行>[-<列><行>...]`
//! - 列：a..e，行：1..5
//! - 相邻两格为单步，相隔一格为跳吃，连跳重复 `-<列><行>`
//! - 单独的 `-` 表示弃权

use std::str::FromStr;

use crate::constants::PASS_TOKEN;
use crate::error::{QirkatError, Result};
use crate::geometry;
use crate::moves::{Leg, Move};
use crate::piece::Square;

/// 记号解析
pub struct Notation;

impl Notation {
    /// 解析单个格子，如 `c3`
    pub fn parse_square(token: &str) -> Result<Square> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => Square::from_chars(col, row)
                .ok_or_else(|| QirkatError::notation(token, "square out of range")),
            _ => Err(QirkatError::notation(token, "expected <col><row>")),
        }
    }

    /// 解析完整走法
    pub fn parse_move(token: &str) -> Result<Move> {
        let token = token.trim();
        if token == PASS_TOKEN {
            return Ok(Move::Pass);
        }

        let squares = token
            .split('-')
            .map(|part| {
                Self::parse_square(part).map_err(|_| {
                    QirkatError::notation(token, format!("bad square '{}'", part))
                })
            })
            .collect::<Result<Vec<Square>>>()?;

        if squares.len() < 2 {
            return Err(QirkatError::notation(token, "expected at least two squares"));
        }

        let mut legs = Vec::with_capacity(squares.len() - 1);
        for pair in squares.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (dir, dist) = geometry::Direction::between(from, to).ok_or_else(|| {
                QirkatError::notation(token, format!("{} and {} are not on a line", from, to))
            })?;
            match dist {
                1 if geometry::has_step(from.index(), dir) => legs.push(Leg::step(from, to)),
                2 if geometry::has_jump(from.index(), dir) => legs.push(Leg::jump(from, to)),
                _ => {
                    return Err(QirkatError::notation(
                        token,
                        format!("no connection from {} to {}", from, to),
                    ))
                }
            }
        }

        if legs.len() == 1 && !legs[0].is_capture() {
            return Ok(Move::Step(legs[0]));
        }
        if legs.iter().any(|leg| !leg.is_capture()) {
            return Err(QirkatError::notation(
                token,
                "multi-leg moves must consist of captures only",
            ));
        }
        Ok(Move::chain(legs))
    }
}

impl FromStr for Square {
    type Err = QirkatError;

    fn from_str(s: &str) -> Result<Self> {
        Notation::parse_square(s)
    }
}

impl FromStr for Move {
    type Err = QirkatError;

    fn from_str(s: &str) -> Result<Self> {
        Notation::parse_move(s)
    }
}
