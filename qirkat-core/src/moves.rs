//! 走法定义
//!
//! 一个回合的走法是弃权、单步移动，或由若干段跳吃组成的连跳链。

use serde::{Deserialize, Serialize};

use crate::geometry::Direction;
use crate::piece::Square;

/// 走法中的一段（单步或一次跳吃）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Leg {
    /// 起始格
    pub from: Square,
    /// 目标格
    pub to: Square,
    /// 被吃棋子所在格（仅跳吃时存在）
    pub captured: Option<Square>,
}

impl Leg {
    /// 单步
    pub fn step(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// 跳吃，被吃格取两格的中点
    pub fn jump(from: Square, to: Square) -> Self {
        let captured = Square::new_unchecked((from.index() + to.index()) / 2);
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// 该段的方向
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.from, self.to).map(|(dir, _)| dir)
    }

    /// 是否为水平单步
    pub fn is_horizontal_step(&self) -> bool {
        !self.is_capture() && self.from.row() == self.to.row()
    }
}

/// 走法
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub enum Move {
    /// 弃权
    Pass,
    /// 单步移动
    Step(Leg),
    /// 连跳链，至少一段，后一段的起点等于前一段的终点
    Jump(Vec<Leg>),
}

/// 反序列化的中间形式，转换为 [`Move`] 时检查连跳链
#[derive(Deserialize)]
enum RawMove {
    Pass,
    Step(Leg),
    Jump(Vec<Leg>),
}

impl TryFrom<RawMove> for Move {
    type Error = String;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        match raw {
            RawMove::Pass => Ok(Move::Pass),
            RawMove::Step(leg) => Ok(Move::Step(leg)),
            RawMove::Jump(legs) => {
                if legs.is_empty() {
                    return Err("jump chain has no legs".to_string());
                }
                if !legs.windows(2).all(|w| w[0].to == w[1].from) {
                    return Err("jump legs are not connected".to_string());
                }
                Ok(Move::Jump(legs))
            }
        }
    }
}

impl Move {
    /// 创建单步走法
    pub fn step(from: Square, to: Square) -> Self {
        Move::Step(Leg::step(from, to))
    }

    /// 创建单段跳吃
    pub fn jump(from: Square, to: Square) -> Self {
        Move::Jump(vec![Leg::jump(from, to)])
    }

    /// 由多段跳吃组成的链
    pub fn chain(legs: Vec<Leg>) -> Self {
        debug_assert!(!legs.is_empty());
        debug_assert!(legs.windows(2).all(|w| w[0].to == w[1].from));
        Move::Jump(legs)
    }

    /// 在跳吃前面接上一段
    pub fn prepend(head: Leg, tail: &Move) -> Self {
        let mut legs = Vec::with_capacity(tail.legs().len() + 1);
        legs.push(head);
        legs.extend_from_slice(tail.legs());
        Move::chain(legs)
    }

    /// 所有段
    pub fn legs(&self) -> &[Leg] {
        match self {
            Move::Pass => &[],
            Move::Step(leg) => std::slice::from_ref(leg),
            Move::Jump(legs) => legs,
        }
    }

    /// 起始格（弃权时为 None）
    pub fn from(&self) -> Option<Square> {
        self.legs().first().map(|leg| leg.from)
    }

    /// 最终落点（弃权时为 None）
    pub fn to(&self) -> Option<Square> {
        self.legs().last().map(|leg| leg.to)
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump(_))
    }

    /// 被吃掉的棋子数
    pub fn capture_count(&self) -> usize {
        self.legs().iter().filter(|leg| leg.is_capture()).count()
    }

    /// 自身是否为 `other` 的前缀（逐段相同）
    pub fn is_prefix_of(&self, other: &Move) -> bool {
        let mine = self.legs();
        let theirs = other.legs();
        !mine.is_empty() && mine.len() <= theirs.len() && theirs[..mine.len()] == *mine
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pass => f.write_str(crate::constants::PASS_TOKEN),
            _ => {
                let legs = self.legs();
                if let Some(first) = legs.first() {
                    write!(f, "{}", first.from)?;
                }
                for leg in legs {
                    write!(f, "-{}", leg.to)?;
                }
                Ok(())
            }
        }
    }
}
