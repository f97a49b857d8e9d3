//! 棋盘几何
//!
//! 5×5 米字棋盘：每个格子都有上下左右的连线，
//! 只有行列之和为偶数的格子才有斜线（米字交点）。
//! 全部由行列运算得出，不依赖手写的邻接表。

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, SQUARE_COUNT};
use crate::piece::Square;

/// 八个方向
///
/// 声明顺序即走法生成时的扫描顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
    /// 左上
    DiagLU,
    /// 右上
    DiagRU,
    /// 左下
    DiagLD,
    /// 右下
    DiagRD,
}

impl Direction {
    /// 按扫描顺序排列的全部方向
    pub const ALL: [Direction; 8] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
        Direction::DiagLU,
        Direction::DiagRU,
        Direction::DiagLD,
        Direction::DiagRD,
    ];

    /// 列、行偏移量
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::DiagLU => (-1, 1),
            Direction::DiagRU => (1, 1),
            Direction::DiagLD => (-1, -1),
            Direction::DiagRD => (1, -1),
        }
    }

    pub fn is_diagonal(&self) -> bool {
        let (dc, dr) = self.delta();
        dc != 0 && dr != 0
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// 行方向分量：1 向上，-1 向下，0 水平
    pub fn row_sign(&self) -> i8 {
        self.delta().1
    }

    /// 由两个格子的差推出方向（必须是同一条线上的 1 或 2 步）
    pub fn between(from: Square, to: Square) -> Option<(Direction, usize)> {
        let dc = to.col() as i8 - from.col() as i8;
        let dr = to.row() as i8 - from.row() as i8;
        let dist = dc.abs().max(dr.abs());
        if dist == 0 || dist > 2 {
            return None;
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        if dc.abs() % dist != 0 || dr.abs() % dist != 0 {
            return None;
        }
        let unit = (dc / dist, dr / dist);
        Direction::ALL
            .into_iter()
            .find(|d| d.delta() == unit)
            .map(|d| (d, dist as usize))
    }
}

/// 线性索引转（列，行）
///
/// 越界索引属于前置条件错误，直接 panic。
pub fn coords(index: usize) -> (usize, usize) {
    assert!(index < SQUARE_COUNT, "square index {index} out of range");
    (index % BOARD_SIZE, index / BOARD_SIZE)
}

/// 该格子是否位于米字交点上（有斜线）
pub fn has_diagonals(index: usize) -> bool {
    let (col, row) = coords(index);
    (col + row) % 2 == 0
}

/// 沿方向走 `steps` 步后的索引；出界或该格无此斜线时返回 None
fn offset(index: usize, dir: Direction, steps: i8) -> Option<usize> {
    let (col, row) = coords(index);
    if dir.is_diagonal() && !has_diagonals(index) {
        return None;
    }
    let (dc, dr) = dir.delta();
    let c = col as i8 + dc * steps;
    let r = row as i8 + dr * steps;
    let size = BOARD_SIZE as i8;
    if (0..size).contains(&c) && (0..size).contains(&r) {
        Some(r as usize * BOARD_SIZE + c as usize)
    } else {
        None
    }
}

/// 该方向是否存在相邻格
pub fn has_step(index: usize, dir: Direction) -> bool {
    offset(index, dir, 1).is_some()
}

/// 该方向是否存在两步远的落点（跳吃用）
pub fn has_jump(index: usize, dir: Direction) -> bool {
    offset(index, dir, 2).is_some()
}

/// 相邻格
pub fn neighbor(sq: Square, dir: Direction) -> Option<Square> {
    offset(sq.index(), dir, 1).map(Square::new_unchecked)
}

/// 两步远的落点
pub fn landing(sq: Square, dir: Direction) -> Option<Square> {
    offset(sq.index(), dir, 2).map(Square::new_unchecked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(i: usize) -> Square {
        Square::new_unchecked(i)
    }

    #[test]
    fn test_diagonal_pattern() {
        // 角落和中心有斜线
        for i in [0, 4, 12, 20, 24, 6, 8, 16, 18, 2, 10, 14, 22] {
            assert!(has_diagonals(i), "square {i} should have diagonals");
        }
        // 边中点没有
        for i in [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23] {
            assert!(!has_diagonals(i), "square {i} should not have diagonals");
        }
    }

    #[test]
    fn test_corner_steps() {
        // a1 只能向上、向右、右上
        let dirs: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| has_step(0, *d))
            .collect();
        assert_eq!(dirs, vec![Direction::Up, Direction::Right, Direction::DiagRU]);

        // e5 只能向下、向左、左下
        let dirs: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|d| has_step(24, *d))
            .collect();
        assert_eq!(dirs, vec![Direction::Down, Direction::Left, Direction::DiagLD]);
    }

    #[test]
    fn test_center_has_all_directions() {
        for dir in Direction::ALL {
            assert!(has_step(12, dir));
            assert!(has_jump(12, dir));
        }
    }

    #[test]
    fn test_edge_midpoint_has_no_diagonal() {
        // b1
        assert!(!has_step(1, Direction::DiagLU));
        assert!(!has_step(1, Direction::DiagRU));
        assert!(has_step(1, Direction::Up));
        assert!(!has_step(1, Direction::Down));
    }

    #[test]
    fn test_jumps() {
        assert!(has_jump(0, Direction::Up));
        assert!(has_jump(0, Direction::DiagRU));
        assert!(!has_jump(5, Direction::Down));
        assert!(!has_jump(3, Direction::Right));
        assert!(has_jump(3, Direction::Left));
        assert_eq!(landing(sq(0), Direction::DiagRU), Some(sq(12)));
        assert_eq!(landing(sq(24), Direction::Left), Some(sq(22)));
        assert_eq!(landing(sq(7), Direction::DiagRU), None);
    }

    #[test]
    fn test_neighbor() {
        assert_eq!(neighbor(sq(12), Direction::Down), Some(sq(7)));
        assert_eq!(neighbor(sq(12), Direction::Up), Some(sq(17)));
        assert_eq!(neighbor(sq(12), Direction::Right), Some(sq(13)));
        assert_eq!(neighbor(sq(12), Direction::Left), Some(sq(11)));
        assert_eq!(neighbor(sq(12), Direction::DiagLU), Some(sq(16)));
        assert_eq!(neighbor(sq(12), Direction::DiagRU), Some(sq(18)));
        assert_eq!(neighbor(sq(12), Direction::DiagLD), Some(sq(6)));
        assert_eq!(neighbor(sq(12), Direction::DiagRD), Some(sq(8)));
        assert_eq!(neighbor(sq(4), Direction::Right), None);
    }

    #[test]
    fn test_between() {
        assert_eq!(Direction::between(sq(0), sq(6)), Some((Direction::DiagRU, 1)));
        assert_eq!(Direction::between(sq(0), sq(12)), Some((Direction::DiagRU, 2)));
        assert_eq!(Direction::between(sq(14), sq(12)), Some((Direction::Left, 2)));
        assert_eq!(Direction::between(sq(0), sq(7)), None);
        assert_eq!(Direction::between(sq(0), sq(15)), None);
        assert_eq!(Direction::between(sq(3), sq(3)), None);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_panics() {
        has_step(25, Direction::Up);
    }
}
