//! 走法生成和验证
//!
//! 吃子是强制的：只要走子方有任何吃子，就只生成连跳链；
//! 连跳链必须吃到不能再吃为止。

use crate::board::Board;
use crate::constants::BOARD_SIZE;
use crate::geometry::{self, Direction};
use crate::moves::{Leg, Move};
use crate::piece::{PieceColor, Square};

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成走子方的所有合法走法
    ///
    /// 格子按索引升序扫描，方向按 [`Direction::ALL`] 的顺序。
    pub fn generate(board: &Board) -> Vec<Move> {
        let mut moves = Vec::with_capacity(16);

        if Self::has_capture(board) {
            let mut scratch = board.clone();
            for sq in Square::all() {
                if board.get(sq) == board.turn() {
                    Self::collect_chains(&mut scratch, sq, &mut moves);
                }
            }
        } else {
            for sq in Square::all() {
                if board.get(sq) == board.turn() {
                    Self::generate_steps(board, sq, &mut moves);
                }
            }
        }

        moves
    }

    /// 走子方是否还有任何合法走法
    pub fn has_legal_move(board: &Board) -> bool {
        if Self::has_capture(board) {
            return true;
        }
        let mut moves = Vec::new();
        Square::all()
            .filter(|sq| board.get(*sq) == board.turn())
            .any(|sq| {
                Self::generate_steps(board, sq, &mut moves);
                !moves.is_empty()
            })
    }

    /// 指定棋子的所有合法走法
    pub fn generate_from(board: &Board, sq: Square) -> Vec<Move> {
        Self::generate(board)
            .into_iter()
            .filter(|mv| mv.from() == Some(sq))
            .collect()
    }

    /// 走子方是否有吃子
    pub fn has_capture(board: &Board) -> bool {
        Square::all()
            .filter(|sq| board.get(*sq) == board.turn())
            .any(|sq| Self::has_capture_from(board, sq))
    }

    /// 该格上的棋子是否有吃子（不论走子方）
    pub fn has_capture_from(board: &Board, sq: Square) -> bool {
        !Self::capture_legs(board, sq).is_empty()
    }

    /// 从该格出发的所有最长连跳链
    pub fn captures_from(board: &Board, sq: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if board.get(sq).is_piece() {
            let mut scratch = board.clone();
            Self::collect_chains(&mut scratch, sq, &mut moves);
        }
        moves
    }

    /// 该格上棋子的所有单段跳吃
    ///
    /// 跳吃不受前进方向限制，也不受回头锁限制。
    pub fn capture_legs(board: &Board, sq: Square) -> Vec<Leg> {
        let color = board.get(sq);
        if !color.is_piece() {
            return Vec::new();
        }
        let enemy = color.opposite();

        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let over = geometry::neighbor(sq, dir)?;
                let to = geometry::landing(sq, dir)?;
                (board.get(over) == enemy && board.get(to) == PieceColor::Empty)
                    .then(|| Leg::jump(sq, to))
            })
            .collect()
    }

    /// 递归收集从 `sq` 出发的最长连跳链
    ///
    /// 在 `scratch` 上模拟每一段，递归后撤销，返回时 `scratch` 与进入时相同。
    fn collect_chains(scratch: &mut Board, sq: Square, moves: &mut Vec<Move>) {
        for leg in Self::capture_legs(scratch, sq) {
            scratch.apply_leg(&leg);
            let mut tails = Vec::new();
            Self::collect_chains(scratch, leg.to, &mut tails);
            scratch.undo_leg(&leg);

            if tails.is_empty() {
                moves.push(Move::chain(vec![leg]));
            } else {
                moves.extend(tails.iter().map(|tail| Move::prepend(leg, tail)));
            }
        }
    }

    /// 生成单个棋子的非吃子走法
    fn generate_steps(board: &Board, sq: Square, moves: &mut Vec<Move>) {
        let color = board.get(sq);
        let last_row = BOARD_SIZE - 1;

        // 走到底线的棋子不能再平移
        match color {
            PieceColor::White if sq.row() == last_row => return,
            PieceColor::Black if sq.row() == 0 => return,
            PieceColor::Empty => return,
            _ => {}
        }

        for dir in Direction::ALL {
            let Some(to) = geometry::neighbor(sq, dir) else {
                continue;
            };
            if board.get(to) != PieceColor::Empty {
                continue;
            }
            if !Self::step_allowed(board, sq, color, dir) {
                continue;
            }
            moves.push(Move::step(sq, to));
        }
    }

    /// 方向限制：白方不能朝第 1 行走，黑方不能朝第 5 行走；水平走受回头锁限制
    fn step_allowed(board: &Board, sq: Square, color: PieceColor, dir: Direction) -> bool {
        let backward = match color {
            PieceColor::White => dir.row_sign() < 0,
            PieceColor::Black => dir.row_sign() > 0,
            PieceColor::Empty => true,
        };
        if backward {
            return false;
        }
        !(dir.is_horizontal() && board.lock(sq).blocks(dir))
    }

    /// 验证走法
    ///
    /// 严格模式要求与某条生成的最长连跳链逐段一致；
    /// `allow_partial` 时也接受最长连跳链的前缀。
    pub fn validate(board: &Board, mv: &Move, allow_partial: bool) -> bool {
        let Some(from) = mv.from() else {
            return false;
        };
        if board.get(from) != board.turn() {
            return false;
        }

        match mv {
            Move::Pass => false,
            Move::Step(_) => {
                if Self::has_capture(board) {
                    return false;
                }
                let mut steps = Vec::new();
                Self::generate_steps(board, from, &mut steps);
                steps.contains(mv)
            }
            Move::Jump(_) => {
                let chains = Self::captures_from(board, from);
                if allow_partial {
                    chains.iter().any(|chain| mv.is_prefix_of(chain))
                } else {
                    chains.contains(mv)
                }
            }
        }
    }

    /// 吃子后该落点是否还能继续吃（用于逐段输入）
    pub fn can_continue(board: &Board, mv: &Move) -> bool {
        let Some(to) = mv.to() else {
            return false;
        };
        let mut scratch = board.clone();
        scratch.apply_quiet(mv);
        mv.is_jump() && Self::has_capture_from(&scratch, to)
    }
}
