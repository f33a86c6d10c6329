//! ルールエンジンとの契約
//!
//! コーディネータはチェスのルールを一切持ちません。指し手の合法性・手番・
//! 終局判定はすべてこの trait に委譲され、具体的な実装は Infrastructure 層が
//! 提供します（依存性の逆転）。
//!
//! 呼び出しは同期的で、必ずセッションのロック配下から行われます。

use thiserror::Error;

use super::value_object::Side;

/// 新しい対局の初期局面を生成するファクトリ
pub trait RuleEngine: Send + Sync {
    fn new_position(&self) -> Box<dyn GamePosition>;
}

/// 1 対局ぶんの局面
///
/// セッションが排他的に所有し、セッションのロック配下でのみ変更されます。
/// 手番はこの局面から導出するのが唯一の情報源で、セッション側には
/// 手番フラグを持ちません。
pub trait GamePosition: Send + Sync {
    /// 現在の手番
    fn turn(&self) -> Side;

    /// UCI 形式の指し手を検証して適用する
    fn apply_move(&mut self, notation: &str) -> Result<MoveOutcome, IllegalMoveError>;

    /// 投了を記録する
    fn resign(&mut self, side: Side);

    /// 終局しているか（投了・チェックメイト・ステイルメイトなど）
    fn has_ended(&self) -> bool;

    /// 局面のスナップショット（FEN）
    fn render(&self) -> String;
}

/// 指し手を適用した結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 次の手番
    pub next_turn: Side,
    /// ルール上の終局に達したか
    pub game_over: bool,
}

/// ルールエンジンが指し手を拒否した
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("illegal move: {reason}")]
pub struct IllegalMoveError {
    pub reason: String,
}

impl IllegalMoveError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
