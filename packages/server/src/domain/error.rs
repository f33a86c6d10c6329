//! ドメインエラー定義
//!
//! いずれも呼び出し元がその場で回復できる想定内のエラーで、
//! 同期的に `Result` として返されます。致命的エラーは存在しません。

use thiserror::Error;

use super::rules::IllegalMoveError;

/// 参加（join）のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    /// 2 席とも埋まっているか、対局が既に終了している
    #[error("match is full")]
    MatchFull,
    /// 同じユーザー名の参加者が既に着席している
    #[error("username '{0}' is already seated in this match")]
    UsernameTaken(String),
}

/// 指し手（move）のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// この対局の参加者ではない
    #[error("player is not a participant of this match")]
    NotParticipant,
    /// 手番ではない
    #[error("it is not this player's turn")]
    NotYourTurn,
    /// 対局が既に終了している
    #[error("match is already over")]
    MatchOver,
    /// ルールエンジンが指し手を拒否した
    #[error(transparent)]
    Illegal(#[from] IllegalMoveError),
}
