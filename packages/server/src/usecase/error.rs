//! UseCase 層のエラー定義
//!
//! ドメインエラーに「対局が見つからない」を加えた、呼び出し元（UI 層）が
//! そのままステータスコードに対応付けられる粒度のエラーです。

use thiserror::Error;

use crate::domain::{JoinError, MoveError};

/// 参加ユースケースのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinMatchError {
    /// 対局が存在しない（回収済みを含む）
    #[error("match not found")]
    MatchNotFound,
    /// 2 席とも埋まっているか、対局が既に終了している
    #[error("match is full")]
    MatchFull,
    /// 同じユーザー名の参加者が既に着席している
    #[error("username '{0}' is already seated in this match")]
    UsernameTaken(String),
}

impl From<JoinError> for JoinMatchError {
    fn from(err: JoinError) -> Self {
        match err {
            JoinError::MatchFull => JoinMatchError::MatchFull,
            JoinError::UsernameTaken(name) => JoinMatchError::UsernameTaken(name),
        }
    }
}

/// 指し手ユースケースのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitMoveError {
    /// 対局が存在しない（回収済みを含む）
    #[error("match not found")]
    MatchNotFound,
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
    #[error("illegal move: {0}")]
    IllegalMove(String),
}

impl From<MoveError> for SubmitMoveError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::NotParticipant => SubmitMoveError::NotParticipant,
            MoveError::NotYourTurn => SubmitMoveError::NotYourTurn,
            MoveError::MatchOver => SubmitMoveError::MatchOver,
            MoveError::Illegal(inner) => SubmitMoveError::IllegalMove(inner.reason),
        }
    }
}

/// 局面取得ユースケースのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GetBoardError {
    /// 対局が存在しない（回収済みを含む）
    #[error("match not found")]
    MatchNotFound,
}
