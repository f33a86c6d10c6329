//! 対局イベント定義
//!
//! 参加者ごとの outbox に積まれ、ストリーム経由で配送されるイベント。
//! 配送はベストエフォートであり、到達保証はありません。

use super::value_object::{Side, Timestamp, Username};

/// 参加者へ配送される対局イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// 2 人目の参加で両者に 1 回ずつ配送される。相手の情報と対局時間を伝える
    OpponentJoined {
        username: Username,
        side: Side,
        start: Timestamp,
        deadline: Timestamp,
    },
    /// 指し手が受理されたとき、指していない側にだけ配送される
    MoveMade { notation: String },
    /// 投了（切断を含む）時に残った側へ配送される。ストリームの終端
    Resigned,
}

impl MatchEvent {
    /// このイベントでストリームが終了するか
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchEvent::Resigned)
    }
}
