//! SSE で配送する対局イベントの DTO 定義
//!
//! `data:` ペイロードはこの enum を JSON にしたもので、`type` フィールドで
//! 種別を判別します。ストリームは `resigned` で終端します。

use serde::Serialize;

/// 対局イベントのワイヤ表現
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEventDto {
    /// 対戦相手が揃った。相手の情報と対局時間を伝える
    OpponentJoined {
        opponent_username: String,
        /// `white` または `black`
        opponent_side: String,
        /// RFC 3339 (UTC)
        start_time: String,
        /// RFC 3339 (UTC)
        end_time: String,
    },
    /// 相手の指し手
    MoveMade { r#move: String },
    /// 相手の投了。ストリームの終端
    Resigned,
}
