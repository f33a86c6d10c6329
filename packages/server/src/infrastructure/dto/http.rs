//! HTTP API の DTO 定義

use serde::{Deserialize, Serialize};

/// 対局作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    /// 希望する対局時間（分）。1 分〜12 時間にクランプされる
    pub duration_minutes: u64,
}

/// 対局作成レスポンス。この ID を相手に共有して参加してもらう
#[derive(Debug, Serialize)]
pub struct MatchCreatedResponse {
    pub match_id: String,
}

/// 指し手リクエスト
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    /// UCI 形式の指し手（例: `e2e4`）
    pub r#move: String,
}

/// エラーレスポンスの理由
#[derive(Debug, Serialize)]
pub struct ErrorReason {
    pub reason: String,
}

impl ErrorReason {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
