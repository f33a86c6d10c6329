//! 対局 ID の Value Object
//!
//! 6 文字の英数字 ID。URL で共有できる短さと、レジストリ内で衝突しない
//! 程度のランダム性を両立させます。

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// 対局 ID の長さ（文字数）
pub const MATCH_ID_LEN: usize = 6;

/// 対局 ID（6 文字の英数字、大文字に正規化される）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchId(String);

/// 対局 ID の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchIdError {
    /// 長さが 6 文字でない
    #[error("match id must be exactly 6 characters")]
    InvalidLength,
    /// 英数字以外の文字を含む
    #[error("match id may only contain alphanumeric characters")]
    InvalidCharacter,
}

impl MatchId {
    /// 外部入力（URL パスパラメータなど）から対局 ID を生成する
    ///
    /// 小文字は大文字に正規化されます。
    pub fn new(value: String) -> Result<Self, MatchIdError> {
        if value.chars().count() != MATCH_ID_LEN {
            return Err(MatchIdError::InvalidLength);
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MatchIdError::InvalidCharacter);
        }
        Ok(Self(value.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MatchId {
    type Error = MatchIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 対局 ID のファクトリ
pub struct MatchIdFactory;

impl MatchIdFactory {
    /// 新しい対局 ID を生成する
    ///
    /// UUID v4 の先頭 6 文字（16 進数）を大文字化して使います。
    /// 衝突チェックはレジストリ側の責務です。
    pub fn generate() -> MatchId {
        let hex = Uuid::new_v4().simple().to_string();
        MatchId(hex[..MATCH_ID_LEN].to_ascii_uppercase())
    }
}
