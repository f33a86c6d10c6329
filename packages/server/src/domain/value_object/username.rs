//! ユーザー名の Value Object
//!
//! 認証は上流（ゲートウェイ）の責務であり、コーディネータには検証済みの
//! ユーザー名だけが渡ってくる想定です。ここでは形式だけを検証します。

use std::fmt;

use thiserror::Error;

/// ユーザー名の最小文字数
pub const USERNAME_MIN_LEN: usize = 3;
/// ユーザー名の最大文字数
pub const USERNAME_MAX_LEN: usize = 20;

/// 参加者のユーザー名（認証済みの識別子）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

/// ユーザー名の検証エラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsernameError {
    /// 文字数が範囲外
    #[error("username must be between 3 and 20 characters")]
    InvalidLength,
    /// 使用できない文字を含む
    #[error("username may only contain alphanumeric characters and underscores")]
    InvalidCharacter,
}

impl Username {
    pub fn new(value: String) -> Result<Self, UsernameError> {
        let len = value.chars().count();
        if len < USERNAME_MIN_LEN || len > USERNAME_MAX_LEN {
            return Err(UsernameError::InvalidLength);
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(UsernameError::InvalidCharacter);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
