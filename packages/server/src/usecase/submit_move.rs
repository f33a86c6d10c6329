//! UseCase: 指し手送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitMoveUseCase::execute() メソッド
//! - 指し手の適用（対局の検索、ドメインエラーの変換）
//!
//! ### なぜこのテストが必要か
//! - 手番・合法性の判断がセッション（とルールエンジン）に委譲されることを確認
//! - ドメインエラーが UI 層で扱える粒度に変換されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：手番の参加者による合法手
//! - 異常系：存在しない対局、非参加者、手番違い

use std::sync::Arc;

use crate::domain::{MatchId, MatchRegistry, Username};

use super::error::SubmitMoveError;

/// 指し手送信のユースケース
pub struct SubmitMoveUseCase {
    /// Registry（対局ディレクトリの抽象化）
    registry: Arc<dyn MatchRegistry>,
}

impl SubmitMoveUseCase {
    /// 新しい SubmitMoveUseCase を作成
    pub fn new(registry: Arc<dyn MatchRegistry>) -> Self {
        Self { registry }
    }

    /// 指し手送信を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 対局の ID
    /// * `username` - 指し手を送った参加者のユーザー名（認証済み）
    /// * `notation` - UCI 形式の指し手（例: `e2e4`）
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 指し手が受理された
    /// * `Err(SubmitMoveError)` - 指し手が拒否された
    pub async fn execute(
        &self,
        id: &MatchId,
        username: &Username,
        notation: &str,
    ) -> Result<(), SubmitMoveError> {
        let session = self
            .registry
            .get(id)
            .await
            .ok_or(SubmitMoveError::MatchNotFound)?;
        session.move_as(username, notation).await?;
        tracing::debug!(match_id = %id, username = %username, notation, "move accepted");
        Ok(())
    }
}
