//! UseCase: 投了処理
//!
//! 明示的な投了とストリーム切断の後始末が同じ入口に合流します。
//! どちらの経路でも冪等で、常に成功扱いです。

use std::sync::Arc;

use crate::domain::{MatchId, MatchRegistry, Username};

/// 投了のユースケース
pub struct ResignMatchUseCase {
    /// Registry（対局ディレクトリの抽象化）
    registry: Arc<dyn MatchRegistry>,
}

impl ResignMatchUseCase {
    /// 新しい ResignMatchUseCase を作成
    pub fn new(registry: Arc<dyn MatchRegistry>) -> Self {
        Self { registry }
    }

    /// 投了を実行
    ///
    /// 対局が既に回収されている場合や、ユーザーが参加していない場合は
    /// 何もしません。エラーを返さないのは意図的です（冪等な後始末）。
    pub async fn execute(&self, id: &MatchId, username: &Username) {
        match self.registry.get(id).await {
            Some(session) => {
                session.resign(username).await;
                tracing::info!(match_id = %id, username = %username, "participant resigned");
            }
            None => {
                tracing::debug!(match_id = %id, "resign for unknown match, ignoring");
            }
        }
    }
}
