//! UseCase: 対局作成処理

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{MatchId, MatchRegistry, Timestamp};

/// 対局作成の結果。共有用の ID と対局時間を呼び出し元へ返す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMatch {
    pub id: MatchId,
    pub start: Timestamp,
    pub deadline: Timestamp,
}

/// 対局作成のユースケース
pub struct CreateMatchUseCase {
    /// Registry（対局ディレクトリの抽象化）
    registry: Arc<dyn MatchRegistry>,
}

impl CreateMatchUseCase {
    /// 新しい CreateMatchUseCase を作成
    pub fn new(registry: Arc<dyn MatchRegistry>) -> Self {
        Self { registry }
    }

    /// 対局作成を実行
    ///
    /// # Arguments
    ///
    /// * `requested_duration` - 希望する対局時間（1 分〜12 時間にクランプされる）
    ///
    /// # Returns
    ///
    /// 作成された対局の情報。この操作は失敗しません。
    pub async fn execute(&self, requested_duration: Duration) -> CreatedMatch {
        let session = self.registry.create(requested_duration).await;
        tracing::info!(match_id = %session.id(), "match created");
        CreatedMatch {
            id: session.id().clone(),
            start: session.start_time(),
            deadline: session.deadline(),
        }
    }
}
