//! UseCase: 局面取得処理
//!
//! ストリームを取りこぼしたクライアントの追いつき手段でもあるため、
//! 参加者でなくても読み取れます。

use std::sync::Arc;

use crate::domain::{MatchId, MatchRegistry};

use super::error::GetBoardError;

/// 局面取得のユースケース
pub struct GetBoardUseCase {
    /// Registry（対局ディレクトリの抽象化）
    registry: Arc<dyn MatchRegistry>,
}

impl GetBoardUseCase {
    /// 新しい GetBoardUseCase を作成
    pub fn new(registry: Arc<dyn MatchRegistry>) -> Self {
        Self { registry }
    }

    /// 現在の局面を FEN で返す（セッションの読み取りロック配下で描画）
    pub async fn execute(&self, id: &MatchId) -> Result<String, GetBoardError> {
        let session = self
            .registry
            .get(id)
            .await
            .ok_or(GetBoardError::MatchNotFound)?;
        Ok(session.render_board().await)
    }
}
