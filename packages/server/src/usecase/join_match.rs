//! UseCase: 対局参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinMatchUseCase::execute() メソッド
//! - 参加処理（対局の検索、着席、イベント受信側の受け渡し）
//!
//! ### なぜこのテストが必要か
//! - ビジネスロジックの検証：存在しない対局への参加を防ぐ
//! - ドメインエラー（満席・ユーザー名重複）が正しく変換されることを保証
//! - 参加者が outbox の受信側を受け取れることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：空きのある対局への参加
//! - 異常系：存在しない対局 ID、満席の対局

use std::sync::Arc;

use crate::domain::{JoinedSeat, MatchId, MatchRegistry, Side, Username};

use super::error::JoinMatchError;

/// 対局参加のユースケース
pub struct JoinMatchUseCase {
    /// Registry（対局ディレクトリの抽象化）
    registry: Arc<dyn MatchRegistry>,
}

impl JoinMatchUseCase {
    /// 新しい JoinMatchUseCase を作成
    pub fn new(registry: Arc<dyn MatchRegistry>) -> Self {
        Self { registry }
    }

    /// 対局参加を実行
    ///
    /// # Arguments
    ///
    /// * `id` - 参加する対局の ID
    /// * `username` - 参加者のユーザー名（認証済み）
    /// * `requested_side` - 希望する色（最初の参加者にだけ適用される）
    ///
    /// # Returns
    ///
    /// * `Ok(JoinedSeat)` - 参加成功（参加者情報と outbox の受信側）
    /// * `Err(JoinMatchError)` - 参加失敗
    pub async fn execute(
        &self,
        id: &MatchId,
        username: Username,
        requested_side: Side,
    ) -> Result<JoinedSeat, JoinMatchError> {
        let session = self
            .registry
            .get(id)
            .await
            .ok_or(JoinMatchError::MatchNotFound)?;
        let seat = session.join(username, requested_side).await?;
        tracing::info!(
            match_id = %id,
            username = %seat.participant.username,
            side = %seat.participant.side,
            "participant joined",
        );
        Ok(seat)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::registry::MockMatchRegistry;
    use crate::domain::rules::testing::FakePosition;
    use crate::domain::{MatchSession, Timestamp};

    fn test_session() -> Arc<MatchSession> {
        Arc::new(MatchSession::new(
            MatchId::new("AB2C21".to_string()).unwrap(),
            Box::new(FakePosition::new()),
            Timestamp::new(1_000),
            Duration::from_secs(3_600),
        ))
    }

    fn username(name: &str) -> Username {
        Username::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_execute_joins_existing_match() {
        // テスト項目: 空きのある対局に参加できる
        // given (前提条件):
        let session = test_session();
        let mut registry = MockMatchRegistry::new();
        let returned = Arc::clone(&session);
        registry
            .expect_get()
            .times(1)
            .returning(move |_| Some(Arc::clone(&returned)));
        let usecase = JoinMatchUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase
            .execute(session.id(), username("alice"), Side::Black)
            .await;

        // then (期待する結果):
        let seat = result.expect("join should succeed");
        assert_eq!(seat.participant.side, Side::Black);
        assert_eq!(session.participant_count().await, 1);
    }

    #[tokio::test]
    async fn test_execute_fails_when_match_not_found() {
        // テスト項目: 存在しない対局への参加が MatchNotFound になる
        // given (前提条件):
        let mut registry = MockMatchRegistry::new();
        registry.expect_get().times(1).returning(|_| None);
        let usecase = JoinMatchUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase
            .execute(
                &MatchId::new("AB2C21".to_string()).unwrap(),
                username("alice"),
                Side::White,
            )
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(JoinMatchError::MatchNotFound)));
    }

    #[tokio::test]
    async fn test_execute_fails_when_match_is_full() {
        // テスト項目: 満席の対局への参加が MatchFull になる
        // given (前提条件):
        let session = test_session();
        session.join(username("alice"), Side::White).await.unwrap();
        session.join(username("bob"), Side::White).await.unwrap();
        let mut registry = MockMatchRegistry::new();
        let returned = Arc::clone(&session);
        registry
            .expect_get()
            .times(1)
            .returning(move |_| Some(Arc::clone(&returned)));
        let usecase = JoinMatchUseCase::new(Arc::new(registry));

        // when (操作):
        let result = usecase
            .execute(session.id(), username("carol"), Side::White)
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(JoinMatchError::MatchFull)));
    }
}
