//! 対局レジストリの trait 定義
//!
//! 生存中の対局を ID で引くためのディレクトリ。ドメイン層が必要とする
//! インターフェースをドメイン層自身が定義し、InMemory 実装は
//! Infrastructure 層が提供します（依存性の逆転）。
//!
//! レジストリは composition root で構築されて参照で引き回されます。
//! 隠れた static にはしません。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::entity::MatchSession;
use super::value_object::MatchId;

/// 対局レジストリ
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MatchRegistry: Send + Sync {
    /// 新しい対局を生成して登録し、回収タスク（Sweeper）を起動する
    ///
    /// 対局時間のクランプはセッション側で行われます。この操作は失敗しません。
    async fn create(&self, requested_duration: Duration) -> Arc<MatchSession>;

    /// 対局を検索する。存在しない、または回収済みなら `None`
    async fn get(&self, id: &MatchId) -> Option<Arc<MatchSession>>;

    /// 対局を削除する（冪等）。Sweeper 専用
    async fn remove(&self, id: &MatchId);
}
