//! InMemory Match Registry 実装 + Sweeper
//!
//! HashMap をインメモリのディレクトリとして使う `MatchRegistry` 実装です。
//! 対局はプロセスを跨いで永続化されません。
//!
//! ## ロック方針
//!
//! マップは単一の RwLock で守ります。検索は読み取り側、登録・削除は
//! 書き込み側。ロックはマップ操作の間だけ保持し、セッション自身の状態
//! 変更を跨いで保持することはありません。セッションのロックとマップの
//! ロックを同時に取ることもありません。
//!
//! ## Sweeper
//!
//! 対局ごとに 1 本の回収タスクを起動します。次のいずれかでレジストリから
//! 対局を取り除きます：
//!
//! - セッションの停止トークンが発火した（終局。次の周期を待たない）
//! - 周期チェックで参加者が 0 人だった（参加されずに放置された対局）
//! - 周期チェックで期限を過ぎていた

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use taikyoku_shared::time::{Clock, SystemClock};

use crate::domain::{
    MatchId, MatchIdFactory, MatchRegistry, MatchSession, RuleEngine, Timestamp,
};

/// Sweeper の周期チェック間隔のデフォルト値
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// インメモリ Match Registry 実装
pub struct InMemoryMatchRegistry {
    /// 生存中の対局。Key: 対局 ID
    matches: Arc<RwLock<HashMap<MatchId, Arc<MatchSession>>>>,
    /// ルールエンジン（対局ごとの初期局面を生成する）
    rules: Arc<dyn RuleEngine>,
    /// 時計（テストから差し替えられる）
    clock: Arc<dyn Clock>,
    /// Sweeper の周期チェック間隔
    sweep_interval: Duration,
}

impl InMemoryMatchRegistry {
    /// 新しい InMemoryMatchRegistry を作成
    pub fn new(rules: Arc<dyn RuleEngine>) -> Self {
        Self::with_config(rules, Arc::new(SystemClock), DEFAULT_SWEEP_INTERVAL)
    }

    /// 時計と Sweeper の間隔を指定して作成（テスト用）
    pub fn with_config(
        rules: Arc<dyn RuleEngine>,
        clock: Arc<dyn Clock>,
        sweep_interval: Duration,
    ) -> Self {
        Self {
            matches: Arc::new(RwLock::new(HashMap::new())),
            rules,
            clock,
            sweep_interval,
        }
    }

    /// 対局ごとの回収タスクを起動する
    fn spawn_sweeper(&self, session: Arc<MatchSession>) {
        let matches = Arc::clone(&self.matches);
        let clock = Arc::clone(&self.clock);
        let interval = self.sweep_interval;
        tokio::spawn(async move {
            let cancel = session.shutdown_token();
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(interval) => {
                        let now = Timestamp::new(clock.now_utc_millis());
                        if session.participant_count().await == 0 || session.is_expired(now) {
                            break;
                        }
                    }
                }
            }
            matches.write().await.remove(session.id());
            tracing::info!(match_id = %session.id(), "match reclaimed");
        });
    }
}

#[async_trait]
impl MatchRegistry for InMemoryMatchRegistry {
    async fn create(&self, requested_duration: Duration) -> Arc<MatchSession> {
        let now = Timestamp::new(self.clock.now_utc_millis());
        let mut matches = self.matches.write().await;
        // 衝突しない ID が出るまで引き直す
        let id = loop {
            let candidate = MatchIdFactory::generate();
            if !matches.contains_key(&candidate) {
                break candidate;
            }
        };
        let session = Arc::new(MatchSession::new(
            id.clone(),
            self.rules.new_position(),
            now,
            requested_duration,
        ));
        matches.insert(id, Arc::clone(&session));
        drop(matches);
        self.spawn_sweeper(Arc::clone(&session));
        session
    }

    async fn get(&self, id: &MatchId) -> Option<Arc<MatchSession>> {
        self.matches.read().await.get(id).cloned()
    }

    async fn remove(&self, id: &MatchId) {
        self.matches.write().await.remove(id);
    }
}
