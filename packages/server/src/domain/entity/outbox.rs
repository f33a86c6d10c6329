//! 参加者ごとのイベント配送キュー（outbox）
//!
//! 有界・FIFO・ベストエフォートのキューです。プロデューサ（セッションの
//! 各操作）は決してブロックせず、キューが満杯ならイベントを捨てて警告を
//! 残します。遅いクライアントより、操作中のリクエストの応答性を優先する
//! 設計です。取りこぼしたクライアントは局面の取得 API で追いつけます。

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::event::MatchEvent;

/// outbox の容量（イベント数）
pub const OUTBOX_CAPACITY: usize = 10;

/// outbox の送信側。セッションが保持し、イベントを積む
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: mpsc::Sender<MatchEvent>,
}

/// outbox の受信側。参加者のストリーム 1 本だけが所有する
#[derive(Debug)]
pub struct OutboxReceiver {
    rx: mpsc::Receiver<MatchEvent>,
}

impl Outbox {
    /// 送信側と受信側のペアを作る
    pub fn channel() -> (Outbox, OutboxReceiver) {
        let (tx, rx) = mpsc::channel(OUTBOX_CAPACITY);
        (Outbox { tx }, OutboxReceiver { rx })
    }

    /// 非ブロッキング送信
    ///
    /// キューが満杯、または受信側が既に居ない場合はイベントを破棄します。
    /// 破棄はエラーとして呼び出し元に伝播しません（ベストエフォート配送）。
    pub fn push(&self, event: MatchEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(?event, "outbox full, dropping event");
            }
            Err(TrySendError::Closed(event)) => {
                tracing::debug!(?event, "outbox closed, dropping event");
            }
        }
    }
}

impl OutboxReceiver {
    /// 次のイベントを待つ。送信側が全て破棄されると `None`
    pub async fn recv(&mut self) -> Option<MatchEvent> {
        self.rx.recv().await
    }
}
