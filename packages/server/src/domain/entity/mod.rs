//! エンティティ定義
//!
//! 対局セッション本体と、その構成要素（参加者、イベント配送キュー）。

pub mod match_session;
pub mod outbox;
pub mod participant;

pub use match_session::{
    JoinedSeat, MatchSession, MatchStatus, MAX_MATCH_DURATION, MIN_MATCH_DURATION,
};
pub use outbox::{Outbox, OutboxReceiver, OUTBOX_CAPACITY};
pub use participant::Participant;
