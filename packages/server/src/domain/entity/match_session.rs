//! 対局セッション（状態機械）
//!
//! 1 つの進行中対局を表すエンティティです。2 つの席・局面・進行状態を
//! 自身の RwLock で保護し、join / move / resign を直列化します。
//!
//! ## ロック方針
//!
//! - 変更系（join, move_as, resign）は書き込みロック
//! - 一貫したスナップショットが必要な読み取り（局面の描画など）は読み取りロック
//! - レジストリのロックとは独立で、同時に保持することはない
//!
//! ## 終了の通知
//!
//! 対局が `Finished` に遷移すると停止トークンが発火し、Sweeper が
//! 次の周期を待たずにレジストリから回収します。

use std::time::Duration;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::domain::entity::outbox::{Outbox, OutboxReceiver};
use crate::domain::entity::participant::Participant;
use crate::domain::error::{JoinError, MoveError};
use crate::domain::event::MatchEvent;
use crate::domain::rules::GamePosition;
use crate::domain::value_object::{MatchId, Side, Timestamp, Username};

/// 対局時間の下限
pub const MIN_MATCH_DURATION: Duration = Duration::from_secs(60);
/// 対局時間の上限
pub const MAX_MATCH_DURATION: Duration = Duration::from_secs(12 * 60 * 60);

/// 対局の進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// 参加者 0 人
    Pending,
    /// 参加者 1 人、対戦相手待ち
    AwaitingOpponent,
    /// 参加者 2 人、対局中
    Active,
    /// 終局（投了またはルール上の終局）。終端状態
    Finished,
}

/// join 成功時に参加者へ返す一式
///
/// `events` は outbox の受信側で、この参加者のストリームがちょうど 1 本
/// だけ消費できることを所有権で保証します。
#[derive(Debug)]
pub struct JoinedSeat {
    pub participant: Participant,
    pub events: OutboxReceiver,
}

/// 両席。色で名前引きし、整数インデックスは使わない
#[derive(Debug, Default)]
struct Seats {
    white: Option<Participant>,
    black: Option<Participant>,
}

impl Seats {
    fn seat(&self, side: Side) -> Option<&Participant> {
        match side {
            Side::White => self.white.as_ref(),
            Side::Black => self.black.as_ref(),
        }
    }

    fn sit(&mut self, participant: Participant) {
        let seat = match participant.side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        };
        // 席の二重割り当ては状態破壊なので大きな音を立てて落とす
        assert!(
            seat.is_none(),
            "seat {} is already occupied",
            participant.side
        );
        *seat = Some(participant);
    }

    fn occupied(&self) -> usize {
        self.white.iter().count() + self.black.iter().count()
    }

    fn by_username(&self, username: &Username) -> Option<&Participant> {
        self.white
            .iter()
            .chain(self.black.iter())
            .find(|p| &p.username == username)
    }

    fn sole_occupant(&self) -> Option<&Participant> {
        match (&self.white, &self.black) {
            (Some(p), None) | (None, Some(p)) => Some(p),
            _ => None,
        }
    }
}

/// セッションのロックが守る内部状態
struct MatchState {
    seats: Seats,
    position: Box<dyn GamePosition>,
    status: MatchStatus,
}

/// 1 つの進行中対局
pub struct MatchSession {
    id: MatchId,
    start_time: Timestamp,
    deadline: Timestamp,
    state: RwLock<MatchState>,
    shutdown: CancellationToken,
}

impl MatchSession {
    /// 新しい対局を作る
    ///
    /// `requested_duration` は 1 分から 12 時間の範囲にクランプされます。
    pub fn new(
        id: MatchId,
        position: Box<dyn GamePosition>,
        now: Timestamp,
        requested_duration: Duration,
    ) -> Self {
        let duration = requested_duration.clamp(MIN_MATCH_DURATION, MAX_MATCH_DURATION);
        Self {
            id,
            start_time: now,
            deadline: now.saturating_add(duration),
            state: RwLock::new(MatchState {
                seats: Seats::default(),
                position,
                status: MatchStatus::Pending,
            }),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> &MatchId {
        &self.id
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn deadline(&self) -> Timestamp {
        self.deadline
    }

    /// 対局終了時に発火する停止トークン。Sweeper が監視する
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// 期限を過ぎているか
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.deadline
    }

    pub async fn status(&self) -> MatchStatus {
        self.state.read().await.status
    }

    pub async fn participant_count(&self) -> usize {
        self.state.read().await.seats.occupied()
    }

    /// 参加処理
    ///
    /// 最初の参加者は希望した色をそのまま得ます。2 人目の希望色は無視され、
    /// 残っている色が割り当てられます。2 人目の着席で対局が始まり、双方の
    /// outbox に `OpponentJoined` が積まれます。
    pub async fn join(
        &self,
        username: Username,
        requested_side: Side,
    ) -> Result<JoinedSeat, JoinError> {
        let mut state = self.state.write().await;
        if state.status == MatchStatus::Finished || state.seats.occupied() >= 2 {
            return Err(JoinError::MatchFull);
        }
        if state.seats.by_username(&username).is_some() {
            return Err(JoinError::UsernameTaken(username.into_string()));
        }

        let (outbox, events) = Outbox::channel();
        match state.seats.occupied() {
            0 => {
                let participant = Participant::new(username, requested_side, outbox);
                state.seats.sit(participant.clone());
                state.status = MatchStatus::AwaitingOpponent;
                Ok(JoinedSeat {
                    participant,
                    events,
                })
            }
            1 => {
                let first = state
                    .seats
                    .sole_occupant()
                    .cloned()
                    .unwrap_or_else(|| unreachable!("one seat occupied but no occupant found"));
                let participant = Participant::new(username, first.side.opposite(), outbox);
                state.seats.sit(participant.clone());
                state.status = MatchStatus::Active;

                // 両者に相手の情報と対局時間を通知する
                first.outbox.push(MatchEvent::OpponentJoined {
                    username: participant.username.clone(),
                    side: participant.side,
                    start: self.start_time,
                    deadline: self.deadline,
                });
                participant.outbox.push(MatchEvent::OpponentJoined {
                    username: first.username.clone(),
                    side: first.side,
                    start: self.start_time,
                    deadline: self.deadline,
                });

                Ok(JoinedSeat {
                    participant,
                    events,
                })
            }
            occupied => unreachable!("{occupied} participants seated, invariant allows at most 2"),
        }
    }

    /// 指し手の適用
    ///
    /// 手番も合法性もルールエンジンの局面から判断します。受理された指し手は
    /// 相手側の outbox にだけ通知されます（指した本人は自分の手を知っている）。
    pub async fn move_as(&self, username: &Username, notation: &str) -> Result<(), MoveError> {
        let mut state = self.state.write().await;
        if state.status == MatchStatus::Finished {
            return Err(MoveError::MatchOver);
        }
        let mover_side = state
            .seats
            .by_username(username)
            .map(|p| p.side)
            .ok_or(MoveError::NotParticipant)?;
        // 手番は局面から導出する（セッション側に手番フラグは持たない）
        if state.position.turn() != mover_side {
            return Err(MoveError::NotYourTurn);
        }
        let outcome = state.position.apply_move(notation)?;
        if outcome.game_over {
            state.status = MatchStatus::Finished;
        }
        if let Some(opponent) = state.seats.seat(mover_side.opposite()) {
            opponent.outbox.push(MatchEvent::MoveMade {
                notation: notation.to_string(),
            });
        }
        let finished = state.status == MatchStatus::Finished;
        drop(state);
        if finished {
            self.shutdown.cancel();
        }
        Ok(())
    }

    /// 投了
    ///
    /// 未参加のユーザーや終了済みの対局に対しては何もしません（冪等）。
    /// これにより相手側への `Resigned` は高々 1 回しか配送されません。
    /// 切断も輸送層がこの操作を呼ぶことで投了として扱われます。
    pub async fn resign(&self, username: &Username) {
        let mut state = self.state.write().await;
        let Some(resigner_side) = state.seats.by_username(username).map(|p| p.side) else {
            return;
        };
        if state.status == MatchStatus::Finished {
            return;
        }
        state.position.resign(resigner_side);
        state.status = MatchStatus::Finished;
        if let Some(opponent) = state.seats.seat(resigner_side.opposite()) {
            opponent.outbox.push(MatchEvent::Resigned);
        }
        drop(state);
        self.shutdown.cancel();
    }

    /// ユーザー名から参加者を引く（再認可用の読み取り専用操作）
    pub async fn participant_by_identity(&self, username: &Username) -> Option<Participant> {
        self.state.read().await.seats.by_username(username).cloned()
    }

    /// 現在の局面を描画する（読み取りロック）
    pub async fn render_board(&self) -> String {
        self.state.read().await.position.render()
    }
}
