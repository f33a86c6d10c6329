//! Integration tests for the match coordinator: the full join → move →
//! resign flow against the real registry, sweeper and shakmaty rule engine.

use std::sync::Arc;
use std::time::Duration;

use taikyoku_server::domain::{
    MatchEvent, MatchId, MatchRegistry, MatchStatus, Side, Username,
};
use taikyoku_server::infrastructure::registry::InMemoryMatchRegistry;
use taikyoku_server::infrastructure::rule_engine::ShakmatyRules;
use taikyoku_server::usecase::{
    CreateMatchUseCase, GetBoardUseCase, JoinMatchError, JoinMatchUseCase, ResignMatchUseCase,
    SubmitMoveError, SubmitMoveUseCase,
};
use taikyoku_shared::time::SystemClock;

const SWEEP_INTERVAL: Duration = Duration::from_millis(50);

struct Coordinator {
    registry: Arc<InMemoryMatchRegistry>,
    create: CreateMatchUseCase,
    join: JoinMatchUseCase,
    submit: SubmitMoveUseCase,
    resign: ResignMatchUseCase,
    board: GetBoardUseCase,
}

/// Wire up the real stack the way the composition root does, with a fast
/// sweeper so reclamation is observable in tests.
fn coordinator() -> Coordinator {
    let registry = Arc::new(InMemoryMatchRegistry::with_config(
        Arc::new(ShakmatyRules),
        Arc::new(SystemClock),
        SWEEP_INTERVAL,
    ));
    Coordinator {
        registry: Arc::clone(&registry),
        create: CreateMatchUseCase::new(registry.clone()),
        join: JoinMatchUseCase::new(registry.clone()),
        submit: SubmitMoveUseCase::new(registry.clone()),
        resign: ResignMatchUseCase::new(registry.clone()),
        board: GetBoardUseCase::new(registry),
    }
}

fn username(name: &str) -> Username {
    Username::new(name.to_string()).unwrap()
}

/// Wait until the match disappears from the registry (bounded polling).
async fn wait_until_reclaimed(registry: &InMemoryMatchRegistry, id: &MatchId) -> bool {
    for _ in 0..50 {
        if registry.get(id).await.is_none() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

#[tokio::test]
async fn test_full_match_scenario() {
    // テスト項目: 作成 → 参加 ×2 → 指し手 → 投了 → 回収 の一連の流れ
    // given (前提条件):
    let coordinator = coordinator();
    let created = coordinator.create.execute(Duration::from_secs(3_600)).await;

    // when / then (操作と期待する結果):

    // alice が白を希望して参加する
    let mut alice = coordinator
        .join
        .execute(&created.id, username("alice"), Side::White)
        .await
        .expect("alice should join");
    assert_eq!(alice.participant.side, Side::White);

    // bob は希望なし（デフォルトの白）で参加するが、無視されて黒になる
    let mut bob = coordinator
        .join
        .execute(&created.id, username("bob"), Side::White)
        .await
        .expect("bob should join");
    assert_eq!(bob.participant.side, Side::Black);

    // 双方に OpponentJoined が届き、相手の情報が入っている
    assert_eq!(
        alice.events.recv().await,
        Some(MatchEvent::OpponentJoined {
            username: username("bob"),
            side: Side::Black,
            start: created.start,
            deadline: created.deadline,
        })
    );
    assert_eq!(
        bob.events.recv().await,
        Some(MatchEvent::OpponentJoined {
            username: username("alice"),
            side: Side::White,
            start: created.start,
            deadline: created.deadline,
        })
    );

    // alice の初手が受理され、bob にだけ通知される
    coordinator
        .submit
        .execute(&created.id, &username("alice"), "e2e4")
        .await
        .expect("e2e4 should be accepted");
    assert_eq!(
        bob.events.recv().await,
        Some(MatchEvent::MoveMade {
            notation: "e2e4".to_string()
        })
    );

    // 手番でない alice の連続手は拒否される
    assert_eq!(
        coordinator
            .submit
            .execute(&created.id, &username("alice"), "d2d4")
            .await,
        Err(SubmitMoveError::NotYourTurn)
    );

    // bob の応手が受理される
    coordinator
        .submit
        .execute(&created.id, &username("bob"), "e7e5")
        .await
        .expect("e7e5 should be accepted");
    assert_eq!(
        alice.events.recv().await,
        Some(MatchEvent::MoveMade {
            notation: "e7e5".to_string()
        })
    );

    // 局面の読み取りは適用済みの指し手を反映している
    let fen = coordinator
        .board
        .execute(&created.id)
        .await
        .expect("board should render");
    assert!(fen.contains(" w "), "after two plies it is white to move: {fen}");

    // bob の投了で alice に Resigned が届き、対局は終了する
    let session = coordinator
        .registry
        .get(&created.id)
        .await
        .expect("session should still be registered");
    coordinator.resign.execute(&created.id, &username("bob")).await;
    assert_eq!(alice.events.recv().await, Some(MatchEvent::Resigned));
    assert_eq!(session.status().await, MatchStatus::Finished);

    // 終了した対局は次の周期を待たずに回収され、以降は見つからない
    assert!(wait_until_reclaimed(coordinator.registry.as_ref(), &created.id).await);
    assert!(matches!(
        coordinator
            .join
            .execute(&created.id, username("carol"), Side::White)
            .await,
        Err(JoinMatchError::MatchNotFound)
    ));
}

#[tokio::test]
async fn test_third_join_is_rejected() {
    // テスト項目: 2 人参加済みの対局への 3 人目の参加が拒否される
    // given (前提条件):
    let coordinator = coordinator();
    let created = coordinator.create.execute(Duration::from_secs(3_600)).await;
    coordinator
        .join
        .execute(&created.id, username("alice"), Side::White)
        .await
        .unwrap();
    coordinator
        .join
        .execute(&created.id, username("bob"), Side::White)
        .await
        .unwrap();

    // when (操作):
    let result = coordinator
        .join
        .execute(&created.id, username("carol"), Side::Black)
        .await;

    // then (期待する結果):
    assert!(matches!(result, Err(JoinMatchError::MatchFull)));
}

#[tokio::test]
async fn test_unknown_match_id_is_not_found() {
    // テスト項目: 存在しない対局 ID への操作が MatchNotFound になる
    // given (前提条件):
    let coordinator = coordinator();
    let unknown = MatchId::new("ZZZZZZ".to_string()).unwrap();

    // when (操作):
    let join_result = coordinator
        .join
        .execute(&unknown, username("alice"), Side::White)
        .await;
    let move_result = coordinator
        .submit
        .execute(&unknown, &username("alice"), "e2e4")
        .await;

    // then (期待する結果):
    assert!(matches!(join_result, Err(JoinMatchError::MatchNotFound)));
    assert_eq!(move_result, Err(SubmitMoveError::MatchNotFound));
}

#[tokio::test]
async fn test_abandoned_match_is_reclaimed() {
    // テスト項目: 誰も参加しなかった対局が Sweeper に回収される
    // given (前提条件):
    let coordinator = coordinator();
    let created = coordinator.create.execute(Duration::from_secs(3_600)).await;

    // when (操作): 参加せずに放置する

    // then (期待する結果):
    assert!(wait_until_reclaimed(coordinator.registry.as_ref(), &created.id).await);
}

#[tokio::test]
async fn test_illegal_moves_are_rejected_by_the_rule_engine() {
    // テスト項目: ルールエンジンが拒否する指し手がエラーとして返る
    // given (前提条件):
    let coordinator = coordinator();
    let created = coordinator.create.execute(Duration::from_secs(3_600)).await;
    coordinator
        .join
        .execute(&created.id, username("alice"), Side::White)
        .await
        .unwrap();
    coordinator
        .join
        .execute(&created.id, username("bob"), Side::White)
        .await
        .unwrap();

    // when (操作):
    let garbage = coordinator
        .submit
        .execute(&created.id, &username("alice"), "not-a-move")
        .await;
    let illegal = coordinator
        .submit
        .execute(&created.id, &username("alice"), "e2e6")
        .await;
    let stranger = coordinator
        .submit
        .execute(&created.id, &username("mallory"), "e2e4")
        .await;

    // then (期待する結果):
    assert!(matches!(garbage, Err(SubmitMoveError::IllegalMove(_))));
    assert!(matches!(illegal, Err(SubmitMoveError::IllegalMove(_))));
    assert_eq!(stranger, Err(SubmitMoveError::NotParticipant));
}
