mod support;

use std::time::Duration;

use tokio::sync::broadcast::error::TryRecvError;
use ultimate_server::domain::{PlayerInput, TeamId, Vector2};
use ultimate_server::interface_adapters::serializer::spawn_match_serializers;
use ultimate_server::use_cases::{GameEvent, ServerState, spawn_match};

fn join(player_id: u64) -> GameEvent {
    GameEvent::Join {
        player_id,
        name: format!("player-{player_id}"),
        socket_id: format!("socket-{player_id}"),
    }
}

#[tokio::test]
async fn when_countdown_elapses_then_match_is_running() {
    let handle = spawn_match(support::fast_settings());
    let mut state_rx = handle.server_state_tx.subscribe();

    tokio::time::timeout(
        support::WAIT,
        state_rx.wait_for(|s| *s == ServerState::MatchRunning),
    )
    .await
    .expect("timed out waiting for MatchRunning")
    .expect("state channel closed");

    handle.shutdown();
}

#[tokio::test]
async fn when_player_joins_then_update_shows_player_and_centre_disc() {
    let handle = spawn_match(support::fast_settings());
    let mut world_rx = handle.world_tx.subscribe();

    handle.input_tx.send(join(1)).await.expect("send join");

    let update = support::next_update_where(&mut world_rx, |u| {
        !u.players.is_empty() && !u.discs.is_empty()
    })
    .await;

    assert_eq!(update.players.len(), 1);
    assert_eq!(update.players[0].id, 1);
    assert_eq!(update.players[0].team, TeamId::Home);
    assert_eq!(update.discs.len(), 1);
    assert_eq!(update.discs[0].position, Vector2::new(300.0, 500.0));
    assert_eq!(update.discs[0].velocity, Vector2::ZERO);

    handle.shutdown();
}

#[tokio::test]
async fn when_second_player_joins_then_teams_are_balanced() {
    let handle = spawn_match(support::fast_settings());
    let mut world_rx = handle.world_tx.subscribe();

    handle.input_tx.send(join(1)).await.expect("send join");
    handle.input_tx.send(join(2)).await.expect("send join");

    let update = support::next_update_where(&mut world_rx, |u| u.players.len() == 2).await;

    let home = update.players.iter().filter(|p| p.team == TeamId::Home).count();
    let away = update.players.iter().filter(|p| p.team == TeamId::Away).count();
    assert_eq!((home, away), (1, 1));

    handle.shutdown();
}

#[tokio::test]
async fn when_player_holds_right_then_it_moves_right() {
    let handle = spawn_match(support::fast_settings());
    let mut world_rx = handle.world_tx.subscribe();

    handle.input_tx.send(join(1)).await.expect("send join");
    let start = support::next_update_where(&mut world_rx, |u| u.players.len() == 1).await;
    let start_x = start.players[0].position.x;

    let input = PlayerInput {
        right: true,
        ..PlayerInput::default()
    };
    handle
        .input_tx
        .send(GameEvent::Input {
            player_id: 1,
            input,
        })
        .await
        .expect("send input");

    let moved = support::next_update_where(&mut world_rx, |u| {
        u.players.first().is_some_and(|p| p.position.x > start_x)
    })
    .await;

    assert!(moved.players[0].velocity.x > 0.0);
    assert_eq!(moved.players[0].velocity.y, 0.0);

    handle.shutdown();
}

#[tokio::test]
async fn when_time_limit_passes_then_match_ends_without_winner() {
    let mut settings = support::fast_settings();
    settings.match_time_limit = Duration::from_millis(20);
    let handle = spawn_match(settings);
    let mut state_rx = handle.server_state_tx.subscribe();

    let state = tokio::time::timeout(
        support::WAIT,
        state_rx.wait_for(|s| matches!(s, ServerState::MatchEnded { .. })),
    )
    .await
    .expect("timed out waiting for MatchEnded")
    .expect("state channel closed")
    .clone();

    assert_eq!(state, ServerState::MatchEnded { winner: None });

    handle.shutdown();
}

#[tokio::test]
async fn when_shutdown_is_requested_then_updates_stop() {
    let handle = spawn_match(support::fast_settings());
    let mut world_rx = handle.world_tx.subscribe();

    support::next_update_where(&mut world_rx, |_| true).await;
    handle.shutdown();

    // Let the task observe the notification, then drain what it already sent.
    tokio::time::sleep(Duration::from_millis(50)).await;
    loop {
        match world_rx.try_recv() {
            Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }

    let next = tokio::time::timeout(Duration::from_millis(100), world_rx.recv()).await;
    assert!(next.is_err(), "world task kept ticking after shutdown");
}

#[tokio::test]
async fn when_world_ticks_then_serializer_publishes_tagged_json() {
    let handle = spawn_match(support::fast_settings());
    let wire = spawn_match_serializers(&handle, 64);
    let mut bytes_rx = wire.world_bytes_tx.subscribe();

    handle.input_tx.send(join(7)).await.expect("send join");

    let value = tokio::time::timeout(support::WAIT, async {
        loop {
            let Ok(text) = bytes_rx.recv().await else {
                continue;
            };
            let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
            if value["data"]["players"].as_array().is_some_and(|p| !p.is_empty()) {
                break value;
            }
        }
    })
    .await
    .expect("timed out waiting for serialized update");

    assert_eq!(value["type"], "WorldUpdate");
    assert_eq!(value["data"]["players"][0]["id"], "7");
    assert_eq!(value["data"]["players"][0]["team"], "Home");

    handle.shutdown();
}
