// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;

use activity_board_core::domain::activities::services::mocks::MockActivitiesApi;
use activity_board_core::dtos::{CatalogView, RequestError, StatusKind};
use activity_board_core::test::{mock_data, RecordingDelegate};
use activity_board_core::{ActivityBoard, BoardEvent};

fn build_board(api: MockActivitiesApi, delegate: &RecordingDelegate) -> ActivityBoard {
    ActivityBoard::builder()
        .set_activities_api(Arc::new(api))
        .set_delegate(Some(Box::new(delegate.clone())))
        .build()
}

#[tokio::test]
async fn test_board_starts_empty() {
    let board = build_board(MockActivitiesApi::new(), &RecordingDelegate::default());
    let view_state = board.view_state();

    assert_eq!(view_state.catalog, CatalogView::Loading);
    assert_eq!(view_state.activity_options.len(), 1);
    assert_eq!(view_state.status, None);
}

#[tokio::test(start_paused = true)]
async fn test_signup_roundtrip() {
    let mut api = MockActivitiesApi::new();
    let mut seq = mockall::Sequence::new();

    api.expect_load_catalog()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { Ok(mock_data::catalog()) }));
    api.expect_sign_up()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, email| {
            let message = format!("Signed up {email} for Programming Class");
            Box::pin(async move { Ok(message) })
        });
    api.expect_load_catalog()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| {
            Box::pin(async {
                Ok(mock_data::catalog_with_chess_participant(
                    "emma@mergington.edu",
                ))
            })
        });

    let delegate = RecordingDelegate::default();
    let board = build_board(api, &delegate);

    board.load_activities().await;
    assert_eq!(board.view_state().cards().len(), 3);

    board.update_signup_form("Programming Class", "emma@mergington.edu");
    board
        .submit_signup("Programming Class", "emma@mergington.edu")
        .await;

    let snapshots = delegate.snapshots();
    assert_eq!(
        delegate.events(),
        vec![
            BoardEvent::CatalogChanged,
            BoardEvent::StatusChanged,
            BoardEvent::SignupFormReset,
            BoardEvent::CatalogChanged,
        ]
    );

    let (_, after_status) = &snapshots[1];
    let status = after_status.status.as_ref().expect("Expected a status message");
    assert_eq!(
        status.text,
        "Signed up emma@mergington.edu for Programming Class"
    );
    assert_eq!(status.kind, StatusKind::Success);
    assert!(status.visible);

    let view_state = board.view_state();
    assert!(view_state.signup_form.email.is_empty());
    assert_eq!(
        view_state
            .card("Chess Club")
            .map(|card| card.participant_emails().count()),
        Some(3)
    );

    delegate.clear();
    tokio::time::sleep(Duration::from_millis(5001)).await;

    assert!(!board.view_state().is_status_visible());
    assert_eq!(delegate.events(), vec![BoardEvent::StatusChanged]);
}

#[tokio::test]
async fn test_failed_initial_load_then_retry() {
    let mut api = MockActivitiesApi::new();
    let mut seq = mockall::Sequence::new();

    api.expect_load_catalog()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { Err(RequestError::Malformed("EOF".to_string())) }));
    api.expect_load_catalog()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { Ok(mock_data::catalog()) }));

    let delegate = RecordingDelegate::default();
    let board = build_board(api, &delegate);

    board.load_activities().await;
    assert!(matches!(
        board.view_state().catalog,
        CatalogView::Failed { .. }
    ));

    board.load_activities().await;
    assert_eq!(board.view_state().cards().len(), 3);
    assert_eq!(
        delegate.events(),
        vec![BoardEvent::CatalogChanged, BoardEvent::CatalogChanged]
    );
}

#[tokio::test]
async fn test_dropped_board_stops_dispatching() {
    let mut api = MockActivitiesApi::new();
    api.expect_load_catalog()
        .returning(|| Box::pin(async { Ok(mock_data::catalog()) }));

    let delegate = RecordingDelegate::default();
    let board = build_board(api, &delegate);
    let catalog = board.catalog.clone();
    drop(board);

    catalog.load_activities().await;
    assert_eq!(delegate.events(), vec![]);
}
