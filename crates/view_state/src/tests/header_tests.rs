use super::*;

use std::time::Duration;

async fn scroll_and_settle(
    signal: &ScrollSignal,
    header: &HeaderController,
    y: f64,
) -> HeaderState {
    signal.scroll_to(y);
    header.wait_until(|state| state.last_scroll_y == y).await
}

#[test]
fn scrolling_down_past_threshold_hides() {
    let mut state = HeaderState::default();
    state.on_scroll(30.0);
    assert!(state.is_visible(), "below the threshold the header stays");

    state.on_scroll(120.0);
    assert_eq!(state.visibility, HeaderVisibility::Hidden);
    assert_eq!(state.last_scroll_y, 120.0);
}

#[test]
fn scrolling_up_shows_again() {
    let mut state = HeaderState::default();
    state.on_scroll(300.0);
    state.on_scroll(280.0);
    assert!(state.is_visible());
}

#[test]
fn unchanged_position_keeps_visibility() {
    let mut state = HeaderState::default();
    state.on_scroll(300.0);
    state.on_scroll(300.0);
    assert_eq!(state.visibility, HeaderVisibility::Hidden);
}

#[test]
fn hiding_closes_mobile_menu() {
    let mut state = HeaderState::default();
    state.toggle_mobile_menu();
    assert!(state.locks_body_scroll());

    state.on_scroll(10.0);
    assert!(state.mobile_menu_open, "small scrolls leave the menu open");

    state.on_scroll(90.0);
    assert!(!state.mobile_menu_open);
    assert!(!state.locks_body_scroll());
}

#[tokio::test]
async fn controller_follows_scroll_signal() {
    let signal = ScrollSignal::new();
    let header = HeaderController::attach(&signal);
    assert_eq!(signal.subscriber_count(), 1);
    assert!(header.state().is_visible());

    let state = scroll_and_settle(&signal, &header, 200.0).await;
    assert_eq!(state.visibility, HeaderVisibility::Hidden);

    let state = scroll_and_settle(&signal, &header, 150.0).await;
    assert_eq!(state.visibility, HeaderVisibility::Visible);
    assert_eq!(signal.position(), 150.0);
}

#[tokio::test]
async fn menu_toggle_survives_until_hidden() {
    let signal = ScrollSignal::new();
    let header = HeaderController::attach(&signal);

    header.toggle_mobile_menu();
    assert!(header.state().mobile_menu_open);

    let state = scroll_and_settle(&signal, &header, 400.0).await;
    assert!(!state.mobile_menu_open);

    header.toggle_mobile_menu();
    header.close_mobile_menu();
    assert!(!header.state().mobile_menu_open);
}

#[tokio::test]
async fn dropping_controller_unsubscribes() {
    let signal = ScrollSignal::new();
    let header = HeaderController::attach(&signal);
    let mut updates = header.subscribe();
    assert_eq!(signal.subscriber_count(), 1);

    drop(header);
    tokio::time::timeout(Duration::from_secs(1), async {
        while signal.subscriber_count() > 0 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("listener released its subscription");

    signal.scroll_to(500.0);
    assert!(
        updates.changed().await.is_err(),
        "state channel closes with the controller"
    );
}
