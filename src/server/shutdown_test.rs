//! Tests for graceful shutdown coordination

use super::shutdown::*;
use std::time::Duration;

/// The flag starts lowered, and every clone sees it once raised
#[test]
fn test_flag_visible_to_all_clones() {
    let (controller, signal) = shutdown_channel();
    let server_side = signal.clone();
    assert!(!signal.is_shutdown() && !server_side.is_shutdown());

    controller.shutdown();
    controller.shutdown();

    assert!(signal.is_shutdown() && server_side.is_shutdown());
}

/// A server task parked on `wait_owned` wakes when shutdown is requested later
#[tokio::test]
async fn test_parked_waiter_wakes_on_later_shutdown() {
    let (controller, signal) = shutdown_channel();
    let observer = signal.clone();
    let waiter = tokio::spawn(signal.wait_owned());

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!waiter.is_finished(), "waiter must park until shutdown");

    controller.shutdown();
    tokio::time::timeout(Duration::from_secs(1), waiter)
        .await
        .expect("waiter should wake after shutdown")
        .expect("waiter task panicked");
    assert!(observer.is_shutdown());
}

/// A flag raised before anyone waits is still observed
#[tokio::test]
async fn test_shutdown_wait_after_signal_returns_immediately() {
    let (controller, signal) = shutdown_channel();
    controller.shutdown();

    let result = tokio::time::timeout(Duration::from_millis(100), signal.wait_owned()).await;

    assert!(result.is_ok(), "wait_owned() should not block once shut down");
}

#[tokio::test]
async fn test_dropped_controller_counts_as_shutdown() {
    let (controller, mut signal) = shutdown_channel();
    drop(controller);

    let result = tokio::time::timeout(Duration::from_millis(100), signal.wait()).await;

    assert!(result.is_ok(), "wait() should return once the controller is gone");
}
