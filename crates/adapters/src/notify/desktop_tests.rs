// SPDX-License-Identifier: MIT

use super::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[tokio::test]
async fn delivery_completes_before_returning() {
    let delivered = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&delivered);
    deliver_blocking(
        move || {
            std::thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
            Ok(())
        },
        Duration::from_secs(5),
    )
    .await
    .unwrap();

    // The send ran to completion inside the call, not detached behind it
    assert!(delivered.load(Ordering::SeqCst));
}

#[tokio::test]
async fn delivery_failure_propagates() {
    let err = deliver_blocking(
        || Err(NotifyError::SendFailed("backend refused".to_string())),
        Duration::from_secs(5),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("backend refused"));
}

#[tokio::test]
async fn slow_delivery_is_bounded() {
    let err = deliver_blocking(
        || {
            std::thread::sleep(Duration::from_secs(2));
            Ok(())
        },
        Duration::from_millis(50),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("timed out"), "got: {}", err);
}
