// SPDX-License-Identifier: MIT

use super::*;

#[tokio::test]
async fn noop_always_succeeds() {
    let adapter = NoOpNotifyAdapter;
    adapter
        .notify("title", "body", Some(Path::new("/tmp/out.md")))
        .await
        .unwrap();
}
