// SPDX-License-Identifier: MIT

//! `tempo init` - create the directory layout, capture the environment,
//! and open the run ledger once so its schema exists.

use anyhow::Result;
use tempo_engine::{CapturedEnv, Paths};
use tempo_storage::HistoryStore;

pub fn handle(paths: &Paths) -> Result<()> {
    paths.ensure_layout()?;
    let env = CapturedEnv::load_or_capture(paths)?;
    HistoryStore::open(&paths.db_path())?;

    println!("Initialized {}", paths.root().display());
    if let Some(bin) = env.bin_path() {
        println!("Captured binary path: {}", bin);
    }
    Ok(())
}
