//! Bootstrap Loader
//!
//! Loads the board on startup and seeds the three default columns when the
//! server has none. Seeding is gated by the store's bootstrap phase machine,
//! so it can run at most once per session no matter how often the loading
//! effect fires.

use leptos::prelude::*;

use crate::api;
use crate::api::ApiError;
use crate::store::{
    store_begin_bootstrap, store_set_board, store_set_error, BoardStateStoreFields, BoardStore,
    BootstrapPhase,
};

/// Default columns for an empty board, in display order
pub const DEFAULT_COLUMNS: [&str; 3] = ["To Do", "In Progress", "Done"];

/// One pending create-column call of the seed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedColumn {
    pub title: &'static str,
    pub position: i32,
}

/// The seed payloads, in the order they must be created
pub fn seed_requests() -> Vec<SeedColumn> {
    DEFAULT_COLUMNS
        .iter()
        .enumerate()
        .map(|(index, title)| SeedColumn {
            title,
            position: index as i32,
        })
        .collect()
}

/// Fetch the whole board and replace the store's collections.
///
/// A failure before the first successful load is fatal to rendering (phase
/// becomes `Failed`; a manual page reload is the only recovery). A failed
/// refresh after that only surfaces the error and keeps the prior state.
pub async fn refresh(store: BoardStore) {
    match load(store).await {
        Ok(()) => {
            // Writing an unchanged phase would re-render the whole board
            // (and re-bind its global listeners), so only the first
            // successful load touches it
            if store.phase().get_untracked() != BootstrapPhase::Loaded {
                store.phase().set(BootstrapPhase::Loaded);
            }
        }
        Err(error) => {
            web_sys::console::log_1(&format!("[BOOT] Board load failed: {}", error).into());
            if store.phase().get_untracked() != BootstrapPhase::Loaded {
                store.phase().set(BootstrapPhase::Failed);
            }
            store_set_error(&store, error.to_string());
        }
    }
}

async fn load(store: BoardStore) -> Result<(), ApiError> {
    // The transition is applied before any await, so a second concurrent
    // trigger can never enter the seeding branch.
    let first_run = store_begin_bootstrap(&store);

    let mut columns = api::list_columns().await?;
    if columns.is_empty() && first_run {
        web_sys::console::log_1(&"[BOOT] Empty board, seeding default columns".into());
        for seed in seed_requests() {
            api::create_column(seed.title, seed.position).await?;
        }
        // Recompute everything from scratch; anything fetched before the
        // seed is stale
        columns = api::list_columns().await?;
    }
    let tasks = api::list_tasks().await?;

    web_sys::console::log_1(
        &format!(
            "[BOOT] Loaded {} columns, {} tasks",
            columns.len(),
            tasks.len()
        )
        .into(),
    );
    store_set_board(&store, columns, tasks);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    #[test]
    fn test_seed_requests_order_and_positions() {
        let seeds = seed_requests();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0], SeedColumn { title: "To Do", position: 0 });
        assert_eq!(seeds[1], SeedColumn { title: "In Progress", position: 1 });
        assert_eq!(seeds[2], SeedColumn { title: "Done", position: 2 });
    }

    #[test]
    fn test_seeding_empty_board_yields_three_columns() {
        // Server side of the seed cycle: each create appends one column
        let mut server_columns: Vec<Column> = Vec::new();
        for (index, seed) in seed_requests().into_iter().enumerate() {
            server_columns.push(Column {
                id: index as u32 + 1,
                title: seed.title.to_string(),
                position: seed.position,
            });
        }

        let ordered = crate::board::columns_ordered(&server_columns);
        let titles: Vec<&str> = ordered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
    }
}
