//! Kanban Board App
//!
//! Root component: owns the store and reload trigger, runs the bootstrap
//! effect, and renders the board once loaded.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::bootstrap;
use crate::components::{BoardView, ErrorBanner};
use crate::context::AppContext;
use crate::store::{BoardState, BoardStateStoreFields, BootstrapPhase};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load the board on mount and after every mutation. Seeding inside
    // refresh() is phase-guarded, so re-runs of this effect never re-seed.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            bootstrap::refresh(store).await;
        });
    });

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Kanban Board"</h1>

            <ErrorBanner />

            {move || match store.phase().get() {
                BootstrapPhase::Unstarted | BootstrapPhase::Loading => {
                    view! { <p class="board-status">"Loading board..."</p> }.into_any()
                }
                BootstrapPhase::Failed => {
                    view! {
                        <p class="board-status">
                            "Could not load the board. Reload the page to retry."
                        </p>
                    }
                    .into_any()
                }
                BootstrapPhase::Loaded => view! { <BoardView /> }.into_any(),
            }}
        </div>
    }
}
