//! Board View Component
//!
//! Lays out the columns and owns the drag-and-drop session: a drop onto a
//! task card in another column becomes a move request, followed by a full
//! reload. Same-column drops plan to nothing and are simply not persisted.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::board::columns_ordered;
use crate::components::TaskColumn;
use crate::context::AppContext;
use crate::dnd::{bind_global_mouseup, create_dnd_signals};
use crate::reconcile::plan_move;
use crate::store::{store_clear_error, store_set_error, use_board_store, BoardStateStoreFields};

/// Board view with DnD support
#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    // Create DnD signals and bind the global drop handler
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged_id, over_id| {
        let tasks = store.tasks().get_untracked();
        let Some(request) = plan_move(&tasks, dragged_id, over_id) else {
            // Unknown ids or same column: nothing to persist
            return;
        };
        web_sys::console::log_1(
            &format!(
                "[DND] Drop: task={} -> column={} position={}",
                request.task_id, request.column_id, request.position
            )
            .into(),
        );
        spawn_local(async move {
            match api::move_task(&request).await {
                Ok(()) => {
                    store_clear_error(&store);
                    ctx.reload();
                }
                Err(error) => store_set_error(&store, format!("Move failed: {}", error)),
            }
        });
    });

    view! {
        <div class="board">
            <For
                each=move || columns_ordered(&store.columns().get())
                key=|column| (column.id, column.title.clone(), column.position)
                children=move |column| {
                    view! { <TaskColumn column=column dnd=dnd /> }
                }
            />
        </div>
    }
}
