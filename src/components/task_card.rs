//! Task Card Component
//!
//! A draggable card with directional move buttons and confirmation-gated
//! delete. Directional buttons are disabled at the first/last column and
//! never issue a request while disabled.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::dnd::{make_on_mousedown, make_on_mouseleave, make_on_task_mouseenter, DndSignals};
use crate::models::Task;
use crate::reconcile::{plan_shift, Direction};
use crate::store::{store_clear_error, store_set_error, use_board_store, BoardStateStoreFields};

/// Single task card
#[component]
pub fn TaskCard(task: Task, dnd: DndSignals) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();
    let id = task.id;

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id);
    let on_mouseenter = make_on_task_mouseenter(dnd, id);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || dnd.drop_target_read.get() == Some(id);
    let card_class = move || {
        let mut c = String::from("task-card");
        if is_dragging() {
            c.push_str(" dragging");
        }
        if is_drop_target() {
            c.push_str(" drop-target");
        }
        c
    };

    let can_shift = move |direction: Direction| {
        plan_shift(&store.columns().get(), &store.tasks().get(), id, direction).is_some()
    };

    let shift = move |direction: Direction| {
        let columns = store.columns().get_untracked();
        let tasks = store.tasks().get_untracked();
        // A disabled control plans to nothing and issues no request
        let Some(request) = plan_shift(&columns, &tasks, id, direction) else {
            return;
        };
        spawn_local(async move {
            match api::move_task(&request).await {
                Ok(()) => {
                    store_clear_error(&store);
                    ctx.reload();
                }
                Err(error) => store_set_error(&store, format!("Move failed: {}", error)),
            }
        });
    };

    let delete = move |_: ()| {
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => {
                    store_clear_error(&store);
                    ctx.reload();
                }
                Err(error) => store_set_error(&store, format!("Delete failed: {}", error)),
            }
        });
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="task-card-header">
                <h4 class="task-card-title">{task.title.clone()}</h4>
                <DeleteConfirmButton button_class="delete-btn" on_confirm=Callback::new(delete) />
            </div>

            {task
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .map(|d| view! { <p class="task-card-description">{d}</p> })}

            <div class="task-card-controls">
                <button
                    class="shift-btn"
                    disabled=move || !can_shift(Direction::Left)
                    on:click=move |_| shift(Direction::Left)
                >
                    "◀"
                </button>
                <button
                    class="shift-btn"
                    disabled=move || !can_shift(Direction::Right)
                    on:click=move |_| shift(Direction::Right)
                >
                    "▶"
                </button>
            </div>
        </div>
    }
}
