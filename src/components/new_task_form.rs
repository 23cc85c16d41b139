//! New Task Form Component
//!
//! Per-column form for creating tasks. Blank titles never reach the server;
//! the input clears only after the create succeeds.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::lifecycle::plan_create;
use crate::store::{store_clear_error, store_set_error, use_board_store};

/// Form for creating a task in one column
#[component]
pub fn NewTaskForm(column_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(new_task) = plan_create(column_id, &new_title.get()) else {
            return;
        };
        spawn_local(async move {
            match api::create_task(&new_task).await {
                Ok(_) => {
                    set_new_title.set(String::new());
                    store_clear_error(&store);
                    ctx.reload();
                }
                Err(error) => store_set_error(&store, format!("Create failed: {}", error)),
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add task..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
