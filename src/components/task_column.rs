//! Task Column Component
//!
//! One lane of the board: header, position-ordered task cards, and the
//! create form at the bottom.

use leptos::prelude::*;

use crate::board::tasks_in;
use crate::components::{NewTaskForm, TaskCard};
use crate::dnd::DndSignals;
use crate::models::Column;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Single column lane
#[component]
pub fn TaskColumn(column: Column, dnd: DndSignals) -> impl IntoView {
    let store = use_board_store();
    let column_id = column.id;

    let column_tasks = move || tasks_in(&store.tasks().get(), column_id);

    view! {
        <div class="task-column">
            <h2 class="task-column-title">{column.title.clone()}</h2>

            <div class="task-list">
                <For
                    each=column_tasks
                    key=|task| {
                        // Key on every rendered field so a reload that changes
                        // any of them re-renders the card
                        (
                            task.id,
                            task.title.clone(),
                            task.description.clone(),
                            task.column_id,
                            task.position,
                        )
                    }
                    children=move |task| {
                        view! { <TaskCard task=task dnd=dnd /> }
                    }
                />
            </div>

            <NewTaskForm column_id=column_id />
        </div>
    }
}
