//! Error Banner Component
//!
//! Surfaces the last failed backend call. Mutation failures leave the board
//! as it was; the banner is the only trace.

use leptos::prelude::*;

use crate::store::{store_clear_error, use_board_store, BoardStateStoreFields};

/// Dismissible banner for the store's last error
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_board_store();

    view! {
        {move || {
            store.last_error().get().map(|message| view! {
                <div class="error-banner">
                    <span class="error-banner-text">{message}</span>
                    <button class="error-dismiss-btn" on:click=move |_| store_clear_error(&store)>
                        "×"
                    </button>
                </div>
            })
        }}
    }
}
