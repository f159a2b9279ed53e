//! Task List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// Renders one row per task, in store order
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || store.todos().get()
                // Title and completed are part of the key so a patched row re-renders
                key=|todo| (todo.id.clone(), todo.title.clone(), todo.completed)
                children=|todo| view! { <TodoItem todo=todo /> }
            />
        </ul>
    }
}
