//! Task List App
//!
//! Root component: new-task form, counters and the task list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{NewTodoForm, TaskCounters, TodoList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(&config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx.clone());

    // Load the list once on mount
    Effect::new(move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            let mut rows = store;
            if let Err(e) = ctx.client.load(&mut rows).await {
                log::error!("[APP] initial load failed: {}", e);
            }
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Tasks"</h1>

            <NewTodoForm />

            <TaskCounters />

            <TodoList />
        </main>
    }
}
