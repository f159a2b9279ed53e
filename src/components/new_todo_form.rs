//! New Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client::Outcome;
use crate::context::AppContext;
use crate::store::use_app_store;

/// Form for creating new tasks. The input is cleared only once the server
/// has accepted the task.
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = new_title.get_untracked();
        let ctx = ctx.clone();

        spawn_local(async move {
            let mut rows = store;
            if let Ok(Outcome::Applied) = ctx.client.create(&mut rows, &input).await {
                set_new_title.set(String::new());
            }
        });
    };

    view! {
        <form id="todo-form" class="todo-form" on:submit=create_todo>
            <input
                id="todo-input"
                type="text"
                placeholder="Add a new task..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
