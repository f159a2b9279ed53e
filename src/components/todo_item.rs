//! Task Row Component
//!
//! One `li.todo-item` per task: checkbox, title, Delete and Edit.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::Todo;
use crate::store::use_app_store;

/// A single task row
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let Todo { id, title, completed } = todo;
    let data_id = id.to_string();
    let title_class = if completed { "todo-title completed" } else { "todo-title" };

    let on_toggle = {
        let ctx = ctx.clone();
        let id = id.clone();
        move |ev: web_sys::Event| {
            let checkbox: web_sys::HtmlInputElement = event_target(&ev);
            let checked = checkbox.checked();
            let ctx = ctx.clone();
            let id = id.clone();
            spawn_local(async move {
                let mut rows = store;
                let shown = ctx.client.toggle_checkbox(&mut rows, &id, checked).await;
                checkbox.set_checked(shown);
            });
        }
    };

    let on_edit = {
        let ctx = ctx.clone();
        let id = id.clone();
        let title = title.clone();
        move |_| {
            let ctx = ctx.clone();
            let id = id.clone();
            let title = title.clone();
            spawn_local(async move {
                let mut rows = store;
                if let Err(e) = ctx.client.rename(&mut rows, &id, &title).await {
                    log::debug!("[TODO] rename of {} not applied: {}", id, e);
                }
            });
        }
    };

    let on_delete = move |_| {
        let ctx = ctx.clone();
        let id = id.clone();
        spawn_local(async move {
            let mut rows = store;
            if let Err(e) = ctx.client.delete(&mut rows, &id).await {
                log::debug!("[TODO] delete of {} not applied: {}", id, e);
            }
        });
    };

    view! {
        <li class="todo-item" data-id=data_id>
            <div class="todo-left">
                <input type="checkbox" prop:checked=completed on:change=on_toggle />
                <p class=title_class>{title}</p>
            </div>

            <div class="todo-actions">
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
            </div>
        </li>
    }
}
