//! Task Counters Component

use leptos::prelude::*;

use crate::store::{counters_memo, use_app_store};

#[component]
pub fn TaskCounters() -> impl IntoView {
    let counters = counters_memo(use_app_store());

    view! {
        <div class="todo-counters">
            <span>"Completed: " <span id="completed-count">{move || counters.get().completed}</span></span>
            <span>"Uncompleted: " <span id="uncompleted-count">{move || counters.get().uncompleted}</span></span>
        </div>
    }
}
