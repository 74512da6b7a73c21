use leptos::prelude::*;
use widgets::{Dropdown as DropdownState, DropdownConfig};

/// Custom select: a clickable trigger paired with a hideable option list.
///
/// The option list stays in the DOM while closed (`display: none`), so
/// instance-scoped queries like `.select1 ul` always resolve; only the
/// visible/hidden distinction tracks the open state. Each rendered instance
/// owns its own state signal, so opening one select never affects another.
#[component]
pub fn Dropdown(config: DropdownConfig) -> impl IntoView {
    let scope_class = format!("select {}", config.id);
    let state = RwSignal::new(DropdownState::new(config));

    view! {
        <div class=scope_class on:click=move |_| state.update(|s| s.toggle())>
            <span class="select__label">{move || state.with(|s| s.label())}</span>
            <ul style:display=move || {
                if state.with(|s| s.is_open()) { "block" } else { "none" }
            }>
                <For
                    each=move || state.with(|s| s.options().to_vec())
                    key=|label| label.clone()
                    children=move |label| {
                        let value = label.clone();
                        view! {
                            <li on:click=move |ev| {
                                // keep the click out of the trigger handler,
                                // otherwise the toggle would reopen the list
                                ev.stop_propagation();
                                state.update(|s| {
                                    if !s.select(&value) {
                                        log::warn!("ignored selection of {value:?}");
                                    }
                                });
                            }>
                                {label}
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
