use leptos::prelude::*;
use widgets::{format_sum, Row, RowSpec};

/// Table of aggregation rows.
///
/// The row vector fixes the document order, so the Nth `input.num`,
/// `button.add` and `button.reset` on the page always belong to the Nth row.
#[component]
pub fn AggregationTable(rows: Vec<RowSpec>) -> impl IntoView {
    view! {
        <table class="agg">
            <tbody>
                {rows
                    .into_iter()
                    .map(|spec| view! { <AggregationRow spec /> })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// One row: name, editable numeric field, add/reset actions, sum cell.
///
/// Every handler mutates the row state and lets the sum cell re-render in the
/// same event turn; there is no deferred recomputation.
#[component]
fn AggregationRow(spec: RowSpec) -> impl IntoView {
    let name = spec.name.clone();
    let initial_value = spec.initial_value;
    let row = RwSignal::new(Row::new(spec));
    // Text typed into the field before it is committed with Enter.
    let draft = RwSignal::new(format_sum(initial_value));

    let commit = move || {
        let text = draft.get();
        match text.trim().parse::<f64>() {
            Ok(n) => row.update(|r| r.commit_value(n)),
            Err(_) => log::warn!("ignored non-numeric input {text:?}"),
        }
    };

    view! {
        <tr>
            <td class="name">{name}</td>
            <td>
                <input
                    class="num"
                    type="text"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            commit();
                        }
                    }
                />
            </td>
            <td>
                <button class="add" on:click=move |_| row.update(|r| r.add())>
                    "Add"
                </button>
            </td>
            <td>
                <button
                    class="reset"
                    on:click=move |_| {
                        row.update(|r| r.reset());
                        draft.set(format_sum(initial_value));
                    }
                >
                    "Reset"
                </button>
            </td>
            <td class="sum">{move || row.with(|r| format_sum(r.sum()))}</td>
        </tr>
    }
}
