use leptos::prelude::*;
use widgets::PageConfig;

use crate::components::{AggregationTable, Dropdown};

#[component]
pub fn App() -> impl IntoView {
    let page = PageConfig::demo();

    view! {
        <main class="page">
            <section class="page__selects">
                {page
                    .dropdowns
                    .into_iter()
                    .map(|config| view! { <Dropdown config /> })
                    .collect_view()}
            </section>
            <section class="page__table">
                <AggregationTable rows=page.rows />
            </section>
        </main>
    }
}
