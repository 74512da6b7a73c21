//! In-memory page driver.
//!
//! Owns the widget state for one page load, renders it into the synthetic
//! DOM after every interaction, and exposes the query/interaction surface an
//! automated observer needs. All state transitions are synchronous: the tree
//! returned after a `click` already reflects that click.

use std::time::{Duration, Instant};

use widgets::{format_sum, AggregationTable, Dropdown, PageConfig};

use crate::dom::{query, Action, Match, Node, Path};
use crate::error::{HarnessError, HarnessResult};
use crate::selector::Selector;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub struct Page {
    dropdowns: Vec<Dropdown>,
    table: AggregationTable,
    /// Uncommitted text per numeric field, in row order.
    drafts: Vec<String>,
}

impl Page {
    /// Loads the demo page, as a browser navigation would.
    pub fn load() -> Self {
        Self::with_config(PageConfig::demo())
    }

    pub fn with_config(config: PageConfig) -> Self {
        let drafts = config
            .rows
            .iter()
            .map(|spec| format_sum(spec.initial_value))
            .collect();
        Self {
            dropdowns: config.dropdowns.into_iter().map(Dropdown::new).collect(),
            table: AggregationTable::new(config.rows),
            drafts,
        }
    }

    /// Renders the current state into the DOM shape the frontend emits.
    pub fn render(&self) -> Node {
        Node::new("main")
            .class("page")
            .child(
                Node::new("section").class("page__selects").children(
                    self.dropdowns
                        .iter()
                        .enumerate()
                        .map(|(i, d)| render_dropdown(i, d)),
                ),
            )
            .child(
                Node::new("section")
                    .class("page__table")
                    .child(self.render_table()),
            )
    }

    fn render_table(&self) -> Node {
        Node::new("table").class("agg").child(
            Node::new("tbody").children(self.table.rows().iter().enumerate().map(|(i, row)| {
                Node::new("tr")
                    .child(Node::new("td").class("name").text(row.name()))
                    .child(
                        Node::new("td")
                            .child(Node::new("input").class("num").input(i, &self.drafts[i])),
                    )
                    .child(
                        Node::new("td").child(
                            Node::new("button")
                                .class("add")
                                .text("Add")
                                .on_click(Action::RowAdd(i)),
                        ),
                    )
                    .child(
                        Node::new("td").child(
                            Node::new("button")
                                .class("reset")
                                .text("Reset")
                                .on_click(Action::RowReset(i)),
                        ),
                    )
                    .child(Node::new("td").class("sum").text(format_sum(row.sum())))
            })),
        )
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// First-match visibility, like an unscoped probe. Never fails on
    /// multiplicity; use [`Page::is_visible_strict`] for uniqueness claims.
    pub fn is_visible(&self, selector: &str) -> HarnessResult<bool> {
        let matches = self.resolve(selector)?;
        Ok(matches.first().is_some_and(|m| m.visible))
    }

    /// Visibility of the single element a selector claims to address.
    /// Resolving to more than one element is a violation, regardless of how
    /// many of them are visible.
    pub fn is_visible_strict(&self, selector: &str) -> HarnessResult<bool> {
        let matches = self.resolve(selector)?;
        match matches.len() {
            0 => Ok(false),
            1 => Ok(matches[0].visible),
            count => Err(HarnessError::StrictModeViolation {
                selector: selector.to_string(),
                count,
            }),
        }
    }

    /// Text content of the single matching element.
    pub fn text(&self, selector: &str) -> HarnessResult<String> {
        let tree = self.render();
        let m = self.resolve_one(selector)?;
        Ok(tree.at(&m.path).map(|n| n.text_content()).unwrap_or_default())
    }

    /// Current content of the single matching numeric field.
    pub fn input_value(&self, selector: &str) -> HarnessResult<String> {
        let tree = self.render();
        let m = self.resolve_one(selector)?;
        tree.at(&m.path)
            .and_then(|node| node.value.clone())
            .ok_or_else(|| HarnessError::NotAnInput {
                selector: selector.to_string(),
            })
    }

    /// Path of the single matching element. Two selectors address the same
    /// element exactly when their paths are equal within one render.
    pub fn locate(&self, selector: &str) -> HarnessResult<Path> {
        Ok(self.resolve_one(selector)?.path)
    }

    // ── Interactions ─────────────────────────────────────────────────────

    /// Clicks the single matching element. The click bubbles to the nearest
    /// ancestor with a handler; hidden elements are not interactable.
    pub fn click(&mut self, selector: &str) -> HarnessResult<()> {
        let m = self.resolve_one(selector)?;
        if !m.visible {
            return Err(HarnessError::NotInteractable {
                selector: selector.to_string(),
            });
        }
        let tree = self.render();
        let action = tree
            .chain(&m.path)
            .iter()
            .rev()
            .find_map(|node| node.action);
        if let Some(action) = action {
            self.apply(action);
        }
        Ok(())
    }

    /// Types into the single matching numeric field without committing.
    pub fn fill(&mut self, selector: &str, value: &str) -> HarnessResult<()> {
        let slot = self.input_slot(selector)?;
        self.drafts[slot] = value.to_string();
        Ok(())
    }

    /// Commit gesture: parses the field's draft into the row's running total.
    pub fn press_enter(&mut self, selector: &str) -> HarnessResult<()> {
        let slot = self.input_slot(selector)?;
        let text = self.drafts[slot].clone();
        match text.trim().parse::<f64>() {
            Ok(n) => {
                if let Some(row) = self.table.row_at_mut(slot) {
                    row.commit_value(n);
                }
            }
            Err(_) => tracing::warn!("ignored non-numeric input {text:?}"),
        }
        Ok(())
    }

    // ── Waits ────────────────────────────────────────────────────────────

    /// Waits until the first match is visible.
    pub fn wait_for_visible(&self, selector: &str, timeout: Duration) -> HarnessResult<()> {
        self.wait(timeout, &format!("`{selector}` to become visible"), || {
            self.is_visible(selector)
        })
    }

    /// Waits until no match is visible (absent counts as hidden).
    pub fn wait_for_hidden(&self, selector: &str, timeout: Duration) -> HarnessResult<()> {
        self.wait(timeout, &format!("`{selector}` to become hidden"), || {
            Ok(self.resolve(selector)?.iter().all(|m| !m.visible))
        })
    }

    /// Waits until the single matching element's text contains `needle`.
    /// Multiplicity fails fast instead of waiting out the timeout.
    pub fn wait_for_text(
        &self,
        selector: &str,
        needle: &str,
        timeout: Duration,
    ) -> HarnessResult<()> {
        self.wait(
            timeout,
            &format!("`{selector}` to contain {needle:?}"),
            || {
                let matches = self.resolve(selector)?;
                match matches.len() {
                    0 => Ok(false),
                    1 => Ok(self.text(selector)?.contains(needle)),
                    count => Err(HarnessError::StrictModeViolation {
                        selector: selector.to_string(),
                        count,
                    }),
                }
            },
        )
    }

    fn wait(
        &self,
        timeout: Duration,
        condition: &str,
        mut check: impl FnMut() -> HarnessResult<bool>,
    ) -> HarnessResult<()> {
        let start = Instant::now();
        loop {
            if check()? {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(HarnessError::Timeout {
                    condition: condition.to_string(),
                    waited_ms: start.elapsed().as_millis() as u64,
                });
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn resolve(&self, selector: &str) -> HarnessResult<Vec<Match>> {
        let parsed = Selector::parse(selector)?;
        Ok(query(&self.render(), &parsed))
    }

    fn resolve_one(&self, selector: &str) -> HarnessResult<Match> {
        let mut matches = self.resolve(selector)?;
        match matches.len() {
            0 => Err(HarnessError::NotFound {
                selector: selector.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(HarnessError::StrictModeViolation {
                selector: selector.to_string(),
                count,
            }),
        }
    }

    fn input_slot(&self, selector: &str) -> HarnessResult<usize> {
        let m = self.resolve_one(selector)?;
        if !m.visible {
            return Err(HarnessError::NotInteractable {
                selector: selector.to_string(),
            });
        }
        let tree = self.render();
        tree.at(&m.path)
            .and_then(|node| node.input_slot)
            .ok_or_else(|| HarnessError::NotAnInput {
                selector: selector.to_string(),
            })
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::ToggleDropdown(i) => self.dropdowns[i].toggle(),
            Action::SelectOption { dropdown, option } => {
                let label = self.dropdowns[dropdown].options()[option].clone();
                if !self.dropdowns[dropdown].select(&label) {
                    tracing::warn!("ignored selection of {label:?}");
                }
            }
            Action::RowAdd(i) => {
                if let Some(row) = self.table.row_at_mut(i) {
                    row.add();
                }
            }
            Action::RowReset(i) => {
                if let Some(row) = self.table.row_at_mut(i) {
                    row.reset();
                    self.drafts[i] = format_sum(row.value());
                }
            }
        }
    }
}

fn render_dropdown(index: usize, dropdown: &Dropdown) -> Node {
    Node::new("div")
        .class("select")
        .class(dropdown.id())
        .on_click(Action::ToggleDropdown(index))
        .child(
            Node::new("span")
                .class("select__label")
                .text(dropdown.label()),
        )
        .child(
            Node::new("ul").displayed(dropdown.is_open()).children(
                dropdown.options().iter().enumerate().map(|(option, label)| {
                    Node::new("li").text(label).on_click(Action::SelectOption {
                        dropdown: index,
                        option,
                    })
                }),
            ),
        )
}
