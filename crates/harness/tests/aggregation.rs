use std::time::Duration;

use harness::Page;

const WAIT: Duration = Duration::from_secs(1);

fn change_num(page: &mut Page, name: &str, new_value: f64, sum_expected: &str, field: &str) {
    page.fill(field, &new_value.to_string()).unwrap();
    page.press_enter(field).unwrap();
    let sum_selector = format!("tr:has-text(\"{name}\") td.sum");
    page.wait_for_text(&sum_selector, sum_expected, WAIT).unwrap();
}

fn add(page: &mut Page, name: &str, sum_expected: &str, button: &str) {
    page.click(button).unwrap();
    let sum_selector = format!("tr:has-text(\"{name}\") td.sum");
    page.wait_for_text(&sum_selector, sum_expected, WAIT).unwrap();
}

fn reset(page: &mut Page, name: &str, button: &str) {
    page.click(button).unwrap();
    let sum_selector = format!("tr:has-text(\"{name}\") td.sum");
    page.wait_for_text(&sum_selector, "0", WAIT).unwrap();
}

#[test]
fn alvin_reset_clears_the_total() {
    let mut page = Page::load();
    let before = page.text("tr:has-text(\"Alvin\") td.sum").unwrap();
    assert_ne!(before, "0", "fixture row must start with a total");

    reset(&mut page, "Alvin", "button.reset >> nth=0");
}

#[test]
fn alan_add_applies_the_row_increment() {
    let mut page = Page::load();
    add(&mut page, "Alan", "15.04", "button.add >> nth=1");
}

#[test]
fn jonathan_commit_accumulates_the_typed_value() {
    let mut page = Page::load();
    change_num(&mut page, "Jonathan", 2.0, "14", "input.num >> nth=2");
}

#[test]
fn reset_is_idempotent() {
    let mut page = Page::load();
    reset(&mut page, "Alvin", "button.reset >> nth=0");
    reset(&mut page, "Alvin", "button.reset >> nth=0");
    assert_eq!(page.text("tr:has-text(\"Alvin\") td.sum").unwrap(), "0");
}

#[test]
fn reset_returns_the_field_to_its_baseline() {
    let mut page = Page::load();
    let field = "tr:has-text(\"Alvin\") input.num";

    page.fill(field, "5").unwrap();
    page.press_enter(field).unwrap();
    assert_eq!(page.input_value(field).unwrap(), "5");

    page.click("tr:has-text(\"Alvin\") button.reset").unwrap();
    assert_eq!(page.input_value(field).unwrap(), "0");
    assert_eq!(page.text("tr:has-text(\"Alvin\") td.sum").unwrap(), "0");
}

#[test]
fn non_numeric_input_is_ignored_on_commit() {
    let mut page = Page::load();
    let field = "tr:has-text(\"Jonathan\") input.num";
    let before = page.text("tr:has-text(\"Jonathan\") td.sum").unwrap();

    page.fill(field, "not a number").unwrap();
    page.press_enter(field).unwrap();

    assert_eq!(page.text("tr:has-text(\"Jonathan\") td.sum").unwrap(), before);
}

// Positional and name-based addressing must resolve to the same row for
// every action kind, for every index.
#[test]
fn nth_controls_and_named_rows_agree() {
    let page = Page::load();
    for (i, name) in ["Alvin", "Alan", "Jonathan"].iter().enumerate() {
        for kind in ["input.num", "button.add", "button.reset", "td.sum"] {
            let by_position = page.locate(&format!("{kind} >> nth={i}")).unwrap();
            let by_name = page
                .locate(&format!("tr:has-text(\"{name}\") {kind}"))
                .unwrap();
            assert_eq!(
                by_position, by_name,
                "index {i} of `{kind}` must live in the {name} row"
            );
        }
    }
}
