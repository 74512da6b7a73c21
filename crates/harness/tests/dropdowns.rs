use std::time::Duration;

use harness::{HarnessError, Page};

const WAIT: Duration = Duration::from_secs(1);

#[test]
fn both_lists_start_hidden() {
    let page = Page::load();
    assert!(!page.is_visible("ul:visible").unwrap());
    assert!(!page.is_visible(".select1 ul").unwrap());
    assert!(!page.is_visible(".select2 ul").unwrap());
}

#[test]
fn opening_one_select_leaves_the_other_closed() {
    let mut page = Page::load();

    page.click(".select1").unwrap();
    page.wait_for_visible(".select1 ul", WAIT).unwrap();

    assert!(page.is_visible("ul:visible").unwrap());
    assert!(page.is_visible(".select1 ul").unwrap());
    assert!(!page.is_visible(".select2 ul").unwrap());
}

#[test]
fn selecting_an_option_commits_and_closes() {
    let mut page = Page::load();

    page.click(".select1").unwrap();
    page.wait_for_visible(".select1 ul", WAIT).unwrap();

    page.click(".select1 ul li:has-text(\"Option 2\")").unwrap();
    page.wait_for_hidden(".select1 ul", WAIT).unwrap();

    assert!(!page.is_visible("ul").unwrap());
    assert!(!page.is_visible("ul:visible").unwrap());
    assert!(!page.is_visible(".select1 ul").unwrap());
    assert!(!page.is_visible(".select2 ul").unwrap());
    assert_eq!(page.text(".select1 .select__label").unwrap(), "Option 2");
}

#[test]
fn trigger_click_closes_an_open_list() {
    let mut page = Page::load();

    page.click(".select2").unwrap();
    assert!(page.is_visible(".select2 ul").unwrap());

    page.click(".select2").unwrap();
    assert!(!page.is_visible(".select2 ul").unwrap());
}

// The literal strict-mode reproduction: select1 has been opened and closed,
// so its list is still in the DOM (hidden) when select2 opens. An unfiltered
// `ul` query then resolves to two elements.
#[test]
fn unfiltered_list_query_reports_multiplicity() {
    let mut page = Page::load();

    page.click(".select1").unwrap();
    page.click(".select1 ul li:has-text(\"Option 2\")").unwrap();
    page.click(".select2").unwrap();
    page.wait_for_visible(".select2 ul", WAIT).unwrap();

    let err = page.is_visible_strict("ul").unwrap_err();
    assert!(err
        .to_string()
        .contains("strict mode violation: selector `ul` resolved to 2 elements"));
    match err {
        HarnessError::StrictModeViolation { count, .. } => assert_eq!(count, 2),
        other => panic!("expected a strict mode violation, got {other}"),
    }

    // the visible-only filter narrows the match back down to one element
    assert!(page.is_visible_strict("ul:visible").unwrap());
    assert!(!page.is_visible(".select1 ul").unwrap());
    assert!(page.is_visible(".select2 ul").unwrap());
}

#[test]
fn hidden_option_is_not_interactable() {
    let mut page = Page::load();

    let err = page
        .click(".select1 ul li:has-text(\"Option 2\")")
        .unwrap_err();
    assert!(matches!(err, HarnessError::NotInteractable { .. }));

    // nothing changed
    assert!(!page.is_visible(".select1 ul").unwrap());
    assert_eq!(page.text(".select1 .select__label").unwrap(), "Select...");
}

#[test]
fn waiting_for_a_list_that_never_opens_times_out() {
    let page = Page::load();

    let err = page
        .wait_for_visible(".select1 ul", Duration::from_millis(120))
        .unwrap_err();
    // timeout is a distinct condition from ambiguous resolution
    assert!(matches!(err, HarnessError::Timeout { .. }));
}
