use serde::{Deserialize, Serialize};

use crate::dropdown::DropdownConfig;
use crate::table::RowSpec;

/// Everything the page renders, as data.
///
/// The frontend mounts one `Dropdown` per entry and one aggregation table;
/// the harness drives the same configuration through its synthetic DOM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub dropdowns: Vec<DropdownConfig>,
    pub rows: Vec<RowSpec>,
}

impl PageConfig {
    /// The demo page: two independent selects and three aggregation rows.
    pub fn demo() -> Self {
        let options = vec![
            "Option 1".to_string(),
            "Option 2".to_string(),
            "Option 3".to_string(),
        ];
        Self {
            dropdowns: vec![
                DropdownConfig::new("select1", options.clone()),
                DropdownConfig::new("select2", options),
            ],
            rows: vec![
                RowSpec::new("Alvin", 9.0, 1.0),
                RowSpec::new("Alan", 12.0, 3.04),
                RowSpec::new("Jonathan", 12.0, 2.0),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_shape() {
        let page = PageConfig::demo();
        assert_eq!(page.dropdowns.len(), 2);
        assert_eq!(page.dropdowns[0].id, "select1");
        assert_eq!(page.dropdowns[1].id, "select2");
        let names: Vec<&str> = page.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alvin", "Alan", "Jonathan"]);
    }

    #[test]
    fn page_config_round_trips_through_json() {
        let page = PageConfig::demo();
        let json = serde_json::to_string(&page).unwrap();
        let back: PageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn row_spec_defaults_initial_value() {
        let spec: RowSpec =
            serde_json::from_str(r#"{"name":"Alvin","initial_sum":9.0,"step":1.0}"#).unwrap();
        assert_eq!(spec.initial_value, 0.0);
    }
}
