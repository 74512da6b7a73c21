use serde::{Deserialize, Serialize};

/// Per-row configuration of the aggregation rule.
///
/// The running total starts at `initial_sum`; the add button contributes
/// `step` per click; a committed input value contributes itself. The rule is
/// data, not code, so rows can differ without touching the state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSpec {
    pub name: String,
    pub initial_sum: f64,
    pub step: f64,
    #[serde(default)]
    pub initial_value: f64,
}

impl RowSpec {
    pub fn new(name: impl Into<String>, initial_sum: f64, step: f64) -> Self {
        Self {
            name: name.into(),
            initial_sum,
            step,
            initial_value: 0.0,
        }
    }
}

/// One live aggregation row: editable value plus derived running total.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    spec: RowSpec,
    value: f64,
    sum: f64,
}

impl Row {
    pub fn new(spec: RowSpec) -> Self {
        Self {
            value: spec.initial_value,
            sum: spec.initial_sum,
            spec,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Commit a typed value: the committed number is accumulated into the
    /// running total, never substituted for it.
    pub fn commit_value(&mut self, n: f64) {
        self.value = n;
        self.sum += n;
    }

    /// Add button: fixed per-row increment.
    pub fn add(&mut self) {
        self.sum += self.spec.step;
    }

    /// Reset button: total back to zero, value back to its baseline.
    pub fn reset(&mut self) {
        self.sum = 0.0;
        self.value = self.spec.initial_value;
    }
}

/// Fixed, ordered set of rows created at page load.
///
/// Row order is the single source of truth for positional addressing: the
/// Nth input, add button and reset button all belong to `rows[N]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationTable {
    rows: Vec<Row>,
}

impl AggregationTable {
    pub fn new(specs: Vec<RowSpec>) -> Self {
        Self {
            rows: specs.into_iter().map(Row::new).collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.name() == name)
    }

    pub fn row_mut(&mut self, name: &str) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.name() == name)
    }

    pub fn row_at(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_at_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }
}
