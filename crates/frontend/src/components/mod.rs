pub mod aggregation_table;
pub mod dropdown;

pub use aggregation_table::AggregationTable;
pub use dropdown::Dropdown;
