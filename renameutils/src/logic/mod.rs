pub mod filename;
pub mod planner;
pub mod remap_table;
