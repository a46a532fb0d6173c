pub mod merge_plan;
pub mod run_file;
pub mod sample_table;
