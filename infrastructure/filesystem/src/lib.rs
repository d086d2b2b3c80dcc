pub mod config_file;
pub mod jobs_file;
pub mod paths;
