pub mod client;
pub mod job_store;
pub mod value;
