pub mod options;
pub mod posts;
pub mod transient;
