pub mod backup;
pub mod paths;
pub mod process;
pub mod sanitize;
