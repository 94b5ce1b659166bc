pub mod config_io;
pub mod paths;
pub mod recovery;
pub mod store;
