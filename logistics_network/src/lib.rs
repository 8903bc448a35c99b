pub mod network;
pub mod report;
