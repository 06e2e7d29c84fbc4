pub mod pairs;
pub mod report;
pub mod timing;
