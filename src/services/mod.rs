//! Core services for traversal, naming validation, evaluation, and reporting

pub mod evaluate;
pub mod format;
pub mod history;
pub mod naming;
pub mod probe;
pub mod report;
pub mod scan;
