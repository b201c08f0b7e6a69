pub mod node;
pub mod edge;
pub mod graph;
pub mod descriptor;
pub mod catalog;
pub mod policy;
pub mod builder;
pub mod report;
pub mod ports;
