pub mod app;
pub mod cli;
pub mod element;
pub mod error;
pub mod logging;
pub mod school;
pub mod visitor;
