pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod forms;
pub mod navigation;
pub mod planner;
pub mod server;
pub mod session;
pub mod views;
