pub mod booking;
pub mod navigation;
pub mod pages;
pub mod planner;
pub mod quotes;
