pub mod add;
pub mod list;
pub mod menu;
pub mod review;
pub mod stats;
