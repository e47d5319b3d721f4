pub mod filter;
pub mod panel;
pub mod schema;
pub mod ui;
pub mod widget;
