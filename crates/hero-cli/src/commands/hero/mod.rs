pub mod add;
pub mod dashboard;
pub mod delete;
pub mod get;
pub mod list;
pub mod rename;
