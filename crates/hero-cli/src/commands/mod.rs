pub mod dispatch;
pub mod hero;
pub mod search;
pub mod serve;
