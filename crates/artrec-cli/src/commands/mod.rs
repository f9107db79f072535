pub mod content;
pub mod demo;
pub mod dispatch;
pub mod neighbors;
pub mod seen;
pub mod shared;
pub mod similar;
pub mod stats;
pub mod top;
pub mod user;
