//! 应用层

pub mod greeting;
pub mod users;
