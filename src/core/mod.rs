//! 核心领域模块

pub mod paginate;
pub mod query;
pub mod window;
