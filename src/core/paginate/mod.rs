//! 序列分页模块

pub mod paginator;

pub use self::paginator::{Page, Paginator};
