//! 分页窗口计算库
//!
//! 给定总页数、当前页、窗口大小与样式，计算分页控件要显示的页码。
//!
//! ```
//! use page_window::core::window::{compute, Style};
//!
//! let view = compute(20, 10, 8, Style::Digg).unwrap();
//! assert_eq!(view.left_page_numbers, vec![1, 2]);
//! assert_eq!(view.right_page_numbers, vec![19, 20]);
//! ```

pub mod app;
pub mod core;
pub mod web;

pub use crate::app::config::settings::PaginationSettings;
pub use crate::app::error::types::{PagerError, PagerResult};
pub use crate::core::window::{
    compute, CalculatorConfig, PageWindowCalculator, PaginationView,
    Style,
};
