//! 计算输入与结果视图

use serde::Serialize;

use super::style::Style;

/// 样式函数的输入
///
/// 使用有符号整数，`f - 2` 之类的表达式在小窗口下仍按整数公式求值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowInput {
    pub total_pages: i64,
    pub current_page: i64,
    pub frame_size: i64,
}

impl WindowInput {
    /// 创建输入
    pub fn new(
        total_pages: u32,
        current_page: u32,
        frame_size: u32,
    ) -> Self {
        Self {
            total_pages: i64::from(total_pages),
            current_page: i64::from(current_page),
            frame_size: i64::from(frame_size),
        }
    }

    /// 窗口半宽（向下取整）
    pub fn half(&self) -> i64 {
        self.frame_size / 2
    }
}

/// 样式函数产出的页码
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageNumbers {
    /// digg 样式的三段页码
    Clusters {
        left: Vec<u32>,
        middle: Vec<u32>,
        right: Vec<u32>,
    },
    /// 滑动窗口样式的单段页码
    Window(Vec<u32>),
}

/// 闭区间 `[start, end]` 内的页码，`start > end` 时为空
pub fn span(start: i64, end: i64) -> Vec<u32> {
    (start..=end)
        .filter_map(|n| u32::try_from(n).ok())
        .collect()
}

/// 分页结果视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub left_page_numbers: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub middle_page_numbers: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub right_page_numbers: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub page_numbers: Vec<u32>,
}

impl PaginationView {
    /// 由公共片段与样式页码组装视图
    pub fn assemble(
        style: Style,
        total_pages: u32,
        current_page: u32,
        numbers: PageNumbers,
    ) -> Self {
        let mut view = Self {
            style,
            previous_page: (current_page > 1)
                .then(|| current_page - 1),
            next_page: (current_page < total_pages)
                .then(|| current_page + 1),
            left_page_numbers: Vec::new(),
            middle_page_numbers: Vec::new(),
            right_page_numbers: Vec::new(),
            page_numbers: Vec::new(),
        };

        match numbers {
            PageNumbers::Clusters {
                left,
                middle,
                right,
            } => {
                view.left_page_numbers = left;
                view.middle_page_numbers = middle;
                view.right_page_numbers = right;
            }
            PageNumbers::Window(pages) => {
                view.page_numbers = pages;
            }
        }

        view
    }

    /// 按显示顺序列出所有页码
    pub fn all_page_numbers(&self) -> Vec<u32> {
        self.left_page_numbers
            .iter()
            .chain(&self.middle_page_numbers)
            .chain(&self.right_page_numbers)
            .chain(&self.page_numbers)
            .copied()
            .collect()
    }
}
