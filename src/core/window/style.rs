//! 分页样式选择

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::view::{PageNumbers, WindowInput};
use super::{digg, filmfeed, muzx};
use crate::app::error::types::{PagerError, PagerResult};

/// 样式计算函数
pub type StyleFn = fn(&WindowInput) -> PageNumbers;

/// 分页样式
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Style {
    /// 左 / 中 / 右三段截断
    #[default]
    Digg,
    /// 固定宽度的滑动窗口
    Filmfeed,
    /// 以当前页为中心的紧凑窗口
    Muzx,
}

impl Style {
    /// 全部样式
    pub const ALL: [Style; 3] =
        [Style::Digg, Style::Filmfeed, Style::Muzx];

    /// 样式名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Digg => "digg",
            Style::Filmfeed => "filmfeed",
            Style::Muzx => "muzx",
        }
    }

    /// 样式对应的计算函数
    pub fn function(&self) -> StyleFn {
        match self {
            Style::Digg => digg::digg,
            Style::Filmfeed => filmfeed::filmfeed,
            Style::Muzx => muzx::muzx,
        }
    }
}

/// 按名称查找计算函数
pub fn style_function(name: &str) -> PagerResult<StyleFn> {
    name.parse::<Style>().map(|style| style.function())
}

impl FromStr for Style {
    type Err = PagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| {
                style.as_str().eq_ignore_ascii_case(s.trim())
            })
            .ok_or_else(|| PagerError::InvalidStyle(s.to_string()))
    }
}

impl TryFrom<String> for Style {
    type Error = PagerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
