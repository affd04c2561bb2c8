//! 分页窗口计算
//!
//! 根据总页数、当前页、窗口大小与样式，计算分页控件需要显示的页码。
//! 计算是纯函数：不读取全局配置，不持有可变状态，可在任意线程并发调用。

pub mod digg;
pub mod filmfeed;
pub mod muzx;
pub mod style;
pub mod view;

use serde::{Deserialize, Serialize};

use crate::app::config::settings::PaginationSettings;
use crate::app::error::types::{PagerError, PagerResult};

pub use self::style::{style_function, Style, StyleFn};
pub use self::view::{PageNumbers, PaginationView, WindowInput};

/// 默认窗口大小
pub const DEFAULT_FRAME_SIZE: u32 = 8;

/// 计算器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub style: Style,
    pub frame_size: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            style: Style::default(),
            frame_size: DEFAULT_FRAME_SIZE,
        }
    }
}

/// 分页窗口计算器
#[derive(Debug, Clone, Copy)]
pub struct PageWindowCalculator {
    config: CalculatorConfig,
}

impl PageWindowCalculator {
    /// 创建计算器，窗口大小为 0 时报错
    pub fn new(config: CalculatorConfig) -> PagerResult<Self> {
        if config.frame_size == 0 {
            return Err(PagerError::InvalidFrameSize(
                config.frame_size,
            ));
        }
        Ok(Self { config })
    }

    /// 由样式名称创建计算器
    pub fn with_style_name(
        name: &str,
        frame_size: u32,
    ) -> PagerResult<Self> {
        Self::new(CalculatorConfig {
            style: name.parse()?,
            frame_size,
        })
    }

    /// 由分页配置创建计算器
    pub fn from_settings(
        settings: &PaginationSettings,
    ) -> PagerResult<Self> {
        Self::new(settings.calculator_config()?)
    }

    /// 获取配置
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// 计算当前页的分页视图
    pub fn compute(
        &self,
        total_pages: u32,
        current_page: u32,
    ) -> PagerResult<PaginationView> {
        compute(
            total_pages,
            current_page,
            self.config.frame_size,
            self.config.style,
        )
    }
}

impl Default for PageWindowCalculator {
    fn default() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }
}

/// 检查当前页是否位于 `[1, total_pages]`
///
/// 总页数为 0 时只要求当前页为正数。
pub fn check_page_range(
    total_pages: u32,
    current_page: u32,
) -> PagerResult<()> {
    if current_page == 0
        || (total_pages > 0 && current_page > total_pages)
    {
        return Err(PagerError::OutOfRange {
            page: current_page,
            total_pages,
        });
    }
    Ok(())
}

/// 计算分页视图
///
/// 当前页越界时返回 [`PagerError::OutOfRange`]，不做截断修正。
pub fn compute(
    total_pages: u32,
    current_page: u32,
    frame_size: u32,
    style: Style,
) -> PagerResult<PaginationView> {
    if frame_size == 0 {
        return Err(PagerError::InvalidFrameSize(frame_size));
    }
    check_page_range(total_pages, current_page)?;

    let input =
        WindowInput::new(total_pages, current_page, frame_size);
    let numbers = (style.function())(&input);

    Ok(PaginationView::assemble(
        style,
        total_pages,
        current_page,
        numbers,
    ))
}
