//! digg 样式：左 / 中 / 右三段截断
//!
//! 始终保留首两页与末两页作为跳转锚点，当前页附近维持固定宽度的窗口。

use tracing::debug;

use super::view::{span, PageNumbers, WindowInput};

/// 计算 digg 样式页码
pub fn digg(input: &WindowInput) -> PageNumbers {
    let WindowInput {
        total_pages: p,
        current_page: n,
        frame_size: f,
    } = *input;
    let half = input.half();

    let (branch, left, middle, right) = if p <= f + 2 {
        // 页数不多，截断没有意义
        ("all", span(1, p), Vec::new(), Vec::new())
    } else if n < f - 1 {
        ("head", span(1, f), Vec::new(), span(p - 1, p))
    } else if p - half <= n + 1 {
        // 尾部窗口与末两页重叠，合并为中段
        ("tail", span(1, 2), span(p - f + 1, p), Vec::new())
    } else {
        (
            "middle",
            span(1, 2),
            span(n - half + 1, n + half - 1),
            span(p - 1, p),
        )
    };

    debug!(
        style = "digg",
        branch,
        total_pages = p,
        current_page = n,
        frame_size = f,
        "computed page clusters"
    );

    PageNumbers::Clusters {
        left,
        middle,
        right,
    }
}
