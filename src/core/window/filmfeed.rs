//! filmfeed 样式：跟随当前页的胶片式滑动窗口

use tracing::debug;

use super::view::{span, PageNumbers, WindowInput};

/// 计算 filmfeed 样式页码
///
/// 居中窗口宽度为 `frame_size + 1`，比两端固定的窗口多一页。
pub fn filmfeed(input: &WindowInput) -> PageNumbers {
    let WindowInput {
        total_pages: p,
        current_page: n,
        frame_size: f,
    } = *input;
    let half = input.half();

    let (branch, pages) = if p < f {
        ("all", span(1, p))
    } else if n < half + 1 {
        ("start", span(1, f))
    } else if p - half <= n {
        ("end", span(p - f + 1, p))
    } else {
        ("centered", span(n - half, n + half))
    };

    debug!(
        style = "filmfeed",
        branch,
        total_pages = p,
        current_page = n,
        frame_size = f,
        "computed page window"
    );

    PageNumbers::Window(pages)
}
