//! muzx 样式：以当前页为中心的紧凑窗口
//!
//! 靠近边界时，缺少的一侧宽度（slack）补给另一侧，使窗口尽量保持满宽。

use tracing::debug;

use super::view::{span, PageNumbers, WindowInput};

/// 计算 muzx 样式页码，顺序为 `前序页 ++ [当前页] ++ 后续页`
pub fn muzx(input: &WindowInput) -> PageNumbers {
    let WindowInput {
        total_pages: p,
        current_page: n,
        ..
    } = *input;
    let side = input.half();

    let left_slack = (side - (p - n)).max(0);
    let right_slack = (side - (n - 1)).max(0);
    let before = side + left_slack;
    let after = side + right_slack;

    let mut pages = span((n - before).max(1), n - 1);
    pages.extend(span(n, n));
    pages.extend(span(n + 1, (n + after).min(p)));

    debug!(
        style = "muzx",
        side,
        left_slack,
        right_slack,
        total_pages = p,
        current_page = n,
        "computed compact window"
    );

    PageNumbers::Window(pages)
}
