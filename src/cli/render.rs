//! 文本分页条

use colored::*;

use page_window::core::window::PaginationView;

/// 渲染分页条，如 `« 1 2 … 9 [10] 11 … 19 20 »`
pub fn render_bar(view: &PaginationView, current_page: u32) -> String {
    let mut parts = Vec::new();

    if view.previous_page.is_some() {
        parts.push("«".bright_black().to_string());
    }

    let clusters = [
        &view.left_page_numbers,
        &view.middle_page_numbers,
        &view.right_page_numbers,
        &view.page_numbers,
    ];
    let mut last_shown: Option<u32> = None;
    for cluster in clusters.into_iter().filter(|c| !c.is_empty()) {
        let first = cluster.first().copied();
        if let (Some(last), Some(first)) = (last_shown, first) {
            if first > last + 1 {
                parts.push("…".bright_black().to_string());
            }
        }
        for &page in cluster.iter() {
            parts.push(format_page(page, current_page));
        }
        last_shown = cluster.last().copied();
    }

    if view.next_page.is_some() {
        parts.push("»".bright_black().to_string());
    }

    parts.join(" ")
}

fn format_page(page: u32, current_page: u32) -> String {
    if page == current_page {
        format!("[{page}]").bright_white().bold().to_string()
    } else {
        page.to_string().cyan().to_string()
    }
}
