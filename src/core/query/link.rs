//! 翻页链接

/// 生成第 `page` 页的链接，附带已编码的其余参数（`&` 转义为 `&amp;`）
pub fn page_link(page: u32, params: &str) -> String {
    let link = format!("?page={page}");
    if params.is_empty() {
        return link;
    }
    format!("{link}&amp;{}", params.replace('&', "&amp;"))
}

/// 生成带锚点的翻页链接
pub fn page_link_with_anchor(
    page: u32,
    params: &str,
    anchor: Option<&str>,
) -> String {
    match anchor.filter(|a| !a.is_empty()) {
        Some(anchor) => format!("{}#{anchor}", page_link(page, params)),
        None => page_link(page, params),
    }
}
