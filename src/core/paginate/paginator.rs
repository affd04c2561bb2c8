//! 固定页大小的序列分页

use std::ops::Range;

use crate::app::error::types::{PagerError, PagerResult};

/// 分页器，只依赖元素总数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total_items: usize,
    per_page: u32,
}

impl Paginator {
    /// 创建分页器，每页数量为 0 时报错
    pub fn new(
        total_items: usize,
        per_page: u32,
    ) -> PagerResult<Self> {
        if per_page == 0 {
            return Err(PagerError::InvalidPerPage(per_page));
        }
        Ok(Self {
            total_items,
            per_page,
        })
    }

    /// 获取元素总数
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// 获取每页数量
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// 获取总页数（空序列也有一个空的首页）
    pub fn num_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(self.per_page as usize);
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    /// 检查页码是否存在
    pub fn validate_page(&self, number: u32) -> PagerResult<u32> {
        let total_pages = self.num_pages();
        if number == 0 || number > total_pages {
            return Err(PagerError::OutOfRange {
                page: number,
                total_pages,
            });
        }
        Ok(number)
    }

    /// 获取指定页的切片
    pub fn page<'a, T>(
        &self,
        items: &'a [T],
        number: u32,
    ) -> PagerResult<Page<'a, T>> {
        let number = self.validate_page(number)?;
        let per_page = self.per_page as usize;
        let start = ((number - 1) as usize)
            .saturating_mul(per_page)
            .min(items.len());
        let end = start.saturating_add(per_page).min(items.len());

        Ok(Page {
            number,
            total_pages: self.num_pages(),
            offset: start,
            items: &items[start..end],
        })
    }
}

/// 单页结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    number: u32,
    total_pages: u32,
    offset: usize,
    items: &'a [T],
}

impl<'a, T> Page<'a, T> {
    /// 当前页码（从1开始）
    pub fn number(&self) -> u32 {
        self.number
    }

    /// 总页数
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// 本页元素
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// 本页在整个序列中的下标范围
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// 本页首个元素的序号（从1开始，空页为0）
    pub fn start_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.offset + 1
        }
    }

    /// 本页末个元素的序号（从1开始，空页为0）
    pub fn end_index(&self) -> usize {
        self.offset + self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pages_with_ceiling() {
        assert_eq!(Paginator::new(100, 10).unwrap().num_pages(), 10);
        assert_eq!(Paginator::new(101, 10).unwrap().num_pages(), 11);
        assert_eq!(Paginator::new(1, 10).unwrap().num_pages(), 1);
    }

    #[test]
    fn empty_sequence_has_one_page() {
        let paginator = Paginator::new(0, 10).unwrap();
        assert_eq!(paginator.num_pages(), 1);

        let items: [u8; 0] = [];
        let page = paginator.page(&items, 1).unwrap();
        assert!(page.items().is_empty());
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);
        assert!(!page.has_next());
    }

    #[test]
    fn slices_requested_page() {
        let items: Vec<u32> = (1..=25).collect();
        let paginator = Paginator::new(items.len(), 10).unwrap();

        let second = paginator.page(&items, 2).unwrap();
        assert_eq!(second.items(), &items[10..20]);
        assert_eq!(second.range(), 10..20);
        assert!(second.has_previous());
        assert!(second.has_next());

        let last = paginator.page(&items, 3).unwrap();
        assert_eq!(last.items(), &[21, 22, 23, 24, 25]);
        assert_eq!(last.start_index(), 21);
        assert_eq!(last.end_index(), 25);
        assert!(!last.has_next());
    }

    #[test]
    fn missing_page_is_out_of_range() {
        let items: Vec<u32> = (1..=25).collect();
        let paginator = Paginator::new(items.len(), 10).unwrap();
        for number in [0, 4] {
            let err = paginator.page(&items, number).unwrap_err();
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn zero_per_page_is_rejected() {
        assert!(matches!(
            Paginator::new(10, 0),
            Err(PagerError::InvalidPerPage(0))
        ));
    }
}
