use serde::{Deserialize, Serialize};

/// 单页最大条数
pub const MAX_PAGE_SIZE: usize = 50;

/// 排序方向（按创建时间）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// 宽松解析：`asc`/`desc`（不区分大小写），其余一律视为升序
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// 分页请求
///
/// 构造时即完成归一化：
/// - 负数偏移视为 0；
/// - 条数限制在 `1..=MAX_PAGE_SIZE`；
/// - 无法识别的排序方向视为升序。
///
/// ```rust
/// use catalog_domain::persist::{PageRequest, SortDirection};
///
/// let page = PageRequest::new(-3, 500, "sideways");
/// assert_eq!(page.offset(), 0);
/// assert_eq!(page.limit(), 50);
/// assert_eq!(page.sort(), SortDirection::Asc);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: usize,
    limit: usize,
    sort: SortDirection,
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64, sort: &str) -> Self {
        Self {
            offset: usize::try_from(offset).unwrap_or(0),
            limit: limit.clamp(1, MAX_PAGE_SIZE as i64) as usize,
            sort: SortDirection::parse_lenient(sort),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, MAX_PAGE_SIZE as i64, "asc")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_clamped_both_ways() {
        assert_eq!(PageRequest::new(0, 100, "asc").limit(), 50);
        assert_eq!(PageRequest::new(0, 0, "asc").limit(), 1);
        assert_eq!(PageRequest::new(0, -7, "asc").limit(), 1);
        assert_eq!(PageRequest::new(0, 10, "asc").limit(), 10);
    }

    #[test]
    fn negative_offset_becomes_zero() {
        assert_eq!(PageRequest::new(-1, 10, "asc").offset(), 0);
        assert_eq!(PageRequest::new(42, 10, "asc").offset(), 42);
    }

    #[test]
    fn sort_direction_is_normalized() {
        assert_eq!(PageRequest::new(0, 10, "DESC").sort(), SortDirection::Desc);
        assert_eq!(PageRequest::new(0, 10, "asc").sort(), SortDirection::Asc);
        assert_eq!(PageRequest::new(0, 10, "").sort(), SortDirection::Asc);
        assert_eq!(PageRequest::new(0, 10, "random").sort(), SortDirection::Asc);
    }
}
