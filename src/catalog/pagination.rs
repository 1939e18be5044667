use crate::api::PageRequest;

/// Number of rows to skip for the 1-based `page`.
///
/// Page 0 is treated as page 1.
pub fn skip_for(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Total number of pages needed for `total` rows.
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

pub fn page_request(page: u64, page_size: u64) -> PageRequest {
    PageRequest {
        limit: page_size,
        skip: skip_for(page, page_size),
    }
}
