pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Offset/limit window for listing endpoints.
///
/// Both listing paths share this type so the bounds (limit 1-100, default
/// 10, offset >= 0) are enforced in one place. Combined with id-ascending
/// ordering in the stores, repeated calls over an unchanging dataset page
/// without overlap or gaps.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("limit must be between 1 and {MAX_LIMIT}")]
    LimitOutOfRange,

    #[error("offset must not be negative")]
    NegativeOffset,
}

impl Page {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, PageError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(PageError::LimitOutOfRange);
        }

        let offset = offset.unwrap_or(0);
        if offset < 0 {
            return Err(PageError::NegativeOffset);
        }

        Ok(Self { limit, offset })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT, offset: 0 }
    }
}
