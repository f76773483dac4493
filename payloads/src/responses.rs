use serde::{Deserialize, Serialize};

/// Returned by `admin/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginToken {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    #[serde(default)]
    pub message: String,
}

/// One page of a collection, as returned for `?page=&limit=` requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl<T> Paged<T> {
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VisitorCount {
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_total_pages_rounds_up() {
        let paged: Paged<u8> = Paged {
            data: vec![],
            total: 10,
            page: 1,
            limit: 9,
        };
        assert_eq!(paged.total_pages(), 2);
        assert!(paged.has_next());
        assert!(!paged.has_previous());
    }

    #[test]
    fn empty_page_has_no_pages() {
        let paged: Paged<u8> = Paged {
            data: vec![],
            total: 0,
            page: 1,
            limit: 9,
        };
        assert_eq!(paged.total_pages(), 0);
        assert!(!paged.has_next());
    }
}
