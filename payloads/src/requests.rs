use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Adds another administrator account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// First step of the password reset flow: send a one-time code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerifyOtp {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResetPassword {
    pub email: String,
    pub password: String,
}

/// Server-side paging for collection endpoints (`?page=&limit=`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
    /// Only return items with this status, e.g. `"published"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PageQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Query string appended to the collection path.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.limit);
        if let Some(status) = &self.status {
            query.push_str("&status=");
            query.push_str(status);
        }
        query
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1, crate::PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_clamps_to_first_page() {
        let query = PageQuery::new(0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 1);
    }

    #[test]
    fn page_query_string_includes_status_when_set() {
        assert_eq!(PageQuery::new(2, 9).to_query_string(), "page=2&limit=9");
        assert_eq!(
            PageQuery::new(1, 6).with_status("published").to_query_string(),
            "page=1&limit=6&status=published"
        );
    }
}
