use axum::Json;
use serde::Serialize;

/// Standard success envelope: `{success, data?, message?}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn data(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: Some(message.into()),
        })
    }
}

/// Paginated listing envelope: `{success, count, total, page, pages, data}`.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
    pub data: Vec<T>,
}

impl<T: Serialize> PagedResponse<T> {
    pub fn new(data: Vec<T>, total: i64, page: i64, limit: i64) -> Json<Self> {
        Json(Self {
            success: true,
            count: data.len(),
            total,
            page,
            pages: page_count(total, limit),
            data,
        })
    }
}

/// Unpaginated "my items" envelope: `{success, count, data}`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Json<Self> {
        Json(Self {
            success: true,
            count: data.len(),
            data,
        })
    }
}

pub fn default_page() -> i64 {
    1
}

pub fn default_limit() -> i64 {
    20
}

pub fn offset(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1) * limit.max(1)
}

pub fn page_count(total: i64, limit: i64) -> i64 {
    let limit = limit.max(1);
    (total + limit - 1) / limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(1, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(5, 0), 5);
    }

    #[test]
    fn offset_clamps_page_and_limit() {
        assert_eq!(offset(1, 20), 0);
        assert_eq!(offset(3, 20), 40);
        assert_eq!(offset(0, 20), 0);
        assert_eq!(offset(-5, 20), 0);
    }

    #[test]
    fn envelope_skips_absent_fields() {
        let Json(body) = ApiResponse::data(42);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"success":true,"data":42}"#);

        let Json(body) = ApiResponse::message("done");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"success":true,"message":"done"}"#);
    }

    #[test]
    fn paged_envelope_carries_counts() {
        let Json(body) = PagedResponse::new(vec![1, 2, 3], 43, 2, 20);
        assert_eq!(body.count, 3);
        assert_eq!(body.total, 43);
        assert_eq!(body.page, 2);
        assert_eq!(body.pages, 3);
    }
}
