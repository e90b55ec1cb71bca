/*
[INPUT]:  Collection and error payloads returned by the controller
[OUTPUT]: Generic paginated envelope and error body types
[POS]:    Data layer - response wrappers shared by every resource
[UPDATE]: When the collection envelope or error body format changes
*/

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One page of a collection response.
///
/// `count` is the total across all pages, not the length of `results`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub count: i32,
    pub next: Option<String>,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<T>,
}

impl<T> ApiResponse<T> {
    /// Single-page envelope around `results`.
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: i32::try_from(results.len()).unwrap_or(i32::MAX),
            next: None,
            results,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.next.as_deref().is_none_or(str::is_empty)
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            results: Vec::new(),
        }
    }
}

/// Error body the controller sends with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_always_emitted() {
        let empty: ApiResponse<String> = ApiResponse::default();
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"count":0}"#);
    }

    #[test]
    fn test_last_page_detection() {
        let mut page = ApiResponse::new(vec![1, 2]);
        assert!(page.is_last_page());
        page.next = Some(String::new());
        assert!(page.is_last_page());
        page.next = Some("https://ctrl/api/pool?page=2".to_string());
        assert!(!page.is_last_page());
    }

    #[derive(Debug, Deserialize)]
    struct Entry {
        id: u32,
    }

    fn decode_page<T: serde::de::DeserializeOwned>(body: &str) -> ApiResponse<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_decodes_results_without_default_bound() {
        let page: ApiResponse<Entry> = decode_page(r#"{"count": 1, "results": [{"id": 7}]}"#);
        assert_eq!(page.results[0].id, 7);

        let empty: ApiResponse<Entry> = decode_page(r#"{"count": 0}"#);
        assert!(empty.results.is_empty());
    }

    #[test]
    fn test_missing_count_is_rejected() {
        let err = serde_json::from_str::<ApiResponse<String>>(r#"{"results": ["a"]}"#);
        assert!(err.is_err());
    }
}
