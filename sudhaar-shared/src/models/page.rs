use serde::{Deserialize, Serialize};

/// A list endpoint response. Paginated viewsets wrap results in a page
/// object while nested actions return a bare array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged {
        #[serde(default)]
        count: Option<u64>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    /// The records, whichever shape they arrived in.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged { results, .. } | Self::Bare(results) => results,
        }
    }

    /// Total count reported by the server, or the number of records received.
    #[must_use]
    pub fn total(&self) -> u64 {
        match self {
            Self::Paged {
                count: Some(count), ..
            } => *count,
            Self::Paged { results, .. } | Self::Bare(results) => results.len() as u64,
        }
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self::Bare(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_paged_and_bare_shapes() {
        let paged: ListResponse<i32> =
            serde_json::from_str(r#"{"count": 10, "next": null, "results": [1, 2]}"#).unwrap();
        assert_eq!(paged.total(), 10);
        assert_eq!(paged.into_items(), vec![1, 2]);

        let bare: ListResponse<i32> = serde_json::from_str("[3, 4, 5]").unwrap();
        assert_eq!(bare.total(), 3);
        assert_eq!(bare.into_items(), vec![3, 4, 5]);
    }

    #[test]
    fn paged_without_count_uses_length() {
        let paged: ListResponse<i32> = serde_json::from_str(r#"{"results": [7]}"#).unwrap();
        assert_eq!(paged.total(), 1);
    }
}
