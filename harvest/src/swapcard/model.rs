use serde_json::Value;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PersistedQuery {
    pub version: u8,
    #[serde(rename = "sha256Hash")]
    pub sha256_hash: String
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Extensions {
    #[serde(rename = "persistedQuery")]
    pub persisted_query: PersistedQuery
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListVariables {
    pub view_id: String,
    pub end_cursor: Option<String>
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailVariables {
    pub skip_meetings: bool,
    pub with_event: bool,
    pub with_hosted_buyer_view: bool,
    pub person_id: String,
    pub user_id: String,
    pub event_id: String,
    pub view_id: String
}

/// A single operation as sent over the wire, always inside a one-element batch.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<V> {
    pub operation_name: &'static str,
    pub variables: V,
    pub extensions: Extensions
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendeeRef {
    pub person_id: String,
    pub user_id: String
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool
}

impl PageInfo {
    /// Reads `pageInfo` from a people container, falling back to "no next page".
    pub fn of(people: &Value) -> PageInfo {
        people.get("pageInfo")
            .and_then(|info| PageInfo::from_value(info))
            .unwrap_or_default()
    }

    fn from_value(info: &Value) -> Option<PageInfo> {
        if info.is_null() {
            return None;
        }
        Some(PageInfo {
            end_cursor: info.get("endCursor").and_then(Value::as_str).map(String::from),
            has_next_page: info.get("hasNextPage").and_then(Value::as_bool).unwrap_or(false)
        })
    }
}
