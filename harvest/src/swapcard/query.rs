use super::model::{Envelope, Extensions, PersistedQuery, ListVariables, DetailVariables};

pub const LIST_OPERATION: &'static str = "EventPeopleListViewConnectionQuery";
pub const DETAIL_OPERATION: &'static str = "EventPersonDetailsQuery";
pub const PERSISTED_QUERY_VERSION: u8 = 1;

fn persisted(hash: &str) -> Extensions {
    Extensions {
        persisted_query: PersistedQuery { version: PERSISTED_QUERY_VERSION, sha256_hash: hash.to_owned() }
    }
}

pub fn build_list_request(view_id: &str, end_cursor: Option<&str>, hash: &str) -> Envelope<ListVariables> {
    Envelope {
        operation_name: LIST_OPERATION,
        variables: ListVariables {
            view_id: view_id.to_owned(),
            end_cursor: end_cursor.map(String::from)
        },
        extensions: persisted(hash)
    }
}

pub fn build_detail_request(person_id: &str, user_id: &str, event_id: &str, hash: &str) -> Envelope<DetailVariables> {
    Envelope {
        operation_name: DETAIL_OPERATION,
        variables: DetailVariables {
            skip_meetings: false,
            with_event: true,
            with_hosted_buyer_view: false,
            person_id: person_id.to_owned(),
            user_id: user_id.to_owned(),
            event_id: event_id.to_owned(),
            view_id: String::new()
        },
        extensions: persisted(hash)
    }
}
