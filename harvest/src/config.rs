use failure::Error;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use pacing::DEFAULT_DETAIL_DELAY;
use sink::RawCapture;
use swapcard::SWAPCARD_GRAPHQL_URL;
use swapcard::errors::HarvestError;
use swapcard::model::AttendeeRef;

pub const DEFAULT_OUTPUT_DIR: &'static str = "swapcard_data";

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub endpoint: String,
    pub auth_token: String,
    pub view_id: String,
    pub event_id: String,
    pub output_dir: PathBuf,
    pub list_query_hash: String,
    pub detail_query_hash: String,
    pub detail_delay: Duration,
    pub raw_capture: RawCapture,
    /// Single attendee fetched before pagination starts, to check the detail query.
    pub probe: Option<AttendeeRef>
}

fn required<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str) -> Result<String, Error> {
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(HarvestError::MissingSetting { name: name.to_string() }.into())
}

fn invalid(name: &str, value: &str) -> Error {
    HarvestError::InvalidSetting { name: name.to_string(), value: value.to_string() }.into()
}

fn detail_delay<F: Fn(&str) -> Option<String>>(lookup: &F) -> Result<Duration, Error> {
    match lookup("SWAPCARD_DETAIL_DELAY_MS") {
        Some(value) => value.trim().parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| invalid("SWAPCARD_DETAIL_DELAY_MS", &value)),
        None => Ok(DEFAULT_DETAIL_DELAY)
    }
}

fn probe<F: Fn(&str) -> Option<String>>(lookup: &F) -> Result<Option<AttendeeRef>, Error> {
    match (lookup("SWAPCARD_PROBE_PERSON_ID"), lookup("SWAPCARD_PROBE_USER_ID")) {
        (Some(person_id), Some(user_id)) => Ok(Some(AttendeeRef { person_id: person_id, user_id: user_id })),
        (None, None) => Ok(None),
        (Some(person_id), None) => Err(invalid("SWAPCARD_PROBE_PERSON_ID", &person_id)),
        (None, Some(user_id)) => Err(invalid("SWAPCARD_PROBE_USER_ID", &user_id))
    }
}

impl HarvestConfig {
    pub fn from_env() -> Result<HarvestConfig, Error> {
        HarvestConfig::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<HarvestConfig, Error> {
        let raw_capture = match lookup("SWAPCARD_RAW_CAPTURE") {
            Some(value) => value.parse::<RawCapture>()?,
            None => RawCapture::Keep
        };
        Ok(HarvestConfig {
            endpoint: lookup("SWAPCARD_ENDPOINT").unwrap_or(SWAPCARD_GRAPHQL_URL.to_string()),
            auth_token: required(&lookup, "SWAPCARD_TOKEN")?,
            view_id: required(&lookup, "SWAPCARD_VIEW_ID")?,
            event_id: required(&lookup, "SWAPCARD_EVENT_ID")?,
            output_dir: PathBuf::from(lookup("SWAPCARD_OUTPUT_DIR").unwrap_or(DEFAULT_OUTPUT_DIR.to_string())),
            list_query_hash: required(&lookup, "SWAPCARD_LIST_QUERY_HASH")?,
            detail_query_hash: required(&lookup, "SWAPCARD_DETAIL_QUERY_HASH")?,
            detail_delay: detail_delay(&lookup)?,
            raw_capture: raw_capture,
            probe: probe(&lookup)?
        })
    }
}
