//! Walks the attendee directory page by page and collects every detail record.
//!
//! A failing page ends the whole walk. A failing attendee only drops that
//! attendee from the result.
use failure::Error;
use serde_json::Value;
use std::path::PathBuf;

use config::HarvestConfig;
use pacing::{Pacer, FixedDelay};
use sink::OutputSink;
use swapcard::client::GraphqlClient;
use swapcard::errors::HarvestError;
use swapcard::model::{AttendeeRef, PageInfo};

#[derive(Debug)]
enum State {
    FetchingPage { cursor: Option<String> },
    FetchingDetail { people: Value },
    Done
}

#[derive(Debug, Default)]
pub struct HarvestReport {
    pub pages: u32,
    pub attendees: Vec<Value>,
    pub skipped: u32,
    pub failed: u32,
    pub output: Option<PathBuf>
}

/// Reads the identifiers of a list node, the node is unusable without both.
pub fn attendee_ref(node: &Value) -> Result<AttendeeRef, Error> {
    let field = |name: &'static str| {
        node.get(name)
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| HarvestError::Validation { field: name, node: node.to_string() })
    };
    Ok(AttendeeRef { person_id: field("id")?, user_id: field("userId")? })
}

fn people_container(mut data: Value) -> Option<Value> {
    data.get_mut("view")
        .and_then(|view| view.get_mut("people"))
        .filter(|people| people.is_object())
        .map(Value::take)
}

fn collect_details<D, P>(fetch_detail: &mut D, pacer: &mut P, attendee: &AttendeeRef, report: &mut HarvestReport)
    where D: FnMut(&AttendeeRef) -> Result<Value, Error>, P: Pacer {
    match fetch_detail(attendee) {
        Ok(details) => {
            report.attendees.push(details);
            info!("Fetched details for person {}", attendee.person_id);
            pacer.pause();
        }
        Err(e) => {
            report.failed += 1;
            warn!("Error fetching details for person {}: {}", attendee.person_id, e);
        }
    }
}

fn fetch_page_details<D, P>(fetch_detail: &mut D, pacer: &mut P, people: &Value, report: &mut HarvestReport)
    where D: FnMut(&AttendeeRef) -> Result<Value, Error>, P: Pacer {
    let nodes = people.get("nodes").and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[]);
    if nodes.is_empty() {
        info!("No attendees found in this page");
    }
    for node in nodes {
        match attendee_ref(node) {
            Ok(attendee) => collect_details(fetch_detail, pacer, &attendee, report),
            Err(e) => {
                report.skipped += 1;
                warn!("{}", e);
            }
        }
    }
}

/// Runs the pagination loop with the given fetch operations.
///
/// `probe`, when set, is fetched once before the first page.
pub fn harvest_attendees<L, D, P>(mut fetch_page: L, mut fetch_detail: D, pacer: &mut P, probe: Option<&AttendeeRef>) -> HarvestReport
    where L: FnMut(Option<&str>) -> Result<Value, Error>,
          D: FnMut(&AttendeeRef) -> Result<Value, Error>,
          P: Pacer {
    let mut report = HarvestReport::default();

    if let Some(attendee) = probe {
        info!("Testing person details query with person {}", attendee.person_id);
        collect_details(&mut fetch_detail, pacer, attendee, &mut report);
    }

    let mut state = State::FetchingPage { cursor: None };
    let mut cursor = None;
    loop {
        state = match state {
            State::FetchingPage { cursor: current } => {
                info!("Fetching page {}...", report.pages + 1);
                cursor = current;
                match fetch_page(cursor.as_ref().map(String::as_str)) {
                    Ok(data) => match people_container(data) {
                        Some(ref people) if !people.get("nodes").map_or(false, Value::is_array) => {
                            warn!("No 'nodes' found in people container");
                            State::Done
                        }
                        Some(people) => {
                            report.pages += 1;
                            State::FetchingDetail { people: people }
                        }
                        None => {
                            warn!("No 'people' found in response");
                            State::Done
                        }
                    },
                    Err(cause) => {
                        let e: Error = HarvestError::PageLoad { page: report.pages + 1, cause: cause }.into();
                        let chain: Vec<String> = e.iter_chain().map(|fail| fail.to_string()).collect();
                        error!("Failed to fetch attendees: {}", chain.join(": "));
                        State::Done
                    }
                }
            }
            State::FetchingDetail { people } => {
                fetch_page_details(&mut fetch_detail, pacer, &people, &mut report);
                let page_info = PageInfo::of(&people);
                if page_info.has_next_page {
                    State::FetchingPage { cursor: page_info.end_cursor }
                } else {
                    State::Done
                }
            }
            State::Done => break
        };
    }
    debug!("Pagination stopped after {} page(s), last cursor {:?}", report.pages, cursor);
    report
}

/// Writes the collected records as one artifact, nothing is written for an empty run.
pub fn persist_attendees(sink: &OutputSink, report: &mut HarvestReport) -> Result<(), Error> {
    if report.attendees.is_empty() {
        info!("No attendee data scraped.");
        return Ok(());
    }
    let path = sink.write_json_artifact("attendees", &report.attendees)?;
    info!("Scraped {} attendees. Data saved to {}", report.attendees.len(), path.display());
    report.output = Some(path);
    Ok(())
}

pub fn run(config: &HarvestConfig) -> Result<HarvestReport, Error> {
    let sink = OutputSink::new(config.output_dir.clone(), config.raw_capture);
    sink.ensure_directory()?;
    let client = GraphqlClient::new(config, &sink)?;
    let mut pacer = FixedDelay(config.detail_delay);

    let mut report = harvest_attendees(
        |cursor| client.fetch_attendee_page(cursor),
        |attendee| client.fetch_attendee_details(attendee),
        &mut pacer,
        config.probe.as_ref());
    if report.skipped > 0 || report.failed > 0 {
        info!("{} attendee(s) skipped for invalid data, {} detail request(s) failed", report.skipped, report.failed);
    }
    persist_attendees(&sink, &mut report)?;
    Ok(report)
}
