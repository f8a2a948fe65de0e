#![allow(dead_code)]

use dexview_catalog::{CardSink, CatalogConfig, CatalogEntry, MinimalRecord, ScrollView};
use dexview_fetch::MockHttpClient;
use parking_lot::Mutex;
use serde_json::{Value, json};

pub const BASE: &str = "https://api.test/api/v2";

pub fn config() -> CatalogConfig {
    CatalogConfig::default().api_base(BASE)
}

pub fn catalog_url() -> String {
    config().catalog_url()
}

pub fn detail_url(name: &str) -> String {
    config().detail_url(name)
}

pub fn species_url(name: &str) -> String {
    config().species_url(name)
}

pub fn chain_url(id: u32) -> String {
    format!("{BASE}/evolution-chain/{id}/")
}

pub fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("mon-{i}")).collect()
}

pub fn pokemon_json(name: &str, id: u32, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "sprites": { "front_default": format!("https://img.test/{id}.png") },
        "types": [{ "slot": 1, "type": { "name": category, "url": "" } }],
        "stats": [{ "base_stat": 45, "stat": { "name": "hp", "url": "" } }],
        "moves": [{ "move": { "name": "tackle", "url": "" } }],
        "species": { "name": name, "url": format!("{BASE}/pokemon-species/{id}/") }
    })
}

pub fn list_json<S: AsRef<str>>(names: &[S]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({ "name": name.as_ref(), "url": format!("{BASE}/pokemon/{}/", i + 1) })
        })
        .collect();
    json!({ "count": names.len(), "next": null, "previous": null, "results": results })
}

pub fn species_json(chain_id: u32) -> Value {
    json!({ "evolution_chain": { "url": chain_url(chain_id) } })
}

/// `{chain: A -> B -> ...}` with a single branch at every stage.
pub fn linear_chain_json(names: &[&str]) -> Value {
    let mut link: Option<Value> = None;
    for name in names.iter().rev() {
        let evolves_to: Vec<Value> = link.take().into_iter().collect();
        link = Some(json!({ "species": { "name": name, "url": "" }, "evolves_to": evolves_to }));
    }
    json!({ "id": 1, "chain": link.unwrap_or(Value::Null) })
}

/// A client serving the catalog list and a detail record for every name.
pub fn catalog_client<S: AsRef<str>>(names: &[S]) -> MockHttpClient {
    let client = MockHttpClient::new().with_json(catalog_url(), list_json(names));
    for (i, name) in names.iter().enumerate() {
        let name = name.as_ref();
        client.insert_json(detail_url(name), pokemon_json(name, i as u32 + 1, "normal"));
    }
    client
}

pub fn entries<S: AsRef<str>>(names: &[S]) -> Vec<CatalogEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| CatalogEntry::new(name.as_ref(), format!("{BASE}/pokemon/{}/", i + 1)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Clear,
    Card(String),
    ShowLoading,
    HideLoading,
    ShowRetry,
    ArmSentinel,
    TearDown,
    FatalError(String),
}

/// Records every call the core makes into the presentation layer.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().clone()
    }

    pub fn cards(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Card(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &ViewEvent) -> usize {
        self.events.lock().iter().filter(|event| *event == wanted).count()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().push(event);
    }
}

impl CardSink for RecordingView {
    fn clear(&self) {
        self.push(ViewEvent::Clear);
    }

    fn render_card(&self, entry: &CatalogEntry, record: &MinimalRecord) {
        assert_eq!(entry.name, record.name, "card paired with the wrong record");
        self.push(ViewEvent::Card(entry.name.clone()));
    }
}

impl ScrollView for RecordingView {
    fn show_loading(&self) {
        self.push(ViewEvent::ShowLoading);
    }

    fn hide_loading(&self) {
        self.push(ViewEvent::HideLoading);
    }

    fn show_retry(&self) {
        self.push(ViewEvent::ShowRetry);
    }

    fn arm_sentinel(&self) {
        self.push(ViewEvent::ArmSentinel);
    }

    fn tear_down_trigger(&self) {
        self.push(ViewEvent::TearDown);
    }

    fn show_fatal_error(&self, message: &str) {
        self.push(ViewEvent::FatalError(message.to_string()));
    }
}
