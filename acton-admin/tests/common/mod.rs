//! Shared fixtures: an article resource over an in-memory store

#![allow(dead_code)]

use acton_admin::prelude::*;
use serde_json::{json, Value};

pub struct ArticleResource;

impl Resource for ArticleResource {
    fn title(&self) -> &str {
        "Article"
    }

    fn model(&self) -> Model {
        Model::new("articles")
    }

    fn pagination(&self) -> Option<u64> {
        Some(2)
    }

    fn fields(&self, _request: &AdminRequest) -> Vec<Field> {
        vec![
            Text::labeled("id", "ID").only_on_index().into(),
            Text::labeled("title", "Title")
                .rules([Rule::Required, Rule::MaxLength(40)])
                .into(),
            Textarea::labeled("content", "Content").hide_from_index().into(),
            Select::labeled("status", "Status")
                .options([(1, "Published"), (0, "Draft")])
                .into(),
            Icon::labeled("icon", "Icon").hide_from_index().into(),
            Search::labeled("tags", "Tags")
                .options([("rust", "Rust"), ("web", "Web")])
                .mode("multiple")
                .hide_from_index()
                .into(),
            Datetime::labeled("created_at", "Created")
                .hide_when_creating()
                .hide_when_updating()
                .into(),
        ]
    }

    fn searches(&self, _request: &AdminRequest) -> Vec<SearchItem> {
        vec![
            SearchItem::like("title").label("Title"),
            SearchItem::not_in("status").label("Status"),
            SearchItem::between("created_at").label("Created"),
        ]
    }

    fn filters(&self, _request: &AdminRequest) -> Vec<Box<dyn QueryFilter>> {
        vec![Box::new(
            SelectFilter::new("status", "Status").options([(1, "Published"), (0, "Draft")]),
        )]
    }

    fn actions(&self, _request: &AdminRequest) -> Vec<Box<dyn ResourceAction>> {
        vec![
            Box::new(CreateLink),
            Box::new(EditLink),
            Box::new(Delete),
            Box::new(ChangeStatus::new("publish", "Publish", "status", 1)),
        ]
    }

    fn before_creating(&self, _request: &AdminRequest) -> Record {
        let mut values = Record::new();
        values.insert("status".into(), json!(1));
        values
    }

    fn before_saving(
        &self,
        _request: &AdminRequest,
        mut data: Record,
    ) -> Result<Record, AdminError> {
        if data.get("title").and_then(Value::as_str) == Some("forbidden") {
            return Err(AdminError::BadRequest("title is not allowed".into()));
        }
        data.entry("created_at")
            .or_insert_with(|| json!("2024-06-01 00:00:00"));
        Ok(data)
    }
}

/// Same rows as [`ArticleResource`], listed on one page
pub struct ArticleArchive;

impl Resource for ArticleArchive {
    fn title(&self) -> &str {
        "Archive"
    }

    fn model(&self) -> Model {
        Model::new("articles")
    }

    fn fields(&self, _request: &AdminRequest) -> Vec<Field> {
        vec![
            Text::labeled("id", "ID").only_on_index().into(),
            Text::labeled("title", "Title").into(),
        ]
    }
}

pub fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.seed(
        &Model::new("articles"),
        [
            json!({"title": "Hello Rust", "status": 1, "created_at": "2024-01-10 09:00:00"}),
            json!({"title": "Draft notes", "status": 0, "created_at": "2024-02-15 12:30:00"}),
            json!({"title": "Axum routing", "status": 1, "created_at": "2024-03-20 18:45:00"}),
        ],
    );
    store
}

pub fn state() -> AdminState {
    AdminState::new(seeded_store(), AdminConfig::default()).resource("article", ArticleResource)
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}
