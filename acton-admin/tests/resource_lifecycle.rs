//! Resource lifecycle: index, create, edit, store, save and actions

mod common;

use acton_admin::prelude::*;
use common::{record, state, ArticleArchive, ArticleResource};
use serde_json::json;

fn page_json(page: &Page) -> serde_json::Value {
    serde_json::to_value(page).unwrap()
}

#[tokio::test]
async fn test_index_paginates_newest_first() {
    let state = state();
    let request = AdminRequest::new("/api/admin/article/index");

    let page = ArticleResource.index(&state, &request).await.unwrap();
    let table = page.content.as_table().unwrap();

    assert_eq!(table.key, "table");
    assert_eq!(table.title, "Article List");
    assert_eq!(table.tool_bar.as_ref().unwrap().title, "Article List");

    let pagination = table.pagination.unwrap();
    assert_eq!(pagination.current, 1);
    assert_eq!(pagination.page_size, 2);
    assert_eq!(pagination.total, 3);

    let ids: Vec<_> = table.datasource.iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, vec![json!(3), json!(2)]);
}

#[tokio::test]
async fn test_index_second_page_and_page_size() {
    let state = state();

    let request = AdminRequest::new("api/admin/article/index").with_param("current", "2");
    let page = ArticleResource.index(&state, &request).await.unwrap();
    let table = page.content.as_table().unwrap();
    assert_eq!(table.datasource.len(), 1);
    assert_eq!(table.datasource[0]["title"], "Hello Rust");

    let request = AdminRequest::new("api/admin/article/index").with_param("pageSize", "10");
    let page = ArticleResource.index(&state, &request).await.unwrap();
    assert_eq!(page.content.as_table().unwrap().datasource.len(), 3);
}

#[tokio::test]
async fn test_index_applies_searches() {
    let state = state();

    let request = AdminRequest::new("api/admin/article/index")
        .with_param("search", r#"{"title": "RUST"}"#);
    let page = ArticleResource.index(&state, &request).await.unwrap();
    let rows = &page.content.as_table().unwrap().datasource;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Hello Rust");

    let request = AdminRequest::new("api/admin/article/index")
        .with_param("search", r#"{"status": "1"}"#);
    let page = ArticleResource.index(&state, &request).await.unwrap();
    let rows = &page.content.as_table().unwrap().datasource;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Draft notes");

    let request = AdminRequest::new("api/admin/article/index").with_param(
        "search",
        r#"{"created_at": ["2024-02-01 00:00:00", "2024-12-31 23:59:59"]}"#,
    );
    let page = ArticleResource.index(&state, &request).await.unwrap();
    assert_eq!(page.content.as_table().unwrap().pagination.unwrap().total, 2);
}

#[tokio::test]
async fn test_index_applies_filters() {
    let state = state();
    let request = AdminRequest::new("api/admin/article/index")
        .with_param("filter", r#"{"status": 1}"#)
        .with_param("pageSize", "10");

    let page = ArticleResource.index(&state, &request).await.unwrap();
    let rows = &page.content.as_table().unwrap().datasource;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["status"] == 1));
}

#[tokio::test]
async fn test_index_filter_accepts_text_values() {
    let state = state();
    let request = AdminRequest::new("api/admin/article/index")
        .with_param("filter", r#"{"status": "1"}"#)
        .with_param("pageSize", "10");

    let page = ArticleResource.index(&state, &request).await.unwrap();
    let rows = &page.content.as_table().unwrap().datasource;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["status"] == 1));
}

#[tokio::test]
async fn test_index_without_pagination_lists_every_row() {
    let state = state();
    let request = AdminRequest::new("api/admin/archive/index").with_param("pageSize", "1");
    let json = page_json(&ArticleArchive.index(&state, &request).await.unwrap());
    let table = &json["content"];

    assert_eq!(table["datasource"].as_array().unwrap().len(), 3);
    assert_eq!(table["datasource"][0]["id"], 3);
    assert!(table.get("pagination").is_none());
    assert!(table.get("filters").is_none());
}

#[tokio::test]
async fn test_index_rejects_malformed_search() {
    let state = state();
    let request = AdminRequest::new("api/admin/article/index")
        .with_param("search", r#"{"created_at": "2024-01-01"}"#);

    let result = ArticleResource.index(&state, &request).await;
    assert!(matches!(result, Err(AdminError::BadRequest(_))));
}

#[tokio::test]
async fn test_index_table_layout() {
    let state = state();
    let request = AdminRequest::new("api/admin/article/index");
    let json = page_json(&ArticleResource.index(&state, &request).await.unwrap());
    let table = &json["content"];

    assert_eq!(json["component"], "page");
    assert_eq!(json["title"], "Article");
    assert_eq!(table["component"], "table");

    let columns: Vec<_> = table["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["dataIndex"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(columns, vec!["id", "title", "status", "created_at", "actions"]);
    assert_eq!(table["columns"][2]["valueType"], "select");
    assert_eq!(table["columns"][3]["valueType"], "dateTime");

    assert_eq!(
        table["toolBar"]["actions"][0]["href"],
        "/admin/article/create"
    );

    let batch: Vec<_> = table["batchActions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(batch, vec!["Delete", "Publish"]);

    let searches = table["searches"].as_array().unwrap();
    assert_eq!(searches.len(), 3);
    assert_eq!(searches[1]["operator"], "notIn");
    assert_eq!(searches[1]["placeholder"], "Select Status");
    assert_eq!(searches[1]["style"]["width"], 157);

    let filters = table["filters"].as_array().unwrap();
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0]["key"], "status");
    assert_eq!(filters[0]["name"], "Status");
    assert_eq!(filters[0]["options"][0]["label"], "Published");
}

#[tokio::test]
async fn test_create_page() {
    let state = state();
    let request = AdminRequest::new("/api/admin/article/create");
    let json = page_json(&ArticleResource.create(&state, &request).await.unwrap());
    let card = &json["content"];
    let form = &card["body"];

    assert_eq!(card["component"], "card");
    assert_eq!(card["title"], "Create Article");
    assert_eq!(card["headerBordered"], true);
    assert_eq!(card["extra"]["name"], "Back");
    assert_eq!(card["extra"]["showStyle"], "link");

    assert_eq!(form["component"], "form");
    assert_eq!(form["api"], "admin/article/store");
    assert_eq!(form["style"], json!({"marginTop": "30px"}));
    assert_eq!(form["initialValues"], json!({"status": 1}));

    let items: Vec<_> = form["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(items, vec!["title", "content", "status", "icon", "tags"]);

    let icon = &form["items"][3];
    assert_eq!(icon["component"], "icon");
    assert_eq!(icon["value"], 0);

    let tags = &form["items"][4];
    assert_eq!(tags["component"], "search");
    assert_eq!(tags["mode"], "multiple");
    assert_eq!(tags["defaultValue"], json!([]));

    let actions: Vec<_> = form["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["actionType"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(actions, vec!["reset", "submit", "back"]);
}

#[tokio::test]
async fn test_edit_page() {
    let state = state();
    let request = AdminRequest::new("/api/admin/article/edit").with_param("id", "2");
    let json = page_json(&ArticleResource.edit(&state, &request).await.unwrap());
    let card = &json["content"];

    assert_eq!(card["title"], "Edit Article");
    assert_eq!(card["body"]["api"], "admin/article/save");
    assert_eq!(card["body"]["initialValues"]["title"], "Draft notes");
}

#[tokio::test]
async fn test_edit_errors() {
    let state = state();

    let missing_id = AdminRequest::new("api/admin/article/edit");
    assert!(matches!(
        ArticleResource.edit(&state, &missing_id).await,
        Err(AdminError::BadRequest(_))
    ));

    let missing_row = AdminRequest::new("api/admin/article/edit").with_param("id", "404");
    assert!(matches!(
        ArticleResource.edit(&state, &missing_row).await,
        Err(AdminError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_store_creates_record() {
    let state = state();
    let request = AdminRequest::new("api/admin/article/store");
    let data = record(json!({
        "title": "Fresh post",
        "status": 0,
        "created_at": "1999-01-01 00:00:00",
        "unknown": "dropped",
    }));

    let result = ArticleResource.store(&state, &request, data).await.unwrap();
    assert!(result.is_success());
    assert_eq!(result.message, "Saved");
    assert_eq!(result.redirect.as_deref(), Some("/admin/article/index"));

    let saved = result.data.unwrap();
    assert_eq!(saved["id"], 4);
    assert_eq!(saved["title"], "Fresh post");
    // not a creation field, so before_saving filled it in
    assert_eq!(saved["created_at"], "2024-06-01 00:00:00");
    assert!(saved.get("unknown").is_none());
}

#[tokio::test]
async fn test_store_validation_and_hooks() {
    let state = state();
    let request = AdminRequest::new("api/admin/article/store");

    let too_long = record(json!({"title": "x".repeat(41)}));
    match ArticleResource.store(&state, &request, too_long).await {
        Err(AdminError::Validation(errors)) => {
            assert_eq!(errors.for_field("title")[0].code, "max_length");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let refused = record(json!({"title": "forbidden"}));
    assert!(matches!(
        ArticleResource.store(&state, &request, refused).await,
        Err(AdminError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_save_updates_record() {
    let state = state();
    let request = AdminRequest::new("api/admin/article/save").with_param("id", "1");
    let data = record(json!({"title": "Hello again", "status": 0}));

    let result = ArticleResource.save(&state, &request, data).await.unwrap();
    let saved = result.data.unwrap();
    assert_eq!(saved["id"], 1);
    assert_eq!(saved["title"], "Hello again");

    // id taken from the submitted primary key
    let request = AdminRequest::new("api/admin/article/save");
    let data = record(json!({"id": 2, "title": "Notes"}));
    let result = ArticleResource.save(&state, &request, data).await.unwrap();
    assert_eq!(result.data.unwrap()["title"], "Notes");

    let data = record(json!({"title": "Nobody"}));
    assert!(matches!(
        ArticleResource.save(&state, &request, data).await,
        Err(AdminError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_actions() {
    let state = state();
    let model = Model::new("articles");

    let publish = AdminRequest::new("api/admin/article/action/publish").with_param("id", "2");
    let result = ArticleResource
        .action(&state, &publish, "publish")
        .await
        .unwrap();
    assert!(result.is_success());
    assert_eq!(result.data.unwrap()["affected"], 1);
    assert_eq!(state.store().find(&model, "2").await.unwrap().unwrap()["status"], 1);

    let delete = AdminRequest::new("api/admin/article/action/delete").with_param("id", "1,3");
    let result = ArticleResource.action(&state, &delete, "delete").await.unwrap();
    assert_eq!(result.data.unwrap()["affected"], 2);
    assert!(state.store().find(&model, "1").await.unwrap().is_none());

    let unknown = ArticleResource.action(&state, &delete, "archive").await;
    assert!(matches!(unknown, Err(AdminError::UnknownAction(key)) if key == "archive"));
}
