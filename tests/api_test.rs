//! End-to-end tests for the meeting REST controller: full CRUD lifecycle,
//! soft-delete semantics, query filtering, and the JSON content-type guard.

use actix_web::{App, test, web};
use serde_json::{Value, json};

use minicrm::handlers::api;

mod common;
use common::{admin_id, setup_test_pool};

macro_rules! init_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($pool.clone()))
                .configure(api::configure),
        )
        .await
    };
}

fn add_body(agenda: &str, create_by: i64) -> Value {
    json!({
        "agenda": agenda,
        "related": "None",
        "dateTime": "2099-01-01T10:00",
        "notes": "",
        "createBy": create_by,
    })
}

macro_rules! post_meeting {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/meeting/add")
            .set_json($body)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), 200, "add should answer 200");
        let created: Value = test::read_body_json(resp).await;
        created
    }};
}

// --- Tests ---

#[actix_rt::test]
async fn test_index_empty() {
    let (_dir, pool) = setup_test_pool();
    let app = init_app!(pool);

    for uri in ["/api/meeting", "/api/meeting/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }
}

#[actix_rt::test]
async fn test_add_and_view_roundtrip() {
    let (_dir, pool) = setup_test_pool();
    let admin = admin_id(&pool);
    let app = init_app!(pool);

    let created = post_meeting!(&app, &add_body("Standup", admin));
    assert_eq!(created["agenda"], "Standup");
    assert_eq!(created["related"], "None");
    assert_eq!(created["dateTime"], "2099-01-01T10:00");
    assert_eq!(created["deleted"], false);
    assert_eq!(created["createBy"]["id"], admin);
    assert!(created["createdDate"].as_str().map(|s| !s.is_empty()).unwrap_or(false));
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/meeting/view/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let viewed: Value = test::read_body_json(resp).await;
    assert_eq!(viewed, created);
}

#[actix_rt::test]
async fn test_add_missing_agenda_is_rejected() {
    let (_dir, pool) = setup_test_pool();
    let admin = admin_id(&pool);
    let app = init_app!(pool);

    let mut body = add_body("", admin);
    body["agenda"] = json!("");
    let req = test::TestRequest::post()
        .uri("/api/meeting/add")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["error"], "Failed to create meeting");
}

#[actix_rt::test]
async fn test_add_unknown_creator_is_rejected() {
    let (_dir, pool) = setup_test_pool();
    let app = init_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/meeting/add")
        .set_json(add_body("Standup", 99999))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_add_invalid_related_is_rejected() {
    let (_dir, pool) = setup_test_pool();
    let admin = admin_id(&pool);
    let app = init_app!(pool);

    let mut body = add_body("Standup", admin);
    body["related"] = json!("Account");
    let req = test::TestRequest::post()
        .uri("/api/meeting/add")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_add_unresolvable_attendee_is_rejected() {
    let (_dir, pool) = setup_test_pool();
    let admin = admin_id(&pool);
    let app = init_app!(pool);

    let mut body = add_body("Standup", admin);
    body["related"] = json!("Contact");
    body["attendes"] = json!([99999]);
    let req = test::TestRequest::post()
        .uri("/api/meeting/add")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_view_unknown_id_is_404() {
    let (_dir, pool) = setup_test_pool();
    let app = init_app!(pool);

    let req = test::TestRequest::get().uri("/api/meeting/view/99999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_delete_one_soft_deletes() {
    let (_dir, pool) = setup_test_pool();
    let admin = admin_id(&pool);
    let app = init_app!(pool);

    let kept = post_meeting!(&app, &add_body("Keep", admin));
    let gone = post_meeting!(&app, &add_body("Drop", admin));
    let gone_id = gone["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/meeting/delete/{gone_id}"))
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Meeting deleted successfully");
    // Pre-update record: still reported as not deleted.
    assert_eq!(body["meeting"]["agenda"], "Drop");
    assert_eq!(body["meeting"]["deleted"], false);

    // List excludes the flagged record.
    let req = test::TestRequest::get().uri("/api/meeting/").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = list.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![kept["id"].as_i64().unwrap()]);

    // But view-by-id still resolves it — soft delete, not hard delete.
    let req = test::TestRequest::get()
        .uri(&format!("/api/meeting/view/{gone_id}"))
        .to_request();
    let viewed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(viewed["deleted"], true);
}

#[actix_rt::test]
async fn test_delete_unknown_id_still_answers_200() {
    let (_dir, pool) = setup_test_pool();
    let app = init_app!(pool);

    let req = test::TestRequest::delete()
        .uri("/api/meeting/delete/99999")
        .insert_header(("content-type", "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["meeting"].is_null());
}

#[actix_rt::test]
async fn test_delete_many_flags_exact_set() {
    let (_dir, pool) = setup_test_pool();
    let admin = admin_id(&pool);
    let app = init_app!(pool);

    let m1 = post_meeting!(&app, &add_body("One", admin))["id"].as_i64().unwrap();
    let m2 = post_meeting!(&app, &add_body("Two", admin))["id"].as_i64().unwrap();
    let m3 = post_meeting!(&app, &add_body("Three", admin))["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/meeting/deleteMany")
        .set_json(json!([m1, m3]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Meetings deleted successfully");
    assert_eq!(body["modified"], 2);

    let req = test::TestRequest::get().uri("/api/meeting/").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = list.as_array().unwrap().iter().map(|m| m["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![m2]);
}

#[actix_rt::test]
async fn test_index_filters_by_query_params() {
    let (_dir, pool) = setup_test_pool();
    let admin = admin_id(&pool);
    let app = init_app!(pool);

    post_meeting!(&app, &add_body("Standup", admin));
    post_meeting!(&app, &add_body("Retro", admin));

    let req = test::TestRequest::get().uri("/api/meeting/?agenda=Standup").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["agenda"], "Standup");

    // deleted=true cannot be smuggled in through the query.
    let req = test::TestRequest::get().uri("/api/meeting/?deleted=true").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_mutations_require_json_content_type() {
    let (_dir, pool) = setup_test_pool();
    let app = init_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/meeting/deleteMany")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload("ids=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::delete().uri("/api/meeting/delete/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
