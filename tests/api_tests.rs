pub mod common;

pub use common::TestContext;
use pretty_assertions::assert_eq;
use satellite_service::{
    SatErr,
    api::{self, Response, StatusCode},
    tests_cfg::StoreOp,
};
use serde_json::{Value as Json, json};

fn invalid_properties() -> Response {
    Response {
        status: StatusCode::BAD_REQUEST,
        body: Some(json!({ "message": "Invalid properties provided." })),
    }
}

fn not_found() -> Response {
    Response {
        status: StatusCode::NOT_FOUND,
        body: Some(json!({ "message": "Satellite not found." })),
    }
}

fn first_satellite(ctx: &TestContext) -> Json {
    api::get_by_id(&ctx.service, "1")
        .body
        .expect("satellite 1 is seeded")
}

#[test]
fn list_returns_every_satellite() {
    let ctx = TestContext::new("list_returns_every_satellite");
    let res = api::list(&ctx.service);

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        Some(json!([
            { "id": 1, "name": "Sentinel-1A", "lat": 45.5, "lon": -122.25, "status": "nominal" },
            { "id": 2, "name": "Landsat 8", "lat": -12.0, "lon": 33.75, "status": "degraded" },
        ]))
    );
}

#[test]
fn create_assigns_next_id() {
    let mut ctx = TestContext::new("create_assigns_next_id");
    let res = api::create(
        &mut ctx.service,
        json!({ "name": "Sat Name", "lat": 1234, "lon": 1234, "status": "Example Satus" }),
    );

    assert_eq!(
        res,
        Response {
            status: StatusCode::OK,
            body: Some(json!({
                "id": 3,
                "lat": 1234.0,
                "lon": 1234.0,
                "name": "Sat Name",
                "status": "Example Satus",
            })),
        }
    );
}

#[test]
fn create_ignores_client_id() {
    let mut ctx = TestContext::new("create_ignores_client_id");
    let res = api::create(
        &mut ctx.service,
        json!({ "id": "not even a number", "name": "A", "lat": 1, "lon": 2, "status": "ok" }),
    );

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.and_then(|b| b.get("id").cloned()), Some(json!(3)));
}

#[test]
fn create_missing_fields_is_bad_request() {
    let mut ctx = TestContext::new("create_missing_fields_is_bad_request");

    assert_eq!(api::create(&mut ctx.service, json!({})), invalid_properties());
    assert_eq!(
        api::create(&mut ctx.service, json!({ "name": "A", "lat": "1", "lon": 2, "status": "ok" })),
        invalid_properties()
    );
    assert_eq!(ctx.service.get_all().len(), 2);
}

#[test]
fn create_store_fault_is_server_error() {
    let mut ctx = TestContext::faulty("create_store_fault_is_server_error", |store| {
        store.fail_once(StoreOp::AddOne, SatErr::InternalFault("boom".to_owned()))
    });
    let res = api::create(
        &mut ctx.service,
        json!({ "name": "Sat Name", "lat": 1234, "lon": 1234, "status": "Example Satus" }),
    );

    assert_eq!(res, Response::internal_error());
    assert_eq!(res.status.as_u16(), 500);
    assert_eq!(ctx.service.get_all().len(), 2);
}

#[test]
fn patch_renames_satellite() {
    let mut ctx = TestContext::new("patch_renames_satellite");
    let mut body = first_satellite(&ctx);
    body["name"] = json!("New Name");

    let res = api::patch(&mut ctx.service, body.clone());

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, Some(body.clone()));
    assert_eq!(first_satellite(&ctx), body);
}

#[test]
fn patch_huge_id_is_bad_request() {
    let mut ctx = TestContext::new("patch_huge_id_is_bad_request");
    let mut body = first_satellite(&ctx);
    body["id"] = json!(1010101010101010101010.0_f64);

    assert_eq!(api::patch(&mut ctx.service, body), invalid_properties());
}

#[test]
fn patch_accepts_integral_float_id() {
    let mut ctx = TestContext::new("patch_accepts_integral_float_id");
    let body: Json = serde_json::from_str(
        r#"{"id": 1.0, "name": "New", "lat": 1, "lon": 2, "status": "ok"}"#,
    )
    .expect("valid json");

    let res = api::patch(&mut ctx.service, body);

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        Some(json!({ "id": 1, "name": "New", "lat": 1.0, "lon": 2.0, "status": "ok" }))
    );
}

#[test]
fn patch_fractional_id_is_bad_request() {
    let mut ctx = TestContext::new("patch_fractional_id_is_bad_request");
    let mut body = first_satellite(&ctx);
    body["id"] = json!(1.5);

    assert_eq!(api::patch(&mut ctx.service, body), invalid_properties());
}

#[test]
fn patch_without_fields_is_bad_request() {
    let mut ctx = TestContext::new("patch_without_fields_is_bad_request");

    assert_eq!(api::patch(&mut ctx.service, json!({ "id": 1 })), invalid_properties());
    assert_eq!(
        api::patch(&mut ctx.service, json!({ "name": "A", "lat": 1, "lon": 2, "status": "ok" })),
        invalid_properties()
    );
}

#[test]
fn patch_unknown_id_is_bad_request() {
    let mut ctx = TestContext::new("patch_unknown_id_is_bad_request");
    let mut body = first_satellite(&ctx);
    body["id"] = json!(999);

    assert_eq!(api::patch(&mut ctx.service, body), invalid_properties());
}

#[test]
fn patch_store_fault_is_server_error() {
    let mut ctx = TestContext::faulty("patch_store_fault_is_server_error", |store| {
        store.fail_once(StoreOp::PatchOne, SatErr::InternalFault("boom".to_owned()))
    });
    let mut body = api::get_by_id(&ctx.service, "1")
        .body
        .expect("satellite 1 is seeded");
    body["name"] = json!("New Name");

    assert_eq!(api::patch(&mut ctx.service, body), Response::internal_error());
}

#[test]
fn patch_vanished_record_is_not_found() {
    let mut ctx = TestContext::faulty("patch_vanished_record_is_not_found", |store| {
        store.fail_once(
            StoreOp::PatchOne,
            SatErr::NotFound("deleted behind our back".to_owned()),
        )
    });
    let body = api::get_by_id(&ctx.service, "2")
        .body
        .expect("satellite 2 is seeded");

    assert_eq!(api::patch(&mut ctx.service, body), not_found());
}

#[test]
fn get_by_id_returns_record() {
    let ctx = TestContext::new("get_by_id_returns_record");

    assert_eq!(
        api::get_by_id(&ctx.service, "2"),
        Response {
            status: StatusCode::OK,
            body: Some(
                json!({ "id": 2, "name": "Landsat 8", "lat": -12.0, "lon": 33.75, "status": "degraded" })
            ),
        }
    );
}

#[test]
fn get_by_id_unknown_is_not_found() {
    let ctx = TestContext::new("get_by_id_unknown_is_not_found");

    assert_eq!(api::get_by_id(&ctx.service, "10101010"), not_found());
}

#[test]
fn get_by_id_store_fault_is_server_error() {
    let ctx = TestContext::faulty("get_by_id_store_fault_is_server_error", |store| {
        store.fail_once(StoreOp::GetOne, SatErr::InternalFault("boom".to_owned()))
    });

    assert_eq!(api::get_by_id(&ctx.service, "1"), Response::internal_error());
    assert_eq!(api::get_by_id(&ctx.service, "1").status, StatusCode::OK);
}

#[test]
fn model_is_served() {
    let res = api::model();

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body.as_ref().and_then(|b| b.get("name")),
        Some(&json!("Sat Name"))
    );
}
