mod common;

use actix_web::http::{StatusCode, header};
use actix_web::test;
use serde_json::{Value, json};

use common::{class, memory_storage, student, subject, teacher};
use school_admin_backend::models::permissions::requests::GrantPermissionRequest;

async fn body_json(resp: actix_web::dev::ServiceResponse) -> Value {
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_bulk_rooms_without_valid_entries() {
    let (storage, _dir) = memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/rooms/bulk")
        .set_json(json!([{"roomName": "  "}, {}]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "No valid rooms found in the CSV.");

    let req = test::TestRequest::post()
        .uri("/api/rooms/bulk")
        .set_json(json!([{"roomName": "LT-1"}, {"roomName": ""}, {"roomName": "LT-2"}]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["inserted"], 2);
    assert_eq!(body["data"]["skipped"], 1);
}

#[actix_web::test]
async fn test_delete_missing_room() {
    let (storage, _dir) = memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::delete().uri("/api/rooms/77").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Room not found");

    let req = test::TestRequest::delete().uri("/api/rooms/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_assign_subjects_rejects_non_array() {
    let (storage, _dir) = memory_storage().await;
    let cse = class(&storage, "CSE", vec![]).await;
    let app = test_app!(storage);

    let req = test::TestRequest::put()
        .uri(&format!("/api/classes/{}/assign-subjects", cse.id))
        .set_json(json!({"subjects": "MA101"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "Invalid input. Subjects should be an array of IDs."
    );

    let req = test::TestRequest::put()
        .uri("/api/classes/404/assign-subjects")
        .set_json(json!({"subjects": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_schedule_round_trip() {
    let (storage, _dir) = memory_storage().await;
    let cse = class(&storage, "CSE", vec![]).await;
    let app = test_app!(storage);

    let schedule = json!({"tuesday": ["MA101", "PH101"]});
    let req = test::TestRequest::post()
        .uri(&format!("/api/class/{}/schedule", cse.id))
        .set_json(&schedule)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"]["schedule"], schedule);

    let req = test::TestRequest::get()
        .uri(&format!("/api/class/{}/schedule", cse.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(body_json(resp).await["data"], schedule);

    let req = test::TestRequest::get()
        .uri("/api/class/404/schedule")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Class not found");
}

#[actix_web::test]
async fn test_teacher_permissions_require_both_params() {
    let (storage, _dir) = memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::get()
        .uri("/permissions?classId=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Missing classId or teacherId");
}

#[actix_web::test]
async fn test_login_flows() {
    let (storage, _dir) = memory_storage().await;
    teacher(&storage, "Tarun Sharma", Some("tsharma")).await;
    let app = test_app!(storage);

    for (username, role) in [("tsharma", "teacher"), ("orphan", "teacher")] {
        let req = test::TestRequest::post()
            .uri("/api/users/accounts")
            .set_json(json!({"username": username, "password": "pw-123", "role": role}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // 重复创建
    let req = test::TestRequest::post()
        .uri("/api/users/accounts")
        .set_json(json!({"username": "tsharma", "password": "pw-123", "role": "teacher"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "User with this username already exists"
    );

    let login = |username: &str, password: &str| {
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({"username": username, "password": password}))
            .to_request()
    };

    let resp = test::call_service(&app, login("tsharma", "pw-123")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["role"], "teacher");
    assert_eq!(body["data"]["facultyName"], "Tarun Sharma");
    assert!(body["data"].get("passwordHash").is_none());

    let resp = test::call_service(&app, login("tsharma", "wrong")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Invalid password");

    let resp = test::call_service(&app, login("nobody", "pw-123")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "User not found");

    let resp = test::call_service(&app, login("orphan", "pw-123")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Teacher data not found");
}

#[actix_web::test]
async fn test_bulk_accounts_reject_admin_role() {
    let (storage, _dir) = memory_storage().await;
    let app = test_app!(storage.clone());

    let req = test::TestRequest::post()
        .uri("/api/users/accounts/create-bulk-users")
        .set_json(json!([
            {"username": "0801CS211001", "password": "pw", "role": "student"},
            {"username": "boss1", "password": "pw", "role": "admin"}
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["message"], "Invalid role for user: boss1");
    assert_eq!(storage.count_users().await.unwrap(), 0);
}

#[actix_web::test]
async fn test_announcement_validation_and_listing() {
    let (storage, _dir) = memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/announcements")
        .set_json(json!({"text": "Holiday", "postedBy": "admin"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await["message"],
        "Text, postedBy, and expiresAt are required"
    );

    let req = test::TestRequest::post()
        .uri("/api/announcements")
        .set_json(json!({"text": "Holiday", "postedBy": "admin", "expiresAt": "2999-01-01"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/api/announcements").to_request();
    let resp = test::call_service(&app, req).await;
    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn test_marks_endpoints() {
    let (storage, _dir) = memory_storage().await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/upload-marks")
        .set_json(json!([]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/upload-marks")
        .set_json(json!([{
            "teacherId": 1, "studentId": 1, "classId": 1, "subjectId": 1,
            "exam": "MST_I", "marks": 25, "maxMarks": 20
        }]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/marks/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["message"], "Marks not found");
}

#[actix_web::test]
async fn test_marks_upload_requires_permission_then_updates_in_place() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;
    let sharma = teacher(&storage, "Tarun Sharma", None).await;
    let pupil = student(&storage, "0801CS211001", cse.id).await;
    let app = test_app!(storage.clone());

    let entry = |marks: u32| {
        json!([{
            "teacherId": sharma.id, "studentId": pupil.id, "classId": cse.id,
            "subjectId": math.id, "exam": "MST_I", "marks": marks, "maxMarks": 20
        }])
    };

    // 未授权
    let req = test::TestRequest::post()
        .uri("/api/upload-marks")
        .set_json(entry(18))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(storage.get_marks_by_student(pupil.id).await.unwrap().is_none());

    // 权限被显式拒绝也不能上传
    storage
        .grant_permissions(vec![GrantPermissionRequest {
            teacher_id: sharma.id,
            class_id: cse.id,
            subject_id: math.id,
            have_permission: false,
        }])
        .await
        .unwrap();
    let req = test::TestRequest::post()
        .uri("/api/upload-marks")
        .set_json(entry(18))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    storage
        .grant_permissions(vec![GrantPermissionRequest {
            teacher_id: sharma.id,
            class_id: cse.id,
            subject_id: math.id,
            have_permission: true,
        }])
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/api/upload-marks")
        .set_json(entry(18))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["inserted"], 1);
    assert_eq!(body["data"]["updated"], 0);

    let req = test::TestRequest::post()
        .uri("/api/upload-marks")
        .set_json(entry(19))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["inserted"], 0);
    assert_eq!(body["data"]["updated"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/marks/{}", pupil.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let mst_i = body["data"]["grades"]["MST_I"].as_array().unwrap();
    assert_eq!(mst_i.len(), 1);
    assert_eq!(mst_i[0]["marks"], 19.0);
}

#[actix_web::test]
async fn test_marks_upload_for_another_class_is_rejected() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;
    let ece = class(&storage, "ECE", vec![math.id]).await;
    let sharma = teacher(&storage, "Tarun Sharma", None).await;
    let pupil = student(&storage, "0801CS211001", cse.id).await;
    storage
        .grant_permissions(vec![
            GrantPermissionRequest {
                teacher_id: sharma.id,
                class_id: cse.id,
                subject_id: math.id,
                have_permission: true,
            },
            GrantPermissionRequest {
                teacher_id: sharma.id,
                class_id: ece.id,
                subject_id: math.id,
                have_permission: true,
            },
        ])
        .await
        .unwrap();
    let app = test_app!(storage.clone());

    let upload = |class_id: i64, exam: &str| {
        test::TestRequest::post()
            .uri("/api/upload-marks")
            .set_json(json!([{
                "teacherId": sharma.id, "studentId": pupil.id, "classId": class_id,
                "subjectId": math.id, "exam": exam, "marks": 15, "maxMarks": 20
            }]))
            .to_request()
    };

    let resp = test::call_service(&app, upload(cse.id, "MST_I")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, upload(ece.id, "MST_II")).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let marks = storage.get_marks_by_student(pupil.id).await.unwrap().unwrap();
    assert_eq!(marks.class_id, cse.id);
    assert!(marks.grades.mst_ii.is_empty());
}

#[actix_web::test]
async fn test_permission_listing_over_http() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let physics = subject(&storage, "PH101", "Physics").await;
    let cse = class(&storage, "CSE", vec![math.id, physics.id]).await;
    let sharma = teacher(&storage, "Tarun Sharma", None).await;
    let app = test_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/permissions")
        .set_json(json!([
            {"teacherId": sharma.id, "classId": cse.id, "subjectId": math.id, "havePermission": true},
            {"teacherId": sharma.id, "classId": cse.id, "subjectId": physics.id, "havePermission": false}
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // 只给 classId 时返回全部记录
    let req = test::TestRequest::get()
        .uri(&format!("/api/permissions?classId={}", cse.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"].as_array().map(Vec::len), Some(2));

    // 同时给出 classId 与 teacherId 时只返回已授权记录
    for uri in ["/api/permissions", "/permissions"] {
        let req = test::TestRequest::get()
            .uri(&format!("{uri}?classId={}&teacherId={}", cse.id, sharma.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let granted = body["data"].as_array().unwrap();
        assert_eq!(granted.len(), 1);
        assert_eq!(granted[0]["subjectId"], math.id);
        assert_eq!(granted[0]["havePermission"], true);
        assert_eq!(granted[0]["subject"]["subjectCode"], "MA101");
    }
}

const BOUNDARY: &str = "----school-admin-test";

fn multipart_body(fields: &[(&str, &str)], file_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(uri: &str, body: Vec<u8>) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

#[actix_web::test]
async fn test_material_upload_is_gated_by_permission() {
    let (storage, upload_dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;
    let sharma = teacher(&storage, "Tarun Sharma", None).await;
    let app = test_app!(storage.clone());

    let class_id = cse.id.to_string();
    let teacher_id = sharma.id.to_string();
    let subject_id = math.id.to_string();
    let fields = [
        ("classId", class_id.as_str()),
        ("teacherId", teacher_id.as_str()),
        ("subjectId", subject_id.as_str()),
        ("title", "Unit 1 notes"),
    ];
    let content = b"%PDF-1.4 unit one";

    // 未授权
    let resp = test::call_service(
        &app,
        upload_request(
            "/api/materials/upload",
            multipart_body(&fields, "unit1.pdf", content),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(std::fs::read_dir(&upload_dir).unwrap().count(), 0);

    storage
        .grant_permissions(vec![GrantPermissionRequest {
            teacher_id: sharma.id,
            class_id: cse.id,
            subject_id: math.id,
            have_permission: true,
        }])
        .await
        .unwrap();

    // 扩展名不允许
    let resp = test::call_service(
        &app,
        upload_request(
            "/api/materials/upload",
            multipart_body(&fields, "unit1.exe", content),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = test::call_service(
        &app,
        upload_request(
            "/api/materials/upload",
            multipart_body(&fields, "unit1.pdf", content),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["fileName"], "unit1.pdf");
    assert_eq!(body["data"]["fileSize"], content.len());

    let req = test::TestRequest::get()
        .uri(&format!("/api/materials/{id}/download"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..], &content[..]);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/materials/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(std::fs::read_dir(&upload_dir).unwrap().count(), 0);

    let _ = std::fs::remove_dir_all(&upload_dir);
}
