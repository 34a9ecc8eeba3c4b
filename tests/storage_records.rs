mod common;

use chrono::{Duration, Utc};
use common::{class, memory_storage, student, subject, teacher};
use school_admin_backend::models::{
    announcements::requests::NewAnnouncement,
    marks::{entities::ExamType, requests::MarkEntryRequest},
    permissions::requests::GrantPermissionRequest,
    users::{entities::UserRole, requests::NewAccount},
};

fn grant(teacher_id: i64, class_id: i64, subject_id: i64, granted: bool) -> GrantPermissionRequest {
    GrantPermissionRequest {
        teacher_id,
        class_id,
        subject_id,
        have_permission: granted,
    }
}

fn mark(student_id: i64, class_id: i64, subject_id: i64, marks: f64) -> MarkEntryRequest {
    MarkEntryRequest {
        teacher_id: 1,
        student_id,
        class_id,
        subject_id,
        exam: ExamType::MstI,
        marks,
        max_marks: 20.0,
    }
}

#[tokio::test]
async fn test_permission_read_paths() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let physics = subject(&storage, "PH101", "Physics").await;
    let cse = class(&storage, "CSE", vec![math.id, physics.id]).await;
    let sharma = teacher(&storage, "Tarun Sharma", None).await;

    let created = storage
        .grant_permissions(vec![
            grant(sharma.id, cse.id, math.id, true),
            grant(sharma.id, cse.id, physics.id, false),
            // 重复的三元组允许写入
            grant(sharma.id, cse.id, math.id, true),
        ])
        .await
        .unwrap();
    assert_eq!(created.len(), 3);

    let all = storage.list_permissions(Some(cse.id)).await.unwrap();
    assert_eq!(all.len(), 3);

    let granted = storage
        .list_granted_permissions(cse.id, sharma.id)
        .await
        .unwrap();
    assert_eq!(granted.len(), 2);
    for entry in &granted {
        assert!(entry.permission.have_permission);
        assert_eq!(entry.subject.as_ref().map(|s| s.id), Some(math.id));
    }

    assert!(
        storage
            .has_upload_permission(sharma.id, cse.id, math.id)
            .await
            .unwrap()
    );
    assert!(
        !storage
            .has_upload_permission(sharma.id, cse.id, physics.id)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_grant_permission_with_unknown_class_is_rejected() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let sharma = teacher(&storage, "Tarun Sharma", None).await;

    let result = storage
        .grant_permissions(vec![grant(sharma.id, 404, math.id, true)])
        .await;
    assert!(result.is_err());
    assert!(storage.list_permissions(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_marks_insert_then_update() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;
    let pupil = student(&storage, "0801CS211001", cse.id).await;

    let first = storage
        .upload_marks(vec![mark(pupil.id, cse.id, math.id, 18.0)])
        .await
        .unwrap();
    assert_eq!((first.updated, first.inserted), (0, 1));

    let second = storage
        .upload_marks(vec![mark(pupil.id, cse.id, math.id, 19.0)])
        .await
        .unwrap();
    assert_eq!((second.updated, second.inserted), (1, 0));

    let marks = storage.get_marks_by_student(pupil.id).await.unwrap().unwrap();
    assert_eq!(marks.class_id, cse.id);
    assert_eq!(marks.grades.mst_i.len(), 1);
    assert_eq!(marks.grades.mst_i[0].subject, math.id);
    assert_eq!(marks.grades.mst_i[0].marks, 19.0);
    assert!(marks.grades.mst_ii.is_empty());
    assert!(marks.grades.final_exam.is_empty());
}

#[tokio::test]
async fn test_marks_rejects_entries_for_another_class() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;
    let ece = class(&storage, "ECE", vec![math.id]).await;
    let pupil = student(&storage, "0801CS211003", cse.id).await;

    storage
        .upload_marks(vec![mark(pupil.id, cse.id, math.id, 18.0)])
        .await
        .unwrap();

    let mut mst_ii = mark(pupil.id, ece.id, math.id, 15.0);
    mst_ii.exam = ExamType::MstII;
    assert!(storage.upload_marks(vec![mst_ii]).await.is_err());

    // 同一批次先建成绩单再换班级，整批回滚
    let other = student(&storage, "0801CS211004", cse.id).await;
    let result = storage
        .upload_marks(vec![
            mark(other.id, cse.id, math.id, 11.0),
            mark(other.id, ece.id, math.id, 12.0),
        ])
        .await;
    assert!(result.is_err());
    assert!(storage.get_marks_by_student(other.id).await.unwrap().is_none());

    let marks = storage.get_marks_by_student(pupil.id).await.unwrap().unwrap();
    assert_eq!(marks.class_id, cse.id);
    assert!(marks.grades.mst_ii.is_empty());
}

#[tokio::test]
async fn test_marks_duplicate_tuple_in_one_batch() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;
    let pupil = student(&storage, "0801CS211002", cse.id).await;

    let result = storage
        .upload_marks(vec![
            mark(pupil.id, cse.id, math.id, 10.0),
            mark(pupil.id, cse.id, math.id, 12.0),
        ])
        .await
        .unwrap();
    assert_eq!((result.updated, result.inserted), (1, 1));

    let marks = storage.get_marks_by_student(pupil.id).await.unwrap().unwrap();
    assert_eq!(marks.grades.mst_i.len(), 1);
    assert_eq!(marks.grades.mst_i[0].marks, 12.0);
}

#[tokio::test]
async fn test_marks_missing_student() {
    let (storage, _dir) = memory_storage().await;
    assert!(storage.get_marks_by_student(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_teacher_removes_matching_user() {
    let (storage, _dir) = memory_storage().await;
    let sharma = teacher(&storage, "Tarun Sharma", Some("tsharma")).await;
    storage
        .create_user(NewAccount {
            username: "tsharma".to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role: UserRole::Teacher,
        })
        .await
        .unwrap();

    assert!(storage.delete_teacher(sharma.id).await.unwrap());
    assert!(storage.get_teacher_by_id(sharma.id).await.unwrap().is_none());
    assert!(storage.get_user_by_username("tsharma").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_teacher_without_account() {
    let (storage, _dir) = memory_storage().await;
    let gupta = teacher(&storage, "Neha Gupta", None).await;

    assert!(storage.delete_teacher(gupta.id).await.unwrap());
    assert!(!storage.delete_teacher(gupta.id).await.unwrap());
}

#[tokio::test]
async fn test_delete_user_requires_matching_role() {
    let (storage, _dir) = memory_storage().await;
    let user = storage
        .create_user(NewAccount {
            username: "0801CS211003".to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role: UserRole::Student,
        })
        .await
        .unwrap();

    assert!(
        !storage
            .delete_user_with_role(user.id, UserRole::Teacher)
            .await
            .unwrap()
    );
    assert!(
        storage
            .delete_user_with_role(user.id, UserRole::Student)
            .await
            .unwrap()
    );
    assert_eq!(storage.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_bulk_users_are_all_or_nothing() {
    let (storage, _dir) = memory_storage().await;
    storage
        .create_user(NewAccount {
            username: "taken".to_string(),
            password_hash: "x".to_string(),
            role: UserRole::Teacher,
        })
        .await
        .unwrap();

    let result = storage
        .create_users(vec![
            NewAccount {
                username: "fresh".to_string(),
                password_hash: "x".to_string(),
                role: UserRole::Student,
            },
            NewAccount {
                username: "taken".to_string(),
                password_hash: "x".to_string(),
                role: UserRole::Student,
            },
        ])
        .await;
    assert!(result.is_err());
    assert!(storage.get_user_by_username("fresh").await.unwrap().is_none());
}

#[tokio::test]
async fn test_only_active_announcements_are_listed() {
    let (storage, _dir) = memory_storage().await;
    let now = Utc::now();

    storage
        .create_announcement(NewAnnouncement {
            text: "Mid-semester exams start Monday".to_string(),
            posted_by: "admin".to_string(),
            expires_at: now + Duration::days(3),
        })
        .await
        .unwrap();
    storage
        .create_announcement(NewAnnouncement {
            text: "Library closed yesterday".to_string(),
            posted_by: "admin".to_string(),
            expires_at: now - Duration::days(1),
        })
        .await
        .unwrap();

    let active = storage
        .list_active_announcements(now.timestamp())
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].text, "Mid-semester exams start Monday");
}
