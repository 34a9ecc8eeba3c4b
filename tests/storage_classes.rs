mod common;

use common::{class, memory_storage, subject, teacher};
use school_admin_backend::errors::SchoolError;

#[tokio::test]
async fn test_assign_subjects_replaces_previous_list() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let physics = subject(&storage, "PH101", "Physics").await;
    let cse = class(&storage, "CSE", vec![]).await;

    storage
        .assign_class_subjects(cse.id, vec![math.id])
        .await
        .unwrap()
        .unwrap();
    let updated = storage
        .assign_class_subjects(cse.id, vec![physics.id])
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.subjects, vec![physics.id]);
    let reloaded = storage.get_class_by_id(cse.id).await.unwrap().unwrap();
    assert_eq!(reloaded.subjects, vec![physics.id]);
}

#[tokio::test]
async fn test_assign_subjects_missing_class() {
    let (storage, _dir) = memory_storage().await;
    let result = storage.assign_class_subjects(404, vec![]).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_assign_teachers_is_idempotent() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let physics = subject(&storage, "PH101", "Physics").await;
    let cse = class(&storage, "CSE", vec![math.id, physics.id]).await;
    let sharma = teacher(&storage, "Tarun Sharma", Some("tsharma")).await;

    for _ in 0..2 {
        let updated = storage
            .assign_class_teachers(cse.id, vec![sharma.id])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.teachers, vec![sharma.id]);
    }

    let reloaded = storage.get_teacher_by_id(sharma.id).await.unwrap().unwrap();
    assert_eq!(reloaded.subjects.len(), 2);
    let names: Vec<&str> = reloaded
        .subjects
        .iter()
        .map(|s| s.subject_name.as_str())
        .collect();
    assert!(names.contains(&"Mathematics"));
    assert!(names.contains(&"Physics"));
    assert!(reloaded.subjects.iter().all(|s| !s.upload_permission));
}

#[tokio::test]
async fn test_assign_teachers_missing_teacher_leaves_no_writes() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;
    let sharma = teacher(&storage, "Tarun Sharma", None).await;

    let err = storage
        .assign_class_teachers(cse.id, vec![sharma.id, 999])
        .await
        .unwrap_err();
    match err {
        SchoolError::NotFound(msg) => assert_eq!(msg, "Teacher with id 999 not found"),
        other => panic!("unexpected error: {other:?}"),
    }

    let reloaded = storage.get_teacher_by_id(sharma.id).await.unwrap().unwrap();
    assert!(reloaded.subjects.is_empty());
    let class = storage.get_class_by_id(cse.id).await.unwrap().unwrap();
    assert!(class.teachers.is_empty());
}

#[tokio::test]
async fn test_schedule_defaults_and_replacement() {
    let (storage, _dir) = memory_storage().await;
    let cse = class(&storage, "CSE", vec![]).await;
    assert_eq!(cse.schedule, serde_json::json!({}));

    let schedule = serde_json::json!({"monday": [{"slot": 1, "subject": "MA101"}]});
    let updated = storage
        .update_class_schedule(cse.id, schedule.clone())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.schedule, schedule);

    let missing = storage
        .update_class_schedule(404, serde_json::json!({}))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete_class_removes_links() {
    let (storage, _dir) = memory_storage().await;
    let math = subject(&storage, "MA101", "Mathematics").await;
    let cse = class(&storage, "CSE", vec![math.id]).await;

    assert!(storage.delete_class(cse.id).await.unwrap());
    assert!(storage.get_class_by_id(cse.id).await.unwrap().is_none());
    assert!(!storage.delete_class(cse.id).await.unwrap());
    // 科目本身不受影响
    assert!(storage.get_subject_by_id(math.id).await.unwrap().is_some());
}
