#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::{ConnectOptions, Database};
use uuid::Uuid;

use school_admin_backend::models::{
    classes::{entities::Class, requests::CreateClassRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    teachers::{entities::Teacher, requests::CreateTeacherRequest},
};
use school_admin_backend::storage::{Storage, sea_orm_storage::SeaOrmStorage};

/// 内存数据库只能有一个连接，否则每个连接都是独立的空库
pub async fn memory_storage() -> (Arc<dyn Storage>, PathBuf) {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect sqlite memory");

    let upload_dir = std::env::temp_dir().join(format!("school-admin-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&upload_dir).expect("create upload dir");

    let storage = SeaOrmStorage::from_connection(db, upload_dir.to_str().expect("utf-8 path"))
        .await
        .expect("run migrations");
    (Arc::new(storage), upload_dir)
}

pub async fn subject(storage: &Arc<dyn Storage>, code: &str, name: &str) -> Subject {
    storage
        .create_subject(CreateSubjectRequest {
            subject_code: code.to_string(),
            subject_name: name.to_string(),
            subject_abbreviation: code.to_string(),
        })
        .await
        .expect("create subject")
}

pub async fn teacher(storage: &Arc<dyn Storage>, name: &str, username: Option<&str>) -> Teacher {
    storage
        .create_teacher(CreateTeacherRequest {
            faculty_name: name.to_string(),
            faculty_abbreviation: name.chars().take(3).collect(),
            username: username.map(str::to_string),
        })
        .await
        .expect("create teacher")
}

pub async fn class(storage: &Arc<dyn Storage>, name: &str, subjects: Vec<i64>) -> Class {
    storage
        .create_class(CreateClassRequest {
            class_name: name.to_string(),
            section: Some("A".to_string()),
            schedule: None,
            subjects,
            teachers: Vec::new(),
        })
        .await
        .expect("create class")
}

pub async fn student(storage: &Arc<dyn Storage>, enrollment: &str, class_id: i64) -> Student {
    storage
        .create_student(CreateStudentRequest {
            enrollment_number: enrollment.to_string(),
            name: format!("Student {enrollment}"),
            age: None,
            class_id: Some(class_id),
        })
        .await
        .expect("create student")
}

/// 构建挂载全部路由的测试应用
#[macro_export]
macro_rules! test_app {
    ($storage:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($storage.clone()))
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(school_admin_backend::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(school_admin_backend::utils::query_error_handler),
                )
                .configure(school_admin_backend::routes::configure_routes),
        )
        .await
    };
}
