use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::UserRole,
        responses::{StudentAccount, TeacherAccount},
    },
};
use crate::services::storage_error_response;

pub async fn list_teacher_accounts(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let users = match storage.list_users_by_role(UserRole::Teacher).await {
        Ok(users) => users,
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Failed to fetch teacher accounts",
                &e,
            ));
        }
    };

    let usernames: Vec<String> = users.iter().map(|u| u.username.clone()).collect();
    let mut details: HashMap<String, _> = match storage.list_teachers_by_usernames(&usernames).await
    {
        Ok(teachers) => teachers
            .into_iter()
            .filter_map(|t| t.username.clone().map(|name| (name, t)))
            .collect(),
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Failed to fetch teacher details",
                &e,
            ));
        }
    };

    // 没有对应教师档案的账号 teacherDetails 为 null
    let accounts: Vec<TeacherAccount> = users
        .into_iter()
        .map(|user| {
            let teacher_details = details.remove(&user.username);
            TeacherAccount {
                user,
                teacher_details,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        accounts,
        "Teacher accounts retrieved successfully",
    )))
}

pub async fn list_student_accounts(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let users = match storage.list_users_by_role(UserRole::Student).await {
        Ok(users) => users,
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Failed to fetch student accounts",
                &e,
            ));
        }
    };

    let usernames: Vec<String> = users.iter().map(|u| u.username.clone()).collect();
    let mut details: HashMap<String, _> =
        match storage.list_students_by_enrollments(&usernames).await {
            Ok(students) => students
                .into_iter()
                .map(|s| (s.enrollment_number.clone(), s))
                .collect(),
            Err(e) => {
                return Ok(storage_error_response(
                    ErrorCode::InternalServerError,
                    "Failed to fetch student details",
                    &e,
                ));
            }
        };

    let accounts: Vec<StudentAccount> = users
        .into_iter()
        .map(|user| {
            let student_details = details.remove(&user.username);
            StudentAccount {
                user,
                student_details,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        accounts,
        "Student accounts retrieved successfully",
    )))
}
