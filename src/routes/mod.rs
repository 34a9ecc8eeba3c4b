pub mod announcements;
pub mod assignments;
pub mod auth;
pub mod classes;
pub mod marks;
pub mod materials;
pub mod permissions;
pub mod rooms;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use announcements::configure_announcements_routes;
pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use marks::configure_marks_routes;
pub use materials::configure_materials_routes;
pub use permissions::configure_permissions_routes;
pub use rooms::configure_rooms_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;
pub use teachers::configure_teachers_routes;
pub use users::configure_user_routes;

use actix_web::web;

/// 注册全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_rooms_routes)
        .configure(configure_teachers_routes)
        .configure(configure_subjects_routes)
        .configure(configure_classes_routes)
        .configure(configure_permissions_routes)
        .configure(configure_user_routes)
        .configure(configure_students_routes)
        .configure(configure_announcements_routes)
        .configure(configure_marks_routes)
        .configure(configure_materials_routes)
        .configure(configure_assignments_routes);
}
