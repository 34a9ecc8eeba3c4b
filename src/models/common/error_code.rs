/// API 业务错误码，随 `ApiResponse.code` 返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,
    UserNotFound = 2001,
    InvalidPassword = 2002,
    InvalidRole = 2003,
    ProfileNotFound = 2004,

    // 用户账号
    UserAlreadyExists = 3000,
    UserNameInvalid = 3001,
    UserCreationFailed = 3002,
    UserDeleteFailed = 3003,

    // 基础数据（教室 / 教师 / 科目 / 学生）
    RoomNotFound = 4000,
    TeacherNotFound = 4010,
    SubjectNotFound = 4020,
    StudentNotFound = 4030,
    NoValidEntries = 4090,
    ReferenceNotFound = 4091,

    // 班级
    ClassNotFound = 5000,
    ClassCreationFailed = 5001,
    ClassDeleteFailed = 5002,
    ScheduleUpdateFailed = 5003,
    AssignmentInputInvalid = 5004,

    // 上传权限
    PermissionDenied = 6000,
    PermissionQueryInvalid = 6001,

    // 成绩
    MarksNotFound = 7000,
    MarksInvalid = 7001,
    MarksUploadFailed = 7002,

    // 公告
    AnnouncementInvalid = 7500,
    AnnouncementNotFound = 7501,

    // 文件
    FileNotFound = 8000,
    FileUploadFailed = 8001,
    FileTypeNotAllowed = 8002,
    FileSizeExceeded = 8003,
    MultifileUploadNotAllowed = 8004,
    UploadFormInvalid = 8005,
}
