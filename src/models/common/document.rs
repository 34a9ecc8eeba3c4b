/// 已写入上传目录的文件信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    // 原始文件名
    pub file_name: String,
    // UUID + 扩展名
    pub stored_name: String,
    pub file_size: i64,
    pub content_type: String,
}
