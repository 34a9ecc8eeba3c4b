//! 资料与作业共用的文件处理
//!
//! 上传流程：文件先写入上传目录，再由调用方写入数据库记录；
//! 记录写入失败时调用 [`remove_stored_file`] 清理已落盘的文件。

pub mod download;
pub mod receive;

pub use download::download_document;
pub use receive::{UploadForm, receive_upload};

use std::path::Path;

/// 尽力删除已存储的文件，失败只记录日志
pub fn remove_stored_file(upload_dir: &str, stored_name: &str) {
    let path = Path::new(upload_dir).join(stored_name);
    if let Err(e) = std::fs::remove_file(&path) {
        tracing::warn!("Failed to remove stored file {}: {}", path.display(), e);
    }
}
