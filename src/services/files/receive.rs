use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

use super::remove_stored_file;
use crate::config::UploadConfig;
use crate::errors::SchoolError;
use crate::models::{ApiResponse, ErrorCode, StoredDocument};
use crate::utils::{MagicSniffer, content_type_for};

/// 文本字段的最大长度
const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

/// 已接收的上传表单
#[derive(Debug)]
pub struct UploadForm {
    pub document: StoredDocument,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// 非空文本字段
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// 解析为 ID 的文本字段
    pub fn id(&self, name: &str) -> Option<i64> {
        self.text(name).and_then(|v| v.parse().ok())
    }
}

fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

fn content_mismatch() -> HttpResponse {
    bad_request(
        ErrorCode::FileTypeNotAllowed,
        "File content does not match its extension",
    )
}

fn upload_failed(message: &str, err: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{}", SchoolError::file_operation(format!("{message}: {err}")));
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::FileUploadFailed, message))
}

/// 接收 multipart 表单
///
/// 仅允许一个 `file` 字段，其余字段作为文本收集。出错时返回可直接响应的
/// `HttpResponse`，并保证已写入的文件被删除。
pub async fn receive_upload(
    mut payload: Multipart,
    upload_dir: &str,
    config: &UploadConfig,
) -> Result<UploadForm, HttpResponse> {
    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        return Err(upload_failed("Failed to create upload directory", e));
    }

    let mut document: Option<StoredDocument> = None;
    let mut fields = HashMap::new();

    let result = receive_fields(&mut payload, upload_dir, config, &mut document, &mut fields).await;
    if let Err(response) = result {
        if let Some(doc) = &document {
            remove_stored_file(upload_dir, &doc.stored_name);
        }
        return Err(response);
    }

    match document {
        Some(document) => Ok(UploadForm { document, fields }),
        None => Err(bad_request(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )),
    }
}

async fn receive_fields(
    payload: &mut Multipart,
    upload_dir: &str,
    config: &UploadConfig,
    document: &mut Option<StoredDocument>,
    fields: &mut HashMap<String, String>,
) -> Result<(), HttpResponse> {
    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return Err(bad_request(
                    ErrorCode::UploadFormInvalid,
                    format!("Invalid multipart payload: {e}"),
                ));
            }
        };

        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name != "file" {
            let mut value = Vec::new();
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| {
                    bad_request(ErrorCode::UploadFormInvalid, format!("Invalid field {name}: {e}"))
                })?;
                if value.len() + data.len() > MAX_TEXT_FIELD_SIZE {
                    return Err(bad_request(
                        ErrorCode::UploadFormInvalid,
                        format!("Field {name} is too large"),
                    ));
                }
                value.extend_from_slice(&data);
            }
            fields.insert(name, String::from_utf8_lossy(&value).into_owned());
            continue;
        }

        if document.is_some() {
            return Err(bad_request(
                ErrorCode::MultifileUploadNotAllowed,
                "Only one file can be uploaded at a time",
            ));
        }

        // 先获取原始文件名
        let original_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string())
            .unwrap_or_default();

        // 提取扩展名并校验
        let extension = Path::new(&original_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        if !config
            .allowed_types
            .iter()
            .any(|t| t.to_lowercase() == extension)
        {
            return Err(bad_request(
                ErrorCode::FileTypeNotAllowed,
                "Only PDF and DOCX files are allowed",
            ));
        }

        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_else(|| content_type_for(&extension).to_string());

        let stored_name = format!("{}{}", Uuid::new_v4(), extension);
        let file_path = Path::new(upload_dir).join(&stored_name);
        let mut f = File::create(&file_path)
            .map_err(|e| upload_failed("Failed to create file", e))?;

        // 从这里开始文件已落盘，出错时由调用方清理
        *document = Some(StoredDocument {
            file_name: original_name,
            stored_name,
            file_size: 0,
            content_type,
        });

        let mut total_size: usize = 0;
        let mut sniffer = MagicSniffer::default();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| {
                bad_request(ErrorCode::FileUploadFailed, format!("File upload interrupted: {e}"))
            })?;

            // 文件头可能被拆到多个 chunk 中
            if sniffer.feed(&data, &extension) == Some(false) {
                return Err(content_mismatch());
            }

            total_size += data.len();
            // 校验大小
            if total_size > config.max_size {
                return Err(bad_request(
                    ErrorCode::FileSizeExceeded,
                    "File size exceeds the limit",
                ));
            }
            f.write_all(&data)
                .map_err(|e| upload_failed("Failed to write file", e))?;
        }

        // 空文件没有可校验的内容
        if total_size == 0 {
            return Err(bad_request(ErrorCode::FileTypeNotAllowed, "File is empty"));
        }
        if !sniffer.finish(&extension) {
            return Err(content_mismatch());
        }

        if let Some(doc) = document.as_mut() {
            doc.file_size = total_size as i64;
        }
    }

    Ok(())
}
