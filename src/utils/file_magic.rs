/// 文件内容是否与扩展名相符
///
/// `extension` 含点号，如 ".pdf"；只识别允许上传的文档类型，其余一律拒绝。
pub fn validate_magic_bytes(data: &[u8], extension: &str) -> bool {
    if data.is_empty() {
        return false;
    }

    match extension.to_lowercase().as_str() {
        ".pdf" => data.starts_with(b"%PDF"),
        // OOXML 文档本质是 ZIP 包
        ".docx" => data.starts_with(&[0x50, 0x4B, 0x03, 0x04]),
        _ => false,
    }
}

/// 识别文档类型所需的最少字节数
pub const MAGIC_PREFIX_LEN: usize = 4;

/// 跨 chunk 累积文件头，凑够签名长度后再校验
#[derive(Debug, Default)]
pub struct MagicSniffer {
    head: Vec<u8>,
    verdict: Option<bool>,
}

impl MagicSniffer {
    /// 喂入一个 chunk，签名长度凑齐后返回校验结果
    pub fn feed(&mut self, data: &[u8], extension: &str) -> Option<bool> {
        if self.verdict.is_none() {
            let wanted = MAGIC_PREFIX_LEN - self.head.len();
            self.head
                .extend_from_slice(&data[..wanted.min(data.len())]);
            if self.head.len() >= MAGIC_PREFIX_LEN {
                self.verdict = Some(validate_magic_bytes(&self.head, extension));
            }
        }
        self.verdict
    }

    /// 流结束时给出最终结果，不足签名长度的文件按已有字节判断
    pub fn finish(&self, extension: &str) -> bool {
        self.verdict
            .unwrap_or_else(|| validate_magic_bytes(&self.head, extension))
    }
}

/// 根据扩展名推断下载时的 Content-Type
pub fn content_type_for(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        ".pdf" => "application/pdf",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic() {
        let pdf_header = b"%PDF-1.4";
        assert!(validate_magic_bytes(pdf_header, ".pdf"));
        assert!(validate_magic_bytes(pdf_header, ".PDF"));
        assert!(!validate_magic_bytes(pdf_header, ".docx"));
    }

    #[test]
    fn test_docx_magic() {
        let zip_header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00];
        assert!(validate_magic_bytes(&zip_header, ".docx"));
        assert!(!validate_magic_bytes(&zip_header, ".pdf"));
    }

    #[test]
    fn test_rejects_other_types() {
        let png_header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(!validate_magic_bytes(&png_header, ".png"));
        assert!(!validate_magic_bytes(b"hello", ".txt"));
    }

    #[test]
    fn test_empty_data() {
        assert!(!validate_magic_bytes(&[], ".pdf"));
    }

    #[test]
    fn test_sniffer_across_small_chunks() {
        let mut sniffer = MagicSniffer::default();
        assert_eq!(sniffer.feed(b"%", ".pdf"), None);
        assert_eq!(sniffer.feed(b"PD", ".pdf"), None);
        assert_eq!(sniffer.feed(b"F-1.4 body", ".pdf"), Some(true));
        assert_eq!(sniffer.feed(b"more", ".pdf"), Some(true));
        assert!(sniffer.finish(".pdf"));

        let mut sniffer = MagicSniffer::default();
        assert_eq!(sniffer.feed(&[0x50, 0x4B], ".docx"), None);
        assert_eq!(sniffer.feed(&[0x03, 0x04, 0x14], ".docx"), Some(true));
    }

    #[test]
    fn test_sniffer_rejects_mismatch_and_short_files() {
        let mut sniffer = MagicSniffer::default();
        assert_eq!(sniffer.feed(b"MZ", ".pdf"), None);
        assert_eq!(sniffer.feed(b"\x90\x00", ".pdf"), Some(false));

        let mut sniffer = MagicSniffer::default();
        assert_eq!(sniffer.feed(b"%P", ".pdf"), None);
        assert!(!sniffer.finish(".pdf"));

        assert!(!MagicSniffer::default().finish(".pdf"));
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(".pdf"), "application/pdf");
        assert!(content_type_for(".DOCX").contains("wordprocessingml"));
        assert_eq!(content_type_for(".exe"), "application/octet-stream");
    }
}
