use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolError};

#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/announcement.ts")]
pub struct CreateAnnouncementRequest {
    pub text: Option<String>,
    pub posted_by: Option<String>,
    // RFC 3339 时间或 YYYY-MM-DD 日期
    pub expires_at: Option<String>,
}

// 校验通过的公告
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub text: String,
    pub posted_by: String,
    pub expires_at: DateTime<Utc>,
}

impl CreateAnnouncementRequest {
    /// 三个字段缺一不可，返回 None 表示缺失
    pub fn required_fields(&self) -> Option<(&str, &str, &str)> {
        let non_blank = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|_| ())
        };
        non_blank(&self.text)?;
        non_blank(&self.posted_by)?;
        non_blank(&self.expires_at)?;
        Some((
            self.text.as_deref()?,
            self.posted_by.as_deref()?,
            self.expires_at.as_deref()?.trim(),
        ))
    }
}

/// 解析过期时间；纯日期视为当天 UTC 零点
pub fn parse_expires_at(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| SchoolError::date_parse(format!("无效的日期: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expires_at_rfc3339() {
        let dt = parse_expires_at("2030-01-02T03:04:05Z").unwrap();
        assert_eq!(dt.timestamp(), 1893553445);
    }

    #[test]
    fn test_parse_expires_at_plain_date() {
        let dt = parse_expires_at("2030-01-02").unwrap();
        assert_eq!(dt.to_rfc3339(), "2030-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_parse_expires_at_invalid() {
        let err = parse_expires_at("next week").unwrap_err();
        assert_eq!(err.code(), "E010");
    }

    #[test]
    fn test_required_fields() {
        let req = CreateAnnouncementRequest {
            text: Some("Exam moved".into()),
            posted_by: Some("admin".into()),
            expires_at: Some("2030-01-02".into()),
        };
        assert!(req.required_fields().is_some());

        let blank = CreateAnnouncementRequest {
            text: Some("  ".into()),
            ..req
        };
        assert!(blank.required_fields().is_none());
    }
}
