use serde::Deserialize;
use serde_json::Value;
use ts_rs::TS;

// 创建班级请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    #[serde(default)]
    pub class_name: String,
    pub section: Option<String>,
    // 缺省为空对象
    pub schedule: Option<Value>,
    #[serde(default)]
    pub subjects: Vec<i64>,
    #[serde(default)]
    pub teachers: Vec<i64>,
}

// 为班级分配科目，整体替换
//
// 字段保持为原始 JSON，以便对非数组输入返回业务错误而不是反序列化错误
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct AssignSubjectsRequest {
    pub subjects: Option<Value>,
}

impl AssignSubjectsRequest {
    pub fn subject_ids(&self) -> Option<Vec<i64>> {
        parse_id_list(self.subjects.as_ref())
    }
}

// 为班级分配教师
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct AssignTeachersRequest {
    pub teacher_ids: Option<Value>,
}

impl AssignTeachersRequest {
    pub fn teacher_ids(&self) -> Option<Vec<i64>> {
        parse_id_list(self.teacher_ids.as_ref())
    }
}

/// 解析 ID 数组，元素可以是整数或数字字符串
///
/// 非数组或包含无法识别的元素时返回 None
pub fn parse_id_list(value: Option<&Value>) -> Option<Vec<i64>> {
    let items = value?.as_array()?;
    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id_list_accepts_numbers_and_numeric_strings() {
        let value = json!([1, "2", 3]);
        assert_eq!(parse_id_list(Some(&value)), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_parse_id_list_rejects_non_arrays() {
        assert_eq!(parse_id_list(None), None);
        assert_eq!(parse_id_list(Some(&json!("1,2"))), None);
        assert_eq!(parse_id_list(Some(&json!({"id": 1}))), None);
    }

    #[test]
    fn test_parse_id_list_rejects_bad_elements() {
        assert_eq!(parse_id_list(Some(&json!([1, "abc"]))), None);
        assert_eq!(parse_id_list(Some(&json!([1.5]))), None);
    }

    #[test]
    fn test_parse_id_list_empty_array() {
        assert_eq!(parse_id_list(Some(&json!([]))), Some(vec![]));
    }

    #[test]
    fn test_assign_teachers_field_name() {
        let req: AssignTeachersRequest =
            serde_json::from_value(json!({"teacherIds": [4, 5]})).unwrap();
        assert_eq!(req.teacher_ids(), Some(vec![4, 5]));
    }
}
