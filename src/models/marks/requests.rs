use serde::Deserialize;
use ts_rs::TS;

use super::entities::ExamType;

// 成绩上传中的一条记录
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct MarkEntryRequest {
    // 上传成绩的教师，需持有该班级科目的上传权限
    pub teacher_id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub exam: ExamType,
    pub marks: f64,
    pub max_marks: f64,
}

impl MarkEntryRequest {
    // 分数非负且不超过满分
    pub fn is_valid(&self) -> bool {
        self.marks.is_finite()
            && self.max_marks.is_finite()
            && self.marks >= 0.0
            && self.max_marks > 0.0
            && self.marks <= self.max_marks
    }

    // 权限检查键：(教师, 班级, 科目)
    pub fn permission_key(&self) -> (i64, i64, i64) {
        (self.teacher_id, self.class_id, self.subject_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(marks: f64, max_marks: f64) -> MarkEntryRequest {
        MarkEntryRequest {
            teacher_id: 1,
            student_id: 1,
            class_id: 1,
            subject_id: 1,
            exam: ExamType::MstI,
            marks,
            max_marks,
        }
    }

    #[test]
    fn test_mark_entry_validation() {
        assert!(entry(18.0, 20.0).is_valid());
        assert!(entry(0.0, 20.0).is_valid());
        assert!(entry(20.0, 20.0).is_valid());
        assert!(!entry(21.0, 20.0).is_valid());
        assert!(!entry(-1.0, 20.0).is_valid());
        assert!(!entry(0.0, 0.0).is_valid());
    }
}
