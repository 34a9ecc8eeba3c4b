use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考试类型：两次期中与期末
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub enum ExamType {
    #[serde(rename = "MST_I")]
    MstI,
    #[serde(rename = "MST_II")]
    MstII,
    #[serde(rename = "FINAL")]
    Final,
}

impl ExamType {
    pub const MST_I: &'static str = "MST_I";
    pub const MST_II: &'static str = "MST_II";
    pub const FINAL: &'static str = "FINAL";

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::MstI => Self::MST_I,
            ExamType::MstII => Self::MST_II,
            ExamType::Final => Self::FINAL,
        }
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ExamType::MST_I => Ok(ExamType::MstI),
            ExamType::MST_II => Ok(ExamType::MstII),
            ExamType::FINAL => Ok(ExamType::Final),
            _ => Err(format!("Invalid exam type: {s}")),
        }
    }
}

// 单科成绩
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct GradeEntry {
    // 科目ID
    pub subject: i64,
    pub marks: f64,
    pub max_marks: f64,
}

// 按考试分组的成绩
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct Grades {
    #[serde(rename = "MST_I")]
    pub mst_i: Vec<GradeEntry>,
    #[serde(rename = "MST_II")]
    pub mst_ii: Vec<GradeEntry>,
    #[serde(rename = "FINAL")]
    pub final_exam: Vec<GradeEntry>,
}

impl Grades {
    pub fn bucket_mut(&mut self, exam: ExamType) -> &mut Vec<GradeEntry> {
        match exam {
            ExamType::MstI => &mut self.mst_i,
            ExamType::MstII => &mut self.mst_ii,
            ExamType::Final => &mut self.final_exam,
        }
    }
}

// 学生成绩单
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct Marks {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub grades: Grades,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_type_wire_names() {
        assert_eq!(serde_json::to_string(&ExamType::MstI).unwrap(), "\"MST_I\"");
        assert_eq!(
            serde_json::from_str::<ExamType>("\"FINAL\"").unwrap(),
            ExamType::Final
        );
        assert!(serde_json::from_str::<ExamType>("\"MIDTERM\"").is_err());
    }

    #[test]
    fn test_exam_type_from_str() {
        assert_eq!("MST_II".parse::<ExamType>(), Ok(ExamType::MstII));
        assert!("mst_ii".parse::<ExamType>().is_err());
    }

    #[test]
    fn test_grades_serialize_all_buckets() {
        let mut grades = Grades::default();
        grades.bucket_mut(ExamType::MstI).push(GradeEntry {
            subject: 3,
            marks: 18.0,
            max_marks: 20.0,
        });
        let json = serde_json::to_value(&grades).unwrap();
        assert_eq!(json["MST_I"][0]["maxMarks"], 20.0);
        assert!(json["MST_II"].as_array().unwrap().is_empty());
        assert!(json["FINAL"].as_array().unwrap().is_empty());
    }
}
