use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ClassId = i64;

/// 课程记录
/// - start_date / end_date: ISO-8601 日期，例如 `2024-01-01`
/// - 不校验日期先后顺序
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Class {
    pub class_name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hours: i64,
}
