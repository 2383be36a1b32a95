use serde::{Deserialize, Serialize};

pub type StudentId = i64;

/// 学生记录：创建与更新均为整体替换
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub age: i64,
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn middle_name_defaults_to_empty() {
        let s: Student = serde_json::from_value(json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "age": 20,
            "city": "Lima"
        }))
        .unwrap();
        assert_eq!(s.middle_name, "");
        assert_eq!(s.age, 20);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let res = serde_json::from_value::<Student>(json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "city": "Lima"
        }));
        assert!(res.is_err());
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let res = serde_json::from_value::<Student>(json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "age": "twenty",
            "city": "Lima"
        }));
        assert!(res.is_err());
    }
}
