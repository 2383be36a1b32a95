#![cfg(test)]
use chrono::NaiveDate;
use models::{Class, Student};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn ann() -> Student {
    Student {
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        middle_name: String::new(),
        age: 20,
        city: "Lima".into(),
    }
}

pub fn bob() -> Student {
    Student {
        first_name: "Bob".into(),
        last_name: "Ortiz".into(),
        middle_name: "J".into(),
        age: 23,
        city: "Quito".into(),
    }
}

pub fn math() -> Class {
    Class {
        class_name: "Math".into(),
        description: "Algebra".into(),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 6, 1),
        hours: 40,
    }
}

pub fn physics() -> Class {
    Class {
        class_name: "Physics".into(),
        description: "Mechanics".into(),
        start_date: date(2024, 2, 1),
        end_date: date(2024, 7, 1),
        hours: 32,
    }
}
