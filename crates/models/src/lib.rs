//! Record types held by the registry.
//!
//! Records carry no id of their own; ids are assigned by the registry and
//! returned alongside the record.

pub mod student;
pub mod class;

pub use class::{Class, ClassId};
pub use student::{Student, StudentId};
