//! Built-in problem domains.

pub mod drive_to_school;
pub mod monkey_and_bananas;

use gps_core::Condition;

pub(crate) fn conditions(names: &[&str]) -> Vec<Condition> {
    names.iter().map(|name| Condition::new(*name)).collect()
}
