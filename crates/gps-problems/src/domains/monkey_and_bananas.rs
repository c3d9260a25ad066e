//! A hungry monkey, a chair by the door, and bananas out of reach.

use gps_core::{Operation, Problem, Result};

use super::conditions;

pub const NAME: &str = "monkey-and-bananas";

/// The operations, in the order the planner tries them.
pub fn operations() -> Result<Vec<Operation>> {
    Ok(vec![
        Operation::builder("climb-on-chair")
            .requires_all(["chair-at-middle-room", "at-middle-room", "on-floor"])
            .adds_all(["at-bananas", "on-chair"])
            .removes_all(["at-middle-room", "on-floor"])
            .build()?,
        Operation::builder("push-chair-from-door-to-middle-room")
            .requires_all(["chair-at-door", "at-door"])
            .adds_all(["chair-at-middle-room", "at-middle-room"])
            .removes_all(["chair-at-door", "at-door"])
            .build()?,
        Operation::builder("walk-from-door-to-middle-room")
            .requires_all(["at-door", "on-floor"])
            .adds("at-middle-room")
            .removes("at-door")
            .build()?,
        Operation::builder("grasp-bananas")
            .requires_all(["at-bananas", "empty-handed"])
            .adds("has-bananas")
            .removes("empty-handed")
            .build()?,
        Operation::builder("drop-ball")
            .requires("has-ball")
            .adds("empty-handed")
            .removes("has-ball")
            .build()?,
        Operation::builder("eat-bananas")
            .requires("has-bananas")
            .adds_all(["empty-handed", "not-hungry"])
            .removes_all(["has-bananas", "hungry"])
            .build()?,
    ])
}

pub fn problem() -> Result<Problem> {
    Ok(Problem::new(
        conditions(&["not-hungry"]),
        conditions(&["at-door", "on-floor", "has-ball", "hungry", "chair-at-door"]),
        operations()?,
    )
    .with_name(NAME))
}
