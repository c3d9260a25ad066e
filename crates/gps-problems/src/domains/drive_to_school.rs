//! Getting a son to school when the car battery is dead.

use gps_core::{Operation, Problem, Result};

use super::conditions;

pub const NAME: &str = "drive-to-school";

/// The operations, in the order the planner tries them.
pub fn operations() -> Result<Vec<Operation>> {
    Ok(vec![
        Operation::builder("drive-son-to-school")
            .requires_all(["son-at-home", "car-works"])
            .adds("son-at-school")
            .removes("son-at-home")
            .build()?,
        Operation::builder("shop-installs-battery")
            .requires_all(["car-needs-battery", "shop-knows-problem", "shop-has-money"])
            .adds("car-works")
            .build()?,
        Operation::builder("tell-shop-problem")
            .requires("in-communication-with-shop")
            .adds("shop-knows-problem")
            .build()?,
        Operation::builder("telephone-shop")
            .requires("know-phone-number")
            .adds("in-communication-with-shop")
            .build()?,
        Operation::builder("look-up-number")
            .requires("have-phone-book")
            .adds("know-phone-number")
            .build()?,
        Operation::builder("give-shop-money")
            .requires("have-money")
            .adds("shop-has-money")
            .removes("have-money")
            .build()?,
    ])
}

pub fn problem() -> Result<Problem> {
    Ok(Problem::new(
        conditions(&["son-at-school"]),
        conditions(&["son-at-home", "car-needs-battery", "have-money", "have-phone-book"]),
        operations()?,
    )
    .with_name(NAME))
}
