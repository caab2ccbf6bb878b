//! Wire types shared between the laundry backend and the admin frontend.

pub mod domain;
pub mod system;
