//! Supporting utilities used by models.

pub mod ashrae;
pub mod constraint;
pub mod motor;
pub mod psychro;
pub mod units;
