//! HVAC equipment models.
//!
//! This module contains models for air-handling equipment such as dedicated
//! outdoor air systems.

pub mod doas;
