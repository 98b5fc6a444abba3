//! Entity Module

pub mod workout;
