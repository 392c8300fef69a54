//! Core domain types shared by the parsers, services and snapshot layer.

pub mod domain;
pub mod nationality;
