//! Transport layer for the calculator service.

pub mod rest;
