//! Course schedule validation.
//!
//! Checks a multi-term course plan against a catalog: duplicate
//! placements, prerequisite timing, credit-load ranges, and which courses
//! can still be placed in a given term.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod schedule;
pub mod validate;
pub mod web;
