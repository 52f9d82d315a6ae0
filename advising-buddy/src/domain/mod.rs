//! Domain types for the advising buddy.
//!
//! These are the validated building blocks shared by the catalog, the
//! schedule and the validator. Credit strings are parsed once at
//! construction, so code holding a [`CreditRange`] never branches on the
//! shape of the source notation.

mod course;
mod course_id;
mod credits;

pub use course::Course;
pub use course_id::CourseId;
pub use credits::{CreditRange, InvalidCredits};
