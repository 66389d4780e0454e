//! Grade aggregation.
//!
//! This module holds the grade scale, the weighted-average arithmetic that
//! turns a course list into an SGPA, and the merge of that semester into a
//! projected CGPA.

pub mod aggregate;
pub mod grade;
pub mod types;
pub mod utility;
