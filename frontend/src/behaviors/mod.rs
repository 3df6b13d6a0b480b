//! Click, resize and load handlers installed on the exported note page.

pub mod callout;
pub mod copy_code;
pub mod icons;
pub mod list_fold;
pub mod responsive;
pub mod theme;
