//! Per-section reducers.
//!
//! Each reducer takes ownership of its section, inspects the action, and
//! returns the next section. Actions addressed to another section pass the
//! state through unchanged.

pub mod about;
pub mod education;
pub mod experience;
pub mod list;
pub mod projects;
pub mod skills;
