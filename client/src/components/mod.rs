//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome from explicit props; none of them read
//! router state directly.

pub mod icons;
pub mod nav_button;
pub mod org_sidebar;
