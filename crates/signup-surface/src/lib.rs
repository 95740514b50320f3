//! Signup form surface layer
//!
//! The validation engine is pure; this crate is the boundary it talks to a
//! UI through. A surface (DOM, TUI, test double) implements
//! [`SignupSurface`] to expose field values and accept presentation state,
//! and [`FormController`] sequences validation over surface events: live
//! re-validation on input, checklist show/hide around password focus, and
//! a full no-early-exit pass on submit intent.
//!
//! Nothing here names colors, borders, or display toggling; the surface
//! maps presentation states to whatever its widgets understand.

pub mod controller;
pub mod presentation;

pub use controller::{FieldEvent, FormController, SignupSurface};
pub use presentation::{ChecklistItemState, ChecklistPresentation, FieldId, FieldPresentation};
