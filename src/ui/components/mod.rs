//! General-purpose UI components.
//!
//! # Components
//!
//! - [`Button`], [`TextButton`]: Clickable buttons with variants
//! - [`Surface`]: Box whose shade follows its nesting depth
//! - [`List`], [`ListItem`]: Sized vertical list
//! - [`Stack`], [`Container`], [`Divisor`]: Layout primitives
//! - [`Dropdown`]: Floating panel under a field
//! - [`Modal`]: Portaled dialog with Ok/Cancel actions
//! - [`Steps`], [`Step`]: Progress through a multi-step flow
//! - [`ChevronDownIcon`], [`CheckIcon`]: SVG icons

mod button;
mod dropdown;
mod icons;
mod layout;
mod list;
mod modal;
mod steps;
mod surface;

pub use button::{Button, ButtonSize, ButtonVariant, TextButton};
pub use dropdown::Dropdown;
pub use icons::*;
pub use layout::{Align, Container, Divisor, MaxWidth, Orientation, Stack, StackDirection};
pub use list::{List, ListItem, ListSize};
pub use modal::Modal;
pub use steps::{Step, StepStatus, Steps};
pub use surface::{Depth, Surface, use_depth};
