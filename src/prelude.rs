//! Convenience re-exports for consumers of the crate.
//!
//! ```ignore
//! use view_hooks::prelude::*;
//! ```

pub use crate::callback::Callback;
pub use crate::component::Render;
pub use crate::context::Context;
pub use crate::error::{RenderError, Result};
pub use crate::hooks::merged_refs::{MergedRefs, merge_refs};
pub use crate::hooks::previous::Previous;
pub use crate::hooks::with_context::{WithContext, with_context};
pub use crate::refs::{NodeRef, RefHandle};
pub use crate::view::{ElementView, IntoView, View};
