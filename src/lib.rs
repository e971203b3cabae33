//! # view-hooks
//!
//! Interop hooks for component-based UIs: merging two reference handles into
//! one stable callback, retaining the previous render cycle's value, and
//! binding a shared contextual value into a wrapped component's props.
//!
//! The crate supplies the minimal primitives those hooks are contracts over:
//! a [`View`] output tree, the [`Render`] capability satisfied by both
//! function-form and class-form components, a [`Context`] channel,
//! identity-stable [`Callback`]s, and the two reference-handle shapes. The
//! host rendering engine keeps ownership of scheduling and commit.
//!
//! ## The three hooks
//!
//! - [`merge_refs`] / [`MergedRefs`]: a parent-forwarded handle and a local
//!   handle both want the rendered instance; fold them into one callback
//!   whose identity is stable across renders.
//! - [`Previous`]: expose the value a prop had on the prior completed render
//!   cycle.
//! - [`with_context`]: wrap a component so a context value plus incoming
//!   props are transformed into the props it actually receives, with a
//!   fail-fast assertion when no provider is in scope.
//!
//! ## Example
//!
//! ```ignore
//! use view_hooks::{Context, ElementView, IntoView, Render, with_context};
//!
//! #[derive(Clone)]
//! struct Theme {
//!     class: &'static str,
//! }
//!
//! struct PanelProps {
//!     label: String,
//!     class: &'static str,
//! }
//!
//! let theme: Context<Theme> = Context::new();
//!
//! let panel = with_context(
//!     theme.clone(),
//!     |value: Option<Theme>, label: String| PanelProps {
//!         label,
//!         class: value.map(|t| t.class).unwrap_or("plain"),
//!     },
//!     |props: PanelProps| {
//!         ElementView::new("section")
//!             .attr("class", props.class)
//!             .child(props.label)
//!             .into_view()
//!     },
//! );
//!
//! theme.with(Theme { class: "dark" }, || {
//!     let view = panel.render("Settings".to_string()).unwrap();
//!     assert_eq!(
//!         view.render_to_string(),
//!         "<section class=\"dark\">Settings</section>",
//!     );
//! });
//! ```
//!
//! ## Concurrency model
//!
//! Everything here is single-threaded and host-driven: cells and channels
//! share state through `Rc`, and no hook blocks, suspends, or retries. Each
//! hook instance belongs to one component instance and lives exactly as long
//! as it does.

pub mod callback;
pub mod component;
pub mod context;
pub mod error;
pub mod hooks;
pub mod memo;
pub mod refs;
pub mod view;

pub mod prelude;

pub use callback::Callback;
pub use component::{BoxRender, Render};
pub use context::{Context, ContextGuard};
pub use error::{RenderError, Result};
pub use hooks::merged_refs::{MergedRefs, merge_refs};
pub use hooks::previous::Previous;
pub use hooks::with_context::{WithContext, with_context};
pub use memo::MemoCell;
pub use refs::{NodeRef, RefHandle};
pub use view::{ElementView, IntoView, View};
