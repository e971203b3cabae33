//! Binding a context value into a wrapped component's props.
//!
//! [`with_context`] wraps a target component so that, per render, the current
//! value on a [`Context`] channel is combined with the wrapper's own incoming
//! props by a caller-supplied pure transformation, and the target component
//! is rendered with the result. The wrapper is itself a component
//! ([`Render`]), so it composes like any other.

use crate::component::Render;
use crate::context::Context;
use crate::error::{RenderError, Result};
use crate::view::View;

/// A component wrapping another component behind a context-fed props
/// transformation.
///
/// Built by [`with_context`]. For external props `EP`, the wrapper implements
/// `Render<EP>`: it reads the channel's current value, asserts a provider is
/// in scope (when asserting), computes the target props, and renders the
/// wrapped component with them.
///
/// ## Provider assertion
///
/// With assertion enabled, rendering with no provider in scope fails with
/// [`RenderError::MissingProvider`]. With assertion disabled, `None` is
/// passed through to the transformation and absence means whatever the
/// transformation decides. The flag defaults to `cfg!(debug_assertions)` and
/// is set explicitly with [`WithContext::assert_provider`].
pub struct WithContext<V: 'static, F, C> {
	context: Context<V>,
	get_props: F,
	wrapped: C,
	assert_provider: bool,
}

impl<V, F, C> WithContext<V, F, C> {
	/// Sets whether rendering without a provider in scope is an error.
	pub fn assert_provider(mut self, enabled: bool) -> Self {
		self.assert_provider = enabled;
		self
	}
}

/// Wraps `wrapped` so that the value on `context`, combined with incoming
/// props by `get_props`, produces the props `wrapped` renders with.
///
/// The transformation receives the context value as `Option<V>`: with the
/// provider assertion enabled (the `debug_assertions` default) it is always
/// `Some` by the time the transformation runs; with the assertion disabled a
/// missing provider silently passes `None` through.
///
/// # Example
///
/// ```ignore
/// use view_hooks::{Context, ElementView, IntoView, Render, with_context};
///
/// #[derive(Clone)]
/// struct Settings {
///     testing: bool,
/// }
///
/// struct Props {
///     yo: String,
///     testing: bool,
/// }
///
/// let settings: Context<Settings> = Context::new();
///
/// let bound = with_context(
///     settings.clone(),
///     |value: Option<Settings>, props: String| Props {
///         yo: props,
///         testing: value.map(|s| s.testing).unwrap_or(false),
///     },
///     |props: Props| {
///         ElementView::new("div")
///             .child(if props.testing { props.yo } else { "bye".to_string() })
///             .into_view()
///     },
/// );
///
/// settings.with(Settings { testing: true }, || {
///     let view = bound.render("hi".to_string()).unwrap();
///     assert_eq!(view.render_to_string(), "<div>hi</div>");
/// });
/// ```
pub fn with_context<V, EP, P, F, C>(context: Context<V>, get_props: F, wrapped: C) -> WithContext<V, F, C>
where
	V: Clone + 'static,
	F: Fn(Option<V>, EP) -> P,
	C: Render<P>,
{
	WithContext {
		context,
		get_props,
		wrapped,
		assert_provider: cfg!(debug_assertions),
	}
}

impl<V, EP, P, F, C> Render<EP> for WithContext<V, F, C>
where
	V: Clone + 'static,
	F: Fn(Option<V>, EP) -> P,
	C: Render<P>,
{
	fn render(&self, props: EP) -> Result<View> {
		let value = self.context.current();

		if value.is_none() {
			if self.assert_provider {
				return Err(RenderError::MissingProvider);
			}
			tracing::debug!("context-bound component rendered without a provider in scope");
		}

		let target_props = (self.get_props)(value, props);
		self.wrapped.render(target_props)
	}
}

impl<V, F, C> std::fmt::Debug for WithContext<V, F, C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WithContext")
			.field("context", &self.context)
			.field("assert_provider", &self.assert_provider)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::{ElementView, IntoView};

	#[derive(Clone)]
	struct Settings {
		testing: bool,
	}

	struct TargetProps {
		yo: String,
		testing: bool,
	}

	fn bind_props(value: Option<Settings>, yo: String) -> TargetProps {
		TargetProps {
			yo,
			testing: value.map(|s| s.testing).unwrap_or(false),
		}
	}

	fn target(props: TargetProps) -> View {
		ElementView::new("div")
			.child(if props.testing {
				props.yo
			} else {
				"bye".to_string()
			})
			.into_view()
	}

	// Class-form twin of `target`.
	struct TargetComponent;

	impl Render<TargetProps> for TargetComponent {
		fn render(&self, props: TargetProps) -> Result<View> {
			Ok(target(props))
		}
	}

	#[test]
	fn test_props_are_transformed() {
		let settings: Context<Settings> = Context::new();
		let bound = with_context(settings.clone(), bind_props, target);

		settings.with(Settings { testing: true }, || {
			let view = bound.render("hi".to_string()).unwrap();
			assert_eq!(view.render_to_string(), "<div>hi</div>");
		});
	}

	#[test]
	fn test_transformation_sees_both_inputs() {
		let settings: Context<Settings> = Context::new();
		let bound = with_context(settings.clone(), bind_props, target);

		settings.with(Settings { testing: false }, || {
			let view = bound.render("hi".to_string()).unwrap();
			assert_eq!(view.render_to_string(), "<div>bye</div>");
		});
	}

	#[test]
	fn test_missing_provider_is_error_when_asserting() {
		let settings: Context<Settings> = Context::new();
		let bound = with_context(settings, bind_props, target).assert_provider(true);

		let err = bound.render("hi".to_string()).unwrap_err();
		assert_eq!(err, RenderError::MissingProvider);
		assert_eq!(
			err.to_string(),
			"withContext must be used within a proper ContextProvider"
		);
	}

	#[test]
	fn test_missing_provider_passes_none_when_permissive() {
		let settings: Context<Settings> = Context::new();
		let bound = with_context(settings, bind_props, target).assert_provider(false);

		let view = bound.render("hi".to_string()).unwrap();
		assert_eq!(view.render_to_string(), "<div>bye</div>");
	}

	#[test]
	fn test_function_and_class_forms_agree() {
		let settings: Context<Settings> = Context::new();
		let function_form = with_context(settings.clone(), bind_props, target);
		let class_form = with_context(settings.clone(), bind_props, TargetComponent);

		settings.with(Settings { testing: true }, || {
			let a = function_form.render("hi".to_string()).unwrap();
			let b = class_form.render("hi".to_string()).unwrap();
			assert_eq!(a.render_to_string(), b.render_to_string());
		});
	}

	#[test]
	fn test_render_is_idempotent() {
		let settings: Context<Settings> = Context::new();
		let bound = with_context(settings.clone(), bind_props, target);

		settings.with(Settings { testing: true }, || {
			let first = bound.render("hi".to_string()).unwrap();
			let second = bound.render("hi".to_string()).unwrap();
			assert_eq!(first, second);
		});
	}

	#[test]
	fn test_wrapper_composes_as_component() {
		// The wrapper is itself a Render, so it can be wrapped again.
		let settings: Context<Settings> = Context::new();
		let inner = with_context(settings.clone(), bind_props, target);
		let outer = with_context(
			settings.clone(),
			|_value: Option<Settings>, props: String| props,
			inner,
		);

		settings.with(Settings { testing: true }, || {
			let view = outer.render("hi".to_string()).unwrap();
			assert_eq!(view.render_to_string(), "<div>hi</div>");
		});
	}
}
