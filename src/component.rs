//! Render capability for components.
//!
//! A component is anything that can turn props into a [`View`]. Two forms
//! satisfy the capability:
//!
//! - **Function-form**: any `Fn(P) -> View` closure or function, via the
//!   blanket implementation below.
//! - **Class-form**: a struct carrying its own state that implements
//!   [`Render`] directly.
//!
//! Code that accepts `impl Render<P>` works identically with both.

use crate::error::Result;
use crate::view::View;

/// Capability for rendering props into a view.
///
/// # Example
///
/// ```ignore
/// use view_hooks::{ElementView, IntoView, Render, Result, View};
///
/// struct Greeting {
///     punctuation: char,
/// }
///
/// impl Render<String> for Greeting {
///     fn render(&self, name: String) -> Result<View> {
///         Ok(ElementView::new("div")
///             .child(format!("Hello, {}{}", name, self.punctuation))
///             .into_view())
///     }
/// }
///
/// // The function-form equivalent:
/// let greeting = |name: String| {
///     ElementView::new("div")
///         .child(format!("Hello, {}!", name))
///         .into_view()
/// };
/// ```
pub trait Render<P> {
	/// Renders the component with the given props.
	fn render(&self, props: P) -> Result<View>;
}

/// Function-form components: any `Fn(P) -> View` is a component.
impl<P, F> Render<P> for F
where
	F: Fn(P) -> View,
{
	fn render(&self, props: P) -> Result<View> {
		Ok(self(props))
	}
}

/// A boxed component for dynamic dispatch.
pub type BoxRender<P> = Box<dyn Render<P>>;

impl<P> Render<P> for BoxRender<P> {
	fn render(&self, props: P) -> Result<View> {
		(**self).render(props)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::{ElementView, IntoView};

	struct ClassComponent {
		prefix: &'static str,
	}

	impl Render<String> for ClassComponent {
		fn render(&self, props: String) -> Result<View> {
			Ok(ElementView::new("span")
				.child(format!("{}{}", self.prefix, props))
				.into_view())
		}
	}

	#[test]
	fn test_class_form_render() {
		let comp = ClassComponent { prefix: "id: " };
		let view = comp.render("42".to_string()).unwrap();
		assert_eq!(view.render_to_string(), "<span>id: 42</span>");
	}

	#[test]
	fn test_function_form_render() {
		let comp = |props: String| ElementView::new("span").child(props).into_view();
		let view = comp.render("hi".to_string()).unwrap();
		assert_eq!(view.render_to_string(), "<span>hi</span>");
	}

	#[test]
	fn test_fn_item_render() {
		fn plain(props: &'static str) -> View {
			ElementView::new("p").child(props).into_view()
		}
		let view = plain.render("text").unwrap();
		assert_eq!(view.render_to_string(), "<p>text</p>");
	}

	#[test]
	fn test_box_render() {
		let boxed: BoxRender<String> = Box::new(ClassComponent { prefix: "" });
		let view = boxed.render("dyn".to_string()).unwrap();
		assert_eq!(view.render_to_string(), "<span>dyn</span>");
	}
}
