//! Template-driven text renderer.

use minijinja::Environment;
use thiserror::Error;

use super::ListView;

/// Built-in list template.
pub const DEFAULT_LIST_TEMPLATE: &str = "\
Tasks Todo
{% for row in rows %}{{ row.position }}. {{ row.marker }} \
{% if row.done %}{{ row.text | strike }}{% else %}{{ row.text }}{% endif %}  <{{ row.toggle_label }}>
{% else %}(nothing to do)
{% endfor %}[{{ toggle_all_label }}] {{ remaining }} remaining
";

const COMBINING_LONG_STROKE: char = '\u{0336}';

/// Errors raised while compiling or rendering a list template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template failed to compile or evaluate.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders a [`ListView`] to text.
#[derive(Debug)]
pub struct TextRenderer {
    environment: Environment<'static>,
    template: String,
}

impl TextRenderer {
    /// Creates a renderer using [`DEFAULT_LIST_TEMPLATE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: build_environment(),
            template: DEFAULT_LIST_TEMPLATE.to_owned(),
        }
    }

    /// Creates a renderer using a custom template.
    ///
    /// The template sees `rows`, `remaining` and `toggle_all_label`, and may
    /// use the `strike` filter.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when the template does not compile.
    pub fn with_template(template: impl Into<String>) -> Result<Self, RenderError> {
        let environment = build_environment();
        let source = template.into();
        environment.template_from_str(&source)?;
        Ok(Self {
            environment,
            template: source,
        })
    }

    /// Renders `view`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when evaluation fails.
    pub fn render(&self, view: &ListView) -> Result<String, RenderError> {
        Ok(self.environment.render_str(&self.template, view)?)
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_environment() -> Environment<'static> {
    let mut environment = Environment::new();
    environment.add_filter("strike", strike);
    environment
}

/// Applies a combining long stroke to every character of `value`.
#[must_use]
pub fn strike(value: &str) -> String {
    let mut struck = String::with_capacity(value.len() * 3);
    for ch in value.chars() {
        struck.push(ch);
        struck.push(COMBINING_LONG_STROKE);
    }
    struck
}
