use std::sync::Arc;
use tera::Tera;

use crate::domain::signin::value_objects::{FieldErrors, Toast};

/// Template engine wrapper for rendering the screen's HTML
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  /// Create a new template engine instance
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec![".html.tera", ".html"]);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Render a template with the given context
  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }

  /// Builds the context every page template expects: a title plus empty
  /// error and toast slots, so templates never see undefined variables.
  pub fn page_context(title: &str) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("title", title);
    context.insert("errors", &FieldErrors::new());
    context.insert("toasts", &Vec::<Toast>::new());
    context
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_page_context_has_empty_slots() {
    let context = TemplateEngine::page_context("Login");

    assert_eq!(context.get("title").unwrap().as_str(), Some("Login"));
    assert!(context.get("errors").unwrap().as_object().unwrap().is_empty());
    assert!(context.get("toasts").unwrap().as_array().unwrap().is_empty());
  }
}
