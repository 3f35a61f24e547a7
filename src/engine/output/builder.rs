//! Ordered fragment concatenation shared by every synthesizer.

use crate::catalog::Template;
use crate::postprocessing::formatter::clean;

#[derive(Debug, Default, Clone)]
pub struct PromptBuilder {
    prompt: String,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_with(text: &str) -> Self {
        Self {
            prompt: text.to_string(),
        }
    }

    pub fn push(&mut self, text: &str) -> &mut Self {
        self.prompt.push_str(text);
        self
    }

    /// Appends `text` followed by a single space.
    pub fn sentence(&mut self, text: &str) -> &mut Self {
        self.prompt.push_str(text);
        self.prompt.push(' ');
        self
    }

    /// Starts a new paragraph.
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        self.prompt.push_str("\n\n");
        self.prompt.push_str(text);
        self
    }

    pub fn line(&mut self, text: &str) -> &mut Self {
        self.prompt.push('\n');
        self.prompt.push_str(text);
        self
    }

    /// Appends `items` as a comma-separated tail, nothing when empty.
    pub fn list(&mut self, items: &[&str]) -> &mut Self {
        if !items.is_empty() {
            self.prompt.push_str(", ");
            self.prompt.push_str(&items.join(", "));
        }
        self
    }

    /// Adds the matched template as its own paragraph.
    pub fn reference(&mut self, template: Option<&Template>) -> &mut Self {
        if let Some(template) = template {
            self.paragraph(&reference_block(template));
        }
        self
    }

    /// Replaces the accumulated text with `f(text)`.
    pub fn wrap(&mut self, f: impl FnOnce(&str) -> String) -> &mut Self {
        self.prompt = f(&self.prompt);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.prompt
    }

    pub fn finish(self) -> String {
        clean(&self.prompt)
    }
}

pub fn reference_block(template: &Template) -> String {
    format!(
        "Reference template ({}):\n{}",
        template.name, template.template
    )
}
