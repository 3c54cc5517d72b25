//! Named collection of templates.

use crate::{
    error::{Result, SieError},
    template::Template,
};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct ChartOfTemplates {
    templates: IndexMap<String, Template>,
}

impl ChartOfTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// A template with an id already present replaces the earlier one.
    pub fn add_template(&mut self, template: Template) {
        self.templates.insert(template.id().to_string(), template);
    }

    pub fn drop_template(&mut self, id: &str) {
        self.templates.shift_remove(id);
    }

    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Returns a copy, so substituting into it leaves the stored template
    /// untouched.
    pub fn get_template(&self, id: &str) -> Result<Template> {
        self.templates
            .get(id)
            .cloned()
            .ok_or_else(|| SieError::TemplateNotFound { id: id.to_string() })
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }
}
