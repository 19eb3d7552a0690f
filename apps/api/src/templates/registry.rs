//! Template catalog.

use std::collections::BTreeMap;

use crate::errors::AppError;

use super::circuit::Circuit;
use super::ivory::Ivory;
use super::sapphire::Sapphire;
use super::{ResumeTemplate, TemplateMeta};

/// Registry of the built-in template skins, keyed by template id. Ordered so
/// the catalog listing is stable.
pub struct TemplateRegistry {
    templates: BTreeMap<&'static str, Box<dyn ResumeTemplate>>,
}

impl TemplateRegistry {
    pub fn with_builtins() -> Self {
        let mut templates: BTreeMap<&'static str, Box<dyn ResumeTemplate>> = BTreeMap::new();
        for tpl in [
            Box::new(Ivory) as Box<dyn ResumeTemplate>,
            Box::new(Sapphire),
            Box::new(Circuit),
        ] {
            templates.insert(tpl.meta().id, tpl);
        }
        Self { templates }
    }

    pub fn list(&self) -> Vec<&'static TemplateMeta> {
        self.templates.values().map(|t| t.meta()).collect()
    }

    pub fn get(&self, id: &str) -> Result<&dyn ResumeTemplate, AppError> {
        self.templates
            .get(id)
            .map(|t| t.as_ref())
            .ok_or_else(|| AppError::NotFound(format!("unknown template '{id}'")))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_listed_in_stable_order() {
        let reg = TemplateRegistry::with_builtins();
        let ids: Vec<&str> = reg.list().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["circuit", "ivory", "sapphire"]);
    }

    #[test]
    fn test_get_known_and_unknown() {
        let reg = TemplateRegistry::with_builtins();
        assert_eq!(reg.get("ivory").unwrap().meta().name, "Ivory");
        assert!(matches!(reg.get("nope"), Err(AppError::NotFound(_))));
    }
}
