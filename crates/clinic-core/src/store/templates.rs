//! Template operations.

use tracing::{info, warn};

use super::{require, Store, StoreError, StoreResult};
use crate::models::{new_id, Template};
use crate::notice::Notice;

const NONE_PROTECTED: &str = "The 'None' template cannot be removed.";
const NONE_READ_ONLY: &str = "The 'None' template cannot be edited.";

impl Store {
    /// Create a template (empty id) or replace an existing one.
    pub fn save_template(&mut self, mut template: Template) -> StoreResult<Template> {
        if template.is_sentinel() {
            warn!("refused to edit the 'None' template");
            return Err(StoreError::ReadOnly(NONE_READ_ONLY.into()));
        }
        if !require(&[&template.name, &template.diagnosis]) {
            return Err(StoreError::IncompleteData(
                "Please enter a Template Name and a default Diagnosis.".into(),
            ));
        }

        let is_new = template.id.is_empty();
        if is_new {
            template.id = new_id("template");
        }
        let saved = template.clone();
        self.update(move |s| {
            if is_new {
                s.templates.push(saved);
            } else if let Some(slot) = s.templates.iter_mut().find(|t| t.id == saved.id) {
                *slot = saved;
            }
        });

        info!(template_id = %template.id, is_new, "saved template");
        let body = if is_new {
            "New template saved!"
        } else {
            "Template updated!"
        };
        self.notify(Notice::success("Success", body));
        Ok(template)
    }

    /// Remove a template. The "None" template is protected.
    pub fn delete_template(&mut self, id: &str) -> StoreResult<bool> {
        if self.current.template(id).is_some_and(Template::is_sentinel) {
            warn!("refused to delete the 'None' template");
            return Err(StoreError::Protected(NONE_PROTECTED.into()));
        }
        let removed = self.update(|s| {
            let before = s.templates.len();
            s.templates.retain(|t| t.id != id);
            s.templates.len() != before
        });
        self.notify(Notice::success("Deleted", "Template removed."));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Medicine, NONE_TEMPLATE_ID};

    fn migraine() -> Template {
        let mut template = Template {
            name: "Migraine".into(),
            diagnosis: "Migraine without aura".into(),
            ..Default::default()
        };
        template
            .add_medicine(Medicine {
                name: "Sumatriptan".into(),
                strength: "50mg".into(),
                ..Default::default()
            })
            .unwrap();
        template
    }

    #[test]
    fn test_save_new_template() {
        let mut store = Store::seeded();
        let template = store.save_template(migraine()).unwrap();
        assert!(template.id.starts_with("template_"));
        assert_eq!(store.snapshot().templates.len(), 4);
        assert_eq!(store.drain_notices()[0].body, "New template saved!");
    }

    #[test]
    fn test_update_template() {
        let mut store = Store::seeded();
        let mut fever = store.snapshot().template("template-fever").unwrap().clone();
        fever.diagnosis = "Viral Fever (Dengue ruled out)".into();
        store.save_template(fever).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.templates.len(), 3);
        assert_eq!(
            snapshot.template("template-fever").unwrap().diagnosis,
            "Viral Fever (Dengue ruled out)"
        );
        assert_eq!(store.drain_notices()[0].body, "Template updated!");
    }

    #[test]
    fn test_save_template_requires_name_and_diagnosis() {
        let mut store = Store::seeded();
        let mut template = migraine();
        template.diagnosis.clear();
        assert!(matches!(
            store.save_template(template),
            Err(StoreError::IncompleteData(_))
        ));
    }

    #[test]
    fn test_sentinel_is_protected() {
        let mut store = Store::seeded();
        assert_eq!(
            store.delete_template(NONE_TEMPLATE_ID),
            Err(StoreError::Protected(NONE_PROTECTED.into()))
        );

        let mut none = Template::none();
        none.diagnosis = "Anything".into();
        assert_eq!(
            store.save_template(none),
            Err(StoreError::ReadOnly(NONE_READ_ONLY.into()))
        );
        assert!(store.snapshot().template(NONE_TEMPLATE_ID).is_some());
    }

    #[test]
    fn test_sentinel_checked_before_required_fields() {
        let mut store = Store::seeded();
        assert_eq!(
            store.save_template(Template::none()),
            Err(StoreError::ReadOnly(NONE_READ_ONLY.into()))
        );
        assert_eq!(store.drain_notices().len(), 0);
    }

    #[test]
    fn test_delete_template() {
        let mut store = Store::seeded();
        assert_eq!(store.delete_template("template-cold"), Ok(true));
        assert!(store.snapshot().template("template-cold").is_none());
    }
}
