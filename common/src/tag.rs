//! Selectable filter tags and dropdown option helpers.

use serde::{Deserialize, Serialize};


/// A labeled filter value. Uniqueness is by `id` within one option list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Options a dropdown may still offer: the full option list minus entries
/// whose id is already selected.
pub fn available_options(options: &[Tag], selected: &[Tag]) -> Vec<Tag> {
    options
        .iter()
        .filter(|opt| !selected.iter().any(|sel| sel.id == opt.id))
        .cloned()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<Tag> {
        vec![
            Tag::new("1", "Public law"),
            Tag::new("2", "Drug law"),
            Tag::new("3", "Criminal law"),
        ]
    }

    #[test]
    fn nothing_selected_offers_everything() {
        let opts = options();
        assert_eq!(available_options(&opts, &[]), opts);
    }

    #[test]
    fn selected_ids_are_excluded() {
        let opts = options();
        let selected = vec![Tag::new("2", "Drug law")];
        let available = available_options(&opts, &selected);
        assert_eq!(available.len(), 2);
        assert!(available.iter().all(|t| t.id != "2"));
    }

    #[test]
    fn dropdown_and_selection_stay_disjoint() {
        let opts = options();
        let selected = vec![Tag::new("1", "Public law"), Tag::new("3", "Criminal law")];
        let available = available_options(&opts, &selected);
        for tag in &available {
            assert!(!selected.iter().any(|sel| sel.id == tag.id));
        }
        assert_eq!(available, vec![Tag::new("2", "Drug law")]);
    }

    #[test]
    fn exclusion_matches_on_id_not_label() {
        let opts = options();
        // same id, different label text: still excluded
        let selected = vec![Tag::new("1", "renamed")];
        let available = available_options(&opts, &selected);
        assert!(available.iter().all(|t| t.id != "1"));
    }
}
