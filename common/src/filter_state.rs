//! Filter panel state model and helpers.

use serde::{Deserialize, Serialize};

use crate::tag::Tag;


/// Product condition radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    New,
    Used,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::New, Condition::Used];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }
}

/// Cost radio group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CostOption {
    #[default]
    All,
    Free,
    Paid,
    Discounted,
}

impl CostOption {
    pub const ALL: [CostOption; 4] = [
        CostOption::All,
        CostOption::Free,
        CostOption::Paid,
        CostOption::Discounted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostOption::All => "All",
            CostOption::Free => "Free",
            CostOption::Paid => "Paid",
            CostOption::Discounted => "Discounted",
        }
    }
}

/// Date radio group. Option labels are kept exactly as the design hands
/// them over, even where they repeat the cost group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateOption {
    #[default]
    Today,
    Free,
    Paid,
}

impl DateOption {
    pub const ALL: [DateOption; 3] = [DateOption::Today, DateOption::Free, DateOption::Paid];

    pub fn label(&self) -> &'static str {
        match self {
            DateOption::Today => "Today",
            DateOption::Free => "Free",
            DateOption::Paid => "Paid",
        }
    }
}

/// The tag-based filter fields of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagField {
    Sectors,
    GoverningLaw,
    Languages,
    BookTypes,
    Version,
}

impl TagField {
    pub const ALL: [TagField; 5] = [
        TagField::Sectors,
        TagField::GoverningLaw,
        TagField::Languages,
        TagField::BookTypes,
        TagField::Version,
    ];
}

/// Full state of the product filter panel.
///
/// Defaults are the "nothing applied" state; every field resets to its
/// default through [`ProductFilterState::clear_all`]. Date strings carry the
/// native date-input format (`yyyy-mm-dd`), empty meaning unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilterState {
    pub author: String,
    pub seller: String,
    pub publish_date: String,
    pub date: String,
    pub sectors: Vec<Tag>,
    pub governing_law: Vec<Tag>,
    pub languages: Vec<Tag>,
    pub book_types: Vec<Tag>,
    pub version: Vec<Tag>,
    pub condition: Condition,
    pub cost: CostOption,
    pub date_option: DateOption,
    pub price: u8,
    pub star_rating: u8,
}

impl ProductFilterState {
    /// Number of currently-applied filters: every scalar field holding a
    /// non-default value, plus one per selected tag across all tag fields.
    pub fn applied_count(&self) -> usize {
        let scalars = [
            !self.author.is_empty(),
            !self.seller.is_empty(),
            !self.publish_date.is_empty(),
            !self.date.is_empty(),
            self.condition != Condition::New,
            self.cost != CostOption::All,
            self.date_option != DateOption::Today,
            self.price > 0,
            self.star_rating > 0,
        ];
        let scalar_count = scalars.iter().filter(|applied| **applied).count();
        let tag_count: usize = TagField::ALL
            .iter()
            .map(|field| self.tags(*field).len())
            .sum();
        scalar_count + tag_count
    }

    /// Reset every field to its default in one step.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn tags(&self, field: TagField) -> &[Tag] {
        match field {
            TagField::Sectors => &self.sectors,
            TagField::GoverningLaw => &self.governing_law,
            TagField::Languages => &self.languages,
            TagField::BookTypes => &self.book_types,
            TagField::Version => &self.version,
        }
    }

    fn tags_mut(&mut self, field: TagField) -> &mut Vec<Tag> {
        match field {
            TagField::Sectors => &mut self.sectors,
            TagField::GoverningLaw => &mut self.governing_law,
            TagField::Languages => &mut self.languages,
            TagField::BookTypes => &mut self.book_types,
            TagField::Version => &mut self.version,
        }
    }

    /// Select a tag for a field. An id that is already selected is left
    /// alone, keeping the selection disjoint from the dropdown.
    pub fn add_tag(&mut self, field: TagField, tag: Tag) {
        let selected = self.tags_mut(field);
        if selected.iter().any(|t| t.id == tag.id) {
            return;
        }
        selected.push(tag);
    }

    /// Deselect a tag by id. Unknown ids are a no-op.
    pub fn remove_tag(&mut self, field: TagField, id: &str) {
        self.tags_mut(field).retain(|t| t.id != id);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_nothing_applied() {
        let state = ProductFilterState::default();
        assert_eq!(state.applied_count(), 0);
        assert_eq!(state.condition, Condition::New);
        assert_eq!(state.cost, CostOption::All);
        assert_eq!(state.date_option, DateOption::Today);
        assert_eq!(state.price, 0);
        assert_eq!(state.star_rating, 0);
    }

    #[test]
    fn each_non_default_scalar_counts_once() {
        let mut state = ProductFilterState::default();
        state.author = "Austin Kelaina".to_string();
        assert_eq!(state.applied_count(), 1);
        state.seller = "Austin Kelaina".to_string();
        assert_eq!(state.applied_count(), 2);
        state.publish_date = "2024-01-15".to_string();
        assert_eq!(state.applied_count(), 3);
        state.date = "2024-02-01".to_string();
        assert_eq!(state.applied_count(), 4);
        state.condition = Condition::Used;
        assert_eq!(state.applied_count(), 5);
        state.cost = CostOption::Discounted;
        assert_eq!(state.applied_count(), 6);
        state.date_option = DateOption::Paid;
        assert_eq!(state.applied_count(), 7);
        state.price = 50;
        assert_eq!(state.applied_count(), 8);
        state.star_rating = 3;
        assert_eq!(state.applied_count(), 9);
    }

    #[test]
    fn selected_tags_count_individually() {
        let mut state = ProductFilterState::default();
        state.add_tag(TagField::Sectors, Tag::new("1", "Public law"));
        state.add_tag(TagField::Sectors, Tag::new("2", "Drug law"));
        state.add_tag(TagField::Languages, Tag::new("1", "English"));
        assert_eq!(state.applied_count(), 3);

        state.author = "x".to_string();
        assert_eq!(state.applied_count(), 4);
    }

    #[test]
    fn add_tag_ignores_already_selected_ids() {
        let mut state = ProductFilterState::default();
        state.add_tag(TagField::BookTypes, Tag::new("1", "E-book"));
        state.add_tag(TagField::BookTypes, Tag::new("1", "E-book"));
        assert_eq!(state.tags(TagField::BookTypes).len(), 1);
    }

    #[test]
    fn remove_tag_by_id() {
        let mut state = ProductFilterState::default();
        state.add_tag(TagField::GoverningLaw, Tag::new("1", "Public law"));
        state.add_tag(TagField::GoverningLaw, Tag::new("3", "Contract law"));

        state.remove_tag(TagField::GoverningLaw, "1");
        assert_eq!(
            state.tags(TagField::GoverningLaw),
            &[Tag::new("3", "Contract law")]
        );

        // unknown id: nothing changes
        state.remove_tag(TagField::GoverningLaw, "99");
        assert_eq!(state.tags(TagField::GoverningLaw).len(), 1);
    }

    #[test]
    fn tag_fields_are_independent() {
        let mut state = ProductFilterState::default();
        state.add_tag(TagField::Sectors, Tag::new("1", "Public law"));
        state.add_tag(TagField::GoverningLaw, Tag::new("1", "Public law"));

        state.remove_tag(TagField::Sectors, "1");
        assert!(state.tags(TagField::Sectors).is_empty());
        assert_eq!(state.tags(TagField::GoverningLaw).len(), 1);
    }

    #[test]
    fn clear_all_restores_defaults_and_is_idempotent() {
        let mut state = ProductFilterState {
            author: "a".to_string(),
            seller: "s".to_string(),
            publish_date: "2024-01-01".to_string(),
            date: "2024-06-30".to_string(),
            condition: Condition::Used,
            cost: CostOption::Free,
            date_option: DateOption::Free,
            price: 80,
            star_rating: 5,
            ..Default::default()
        };
        state.add_tag(TagField::Sectors, Tag::new("2", "Drug law"));
        assert!(state.applied_count() > 0);

        state.clear_all();
        assert_eq!(state, ProductFilterState::default());
        assert_eq!(state.applied_count(), 0);

        let cleared_once = state.clone();
        state.clear_all();
        assert_eq!(state, cleared_once);
    }

    #[test]
    fn used_condition_round_trips_through_clear_all() {
        let mut state = ProductFilterState::default();
        state.condition = Condition::Used;
        assert_eq!(state.applied_count(), 1);

        state.clear_all();
        assert_eq!(state.condition, Condition::New);
    }
}
