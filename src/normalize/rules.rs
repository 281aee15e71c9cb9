//! The strip/retain rule table

use crate::endpoint::EntityKind;

/// One strip/retain rule.
///
/// When a record of `entity_kind` contains `filtered_field`, each name in
/// `retained_subfields` is copied to `{filtered_field}_{subfield}` and the
/// field is then removed. `None` removes the field without hoisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterRule {
    pub entity_kind: EntityKind,
    pub filtered_field: &'static str,
    pub retained_subfields: Option<&'static [&'static str]>,
}

impl FilterRule {
    const fn new(
        entity_kind: EntityKind,
        filtered_field: &'static str,
        retained_subfields: Option<&'static [&'static str]>,
    ) -> Self {
        Self {
            entity_kind,
            filtered_field,
            retained_subfields,
        }
    }
}

const ID: Option<&[&str]> = Some(&["id"]);
const LABEL: Option<&[&str]> = Some(&["label"]);

/// Rules applied in this order. `labels` on issues is an array of objects
/// that would explode into `labels_N_*` columns, so it is dropped outright.
pub static FILTER_RULES: &[FilterRule] = &[
    FilterRule::new(EntityKind::Commits, "author", ID),
    FilterRule::new(EntityKind::Commits, "committer", ID),
    FilterRule::new(EntityKind::Issues, "labels", None),
    FilterRule::new(EntityKind::IssueComments, "user", ID),
    FilterRule::new(EntityKind::CommitComments, "user", ID),
    FilterRule::new(EntityKind::Repositories, "owner", ID),
    FilterRule::new(EntityKind::PullRequests, "assignee", ID),
    FilterRule::new(EntityKind::PullRequests, "milestone", ID),
    FilterRule::new(EntityKind::PullRequests, "head", LABEL),
    FilterRule::new(EntityKind::PullRequests, "base", LABEL),
    FilterRule::new(EntityKind::PullRequests, "user", ID),
];

/// Rules that apply to `kind`, in table order
pub fn rules_for(kind: EntityKind) -> impl Iterator<Item = &'static FilterRule> {
    FILTER_RULES
        .iter()
        .filter(move |rule| rule.entity_kind == kind)
}
