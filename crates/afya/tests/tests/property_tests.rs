#[path = "property/transition_rules.rs"]
mod transition_rules;

#[path = "property/score_bounds.rs"]
mod score_bounds;
