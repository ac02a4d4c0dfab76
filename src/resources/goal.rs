// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal resource: list, create, mark achieved and delete.

use super::{date, required, Achievable, Deletable, Resource};
use crate::controller::FieldStore;
use crate::error::Result;
use crate::models::{Goal, NewGoal};
use crate::time_utils::to_display_date;

pub struct GoalResource;

impl Resource for GoalResource {
    type Record = Goal;
    type Draft = NewGoal;

    const ENDPOINT: &'static str = "goals";
    const TITLE: &'static str = "Goal";
    const SINGULAR: &'static str = "goal";
    const PLURAL: &'static str = "goals";
    const FIELDS: &'static [&'static str] = &["description", "from", "to"];
    const EMPTY_MESSAGE: &'static str = "No goals available";

    fn parse_draft(fields: &FieldStore) -> Result<NewGoal> {
        Ok(NewGoal {
            description: required(fields, "description")?.to_string(),
            start_date: date(fields, "from")?,
            end_date: date(fields, "to")?,
        })
    }

    fn describe(goal: &Goal) -> Vec<String> {
        vec![
            goal.description.clone(),
            format!("From: {}", to_display_date(&goal.start_date)),
            format!("To: {}", to_display_date(&goal.end_date)),
            format!("Achieved: {}", if goal.achieved { "Yes" } else { "No" }),
        ]
    }
}

impl Achievable for GoalResource {}

impl Deletable for GoalResource {}
