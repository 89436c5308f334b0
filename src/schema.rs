//! Record types returned by the façade, one per portal page.
//!
//! Every string field carries the raw inner HTML of the node it was
//! extracted from, exactly as the portal served it at fetch time.
//! Serialized field names (`type`, `new`) follow the portal's historical
//! JSON shape.

use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Clone, Default, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct LunchMenu {
    heading: String,
    menu: Vec<LunchEntry>,
}

/// One weekday's lunch; `title` is the date heading it was paired with.
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct LunchEntry {
    title: String,
    lunch: String,
}

pub type News = Vec<NewsCategory>;

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct NewsCategory {
    category: String,
    news: Vec<NewsItem>,
}

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct NewsItem {
    heading: String,
    content: String,
    date: String,
    from: String,
    to: String,
}

#[derive(Clone, Default, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Assignments {
    upcoming: Vec<Assignment>,
    old: Vec<Assignment>,
}

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, CopyGetters, Getters, Serialize, Deserialize)]
pub struct Assignment {
    #[getset(get = "pub")]
    heading: String,
    #[getset(get = "pub")]
    content: String,
    #[getset(get = "pub")]
    date: String,
    #[getset(get = "pub")]
    lesson: String,
    #[getset(get = "pub")]
    teacher: String,
    #[getset(get = "pub")]
    #[serde(rename = "type")]
    kind: String,
    #[getset(get_copy = "pub")]
    id: u32,
}

#[derive(Clone, Default, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Results {
    #[serde(rename = "new")]
    recent: Vec<ResultEntry>,
    old: Vec<ResultEntry>,
}

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, CopyGetters, Getters, Serialize, Deserialize)]
pub struct ResultEntry {
    #[getset(get = "pub")]
    heading: String,
    #[getset(get = "pub")]
    comment: String,
    #[getset(get = "pub")]
    description: String,
    #[getset(get = "pub")]
    date: String,
    #[getset(get = "pub")]
    lesson: String,
    #[getset(get = "pub")]
    teacher: String,
    #[getset(get = "pub")]
    #[serde(rename = "type")]
    kind: String,
    #[getset(get_copy = "pub")]
    id: u32,
}

pub type WeeklyPlanning = Vec<SubjectPlanning>;

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct SubjectPlanning {
    subject: String,
    planning: Vec<PlanningEntry>,
}

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, CopyGetters, Getters, Serialize, Deserialize)]
pub struct PlanningEntry {
    #[getset(get_copy = "pub")]
    week: u32,
    #[getset(get = "pub")]
    duration: String,
    #[getset(get = "pub")]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lunch_menu_shape() {
        let menu = LunchMenu::default();
        assert_eq!(menu.heading(), "");
        assert!(menu.menu().is_empty());
    }

    #[test]
    fn assignment_serializes_with_portal_field_names() {
        let assignment = Assignment::builder()
            .heading("Glosor".to_owned())
            .content("<p>Kapitel 3</p>\n".to_owned())
            .date("v. 40".to_owned())
            .lesson("Engelska".to_owned())
            .teacher("EK".to_owned())
            .kind("Läxförhör".to_owned())
            .id(4711)
            .build();
        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(
            json,
            r#"{"heading":"Glosor","content":"<p>Kapitel 3</p>\n","date":"v. 40","lesson":"Engelska","teacher":"EK","type":"Läxförhör","id":4711}"#
        );
    }

    #[test]
    fn results_serialize_new_and_old_groups() {
        let json = serde_json::to_string(&Results::default()).unwrap();
        assert_eq!(json, r#"{"new":[],"old":[]}"#);
    }
}
