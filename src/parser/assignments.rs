use itertools::Itertools;
use scraper::{ElementRef, Html};

use crate::parser::accordion::{entry_id, field, rich_text};
use crate::schema::{Assignment, Assignments};

/// The page pre-splits assignments into two accordion lists rendered in a
/// fixed order: upcoming first, old second.
pub fn parse(html: &Html) -> Assignments {
    let Some(container) = html.select(selector!("#test_con_content")).next() else {
        return Assignments::default();
    };
    let lists = container.select(selector!("#accordion")).collect_vec();
    let upcoming = lists.first().map(|list| parse_entries(*list)).unwrap_or_default();
    let old = lists.get(1).map(|list| parse_entries(*list)).unwrap_or_default();
    Assignments::builder().upcoming(upcoming).old(old).build()
}

fn parse_entries(list: ElementRef) -> Vec<Assignment> {
    list.children()
        .filter_map(ElementRef::wrap)
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: ElementRef) -> Assignment {
    let date = field(entry, selector!(".accordion-heading-left div:nth-child(1)"));
    let heading = field(entry, selector!(".accordion-heading-left div:nth-child(2)"));
    let kind = field(entry, selector!(".accordion-heading-right div:nth-child(1)"));
    let lesson = field(entry, selector!(".accordion-heading-right div:nth-child(2)"));

    let inner_left = entry.select(selector!(".accordion_inner_left")).next();
    let content = inner_left.map(rich_text).unwrap_or_default();
    let teacher = field(entry, selector!(".accordion_inner_right div:nth-of-type(2)"));
    let id = entry_id(
        inner_left
            .and_then(|node| node.parent())
            .and_then(ElementRef::wrap)
            .and_then(|parent| parent.attr("id")),
    );

    Assignment::builder()
        .heading(heading)
        .content(content)
        .date(date)
        .lesson(lesson)
        .teacher(teacher)
        .kind(kind)
        .id(id)
        .build()
}
