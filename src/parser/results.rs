use itertools::Itertools;
use scraper::{ElementRef, Html};

use crate::parser::accordion::{entry_id, field, rich_text};
use crate::schema::{ResultEntry, Results};

/// Same accordion layout as the assignments page: the first list holds new
/// results, the second old ones.
pub fn parse(html: &Html) -> Results {
    let Some(container) = html.select(selector!("#result_con_content")).next() else {
        return Results::default();
    };
    let lists = container.select(selector!("#accordion")).collect_vec();
    let recent = lists.first().map(|list| parse_entries(*list)).unwrap_or_default();
    let old = lists.get(1).map(|list| parse_entries(*list)).unwrap_or_default();
    Results::builder().recent(recent).old(old).build()
}

fn parse_entries(list: ElementRef) -> Vec<ResultEntry> {
    list.children()
        .filter_map(ElementRef::wrap)
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: ElementRef) -> ResultEntry {
    let date = field(entry, selector!(".accordion-heading-left div:nth-child(1)"));
    // The heading cell packs "Lesson - Heading" into one node.
    let heading_cell = field(entry, selector!(".accordion-heading-left div:nth-child(2)"));
    let mut pieces = heading_cell.split(" - ");
    let lesson = pieces.next().unwrap_or_default().to_owned();
    let heading = pieces.next().unwrap_or_default().to_owned();

    let inner_left = entry.select(selector!(".accordion_inner_left")).next();
    let kind = inner_left
        .map(|node| field(node, selector!("div:nth-of-type(1)")))
        .unwrap_or_default();
    let comment = inner_left
        .map(|node| field(node, selector!("div:nth-of-type(3)")))
        .unwrap_or_default();
    let teacher = field(entry, selector!(".accordion_inner_right div:nth-of-type(4)"));
    let description = entry
        .select(selector!(".accordion_inner_right div:nth-child(1)"))
        .next()
        .map(rich_text)
        .unwrap_or_default();
    let id = entry_id(
        inner_left
            .and_then(|node| node.parent())
            .and_then(ElementRef::wrap)
            .and_then(|parent| parent.attr("id")),
    );

    ResultEntry::builder()
        .heading(heading)
        .comment(comment)
        .description(description)
        .date(date)
        .lesson(lesson)
        .teacher(teacher)
        .kind(kind)
        .id(id)
        .build()
}
