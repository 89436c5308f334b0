use scraper::{ElementRef, Html};

use crate::parser::accordion::{field, rich_text};
use crate::schema::{PlanningEntry, SubjectPlanning, WeeklyPlanning};

/// One block per subject, each holding its own accordion of week entries.
/// The container also carries an inline script tag, which is skipped.
pub fn parse(html: &Html) -> WeeklyPlanning {
    let Some(container) = html
        .select(selector!(
            "#content > div > div:nth-of-type(2) > div:nth-of-type(2) > div > div"
        ))
        .next()
    else {
        return Vec::new();
    };
    container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|node| node.value().name() != "script")
        .map(parse_subject)
        .collect()
}

fn parse_subject(subject: ElementRef) -> SubjectPlanning {
    // The title cell reads "Course code - Subject name"; keep the last piece.
    let title = field(subject, selector!("div:nth-child(1) > div:nth-child(2)"));
    let name = title.rsplit(" - ").next().unwrap_or_default().to_owned();
    let planning = subject
        .select(selector!("#accordion"))
        .next()
        .map(parse_entries)
        .unwrap_or_default();
    SubjectPlanning::builder()
        .subject(name)
        .planning(planning)
        .build()
}

fn parse_entries(list: ElementRef) -> Vec<PlanningEntry> {
    list.children()
        .filter_map(ElementRef::wrap)
        .map(parse_entry)
        .collect()
}

fn parse_entry(entry: ElementRef) -> PlanningEntry {
    let week_label = field(entry, selector!(".accordion-heading-left div:nth-child(1)"));
    let week = week_label
        .split(' ')
        .next_back()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0);
    let duration = field(entry, selector!(".accordion-heading-date-wide"));
    let content = entry
        .select(selector!(".accordion_text"))
        .next()
        .map(rich_text)
        .unwrap_or_default();
    PlanningEntry::builder()
        .week(week)
        .duration(duration)
        .content(content)
        .build()
}
