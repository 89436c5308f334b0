use itertools::Itertools;
use scraper::{ElementRef, Html};

use crate::parser::accordion::{field, rich_text};
use crate::schema::{News, NewsCategory, NewsItem};

/// News are grouped by category: a `h3_bold` heading node immediately
/// followed by a sibling container holding that category's items.
pub fn parse(html: &Html) -> News {
    let Some(container) = html.select(selector!("#news_con_content")).next() else {
        return Vec::new();
    };
    container
        .children()
        .filter_map(ElementRef::wrap)
        .tuple_windows()
        .filter(|(heading, _)| selector!("div.h3_bold").matches(heading))
        .map(|(heading, body)| {
            NewsCategory::builder()
                .category(heading.inner_html())
                .news(parse_items(body))
                .build()
        })
        .collect()
}

fn parse_items(body: ElementRef) -> Vec<NewsItem> {
    body.children()
        .filter_map(ElementRef::wrap)
        .map(parse_item)
        .collect()
}

fn parse_item(item: ElementRef) -> NewsItem {
    let heading = field(item, selector!(".accordion-heading-left div > span"));
    let content = item
        .select(selector!(".accordion_inner_left"))
        .next()
        .map(rich_text)
        .unwrap_or_default();
    let date = field(item, selector!(".accordion-heading-date-wide"));
    let from = field(item, selector!(".inner_right_info div:nth-child(2)"));
    let to = field(item, selector!(".inner_right_info div:nth-child(4)"));
    NewsItem::builder()
        .heading(heading)
        .content(content)
        .date(date)
        .from(from)
        .to(to)
        .build()
}
