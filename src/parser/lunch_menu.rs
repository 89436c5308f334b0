use scraper::Html;

use crate::schema::{LunchEntry, LunchMenu};

pub fn parse(html: &Html) -> LunchMenu {
    // No table means no lunch served that week.
    if html
        .select(selector!("#lunchmenu_con_content > table"))
        .next()
        .is_none()
    {
        return LunchMenu::default();
    }

    let heading = html
        .select(selector!(
            "#lunchmenu_con > div:nth-of-type(1) > div:nth-of-type(2)"
        ))
        .next()
        .map(|node| node.inner_html())
        .unwrap_or_default();

    let dates = html
        .select(selector!("div.h3_bold"))
        .map(|node| node.inner_html());
    let lunches = html
        .select(selector!(r#"td[style="word-wrap: break-word"]"#))
        .map(|node| node.inner_html());
    // The page emits the date headings and the lunch cells as two flat
    // lists of equal length in matching order.  That pairing is the
    // portal's contract; zip degrades to the shorter list if it breaks.
    let menu = dates
        .zip(lunches)
        .map(|(title, lunch)| LunchEntry::builder().title(title).lunch(lunch).build())
        .collect();

    LunchMenu::builder().heading(heading).menu(menu).build()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::parse;

    const WEEK_39: &str = r#"
        <div id="lunchmenu_con">
            <div>
                <div>Vecka 39</div>
                <div>Lunch menu 39, 27 sep - 1 okt</div>
            </div>
            <div id="lunchmenu_con_content">
                <table>
                    <tbody>
                        <tr><td><div class="h3_bold">Måndag 27 sep</div></td></tr>
                        <tr><td style="word-wrap: break-word">Köttbullar med potatismos</td></tr>
                        <tr><td><div class="h3_bold">Tisdag 28 sep</div></td></tr>
                        <tr><td style="word-wrap: break-word">Fiskgratäng<br>Vegetarisk lasagne</td></tr>
                    </tbody>
                </table>
            </div>
        </div>
    "#;

    #[test]
    fn pairs_dates_with_lunches_in_page_order() {
        let menu = parse(&Html::parse_document(WEEK_39));
        assert_eq!(menu.heading(), "Lunch menu 39, 27 sep - 1 okt");
        assert_eq!(menu.menu().len(), 2);
        assert_eq!(menu.menu()[0].title(), "Måndag 27 sep");
        assert_eq!(menu.menu()[0].lunch(), "Köttbullar med potatismos");
        assert_eq!(menu.menu()[1].lunch(), "Fiskgratäng<br>Vegetarisk lasagne");
    }

    #[test]
    fn week_without_lunch_yields_empty_shape() {
        let html = Html::parse_document(
            r#"<div id="lunchmenu_con"><div><div></div><div></div></div>
               <div id="lunchmenu_con_content"></div></div>"#,
        );
        let menu = parse(&html);
        assert_eq!(menu.heading(), "");
        assert!(menu.menu().is_empty());
    }
}
