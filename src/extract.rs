use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::formats::BookRecord;

static CARD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.product_pod").expect("card selector"));
static TITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3 a").expect("title link selector"));
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".price_color").expect("price selector"));
static AVAILABILITY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".availability").expect("availability selector"));
static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.star-rating").expect("rating selector"));

/// Turns one listing page into records, one per book card.
///
/// Purely a transform over already-fetched HTML: a malformed or incomplete
/// card degrades to empty fields instead of failing the page.
pub fn extract_books(html: &str, page_url: &Url) -> Vec<BookRecord> {
    let document = Html::parse_document(html);

    document
        .select(&CARD)
        .map(|card| book_from_card(card, page_url))
        .collect()
}

fn book_from_card(card: ElementRef<'_>, page_url: &Url) -> BookRecord {
    let link = card.select(&TITLE_LINK).next();

    // The title attribute carries the untruncated title; the visible link
    // text is an elided fallback.
    let title = match link {
        Some(a) => a
            .value()
            .attr("title")
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| a.text().collect::<String>().trim().to_owned()),
        None => String::new(),
    };

    let detail_url = link
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| page_url.join(href).ok())
        .map(|url| url.to_string())
        .unwrap_or_default();

    let price_text = card
        .select(&PRICE)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .unwrap_or_default();

    let availability = card
        .select(&AVAILABILITY)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default();

    let rating = card
        .select(&RATING)
        .next()
        .map(rating_token)
        .unwrap_or_default();

    BookRecord {
        title,
        detail_url,
        price_text,
        availability,
        rating,
        list_page_url: page_url.to_string(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The star rating is encoded as a second class on the rating marker,
/// e.g. `class="star-rating Three"`.
fn rating_token(el: ElementRef<'_>) -> String {
    el.value()
        .classes()
        .find(|class| !class.eq_ignore_ascii_case("star-rating"))
        .map(str::to_owned)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("http://books.example/catalogue/page-2.html").expect("parse page url")
    }

    fn page_with_card(card: &str) -> String {
        format!("<html><body><section>{card}</section></body></html>")
    }

    fn single(html: &str) -> BookRecord {
        let records = extract_books(html, &page_url());
        assert_eq!(records.len(), 1, "expected exactly one card");
        records.into_iter().next().unwrap()
    }

    #[test]
    fn title_attribute_is_preferred_verbatim() {
        let html = page_with_card(
            r#"<article class="product_pod">
                 <h3><a href="a_1/index.html" title="The Full, Unelided Title">The Full, ...</a></h3>
               </article>"#,
        );
        assert_eq!(single(&html).title, "The Full, Unelided Title");
    }

    #[test]
    fn missing_title_attribute_falls_back_to_trimmed_link_text() {
        let html = page_with_card(
            r#"<article class="product_pod">
                 <h3><a href="a_1/index.html">
                   Sharp Objects
                 </a></h3>
               </article>"#,
        );
        assert_eq!(single(&html).title, "Sharp Objects");
    }

    #[test]
    fn missing_link_yields_empty_title_and_detail_url() {
        let html = page_with_card(r#"<article class="product_pod"><h3></h3></article>"#);
        let record = single(&html);
        assert_eq!(record.title, "");
        assert_eq!(record.detail_url, "");
    }

    #[test]
    fn relative_href_resolves_against_page_url() {
        let html = page_with_card(
            r#"<article class="product_pod">
                 <h3><a href="../books/a_1/index.html" title="A">A</a></h3>
               </article>"#,
        );
        assert_eq!(
            single(&html).detail_url,
            "http://books.example/books/a_1/index.html"
        );
    }

    #[test]
    fn availability_whitespace_is_collapsed_and_trimmed() {
        let html = page_with_card(
            "<article class=\"product_pod\">\
               <p class=\"instock availability\">\n\t  In stock \n (22\t available)\n  </p>\
             </article>",
        );
        let availability = single(&html).availability;
        assert_eq!(availability, "In stock (22 available)");
        assert!(!availability.contains("  "));
    }

    #[test]
    fn rating_token_is_the_non_marker_class_regardless_of_order() {
        for (classes, expected) in [
            ("star-rating Three", "Three"),
            ("Five star-rating", "Five"),
            ("star-rating STAR-RATING Two", "Two"),
            ("star-rating", ""),
        ] {
            let html = page_with_card(&format!(
                r#"<article class="product_pod"><p class="{classes}"></p></article>"#
            ));
            assert_eq!(single(&html).rating, expected, "classes: {classes}");
        }
    }

    #[test]
    fn missing_sub_elements_degrade_to_empty_fields() {
        let html = page_with_card(r#"<article class="product_pod"></article>"#);
        let record = single(&html);
        assert_eq!(record.price_text, "");
        assert_eq!(record.availability, "");
        assert_eq!(record.rating, "");
        assert_eq!(record.list_page_url, page_url().to_string());
    }

    #[test]
    fn page_without_cards_yields_no_records() {
        let records = extract_books("<html><body><p>404 Not Found</p></body></html>", &page_url());
        assert!(records.is_empty());
    }

    #[test]
    fn full_card_extracts_every_field() {
        let html = page_with_card(
            r#"<article class="product_pod">
                 <p class="star-rating One"></p>
                 <h3><a href="a_1/index.html" title="A Light in the Attic">A Light in ...</a></h3>
                 <div class="product_price">
                   <p class="price_color">£51.77</p>
                   <p class="instock availability">
                     In stock
                   </p>
                 </div>
               </article>"#,
        );
        let record = single(&html);
        assert_eq!(record.title, "A Light in the Attic");
        assert_eq!(
            record.detail_url,
            "http://books.example/catalogue/a_1/index.html"
        );
        assert_eq!(record.price_text, "£51.77");
        assert_eq!(record.availability, "In stock");
        assert_eq!(record.rating, "One");
        assert_eq!(
            record.list_page_url,
            "http://books.example/catalogue/page-2.html"
        );
    }
}
