use std::sync::LazyLock;

use regex::Regex;

use super::pages::Page;

// "<name> (<year>), <rest>" where rest does not end in a digit.
// ASCII digits only so that table-of-contents page numbers are caught.
static MUSEUM_PAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\x0c?(.+?)\s+\(([0-9]{4})\),.*[^0-9]$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeading {
    pub name: String,
    pub last_updated: String,
}

/// Decide whether a page is a museum entry and pull the name and year from
/// its first line. Title, contents and index pages return `None`.
pub fn classify_page(page: &Page) -> Option<PageHeading> {
    let first = page.first()?;
    classify_line(first)
}

pub fn classify_line(line: &str) -> Option<PageHeading> {
    let caps = MUSEUM_PAGE_RE.captures(line)?;

    let ends_alphabetic = line
        .trim()
        .chars()
        .last()
        .is_some_and(|c| c.is_alphabetic());
    if !ends_alphabetic {
        return None;
    }

    Some(PageHeading {
        name: caps[1].to_string(),
        last_updated: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn museum_heading() {
        let h = classify_line("\x0cGrimmwelt (2015), Kassel, Germany").unwrap();
        assert_eq!(h.name, "Grimmwelt");
        assert_eq!(h.last_updated, "2015");
    }

    #[test]
    fn heading_without_form_feed() {
        let h = classify_line("Museu da Língua Portuguesa (2017), São Paulo, Brazil").unwrap();
        assert_eq!(h.name, "Museu da Língua Portuguesa");
        assert_eq!(h.last_updated, "2017");
    }

    #[test]
    fn name_is_non_greedy_prefix() {
        let h = classify_line("Mundolingua (Paris) (2016), France").unwrap();
        assert_eq!(h.name, "Mundolingua (Paris)");
        assert_eq!(h.last_updated, "2016");
    }

    #[test]
    fn toc_line_ending_in_page_number_rejected() {
        assert!(classify_line("\x0cGrimmwelt (2015), Kassel .......... 42").is_none());
        assert!(classify_line("Grimmwelt (2015), 42").is_none());
    }

    #[test]
    fn trailing_punctuation_rejected() {
        assert!(classify_line("Grimmwelt (2015), Kassel.").is_none());
        assert!(classify_line("Grimmwelt (2015), Kassel )").is_none());
    }

    #[test]
    fn trailing_whitespace_after_letter_accepted() {
        let h = classify_line("\x0cGrimmwelt (2015), Kassel, Germany   ").unwrap();
        assert_eq!(h.name, "Grimmwelt");
    }

    #[test]
    fn missing_year_or_comma_rejected() {
        assert!(classify_line("Language Museums of the World").is_none());
        assert!(classify_line("Grimmwelt (15), Kassel").is_none());
        assert!(classify_line("Grimmwelt (2015) Kassel").is_none());
    }

    #[test]
    fn empty_page_is_not_a_museum() {
        assert!(classify_page(&Vec::new()).is_none());
    }

    #[test]
    fn classifies_on_first_line_only() {
        let page = vec![
            "\x0cContents".to_string(),
            "Grimmwelt (2015), Kassel, Germany".to_string(),
        ];
        assert!(classify_page(&page).is_none());
    }
}
