use chrono::{Datelike, Local};
use web_sys::Document;

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn init(document: &Document) {
    if let Some(year) = document.get_element_by_id("copyright-year") {
        year.set_text_content(Some(&current_year().to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
