//! Contact address assembly.
//!
//! The address never appears as one literal in the page or the binary; it
//! is put together from fragments when needed. This only keeps naive
//! scrapers from lifting it out of the source text.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement};

use crate::dom;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts {
    pub user: &'static str,
    pub domain: &'static str,
    pub tld: &'static str,
}

pub const SITE_CONTACT: EmailParts = EmailParts {
    user: "timdietrich",
    domain: "gmail",
    tld: "com",
};

impl EmailParts {
    pub fn address(&self) -> String {
        format!("{}@{}.{}", self.user, self.domain, self.tld)
    }

    pub fn mailto_href(&self) -> String {
        format!("{}{}{}", "mail", "to:", self.address())
    }
}

/// Fills in `#email-link` and arms the click-to-reveal links on the
/// terms and privacy pages.
pub fn init(document: &Document) -> Result<()> {
    if let Some(link) = document.get_element_by_id("email-link") {
        link.set_attribute("href", &SITE_CONTACT.mailto_href())?;
    }

    for id in ["contact-email-tos", "contact-email-privacy"] {
        let Some(link) = document.get_element_by_id(id) else {
            continue;
        };
        let anchor = link.clone();
        dom::listen(&link, "click", move |e| {
            e.prevent_default();
            if let Some(anchor) = anchor.dyn_ref::<HtmlAnchorElement>() {
                anchor.set_href(&SITE_CONTACT.mailto_href());
            }
            anchor.set_text_content(Some(&SITE_CONTACT.address()));
        })?;
        debug!("Armed contact reveal on #{}", id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn address_is_assembled_from_fragments() {
        assert_eq!(SITE_CONTACT.address(), "timdietrich@gmail.com");
    }

    #[test]
    fn mailto_href_prefixes_scheme() {
        assert_eq!(SITE_CONTACT.mailto_href(), "mailto:timdietrich@gmail.com");
    }
}
