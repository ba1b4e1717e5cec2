use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlFormElement, KeyboardEvent};

use crate::config::ChromeConfig;
use crate::contact::{EmailParts, SITE_CONTACT};
use crate::dom;
use crate::error::Result;

pub const SUBJECT: &str = "Beta Access Request - I'm the Commish";
pub const NO_MESSAGE: &str = "No message provided";

/// Values read from the signup form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

impl SignupForm {
    pub fn body(&self) -> String {
        let message = self
            .message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(NO_MESSAGE);
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, message
        )
    }

    /// The draft is always addressed to `to`; the submitted email only
    /// shows up inside the body.
    pub fn mailto(&self, to: &EmailParts) -> String {
        format!(
            "{}?subject={}&body={}",
            to.mailto_href(),
            urlencoding::encode(SUBJECT),
            urlencoding::encode(&self.body())
        )
    }

    fn read(form: &HtmlFormElement) -> Result<Self> {
        let data = FormData::new_with_form(form)?;
        Ok(Self {
            name: data.get("name").as_string().unwrap_or_default(),
            email: data.get("email").as_string().unwrap_or_default(),
            message: data.get("message").as_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Form,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    pub panel: Panel,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            visible: false,
            panel: Panel::Form,
        }
    }
}

impl ModalState {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.panel = Panel::Form;
    }

    pub fn submitted(&mut self) {
        self.panel = Panel::Success;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Modal,
    OpenButton,
    OpenButtonHero,
    CloseButton,
    Form,
    SuccessPanel,
}

impl Target {
    pub fn selector(self) -> &'static str {
        match self {
            Target::Modal => "#beta-modal",
            Target::OpenButton => "#beta-signup-btn",
            Target::OpenButtonHero => "#beta-signup-btn-hero",
            Target::CloseButton => ".beta-modal-close",
            Target::Form => "#beta-signup-form",
            Target::SuccessPanel => "#beta-form-success",
        }
    }
}

/// The elements the modal binds to. Only the dialog root is required.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupTargets<E> {
    pub modal: E,
    pub open_buttons: Vec<E>,
    pub close_button: Option<E>,
    pub form: Option<E>,
    pub success: Option<E>,
}

impl<E> SignupTargets<E> {
    /// Returns `None` without looking anything else up when the dialog
    /// root is missing.
    pub fn resolve(mut find: impl FnMut(Target) -> Option<E>) -> Option<Self> {
        let modal = find(Target::Modal)?;
        let open_buttons = [Target::OpenButton, Target::OpenButtonHero]
            .into_iter()
            .filter_map(&mut find)
            .collect();
        Some(Self {
            modal,
            open_buttons,
            close_button: find(Target::CloseButton),
            form: find(Target::Form),
            success: find(Target::SuccessPanel),
        })
    }
}

struct BetaModal {
    targets: SignupTargets<Element>,
    state: RefCell<ModalState>,
    auto_close_ms: u32,
}

impl BetaModal {
    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn open(&self) {
        self.state.borrow_mut().open();
        self.render();
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        self.render();
    }

    fn render(&self) {
        let state = *self.state.borrow();
        dom::set_style(
            &self.targets.modal,
            "display",
            if state.visible { "flex" } else { "none" },
        );
        dom::lock_body_scroll(state.visible);

        if let Some(form) = &self.targets.form {
            let display = if state.panel == Panel::Form { "block" } else { "none" };
            dom::set_style(form, "display", display);
        }
        if let Some(success) = &self.targets.success {
            let display = if state.panel == Panel::Success { "block" } else { "none" };
            dom::set_style(success, "display", display);
        }
    }

    fn handle_submit(self: &Rc<Self>, form: &HtmlFormElement) -> Result<()> {
        let values = SignupForm::read(form)?;
        let href = values.mailto(&SITE_CONTACT);
        dom::window()?.location().set_href(&href)?;
        debug!("Handed beta signup to the mail client");

        self.state.borrow_mut().submitted();
        self.render();
        form.reset();

        // Not cancelled on a manual close; closing twice is harmless.
        let modal = Rc::clone(self);
        Timeout::new(self.auto_close_ms, move || modal.close()).forget();
        Ok(())
    }
}

pub fn init(document: &Document, config: &ChromeConfig) -> Result<()> {
    let Some(targets) = SignupTargets::resolve(|target| dom::query(document, target.selector())) else {
        warn!("Beta modal not found");
        return Ok(());
    };

    let modal = Rc::new(BetaModal {
        targets,
        state: RefCell::new(ModalState::default()),
        auto_close_ms: config.modal_auto_close_ms,
    });

    for button in &modal.targets.open_buttons {
        let modal = Rc::clone(&modal);
        dom::listen(button, "click", move |e| {
            e.prevent_default();
            modal.open();
        })?;
    }

    if let Some(close_button) = &modal.targets.close_button {
        let modal = Rc::clone(&modal);
        dom::listen(close_button, "click", move |e| {
            e.prevent_default();
            e.stop_propagation();
            modal.close();
        })?;
    }

    {
        let backdrop = modal.targets.modal.clone();
        let modal = Rc::clone(&modal);
        dom::listen(&backdrop.clone(), "click", move |e| {
            if dom::event_target_element(&e).as_ref() == Some(&backdrop) {
                modal.close();
            }
        })?;
    }

    {
        let modal = Rc::clone(&modal);
        dom::listen(document, "keydown", move |e| {
            if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
                if key.key() == "Escape" && modal.is_visible() {
                    modal.close();
                }
            }
        })?;
    }

    if let Some(form) = modal.targets.form.clone() {
        match form.dyn_into::<HtmlFormElement>() {
            Ok(form) => {
                let modal = Rc::clone(&modal);
                let form_handle = form.clone();
                dom::listen(&form, "submit", move |e| {
                    e.prevent_default();
                    if let Err(err) = modal.handle_submit(&form_handle) {
                        error!("Beta signup submit failed: {}", err);
                    }
                })?;
            }
            Err(_) => debug!("#beta-signup-form is not a <form>, submit not wired"),
        }
    }

    debug!("Beta signup modal wired");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(component: &str) -> String {
        urlencoding::decode(component).unwrap().into_owned()
    }

    fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
        let (_, query) = uri.split_once('?').unwrap();
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
            .unwrap()
    }

    fn ann(message: Option<&str>) -> SignupForm {
        SignupForm {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn body_embeds_fields_with_newlines() {
        let uri = ann(Some("Hi")).mailto(&SITE_CONTACT);
        assert_eq!(
            decode(query_param(&uri, "body")),
            "Name: Ann\nEmail: a@x.com\n\nMessage:\nHi"
        );
    }

    #[test]
    fn missing_message_uses_placeholder() {
        let uri = ann(None).mailto(&SITE_CONTACT);
        assert_eq!(
            decode(query_param(&uri, "body")),
            "Name: Ann\nEmail: a@x.com\n\nMessage:\nNo message provided"
        );
    }

    #[test]
    fn empty_message_uses_placeholder() {
        assert!(ann(Some("")).body().ends_with("Message:\nNo message provided"));
    }

    #[test]
    fn address_ignores_submitted_email() {
        let form = SignupForm {
            name: "Eve".to_string(),
            email: "eve@evil.example".to_string(),
            message: None,
        };
        let uri = form.mailto(&SITE_CONTACT);
        assert!(uri.starts_with("mailto:timdietrich@gmail.com?subject="));
        assert!(!uri.contains('\n'));
        assert!(!uri.contains(' '));
    }

    #[test]
    fn subject_round_trips() {
        let uri = ann(None).mailto(&SITE_CONTACT);
        assert_eq!(decode(query_param(&uri, "subject")), SUBJECT);
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut state = ModalState::default();
        state.open();
        state.open();
        assert!(state.visible);

        state.close();
        state.close();
        assert_eq!(state, ModalState::default());
    }

    #[test]
    fn close_restores_form_panel() {
        let mut state = ModalState::default();
        state.open();
        state.submitted();
        assert_eq!(state.panel, Panel::Success);

        state.close();
        assert_eq!(state, ModalState { visible: false, panel: Panel::Form });
    }

    #[test]
    fn missing_modal_resolves_nothing_else() {
        let mut lookups = Vec::new();
        let targets = SignupTargets::<&str>::resolve(|target| {
            lookups.push(target);
            None
        });
        assert!(targets.is_none());
        assert_eq!(lookups, vec![Target::Modal]);
    }

    #[test]
    fn optional_targets_are_skipped_individually() {
        let targets = SignupTargets::resolve(|target| match target {
            Target::Modal => Some("modal"),
            Target::OpenButtonHero => Some("hero"),
            Target::Form => Some("form"),
            _ => None,
        })
        .unwrap();
        assert_eq!(
            targets,
            SignupTargets {
                modal: "modal",
                open_buttons: vec!["hero"],
                close_button: None,
                form: Some("form"),
                success: None,
            }
        );
    }
}
