use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{Document, Element, Window};

use crate::config::ChromeConfig;
use crate::dom;
use crate::error::Result;

/// A counter's text split around its first run of digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterText {
    pub prefix: String,
    pub digits: String,
    pub suffix: String,
    pub target: u64,
}

impl CounterText {
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let len = text[start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len() - start);
        let digits = &text[start..start + len];
        Some(Self {
            prefix: text[..start].to_string(),
            digits: digits.to_string(),
            suffix: text[start + len..].to_string(),
            target: digits.parse().ok()?,
        })
    }

    fn render(&self, value: u64) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }

    /// Text for each animation step. Intermediate values climb from 0 in
    /// equal increments; the last frame restores the original text.
    pub fn frames(&self, steps: u32) -> Vec<String> {
        let steps = u64::from(steps.max(1));
        let mut frames: Vec<String> = (1..steps)
            .map(|step| {
                let value = u128::from(self.target) * u128::from(step) / u128::from(steps);
                self.render(value as u64)
            })
            .collect();
        frames.push(format!("{}{}{}", self.prefix, self.digits, self.suffix));
        frames
    }
}

/// Schedules every frame of one counter up front, `step_ms` apart.
fn animate(element: &Element, counter: &CounterText, steps: u32, step_ms: u32) {
    for (step, frame) in counter.frames(steps).into_iter().enumerate() {
        let element = element.clone();
        let delay = step_ms.saturating_mul(step as u32 + 1);
        Timeout::new(delay, move || element.set_text_content(Some(&frame))).forget();
    }
}

pub fn init(window: &Window, document: &Document, config: &ChromeConfig) -> Result<()> {
    let numbers = dom::query_all(document, ".highlight-number");
    let Some(about) = dom::query(document, ".about") else {
        return Ok(());
    };
    if numbers.is_empty() {
        return Ok(());
    }

    let has_animated = Rc::new(Cell::new(false));
    let config = *config;
    let win = window.clone();
    dom::listen_passive(window, "scroll", move |_| {
        if has_animated.get() {
            return;
        }
        if dom::viewport_top(&about) >= dom::viewport_height(&win) - config.counter_margin {
            return;
        }
        has_animated.set(true);

        for number in &numbers {
            let text = number.text_content().unwrap_or_default();
            match CounterText::parse(&text) {
                Some(counter) => animate(number, &counter, config.counter_steps, config.counter_step_ms()),
                None => debug!("Counter text {:?} has no number, left as is", text),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn leading_number(frame: &str) -> u64 {
        frame
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap()
    }

    #[test]
    fn parses_suffix() {
        assert_eq!(
            CounterText::parse("150+"),
            Some(CounterText {
                prefix: String::new(),
                digits: "150".to_string(),
                suffix: "+".to_string(),
                target: 150,
            })
        );
    }

    #[test]
    fn parses_prefix_and_only_first_number() {
        let counter = CounterText::parse("$25M in 3 years").unwrap();
        assert_eq!(counter.prefix, "$");
        assert_eq!(counter.target, 25);
        assert_eq!(counter.suffix, "M in 3 years");
    }

    #[test]
    fn text_without_digits_is_not_a_counter() {
        assert_eq!(CounterText::parse("many"), None);
        assert_eq!(CounterText::parse(""), None);
    }

    #[test]
    fn ends_on_exact_original_text() {
        let frames = CounterText::parse("150+").unwrap().frames(30);
        assert_eq!(frames.len(), 30);
        assert_eq!(frames.last().map(String::as_str), Some("150+"));
        assert!(frames.iter().all(|frame| frame.ends_with('+') && !frame.ends_with("++")));
    }

    #[test]
    fn intermediate_values_never_decrease() {
        let frames = CounterText::parse("150+").unwrap().frames(30);
        let values: Vec<u64> = frames.iter().map(|frame| leading_number(frame)).collect();
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(values[0], 5);
    }

    #[test]
    fn small_targets_still_take_every_step() {
        let frames = CounterText::parse("3").unwrap().frames(30);
        assert_eq!(frames.len(), 30);
        assert_eq!(frames[0], "0");
        assert_eq!(frames[29], "3");
    }
}
