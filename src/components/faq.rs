use web_sys::MouseEvent;
use yew::prelude::*;

use crate::pages::content::FaqEntry;

/// Open/closed state of one accordion entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn answer_class(self) -> &'static str {
        if self.open {
            "faq-answer open"
        } else {
            "faq-answer"
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub entry: FaqEntry,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let disclosure = use_state(Disclosure::default);

    let toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            disclosure.set(disclosure.toggled());
        })
    };

    html! {
        <div class={classes!("faq-item", disclosure.is_open().then(|| "open"))}>
            <button class="faq-question" aria-expanded={disclosure.is_open().to_string()} onclick={toggle}>
                <h3 class="question-text">{props.entry.question}</h3>
                <svg class="toggle-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                </svg>
            </button>
            <div class={disclosure.answer_class()}>
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| html! {
                <FaqItem key={entry.question} entry={*entry} />
            }) }
        </div>
    }
}

/// Always-expanded FAQ used by the classic page.
#[function_component(StaticFaq)]
pub fn static_faq(props: &FaqListProps) -> Html {
    html! {
        <div class="classic-faq">
            { for props.entries.iter().map(|entry| html! {
                <div class="classic-card">
                    <h3>{entry.question}</h3>
                    <p>{entry.answer}</p>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::content::MODERN_FAQ;
    use crate::test_support::render;

    #[test]
    fn starts_closed_and_round_trips() {
        let initial = Disclosure::default();
        assert!(!initial.is_open());
        assert!(initial.toggled().is_open());
        assert_eq!(initial.toggled().toggled(), initial);
    }

    #[test]
    fn toggled_value_leaves_other_values_alone() {
        let mut items = vec![Disclosure::default(); MODERN_FAQ.len()];
        items[2] = items[2].toggled();

        assert!(items[2].is_open());
        for (i, item) in items.iter().enumerate().filter(|(i, _)| *i != 2) {
            assert!(!item.is_open(), "item {i} changed");
        }
    }

    #[test]
    fn duplicate_entries_render_as_separate_items() {
        const TWICE: &[FaqEntry] = &[
            FaqEntry { question: "Same question?", answer: "Same answer." },
            FaqEntry { question: "Same question?", answer: "Same answer." },
        ];
        let markup = render::<FaqList>(FaqListProps { entries: TWICE });
        assert_eq!(markup.matches("class=\"faq-item\"").count(), 2);
        assert_eq!(markup.matches("class=\"faq-answer\"").count(), 2);
        assert_eq!(markup.matches("aria-expanded=\"false\"").count(), 2);
    }

    #[test]
    fn answer_visibility_follows_state() {
        let closed = Disclosure::default();
        assert_eq!(closed.answer_class(), "faq-answer");
        assert_eq!(closed.toggled().answer_class(), "faq-answer open");
    }

    #[test]
    fn list_renders_every_question_collapsed() {
        let markup = render::<FaqList>(FaqListProps { entries: MODERN_FAQ });

        for entry in MODERN_FAQ {
            assert!(markup.contains(entry.question));
        }
        assert_eq!(markup.matches("class=\"faq-item\"").count(), MODERN_FAQ.len());
        assert!(!markup.contains("faq-answer open"));
    }
}
