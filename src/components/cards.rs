use yew::prelude::*;

use crate::components::counter::format_count;
use crate::pages::content::{Feature, ProcessStepInfo, SavingsExample, Step, Testimonial};

const STAR_PATH: &str = "M10 15l-5.878 3.09 1.123-6.545L.489 6.91l6.572-.955L10 0l2.939 5.955 6.572.955-4.756 4.635 1.123 6.545z";

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;
    html! {
        <div class="feature-card" style={format!("animation-delay: {}ms;", feature.delay_ms)}>
            <div class="feature-glow"></div>
            <div class="feature-body">
                <div class="feature-icon">{feature.icon}</div>
                <h3>{feature.title}</h3>
                <p>{feature.description}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessStepProps {
    pub step: ProcessStepInfo,
    #[prop_or_default]
    pub is_last: bool,
}

#[function_component(ProcessStep)]
pub fn process_step(props: &ProcessStepProps) -> Html {
    let step = &props.step;
    html! {
        <div class="process-step">
            <div class="step-marker">
                <div class="step-number">{step.number}</div>
                if !props.is_last {
                    <div class="step-connector"></div>
                }
            </div>
            <div class="step-body">
                <h3>{step.title}</h3>
                <p>{step.description}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    let initial = testimonial.author.chars().next().map(String::from).unwrap_or_default();

    html! {
        <div class="testimonial-card">
            <div class="stars">
                { for (0..testimonial.rating).map(|_| html! {
                    <svg class="star" viewBox="0 0 20 20"><path d={STAR_PATH} /></svg>
                }) }
            </div>
            <p class="quote">{format!("\"{}\"", testimonial.quote)}</p>
            <div class="author">
                <div class="avatar">{initial}</div>
                <div>
                    <p class="author-name">{testimonial.author}</p>
                    <p class="author-role">{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}

pub fn savings_text(savings: u64) -> String {
    format!("${}", format_count(savings as f64))
}

#[derive(Properties, PartialEq)]
pub struct SavingsCardProps {
    pub example: SavingsExample,
}

#[function_component(SavingsCard)]
pub fn savings_card(props: &SavingsCardProps) -> Html {
    let example = &props.example;
    html! {
        <div class="savings-card">
            <div class="savings-glow"></div>
            <div class="savings-header">
                <div class="savings-icon">{example.icon}</div>
                <h3>{example.title}</h3>
            </div>
            <p class="savings-description">{example.description}</p>
            <div class="savings-example">
                <p class="example-label">{"Real Example:"}</p>
                <ul>
                    { for example.example.iter().map(|item| html! {
                        <li><span class="bullet">{"•"}</span><span>{*item}</span></li>
                    }) }
                </ul>
            </div>
            <div class="savings-footer">
                <span class="savings-caption">{"Potential Savings"}</span>
                <span class="savings-amount">{savings_text(example.savings)}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub step: Step,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    html! {
        <div class="step-card">
            <div class="step-card-order">{props.step.order}</div>
            <p>{props.step.text}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::content::{FEATURES, PROCESS, SAVINGS, TESTIMONIALS};
    use crate::test_support::render;

    #[test]
    fn savings_amount_uses_thousands_separator() {
        assert_eq!(savings_text(2078), "$2,078");
        assert_eq!(savings_text(595), "$595");

        let markup = render::<SavingsCard>(SavingsCardProps { example: SAVINGS[0] });
        assert!(markup.contains("$2,078"), "{markup}");
        for item in SAVINGS[0].example {
            assert!(markup.contains(item));
        }
    }

    #[test]
    fn process_step_connector_skipped_on_last() {
        let middle = render::<ProcessStep>(ProcessStepProps { step: PROCESS[0], is_last: false });
        assert!(middle.contains("step-connector"));

        let last = render::<ProcessStep>(ProcessStepProps { step: PROCESS[2], is_last: true });
        assert!(!last.contains("step-connector"));
        assert!(last.contains(PROCESS[2].title));
    }

    #[test]
    fn testimonial_shows_rating_and_initial() {
        let markup = render::<TestimonialCard>(TestimonialCardProps { testimonial: TESTIMONIALS[2] });
        assert_eq!(markup.matches("class=\"star\"").count(), 5);
        assert!(markup.contains("<div class=\"avatar\">E</div>"), "{markup}");
        assert!(markup.contains("Condo Buyer, Dallas"));
    }

    #[test]
    fn cards_render_identically_for_identical_props() {
        let first = render::<FeatureCard>(FeatureCardProps { feature: FEATURES[3] });
        let second = render::<FeatureCard>(FeatureCardProps { feature: FEATURES[3] });
        assert_eq!(first, second);
        assert!(first.contains("animation-delay: 300ms;"));
    }

    #[test]
    fn step_card_shows_order_and_text() {
        let step = Step { order: "2", text: "Get your forensic score and red flags" };
        let markup = render::<StepCard>(StepCardProps { step });
        assert!(markup.contains(">2</div>"));
        assert!(markup.contains(step.text));
    }
}
