use yew::prelude::*;

use crate::components::cards::{savings_text, StepCard};
use crate::components::faq::StaticFaq;
use crate::pages::content::{
    SavingsExample, CLASSIC_FAQ, CLASSIC_FEATURES, CLASSIC_SAVINGS, CLASSIC_STEPS,
    CLASSIC_TESTIMONIALS,
};
use crate::pages::landing::current_year;

fn violation_card(example: &SavingsExample) -> Html {
    html! {
        <div class="classic-card">
            <h3>{example.title}</h3>
            <p class="violation-description">{example.description}</p>
            <div class="violation-example">
                <div class="example-tag">{"Example"}</div>
                <ul>
                    { for example.example.iter().map(|line| html! { <li>{*line}</li> }) }
                </ul>
            </div>
            <div class="estimated-savings">{format!("Estimated Savings: {}", savings_text(example.savings))}</div>
        </div>
    }
}

/// The earlier, plainer variant of the landing page.
#[function_component(ClassicLandingPage)]
pub fn classic_landing_page() -> Html {
    let year = use_state(current_year);

    html! {
        <div class="classic-page">
            <section id="start" class="classic-hero">
                <h1>{"Protect Your Texas Home Closing from Hidden Fees and Mortgage Traps"}</h1>
                <p>
                    {"CloseGuard analyzes your closing disclosure and mortgage documents to detect fraud, predatory lending, and hidden real estate fees — and, most importantly, it saves you money."}
                </p>
                <div class="classic-hero-links">
                    <a href="#how-it-works" class="classic-button" aria-label="Start by learning how CloseGuard works">
                        {"Scan Your Closing Docs"}
                    </a>
                    <a href="#how-it-works" class="classic-button light" aria-label="Learn how CloseGuard works">
                        {"Learn How It Works"}
                    </a>
                </div>
                <p class="price-anchor">{"Invest $100 today and save up to $1,500–$3,000+ at closing!"}</p>
            </section>

            <section id="why" class="classic-section narrow centered">
                <h2>{"Why CloseGuard for Homebuyers?"}</h2>
                <p class="lead">
                    {"Buying your first home is stressful. Hidden mortgage costs, confusing real estate terms, and predatory lending practices can leave you vulnerable. CloseGuard protects Texas homebuyers with AI-powered forensic document analysis and simple, plain-English guidance."}
                </p>
            </section>

            <section id="how-it-works" class="classic-section tinted" aria-labelledby="how-it-works-title">
                <h2 id="how-it-works-title">{"How CloseGuard Works"}</h2>
                <div class="classic-grid three">
                    { for CLASSIC_STEPS.iter().map(|step| html! {
                        <StepCard key={step.order} step={*step} />
                    }) }
                </div>
            </section>

            <section id="features" class="classic-section" aria-labelledby="features-title">
                <h2 id="features-title">{"Key Mortgage Protection Features"}</h2>
                <div class="classic-grid two">
                    { for CLASSIC_FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <div class={classes!("classic-card", (i + 1 == CLASSIC_FEATURES.len()).then(|| "wide"))}>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="savings" class="classic-section" aria-labelledby="savings-title">
                <h2 id="savings-title">{"Most Common Rules Violated in Texas"}</h2>
                <p class="lead">
                    {"First-time Texas homebuyers often overpay "}<strong>{"$1,500–$3,000"}</strong>
                    {" in closing costs due to errors and cost shifting. CloseGuard finds these mortgage issues fast so you can keep that money in your pocket."}
                </p>
                <div class="classic-grid two">
                    { for CLASSIC_SAVINGS.iter().map(violation_card) }
                </div>
                <p class="classic-fine-print">
                    {"Savings are examples and may vary by transaction. CloseGuard highlights closing cost issues so you can request corrections before signing."}
                </p>
            </section>

            <section id="bottom-line" class="classic-section tinted centered">
                <h2>{"The Bottom Line for Texas Homebuyers"}</h2>
                <p class="lead">
                    {"The average Texas homebuyer overpays "}<strong>{"$1,500–$3,000"}</strong>
                    {" at closing due to errors and hidden mortgage fees. Our AI closing disclosure auditor has found violations in "}
                    <strong>{"73%"}</strong>
                    {" of closing documents reviewed, with the largest single error saving a buyer "}
                    <strong>{"$4,232"}</strong>{"."}
                </p>
            </section>

            <section id="testimonials" class="classic-section centered" aria-labelledby="testimonials-title">
                <h2 id="testimonials-title">{"What Texas Homebuyers Say"}</h2>
                <div class="classic-quotes">
                    { for CLASSIC_TESTIMONIALS.iter().map(|q| html! {
                        <blockquote class="classic-quote">{format!("\"{}\" — {}", q.text, q.author)}</blockquote>
                    }) }
                </div>
            </section>

            <section id="faq" class="classic-section" aria-labelledby="faq-title">
                <h2 id="faq-title">{"Frequently Asked Questions about Mortgage Closings"}</h2>
                <StaticFaq entries={CLASSIC_FAQ} />
            </section>

            <section id="cta" class="classic-hero">
                <h2>{"Protect Your Home Closing Today"}</h2>
                <p>{"Do not sign your mortgage without knowing what is hidden in the fine print."}</p>
                <a href="#start" class="classic-button" aria-label="Start your free closing risk scan">
                    {"Get Your Free Risk Scan"}
                </a>
            </section>

            <footer class="classic-footer">
                <p>{format!("© {} CloseGuard. All rights reserved.", *year)}</p>
                <div class="classic-footer-links">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Contact"}</a>
                </div>
            </footer>

            <style>
                {r#"
                .classic-page {
                    background: #F8FAFC;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .classic-hero {
                    padding: 5rem 1.5rem;
                    text-align: center;
                    color: #fff;
                    background: #153E75;
                }

                .classic-hero h1 { font-size: 3.75rem; font-weight: 700; margin-bottom: 1rem; }
                .classic-hero h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
                .classic-hero p { font-size: 1.25rem; max-width: 42rem; margin: 0 auto 1.5rem; }

                .classic-hero-links {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .classic-button {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    text-decoration: none;
                    color: #fff;
                    background: #0B74B5;
                }

                .classic-button:hover { background: #1E4E8C; }
                .classic-button.light { color: #153E75; background: #fff; }
                .classic-button.light:hover { background: #E5E7EB; }

                .price-anchor { font-weight: 600; color: #9AD1FF; }

                .classic-section { padding: 4rem 1.5rem; background: #fff; }
                .classic-section.tinted { background: #F8FAFC; }
                .classic-section.narrow { max-width: 64rem; margin: 0 auto; }
                .classic-section.centered { text-align: center; }

                .classic-section h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .lead {
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                    font-size: 1.125rem;
                    text-align: center;
                    color: #4B5563;
                }

                .classic-grid {
                    display: grid;
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .classic-grid.two { grid-template-columns: repeat(2, 1fr); }
                .classic-grid.three { grid-template-columns: repeat(3, 1fr); }

                .classic-card,
                .step-card,
                .classic-quote {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid #E5E7EB;
                    background: #F8FAFC;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    text-align: left;
                }

                .classic-card.wide { grid-column: span 2; }
                .classic-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
                .classic-card p { color: #4B5563; }

                .step-card { background: #fff; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
                .step-card-order { font-size: 1.5rem; font-weight: 700; color: #0B74B5; margin-bottom: 1rem; }
                .step-card p { font-size: 1.125rem; color: #4B5563; }

                .violation-example {
                    margin-top: 0.75rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    border-left: 4px solid #0B74B5;
                    background: #fff;
                }

                .example-tag {
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: #0B74B5;
                }

                .violation-example ul { font-size: 0.875rem; color: #4B5563; }
                .estimated-savings { margin-top: 0.75rem; font-weight: 600; color: #0B74B5; }

                .classic-fine-print { margin-top: 2rem; text-align: center; font-size: 0.75rem; color: #4B5563; }

                .classic-quotes,
                .classic-faq {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .classic-quote { background: #fff; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }

                .classic-footer {
                    padding: 2.5rem 1.5rem;
                    text-align: center;
                    color: #E5EAF0;
                    background: #0D1321;
                }

                .classic-footer-links { display: flex; justify-content: center; gap: 1rem; margin-top: 1rem; }
                .classic-footer-links a { color: #9AD1FF; text-decoration: none; }
                .classic-footer-links a:hover { text-decoration: underline; }

                @media (max-width: 768px) {
                    .classic-hero h1 { font-size: 2.25rem; }
                    .classic-grid.two,
                    .classic-grid.three { grid-template-columns: 1fr; }
                    .classic-card.wide { grid-column: auto; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{position, render};

    #[test]
    fn sections_follow_page_order() {
        let markup = render::<ClassicLandingPage>(());
        let landmarks = [
            "id=\"start\"",
            "id=\"why\"",
            "id=\"how-it-works\"",
            "id=\"features\"",
            "id=\"savings\"",
            "id=\"bottom-line\"",
            "id=\"testimonials\"",
            "id=\"faq\"",
            "id=\"cta\"",
            "<footer",
        ];
        let offsets: Vec<_> = landmarks.iter().map(|l| position(&markup, l)).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn steps_render_as_cards() {
        let markup = render::<ClassicLandingPage>(());
        assert_eq!(markup.matches("class=\"step-card\"").count(), CLASSIC_STEPS.len());
        for step in CLASSIC_STEPS {
            assert!(markup.contains(step.text));
        }
    }

    #[test]
    fn estimated_savings_are_grouped() {
        let markup = render::<ClassicLandingPage>(());
        assert!(markup.contains("Estimated Savings: $2,078"));
        assert!(markup.contains("Estimated Savings: $545"));
    }

    #[test]
    fn quotes_carry_text_and_author_without_stars() {
        let markup = render::<ClassicLandingPage>(());
        assert_eq!(markup.matches("class=\"classic-quote\"").count(), CLASSIC_TESTIMONIALS.len());
        for quote in CLASSIC_TESTIMONIALS {
            assert!(markup.contains(quote.text));
            assert!(markup.contains(&format!("— {}", quote.author)));
        }
        assert!(!markup.contains("class=\"stars\""));
    }

    #[test]
    fn faq_answers_are_always_visible() {
        let markup = render::<ClassicLandingPage>(());
        for entry in CLASSIC_FAQ {
            assert!(markup.contains(entry.question));
        }
        assert!(markup.contains(CLASSIC_FAQ[4].answer));
    }
}
