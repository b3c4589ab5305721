use chrono::Datelike;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
use yew::prelude::*;

use crate::components::cards::{FeatureCard, ProcessStep, SavingsCard, TestimonialCard};
use crate::components::counter::AnimatedCounter;
use crate::components::faq::FaqList;
use crate::components::navigation::Navigation;
use crate::config::UPLOAD_INDICATOR_MS;
use crate::pages::content::{
    Stat, FEATURES, FOOTER_COLUMNS, HERO_STATS, IMPACT_STATS, MODERN_FAQ, PRESS, PROBLEM_FACTS,
    PROCESS, SAVINGS, TESTIMONIALS,
};

/// Calendar year at the moment the page mounts.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Email to hand to the signup service, if the visitor typed one.
pub fn signup_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    (!email.is_empty()).then(|| email.to_string())
}

fn stat_counter(stat: &Stat) -> Html {
    html! {
        <AnimatedCounter end={stat.end} prefix={stat.prefix} suffix={stat.suffix} />
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub year: i32,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <span class="logo-badge">{"CG"}</span>
                        <span class="footer-name">{"CloseGuard"}</span>
                    </div>
                    <p>{"Protecting Texas homebuyers from costly closing errors since 2021."}</p>
                </div>
                { for FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                    <div>
                        <h4>{*heading}</h4>
                        <ul>
                            { for links.iter().map(|label| html! {
                                <li><a href="#">{*label}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} CloseGuard. All rights reserved.", props.year)}</p>
                <div class="footer-social">
                    <a href="#" aria-label="Facebook">{"Facebook"}</a>
                    <a href="#" aria-label="Twitter">{"Twitter"}</a>
                    <a href="#" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq, Default)]
pub struct LandingPageProps {
    /// Fired when the visitor asks to upload documents.
    #[prop_or_default]
    pub on_upload: Callback<()>,
    /// Fired with the trimmed address from the signup form.
    #[prop_or_default]
    pub on_signup: Callback<String>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let year = use_state(current_year);
    let email = use_state(String::new);
    let is_uploading = use_state(|| false);
    let reset_upload = use_mut_ref(|| None::<Timeout>);

    // Pending "Processing..." reset must not outlive the page
    {
        let reset_upload = reset_upload.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset_upload.borrow_mut().take();
                }
            },
            (),
        );
    }

    let handle_get_started = {
        let is_uploading = is_uploading.clone();
        let reset_upload = reset_upload.clone();
        let on_upload = props.on_upload.clone();
        Callback::from(move |_: ()| {
            is_uploading.set(true);
            on_upload.emit(());
            let is_uploading = is_uploading.clone();
            // Replacing the previous timeout cancels it
            *reset_upload.borrow_mut() = Some(Timeout::new(UPLOAD_INDICATOR_MS, move || {
                is_uploading.set(false);
            }));
        })
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let on_signup = props.on_signup.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(address) = signup_email(&email) {
                on_signup.emit(address);
            }
        })
    };

    html! {
        <div class="landing-page">
            <Navigation on_get_started={handle_get_started.clone()} />

            <section id="hero" class="hero">
                <div class="hero-background"></div>
                <div class="hero-shade"></div>
                <div class="hero-blob hero-blob-left"></div>
                <div class="hero-blob hero-blob-right"></div>

                <div class="hero-content">
                    <div class="pill pill-light">
                        <span class="pulse-dot"></span>
                        {"Trusted by 2,500+ Texas Homebuyers"}
                    </div>
                    <h1>
                        {"Save Thousands on Your"}
                        <span class="hero-highlight">{"Texas Home Closing"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"AI-powered analysis catches hidden fees, predatory lending, and costly errors in your closing documents — protecting your biggest investment."}
                    </p>

                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={handle_get_started.reform(|_: MouseEvent| ())}>
                            {if *is_uploading { "Processing..." } else { "Upload Documents Now" }}
                        </button>
                        <button class="hero-secondary">{"Watch 2-Min Demo"}</button>
                    </div>

                    <div class="hero-stats">
                        { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <>
                                if i > 0 {
                                    <div class="stat-divider"></div>
                                }
                                <div class="hero-stat">
                                    <p class="stat-value">{stat_counter(stat)}</p>
                                    <p class="stat-label">{stat.label}</p>
                                </div>
                            </>
                        }) }
                    </div>
                </div>
            </section>

            <section id="trust" class="trust-strip">
                <span class="trust-label">{"Featured in:"}</span>
                { for PRESS.iter().map(|name| html! { <span class="press-name">{*name}</span> }) }
            </section>

            <section id="problem" class="problem-section">
                <div class="section-header">
                    <h2 class="gradient-text">{"The Hidden Cost of Home Buying"}</h2>
                    <p>{"Most Texas homebuyers don't realize they're overpaying until it's too late. Our AI technology reveals what others miss."}</p>
                </div>
                <div class="problem-grid">
                    { for PROBLEM_FACTS.iter().map(|fact| html! {
                        <div class="problem-fact">
                            <div class={classes!("problem-icon", fact.tone.class())}>{"!"}</div>
                            <h3>{fact.headline}</h3>
                            <p>{fact.detail}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="section-header">
                    <div class="pill pill-blue">{"Powerful Features"}</div>
                    <h2>
                        {"Everything You Need to"}
                        <span class="accent-text">{"Protect Your Investment"}</span>
                    </h2>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <FeatureCard key={feature.title} feature={*feature} />
                    }) }
                </div>
            </section>

            <section id="how-it-works" class="process-section">
                <div class="section-header">
                    <div class="pill pill-purple">{"Simple Process"}</div>
                    <h2>{"Three Steps to Peace of Mind"}</h2>
                    <p>{"From upload to insights in minutes, not hours"}</p>
                </div>
                <div class="process-list">
                    { for PROCESS.iter().enumerate().map(|(i, step)| html! {
                        <ProcessStep key={step.number} step={*step} is_last={i + 1 == PROCESS.len()} />
                    }) }
                </div>
                <div class="process-cta">
                    <h3>{"Ready to protect your closing?"}</h3>
                    <p>{"Join thousands of Texas homebuyers who saved money with CloseGuard"}</p>
                    <button onclick={handle_get_started.reform(|_: MouseEvent| ())}>{"Start Free Analysis"}</button>
                </div>
            </section>

            <section id="savings" class="savings-section">
                <div class="section-header">
                    <div class="pill pill-green">{"Real Savings"}</div>
                    <h2>{"Common Violations We Catch"}</h2>
                    <p>{"These are actual errors found in Texas closing documents that cost buyers thousands"}</p>
                </div>
                <div class="savings-grid">
                    { for SAVINGS.iter().map(|example| html! {
                        <SavingsCard key={example.title} example={*example} />
                    }) }
                </div>
                <p class="fine-print">{"*Examples from actual Texas closings. Your results may vary."}</p>
            </section>

            <section id="stats" class="stats-section">
                <div class="section-header">
                    <h2>{"The Numbers Don't Lie"}</h2>
                    <p>{"Our impact on Texas home closings"}</p>
                </div>
                <div class="stats-grid">
                    { for IMPACT_STATS.iter().map(|stat| html! {
                        <div class="impact-stat">
                            <p class="impact-value">{stat_counter(stat)}</p>
                            <p class="impact-label">{stat.label}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="testimonials" class="testimonials-section">
                <div class="section-header">
                    <div class="pill pill-blue">{"Success Stories"}</div>
                    <h2>{"Real Buyers, Real Savings"}</h2>
                </div>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <TestimonialCard key={testimonial.author} testimonial={*testimonial} />
                    }) }
                </div>
            </section>

            <section id="faq" class="faq-section">
                <div class="section-header">
                    <div class="pill pill-purple">{"FAQ"}</div>
                    <h2>{"Your Questions Answered"}</h2>
                </div>
                <FaqList entries={MODERN_FAQ} />
            </section>

            <section id="cta" class="cta-section">
                <div class="cta-content">
                    <h2>{"Don't Leave Money on the Closing Table"}</h2>
                    <p class="cta-subtitle">{"Join 2,500+ Texas homebuyers who've saved an average of $2,500"}</p>
                    <div class="offer-box">
                        <p class="offer-title">{"Limited Time Offer"}</p>
                        <p class="offer-subtitle">{"First analysis FREE"}</p>
                        <input
                            type="email"
                            class="email-input"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            {oninput}
                        />
                        <button class="offer-button" onclick={onsubmit}>{"Start Free Analysis →"}</button>
                        <p class="offer-note">{"No credit card required • 60-second results • Delete anytime"}</p>
                    </div>
                </div>
            </section>

            <SiteFooter year={*year} />

            <style>
                {r#"
                .landing-page {
                    background: #fff;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }

                .section-header {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }

                .section-header h2 {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .section-header p {
                    font-size: 1.25rem;
                    color: #4B5563;
                }

                .pill {
                    display: inline-flex;
                    align-items: center;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }

                .pill-light { background: rgba(255, 255, 255, 0.2); color: #fff; backdrop-filter: blur(12px); margin-bottom: 2rem; }
                .pill-blue { background: #DBEAFE; color: #2563EB; }
                .pill-purple { background: #F3E8FF; color: #9333EA; }
                .pill-green { background: #D1FAE5; color: #059669; }

                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-right: 0.5rem;
                    border-radius: 50%;
                    background: #4ADE80;
                    animation: pulse 2s infinite;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #111827, #374151);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .accent-text,
                .hero-highlight {
                    display: block;
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .accent-text { background-image: linear-gradient(90deg, #2563EB, #9333EA); }
                .hero-highlight { background-image: linear-gradient(90deg, #FDE047, #FB923C); }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 5rem 1.5rem 8rem;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, #2563EB, #9333EA, #EC4899);
                }

                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.2);
                }

                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: pulse 4s infinite;
                }

                .hero-blob-left { top: 5rem; left: 2.5rem; width: 18rem; height: 18rem; background: rgba(255, 255, 255, 0.1); }
                .hero-blob-right { bottom: 5rem; right: 2.5rem; width: 24rem; height: 24rem; background: rgba(168, 85, 247, 0.2); animation-delay: 2s; }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                    text-align: center;
                    color: #fff;
                }

                .hero-content h1 {
                    font-size: 4.5rem;
                    font-weight: 700;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.5rem;
                    color: rgba(255, 255, 255, 0.9);
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }

                .hero-cta-group {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                    flex-wrap: wrap;
                }

                .hero-cta,
                .hero-secondary,
                .process-cta button,
                .offer-button {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .hero-cta {
                    border: none;
                    background: #fff;
                    color: #111827;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .hero-secondary {
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.2);
                    color: #fff;
                }

                .hero-cta:hover,
                .process-cta button:hover,
                .offer-button:hover {
                    transform: scale(1.05);
                }

                .hero-stats {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                }

                .stat-value { font-size: 1.875rem; font-weight: 700; }
                .stat-label { font-size: 0.875rem; opacity: 0.9; }

                .stat-divider {
                    width: 1px;
                    height: 3rem;
                    background: rgba(255, 255, 255, 0.3);
                }

                .trust-strip {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    padding: 3rem 1.5rem;
                    background: #F9FAFB;
                    border-top: 1px solid #E5E7EB;
                    border-bottom: 1px solid #E5E7EB;
                    opacity: 0.6;
                }

                .trust-label { color: #4B5563; font-weight: 600; }
                .press-name { color: #9CA3AF; font-size: 1.5rem; font-weight: 700; }

                .problem-section,
                .features-section,
                .process-section,
                .savings-section,
                .stats-section,
                .testimonials-section,
                .faq-section,
                .cta-section {
                    padding: 6rem 1.5rem;
                }

                .problem-section { background: linear-gradient(180deg, #fff, #F9FAFB); }

                .problem-grid,
                .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .problem-fact { text-align: center; }
                .problem-fact h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 0.5rem; }
                .problem-fact p { color: #4B5563; }

                .problem-icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    font-weight: 700;
                    transition: transform 0.3s ease;
                }

                .problem-fact:hover .problem-icon { transform: scale(1.1); }
                .tone-danger { background: #FEE2E2; color: #EF4444; }
                .tone-warning { background: #FFEDD5; color: #F97316; }
                .tone-caution { background: #FEF9C3; color: #EAB308; }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .feature-card {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #F3F4F6;
                    background: #fff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.5s ease;
                }

                .feature-card:hover {
                    transform: translateY(-0.5rem);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }

                .feature-glow {
                    position: absolute;
                    top: -4rem;
                    right: -4rem;
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #EFF6FF, #FAF5FF);
                    transition: transform 0.7s ease;
                }

                .feature-card:hover .feature-glow { transform: scale(1.5); }
                .feature-body { position: relative; z-index: 10; }

                .feature-icon,
                .step-number {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    background: linear-gradient(135deg, #3B82F6, #9333EA);
                }

                .feature-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .feature-body h3,
                .step-body h3,
                .savings-header h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.75rem;
                }

                .feature-body p,
                .step-body p { color: #4B5563; line-height: 1.6; }

                .process-section { background: linear-gradient(180deg, #F9FAFB, #fff); }

                .process-list {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                    max-width: 64rem;
                    margin: 0 auto;
                }

                .process-step { display: flex; align-items: flex-start; }
                .step-marker { position: relative; flex-shrink: 0; }

                .step-number {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .step-connector {
                    position: absolute;
                    top: 4rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 2px;
                    height: 6rem;
                    background: linear-gradient(180deg, #3B82F6, transparent);
                }

                .step-body { margin-left: 1.5rem; }

                .process-cta {
                    max-width: 64rem;
                    margin: 4rem auto 0;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    text-align: center;
                    color: #fff;
                    background: linear-gradient(90deg, #2563EB, #9333EA);
                }

                .process-cta button { border: none; background: #fff; color: #111827; }

                .savings-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .savings-card {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 2px solid #F3F4F6;
                    background: #fff;
                    transition: all 0.3s ease;
                }

                .savings-card:hover { border-color: #3B82F6; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }

                .savings-glow {
                    position: absolute;
                    top: -1rem;
                    right: -1rem;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    opacity: 0.1;
                    background: linear-gradient(135deg, #4ADE80, #3B82F6);
                }

                .savings-header { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1rem; }

                .savings-icon {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 1.25rem;
                    background: linear-gradient(135deg, #4ADE80, #16A34A);
                }

                .savings-description { color: #4B5563; margin-bottom: 1rem; }

                .savings-example {
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #EFF6FF, #FAF5FF);
                    font-size: 0.875rem;
                }

                .savings-example ul { list-style: none; padding: 0; margin: 0; color: #374151; }
                .example-label { font-weight: 600; color: #1E3A8A; margin-bottom: 0.5rem; }
                .bullet { color: #3B82F6; margin-right: 0.5rem; }

                .savings-footer { display: flex; align-items: center; justify-content: space-between; }
                .savings-caption { font-size: 0.875rem; color: #6B7280; }

                .savings-amount {
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #16A34A, #2563EB);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .fine-print { margin-top: 3rem; text-align: center; font-size: 0.875rem; color: #6B7280; }

                .stats-section { color: #fff; background: linear-gradient(90deg, #2563EB, #9333EA); }
                .stats-section .section-header p { color: rgba(255, 255, 255, 0.9); }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .impact-value { font-size: 3rem; font-weight: 700; margin-bottom: 0.5rem; }
                .impact-label { color: rgba(255, 255, 255, 0.8); }

                .testimonials-section { background: #F9FAFB; }

                .testimonial-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: #fff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .stars { display: flex; margin-bottom: 1rem; }
                .star { width: 1.25rem; height: 1.25rem; fill: #FACC15; }
                .quote { font-size: 1.125rem; font-style: italic; color: #374151; margin-bottom: 1.5rem; }
                .author { display: flex; align-items: center; gap: 1rem; }

                .avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-weight: 700;
                    background: linear-gradient(135deg, #60A5FA, #A855F7);
                }

                .author-name { font-weight: 600; }
                .author-role { font-size: 0.875rem; color: #6B7280; }

                .faq-list {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: #F9FAFB;
                }

                .faq-item { border-bottom: 1px solid #E5E7EB; }
                .faq-item:last-child { border-bottom: none; }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem 0;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    text-align: left;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .question-text { font-size: 1.125rem; font-weight: 600; color: #111827; }
                .faq-question:hover .question-text { color: #2563EB; }

                .toggle-icon {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #6B7280;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon { transform: rotate(180deg); }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    opacity: 0;
                    transition: all 0.5s ease;
                    color: #4B5563;
                    line-height: 1.6;
                }

                .faq-answer.open {
                    max-height: 24rem;
                    opacity: 1;
                    padding-bottom: 1.5rem;
                }

                .cta-section {
                    position: relative;
                    overflow: hidden;
                    color: #fff;
                    background: linear-gradient(135deg, #2563EB, #9333EA, #EC4899);
                }

                .cta-content { position: relative; z-index: 10; max-width: 56rem; margin: 0 auto; text-align: center; }
                .cta-content h2 { font-size: 3.75rem; font-weight: 700; margin-bottom: 1.5rem; }
                .cta-subtitle { font-size: 1.5rem; margin-bottom: 2rem; color: rgba(255, 255, 255, 0.9); }

                .offer-box {
                    max-width: 28rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(12px);
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .offer-title { font-size: 1.5rem; font-weight: 700; }
                .offer-subtitle { font-size: 1.25rem; color: rgba(255, 255, 255, 0.9); }

                .email-input {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    font-weight: 500;
                    color: #111827;
                }

                .email-input:focus { outline: none; box-shadow: 0 0 0 4px rgba(255, 255, 255, 0.5); }

                .offer-button {
                    border: none;
                    color: #111827;
                    background: linear-gradient(90deg, #FACC15, #FB923C);
                }

                .offer-note { font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); }

                .site-footer { padding: 4rem 1.5rem; background: #111827; color: #9CA3AF; }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto 2rem;
                    font-size: 0.875rem;
                }

                .footer-grid h4 { color: #fff; font-weight: 600; margin-bottom: 1rem; }
                .footer-grid ul { list-style: none; padding: 0; }
                .footer-grid a,
                .footer-social a { color: #9CA3AF; text-decoration: none; transition: color 0.2s ease; }
                .footer-grid a:hover,
                .footer-social a:hover { color: #fff; }

                .footer-brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
                .footer-name { font-size: 1.5rem; font-weight: 700; color: #fff; }

                .footer-bottom {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid #1F2937;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 0.875rem;
                }

                .footer-social { display: flex; gap: 1.5rem; }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @media (max-width: 768px) {
                    .hero-content h1 { font-size: 3rem; }
                    .section-header h2,
                    .cta-content h2 { font-size: 2.25rem; }
                    .problem-grid,
                    .features-grid,
                    .savings-grid,
                    .testimonials-grid,
                    .stats-grid,
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; gap: 1rem; }
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
    fn landmark_sections_render_in_order() {
        let markup = render::<LandingPage>(LandingPageProps::default());

        let landmarks = [
            "id=\"hero\"",
            "id=\"features\"",
            "id=\"how-it-works\"",
            "id=\"savings\"",
            "id=\"testimonials\"",
            "id=\"faq\"",
            "id=\"cta\"",
            "<footer",
        ];
        let offsets: Vec<_> = landmarks.iter().map(|l| position(&markup, l)).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{landmarks:?} out of order");
    }

    #[test]
    fn rendering_is_stable_across_mounts() {
        let first = render::<LandingPage>(LandingPageProps::default());
        let second = render::<LandingPage>(LandingPageProps::default());
        assert_eq!(first, second);
    }

    #[test]
    fn counters_start_at_zero_before_visible() {
        let markup = render::<LandingPage>(LandingPageProps::default());
        assert!(markup.contains("<span class=\"animated-counter\">0%</span>"));
        assert!(markup.contains("<span class=\"animated-counter\">$0M</span>"));
        assert!(markup.contains("<span class=\"animated-counter\">+0</span>"));
    }

    #[test]
    fn hero_button_idle_label() {
        let markup = render::<LandingPage>(LandingPageProps::default());
        assert!(markup.contains("Upload Documents Now"));
        assert!(!markup.contains("Processing..."));
    }

    #[test]
    fn footer_carries_given_year() {
        let markup = render::<SiteFooter>(SiteFooterProps { year: 2031 });
        assert!(markup.contains("© 2031 CloseGuard. All rights reserved."));
    }

    #[test]
    fn page_footer_uses_current_year() {
        let markup = render::<LandingPage>(LandingPageProps::default());
        assert!(markup.contains(&format!("© {} CloseGuard", current_year())));
    }

    #[test]
    fn signup_email_is_trimmed_and_required() {
        assert_eq!(signup_email("  buyer@example.com "), Some("buyer@example.com".to_string()));
        assert_eq!(signup_email("   "), None);
        assert_eq!(signup_email(""), None);
    }
}
