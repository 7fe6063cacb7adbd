use std::time::Duration;

use yew::prelude::*;

use crate::browser::use_scroll_progress;
use crate::components::animated_text::{AnimatedText, StaggeredText};
use crate::components::decor::{CursorFollower, FloatingShapes};
use crate::components::icons::{Glyph, IconView};
use crate::components::reveal::{Entrance, Reveal};
use crate::config;
use crate::content::{
    anchor, CallToAction, Feature, Footer, Hero, LandingContent, Pricing, Section, Testimonial,
};
use crate::motion::{derive, sequence, sequence_after, Pose};

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| LandingContent::load(), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let content = match &*content {
        Ok(content) => content.clone(),
        Err(err) => {
            log::error!("Failed to load landing copy: {}", err);
            return html! {
                <div class="landing">
                    <style>{LANDING_CSS}</style>
                    <p class="landing-unavailable">{"This page is taking a breather. Please check back soon."}</p>
                </div>
            };
        }
    };

    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>
            <FloatingShapes />
            <CursorFollower />
            <Header brand={content.brand.clone()} nav={content.nav.clone()} cta={content.header_cta.clone()} />
            <HeroSection hero={content.hero.clone()} />
            <FeaturesSection section={content.features.clone()} />
            <TestimonialsSection section={content.testimonials.clone()} />
            <PricingSection pricing={content.pricing.clone()} />
            <CallToActionSection cta={content.cta.clone()} />
            <PageFooter brand={content.brand.clone()} footer={content.footer.clone()} />
        </div>
    }
}

fn brand_mark(brand: &str) -> Html {
    html! {
        <div class="brand">
            <div class="brand-mark">
                <IconView glyph={Glyph::Leaf} size={20} />
            </div>
            <span class="brand-name">{brand.to_string()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    brand: String,
    nav: Vec<String>,
    cta: String,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <Entrance tag="header" class="landing-header" from={Pose::rise(-100.0)}>
            <div class="hover-grow">{brand_mark(&props.brand)}</div>
            <nav class="landing-nav">
                {
                    for sequence(props.nav.iter(), config::NAV_STEP).into_iter().map(|item| html! {
                        <Entrance
                            key={item.index}
                            tag="span"
                            from={Pose::rise(-20.0)}
                            delay={item.delay}
                            duration={Duration::from_millis(600)}
                        >
                            <a class="nav-link" href={anchor(item.item)}>{item.item.clone()}</a>
                        </Entrance>
                    })
                }
            </nav>
            <Entrance from={Pose::grow(0.8)} delay={Duration::from_millis(500)} duration={Duration::from_millis(600)}>
                <button class="button button-primary">{props.cta.clone()}</button>
            </Entrance>
        </Entrance>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    hero: Hero,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let progress = use_scroll_progress();
    let (parallax_in, parallax_out) = config::HERO_PARALLAX;
    let (fade_in, fade_out) = config::HERO_FADE;
    let y = derive(parallax_in, parallax_out).at(progress);
    let opacity = derive(fade_in, fade_out).at(progress);

    html! {
        <section class="hero">
            <div class="hero-inner" style={format!("transform: translateY({}%); opacity: {};", y, opacity)}>
                <Entrance class="hero-badge-wrap" from={Pose::grow(0.8)} duration={Duration::from_secs(1)}>
                    <span class="badge">
                        <IconView glyph={Glyph::Sparkles} size={16} />
                        {hero.badge.clone()}
                    </span>
                </Entrance>

                <StaggeredText text={hero.headline.clone()} class="hero-headline" />

                <AnimatedText delay={Duration::from_millis(800)} class="hero-subheadline">
                    {hero.subheadline.clone()}
                </AnimatedText>

                <Entrance
                    class="hero-actions"
                    from={Pose::rise(30.0)}
                    delay={Duration::from_millis(1200)}
                >
                    <button class="button button-primary button-large press">{hero.primary_cta.clone()}</button>
                    <button class="button button-outline button-large press">
                        <IconView glyph={Glyph::Play} size={20} />
                        {hero.secondary_cta.clone()}
                    </button>
                </Entrance>

                <Entrance
                    class="phone-wrap"
                    from={Pose::rise(100.0).with_scale(0.8)}
                    delay={Duration::from_millis(1500)}
                    duration={Duration::from_secs(1)}
                >
                    <div class="phone-glow"></div>
                    <div class="phone">
                        <div class="phone-screen">
                            <div class="phone-icon">
                                <IconView glyph={Glyph::Heart} size={24} />
                            </div>
                            <h3>{hero.phone.greeting.clone()}</h3>
                            <p class="muted">{hero.phone.prompt.clone()}</p>
                            <div class="phone-sessions">
                                {
                                    for hero.phone.sessions.iter().map(|session| html! {
                                        <div class="phone-session">
                                            <div class="phone-session-dot"></div>
                                            <div>
                                                <p class="phone-session-title">{session.title.clone()}</p>
                                                <p class="muted small">{session.detail.clone()}</p>
                                            </div>
                                        </div>
                                    })
                                }
                            </div>
                        </div>
                    </div>
                </Entrance>
            </div>
        </section>
    }
}

fn section_heading(title: &str, subtitle: &str) -> Html {
    html! {
        <AnimatedText class="section-heading">
            <h2>{title.to_string()}</h2>
            <p>{subtitle.to_string()}</p>
        </AnimatedText>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturesProps {
    section: Section<Feature>,
}

#[function_component(FeaturesSection)]
fn features_section(props: &FeaturesProps) -> Html {
    let section = &props.section;
    html! {
        <section id="features" class="landing-section">
            <div class="container">
                {section_heading(&section.title, &section.subtitle)}
                <div class="card-grid">
                    {
                        for sequence(section.items.iter(), config::FEATURE_STEP).into_iter().map(|feature| html! {
                            <Reveal key={feature.index} delay={feature.delay}>
                                <div class="card lift">
                                    <div class="card-icon">
                                        <IconView glyph={Glyph::from(feature.item.icon)} size={32} />
                                    </div>
                                    <h3>{feature.item.title.clone()}</h3>
                                    <p class="muted">{feature.item.description.clone()}</p>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialsProps {
    section: Section<Testimonial>,
}

#[function_component(TestimonialsSection)]
fn testimonials_section(props: &TestimonialsProps) -> Html {
    let section = &props.section;
    html! {
        <section id="testimonials" class="landing-section tinted">
            <div class="container">
                {section_heading(&section.title, &section.subtitle)}
                <div class="card-grid">
                    {
                        for sequence(section.items.iter(), config::TESTIMONIAL_STEP).into_iter().map(|entry| {
                            let testimonial = entry.item;
                            html! {
                                <Reveal key={entry.index} delay={entry.delay} from={Pose::rise(50.0).with_scale(0.9)}>
                                    <div class="card lift-soft">
                                        <div class="stars">
                                            { for (0..testimonial.rating).map(|_| html! {
                                                <IconView glyph={Glyph::Star} size={16} filled={true} />
                                            }) }
                                        </div>
                                        <p class="quote">{format!("\"{}\"", testimonial.content)}</p>
                                        <div class="author">
                                            <img
                                                src={testimonial.image_or_placeholder().to_string()}
                                                alt={testimonial.name.clone()}
                                                width="48"
                                                height="48"
                                            />
                                            <div>
                                                <p class="author-name">{testimonial.name.clone()}</p>
                                                <p class="muted small">{testimonial.role.clone()}</p>
                                            </div>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PricingProps {
    pricing: Pricing,
}

#[function_component(PricingSection)]
fn pricing_section(props: &PricingProps) -> Html {
    let pricing = &props.pricing;
    html! {
        <section id="pricing" class="landing-section">
            <div class="container">
                {section_heading(&pricing.title, &pricing.subtitle)}
                <div class="card-grid">
                    {
                        for sequence(pricing.plans.iter(), config::PLAN_STEP).into_iter().map(|entry| {
                            let plan = entry.item;
                            let features = sequence_after(
                                plan.features.iter(),
                                entry.delay,
                                config::PLAN_FEATURE_STEP,
                            );
                            html! {
                                <Reveal
                                    key={entry.index}
                                    delay={entry.delay}
                                    class={classes!("plan", plan.popular.then_some("plan-popular"))}
                                >
                                    if plan.popular {
                                        <span class="badge badge-solid popular-badge">{"Most Popular"}</span>
                                    }
                                    <div class={classes!("card", if plan.popular { "card-popular" } else { "lift" })}>
                                        <div class="plan-header">
                                            <h3>{plan.name.clone()}</h3>
                                            <p class="muted">{plan.description.clone()}</p>
                                            <div class="plan-price">
                                                <span class="price">{plan.price.clone()}</span>
                                                if let Some(period) = &plan.period {
                                                    <span class="muted">{period.clone()}</span>
                                                }
                                            </div>
                                        </div>
                                        <ul class="plan-features">
                                            {
                                                for features.into_iter().map(|feature| html! {
                                                    <Reveal
                                                        key={feature.index}
                                                        tag="li"
                                                        from={Pose::slide(-20.0)}
                                                        delay={feature.delay}
                                                        duration={config::LIST_ITEM_DURATION}
                                                    >
                                                        <IconView glyph={Glyph::Check} size={20} class="check" />
                                                        <span>{feature.item.clone()}</span>
                                                    </Reveal>
                                                })
                                            }
                                        </ul>
                                        <button class={classes!(
                                            "button", "button-block", "press",
                                            if plan.popular { "button-primary" } else { "button-soft" }
                                        )}>
                                            {plan.cta().to_string()}
                                        </button>
                                    </div>
                                </Reveal>
                            }
                        })
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CallToActionProps {
    cta: CallToAction,
}

#[function_component(CallToActionSection)]
fn call_to_action_section(props: &CallToActionProps) -> Html {
    let cta = &props.cta;
    html! {
        <section class="landing-section cta">
            <Reveal class="container narrow" from={Pose::grow(0.9)}>
                <h2>{cta.title.clone()}</h2>
                <p>{cta.body.clone()}</p>
                <button class="button button-primary button-large press">{cta.button.clone()}</button>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    brand: String,
    footer: Footer,
}

#[function_component(PageFooter)]
fn page_footer(props: &FooterProps) -> Html {
    html! {
        <footer class="landing-footer">
            <div class="container">
                <div class="footer-row">
                    {brand_mark(&props.brand)}
                    <div class="footer-links">
                        { for props.footer.links.iter().map(|link| html! {
                            <a href="#">{link.clone()}</a>
                        }) }
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{props.footer.copyright.clone()}</p>
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    .landing {
        min-height: 100vh;
        position: relative;
        overflow: hidden;
        color: #2f3d2f;
        background: linear-gradient(135deg, #f6f8f4 0%, #fbf8f1 50%, #eef3ec 100%);
        font-family: "Inter", system-ui, sans-serif;
    }
    .landing-unavailable {
        padding: 6rem 1.5rem;
        text-align: center;
    }
    .container {
        max-width: 72rem;
        margin: 0 auto;
    }
    .container.narrow {
        max-width: 56rem;
        text-align: center;
    }
    .muted { color: #5f7a5f; }
    .small { font-size: 0.875rem; }

    .cursor-follower {
        position: fixed;
        top: 0;
        left: 0;
        width: 24px;
        height: 24px;
        border-radius: 9999px;
        background: rgba(164, 191, 164, 0.3);
        pointer-events: none;
        z-index: 50;
        mix-blend-mode: difference;
    }

    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .brand-mark {
        width: 2rem;
        height: 2rem;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        background: linear-gradient(135deg, #8fae8f, #5f7a5f);
    }
    .brand-name {
        font-size: 1.25rem;
        font-weight: 600;
    }

    .landing-header {
        position: relative;
        z-index: 10;
        padding: 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .landing-nav {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        display: inline-block;
        color: #4a614a;
        text-decoration: none;
        transition: color 0.2s, transform 0.2s;
    }
    .nav-link:hover {
        color: #243024;
        transform: translateY(-2px);
    }
    @media (max-width: 768px) {
        .landing-nav { display: none; }
    }

    .button {
        border: none;
        border-radius: 9999px;
        padding: 0.5rem 1.5rem;
        font-size: 1rem;
        cursor: pointer;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        transition: background 0.3s, transform 0.2s;
    }
    .button-primary { background: #5f7a5f; color: white; }
    .button-primary:hover { background: #4a614a; }
    .button-outline { background: transparent; color: #4a614a; border: 1px solid #b9ccb9; }
    .button-outline:hover { background: #f6f8f4; }
    .button-soft { background: #e4ece4; color: #2f3d2f; }
    .button-soft:hover { background: #d3e0d3; }
    .button-large { padding: 1rem 2rem; font-size: 1.125rem; }
    .button-block { width: 100%; padding: 0.75rem; }
    .press:hover, .hover-grow:hover { transform: scale(1.05); }
    .press:active { transform: scale(0.95); }
    .hover-grow { transition: transform 0.2s; }

    .badge {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        border: 1px solid #d3e0d3;
        background: #eef3ec;
        color: #2f3d2f;
        font-size: 0.875rem;
    }
    .badge-solid { background: #5f7a5f; color: white; border: none; padding: 0.25rem 1rem; }

    .hero {
        position: relative;
        z-index: 10;
        padding: 5rem 1.5rem;
        text-align: center;
    }
    .hero-inner { max-width: 72rem; margin: 0 auto; }
    .hero-badge-wrap { margin-bottom: 1.5rem; }
    .hero-headline {
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 700;
        line-height: 1.15;
        color: #243024;
        margin-bottom: 1.5rem;
    }
    .hero-headline .word {
        display: inline-block;
        margin-right: 0.5rem;
    }
    .hero-subheadline {
        font-size: 1.25rem;
        color: #5f7a5f;
        max-width: 42rem;
        margin: 0 auto 3rem;
        line-height: 1.7;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
        margin-bottom: 4rem;
    }

    .phone-wrap {
        position: relative;
        max-width: 24rem;
        margin: 0 auto;
    }
    .phone-glow {
        position: absolute;
        inset: 0;
        border-radius: 3rem;
        filter: blur(40px);
        transform: scale(1.1);
        background: linear-gradient(135deg, rgba(196, 214, 196, 0.5), rgba(240, 232, 214, 0.5));
    }
    .phone {
        position: relative;
        padding: 0.5rem;
        border-radius: 3rem;
        background: linear-gradient(135deg, #111827, #1f2937);
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    }
    .phone-screen {
        height: 600px;
        padding: 2rem;
        border-radius: 2.5rem;
        display: flex;
        flex-direction: column;
        background: linear-gradient(135deg, #f6f8f4, #fbf8f1);
    }
    .phone-icon {
        width: 3rem;
        height: 3rem;
        margin: 0 auto 2rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        background: linear-gradient(135deg, #8fae8f, #5f7a5f);
    }
    .phone-sessions {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        margin-top: 2rem;
        text-align: left;
    }
    .phone-session {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.8);
    }
    .phone-session-dot {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #d3e0d3;
    }
    .phone-session-title { font-weight: 500; }

    .landing-section {
        position: relative;
        z-index: 10;
        padding: 5rem 1.5rem;
    }
    .landing-section.tinted {
        background: linear-gradient(90deg, rgba(246, 248, 244, 0.5), rgba(251, 248, 241, 0.5));
    }
    .landing-section.cta {
        background: linear-gradient(135deg, #eef3ec, #f5efe2);
    }
    .landing-section h2 {
        font-size: clamp(2.25rem, 5vw, 3rem);
        font-weight: 700;
        color: #243024;
        margin-bottom: 1rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading p, .cta p {
        font-size: 1.25rem;
        color: #5f7a5f;
        max-width: 42rem;
        margin: 0 auto 2rem;
    }

    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 2rem;
    }
    .card {
        height: 100%;
        padding: 2rem;
        border-radius: 1.5rem;
        border: 1px solid #eef3ec;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(4px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.06);
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1); }
    .lift:hover { transform: translateY(-10px) scale(1.02); }
    .lift-soft:hover { transform: translateY(-5px) scale(1.02); }
    .card-popular {
        border-color: #b9ccb9;
        background: linear-gradient(135deg, #f6f8f4, #fbf8f1);
        transform: scale(1.05);
    }
    .card-popular:hover { transform: translateY(-10px) scale(1.05); }
    .card-icon { color: #5f7a5f; margin-bottom: 1rem; }

    .stars { display: flex; color: #facc15; margin-bottom: 1rem; }
    .quote { font-style: italic; line-height: 1.7; margin-bottom: 1.5rem; }
    .author { display: flex; align-items: center; gap: 0.75rem; }
    .author img { border-radius: 9999px; }
    .author-name { font-weight: 600; }

    .plan { position: relative; }
    .popular-badge {
        position: absolute;
        top: -1rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 1;
    }
    .plan-header { text-align: center; margin-bottom: 2rem; }
    .plan-price { display: flex; align-items: baseline; justify-content: center; gap: 0.25rem; }
    .price { font-size: 2.25rem; font-weight: 700; color: #243024; }
    .plan-features {
        list-style: none;
        padding: 0;
        margin: 0 0 2rem;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .plan-features li { display: flex; align-items: center; gap: 0.75rem; }
    .check { color: #5f7a5f; flex-shrink: 0; }

    .landing-footer {
        position: relative;
        z-index: 10;
        padding: 3rem 1.5rem;
        background: #243024;
        color: white;
    }
    .footer-row {
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
    }
    .footer-links { display: flex; gap: 1.5rem; }
    .footer-links a { color: #b9ccb9; text-decoration: none; transition: color 0.2s; }
    .footer-links a:hover { color: white; }
    .footer-legal {
        margin-top: 2rem;
        padding-top: 2rem;
        border-top: 1px solid #2f3d2f;
        text-align: center;
        color: #8fae8f;
    }
"#;
