//! Section presentations.
//!
//! Colors, fonts and radii are referenced through CSS variables set on the
//! page wrapper emitted by [`super::compose`], see [`RenderContext::var`].

use maud::{Markup, PreEscaped, html};

use super::RenderContext;
use crate::{
    icons::{Icon, render_icon},
    overlay::format_title,
    schema::*,
};

/// A content record that knows how to render itself.
pub trait Present {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup;
}

/// Grid spans cycled across feature cards.
const FEATURE_SPANS: [u8; 6] = [4, 2, 2, 4, 3, 3];

fn heading_style(ctx: &RenderContext<'_>) -> String {
    format!("color: {}; font-family: {};", ctx.var("color-text"), ctx.var("font-heading"))
}

fn muted_style(ctx: &RenderContext<'_>) -> String {
    format!("color: {};", ctx.var("color-text-muted"))
}

fn primary_button_style(ctx: &RenderContext<'_>) -> String {
    format!(
        "background-color: {}; color: {}; border-radius: {};",
        ctx.var("color-primary"),
        ctx.var("color-text-inverse"),
        ctx.var("radius-md")
    )
}

fn outline_button_style(ctx: &RenderContext<'_>) -> String {
    format!(
        "border: 1px solid {}; color: {}; border-radius: {};",
        ctx.var("color-border"),
        ctx.var("color-text"),
        ctx.var("radius-md")
    )
}

/// `29` for whole prices, `24.50` otherwise.
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

fn section_header(ctx: &RenderContext<'_>, headline: &str, subheadline: Option<&str>) -> Markup {
    html! {
        div class="section-header" {
            h2 style=(heading_style(ctx)) { (headline) }
            @if let Some(sub) = subheadline {
                p class="section-subheadline" style=(muted_style(ctx)) { (sub) }
            }
        }
    }
}

impl Present for NavigationContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            header id="navigation" class="site-nav"
                style={ "background-color: " (ctx.var("color-bg")) "; border-bottom: 1px solid " (ctx.var("color-border")) ";" } {
                nav {
                    a class="logo" href="#" style=(heading_style(ctx)) { (self.logo) }
                    ul class="nav-items" {
                        @for item in &self.items {
                            li {
                                @if item.is_button {
                                    a class="nav-cta" href=(item.href) style=(primary_button_style(ctx)) { (item.label) }
                                } @else {
                                    a class="nav-link" href=(item.href) style=(muted_style(ctx)) { (item.label) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Present for HeroContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        let variant = self.variant.as_str();
        html! {
            section id="hero" class={ "hero hero-" (variant) } data-variant=(variant)
                style={ "background-color: " (ctx.var("color-bg")) ";" } {
                h1 style=(heading_style(ctx)) { (PreEscaped(format_title(&self.headline))) }
                p class="hero-subheadline" style=(muted_style(ctx)) { (self.subheadline) }
                div class="hero-actions" {
                    a class="btn btn-primary" href=(self.primary_cta.href) style=(primary_button_style(ctx)) {
                        (self.primary_cta.text)
                        (Icon::ArrowRight.svg(16))
                    }
                    @if let Some(cta) = &self.secondary_cta {
                        a class="btn btn-secondary" href=(cta.href) style=(outline_button_style(ctx)) { (cta.text) }
                    }
                }
                @if let Some(proof) = &self.social_proof {
                    p class="hero-social-proof" style=(muted_style(ctx)) { (proof) }
                }
            }
        }
    }
}

impl Present for SocialProofBarContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            section id="social-proof" class="social-proof-bar"
                style={ "background-color: " (ctx.var("color-surface")) ";" } {
                @if let Some(metric) = &self.metric {
                    p class="social-proof-metric" style={ "color: " (ctx.var("color-primary")) ";" } { (metric) }
                }
                ul class="social-proof-logos" {
                    @for item in &self.items {
                        li style=(muted_style(ctx)) { (item) }
                    }
                }
            }
        }
    }
}

impl Present for ProblemAgitationContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            section id="problem" class="problem-agitation"
                style={ "background-color: " (ctx.var("color-surface-alt")) ";" } {
                (section_header(ctx, &self.headline, Some(&self.description)))
                div class="pain-points" {
                    @for point in &self.pain_points {
                        div class="pain-point"
                            style={ "border: 1px solid " (ctx.var("color-border")) "; border-radius: " (ctx.var("radius-lg")) ";" } {
                            h3 style=(heading_style(ctx)) { (point.heading) }
                            p style=(muted_style(ctx)) { (point.description) }
                        }
                    }
                }
            }
        }
    }
}

impl Present for HowItWorksContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            section id="how-it-works" class="how-it-works"
                style={ "background-color: " (ctx.var("color-bg")) ";" } {
                (section_header(ctx, &self.headline, self.subheadline.as_deref()))
                ol class="steps" {
                    @for step in &self.steps {
                        li class="step" data-step=(step.number) {
                            span class="step-icon" style={ "color: " (ctx.var("color-primary")) ";" } {
                                (render_icon(&step.icon, 24))
                            }
                            span class="step-number" style={ "color: " (ctx.var("color-primary")) ";" } { (step.number) }
                            h3 style=(heading_style(ctx)) { (step.heading) }
                            p style=(muted_style(ctx)) { (step.description) }
                        }
                    }
                }
                @if let Some(cta) = &self.cta {
                    a class="btn btn-primary" href=(cta.href) style=(primary_button_style(ctx)) { (cta.text) }
                }
            }
        }
    }
}

impl Present for FeaturesContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            section id="features" class="features"
                style={ "background-color: " (ctx.var("color-bg")) ";" } {
                (section_header(ctx, &self.headline, self.subheadline.as_deref()))
                div class="feature-grid" {
                    @for (i, feature) in self.features.iter().enumerate() {
                        div class={ "feature-card span-" (FEATURE_SPANS[i % FEATURE_SPANS.len()]) }
                            style={ "border: 1px solid " (ctx.var("color-border")) "; border-radius: " (ctx.var("radius-lg")) ";" } {
                            div class="feature-icon" style={ "color: " (ctx.var("color-primary")) ";" } {
                                (render_icon(&feature.icon, 20))
                            }
                            h3 style=(heading_style(ctx)) { (feature.heading) }
                            p style=(muted_style(ctx)) { (feature.description) }
                        }
                    }
                }
            }
        }
    }
}

fn testimonial_card(t: &Testimonial, ctx: &RenderContext<'_>) -> Markup {
    html! {
        figure class="testimonial"
            style={ "border: 1px solid " (ctx.var("color-border")) "; border-radius: " (ctx.var("radius-lg")) ";" } {
            blockquote style=(muted_style(ctx)) { (t.quote) }
            figcaption {
                span class="avatar"
                    style={ "background-color: " (ctx.var("color-primary")) "; color: " (ctx.var("color-text-inverse")) "; border-radius: " (ctx.var("radius-full")) ";" } {
                    (t.avatar_initials)
                }
                span class="testimonial-name" style=(heading_style(ctx)) { (t.name) }
                span class="testimonial-role" style=(muted_style(ctx)) { (t.role) ", " (t.company) }
            }
        }
    }
}

impl Present for TestimonialsContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        let (featured, rest) = match self.testimonials.split_first() {
            Some((first, rest)) => (Some(first), rest),
            None => (None, &[][..]),
        };
        html! {
            section id="testimonials" class="testimonials"
                style={ "background-color: " (ctx.var("color-surface")) ";" } {
                (section_header(ctx, &self.headline, None))
                @if let Some(t) = featured {
                    div class="testimonial-featured" {
                        @if let Some(highlight) = &t.highlight {
                            p class="pull-quote"
                                style={ "color: " (ctx.var("color-primary")) "; font-family: " (ctx.var("font-heading")) ";" } {
                                "\u{201c}" (highlight) "\u{201d}"
                            }
                        }
                        (testimonial_card(t, ctx))
                    }
                }
                div class="testimonial-grid" {
                    @for t in rest {
                        (testimonial_card(t, ctx))
                    }
                }
            }
        }
    }
}

fn plan_card(plan: &PricingPlan, ctx: &RenderContext<'_>) -> Markup {
    let (class, border, cta_style) = if plan.recommended {
        ("plan plan-recommended", ctx.var("color-primary"), primary_button_style(ctx))
    } else {
        ("plan", ctx.var("color-border"), outline_button_style(ctx))
    };
    html! {
        div class=(class)
            style={ "border: 1px solid " (border) "; border-radius: " (ctx.var("radius-lg")) ";" } {
            @if plan.recommended {
                span class="plan-badge" style=(primary_button_style(ctx)) { "Most Popular" }
            }
            h3 style=(heading_style(ctx)) { (plan.name) }
            p style=(muted_style(ctx)) { (plan.description) }
            div class="plan-price" data-monthly=(format_price(plan.price_monthly)) data-annual=(format_price(plan.price_annual)) {
                span class="price" style=(heading_style(ctx)) { "$" (format_price(plan.price_annual)) }
                @if plan.price_annual > 0.0 {
                    span class="period" style=(muted_style(ctx)) { "/mo" }
                } @else {
                    span class="period" style=(muted_style(ctx)) { "forever" }
                }
            }
            a class="btn plan-cta" href="#cta" style=(cta_style) { (plan.cta) }
            ul class="plan-features" {
                @for f in &plan.features {
                    li class=(if f.included { "included" } else { "excluded" }) {
                        @if f.included {
                            span style={ "color: " (ctx.var("color-accent")) ";" } { (Icon::Check.svg(16)) }
                            span style={ "color: " (ctx.var("color-text")) ";" } { (f.text) }
                        } @else {
                            span style=(muted_style(ctx)) { (Icon::X.svg(16)) }
                            span style={ "color: " (ctx.var("color-text-muted")) "; opacity: 0.5;" } { (f.text) }
                        }
                    }
                }
            }
        }
    }
}

impl Present for PricingContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            section id="pricing" class="pricing"
                style={ "background-color: " (ctx.var("color-bg")) ";" } {
                (section_header(ctx, &self.headline, self.subheadline.as_deref()))
                div class="billing-toggle" data-billing="annual" {
                    span { "Monthly" }
                    span { "Annual " span style={ "color: " (ctx.var("color-accent")) ";" } { "Save 20%" } }
                }
                div class="plans" {
                    @for plan in &self.plans {
                        (plan_card(plan, ctx))
                    }
                }
            }
        }
    }
}

impl Present for FaqContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            section id="faq" class="faq" style={ "background-color: " (ctx.var("color-surface")) ";" } {
                (section_header(ctx, &self.headline, None))
                div class="faq-items" {
                    @for item in &self.items {
                        details class="faq-item"
                            style={ "border-bottom: 1px solid " (ctx.var("color-border")) ";" } {
                            summary style=(heading_style(ctx)) { (item.question) }
                            p style=(muted_style(ctx)) { (item.answer) }
                        }
                    }
                }
            }
        }
    }
}

impl Present for FinalCtaContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            section id="cta" class="final-cta"
                style={ "background-color: " (ctx.var("color-primary-dark")) "; color: " (ctx.var("color-text-inverse")) ";" } {
                h2 style={ "font-family: " (ctx.var("font-heading")) ";" } { (self.headline) }
                p { (self.description) }
                a class="btn btn-inverse" href=(self.cta.href)
                    style={ "background-color: " (ctx.var("color-bg")) "; color: " (ctx.var("color-primary")) "; border-radius: " (ctx.var("radius-md")) ";" } {
                    (self.cta.text)
                }
                @if let Some(trust) = &self.trust_element {
                    p class="trust-element" { (trust) }
                }
            }
        }
    }
}

impl Present for FooterContent {
    fn present(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            footer id="footer" class="site-footer"
                style={ "background-color: " (ctx.var("color-surface-alt")) "; border-top: 1px solid " (ctx.var("color-border")) ";" } {
                div class="footer-brand" style=(heading_style(ctx)) { (self.logo) }
                div class="footer-columns" {
                    @for column in &self.columns {
                        div class="footer-column" {
                            h4 style=(heading_style(ctx)) { (column.heading) }
                            ul {
                                @for link in &column.links {
                                    li { a href=(link.href) style=(muted_style(ctx)) { (link.label) } }
                                }
                            }
                        }
                    }
                }
                @if !self.social.is_empty() {
                    ul class="footer-social" {
                        @for s in &self.social {
                            li { a href=(s.href) rel="noopener" style=(muted_style(ctx)) { (s.platform) } }
                        }
                    }
                }
                p class="legal" style=(muted_style(ctx)) { (self.legal) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{DesignTokens, resolve_tokens};

    fn render<P: Present>(p: &P) -> String {
        let tokens = resolve_tokens(&DesignTokens::default());
        p.present(&RenderContext::new(&tokens)).into_string()
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(29.0), "29");
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(24.5), "24.50");
    }

    #[test]
    fn test_nav_button_item() {
        let nav = NavigationContent {
            logo: "Acme & Co".into(),
            items: vec![
                NavItem {
                    label: "Pricing".into(),
                    href: "#pricing".into(),
                    is_button: false,
                },
                NavItem {
                    label: "Start".into(),
                    href: "#cta".into(),
                    is_button: true,
                },
            ],
        };
        let html = render(&nav);
        assert!(html.contains("Acme &amp; Co"));
        assert!(html.contains("background-color: var(--color-primary, #6366f1);"));
        assert!(html.contains("class=\"nav-link\" href=\"#pricing\""));
        assert!(html.contains("class=\"nav-cta\" href=\"#cta\""));
    }

    #[test]
    fn test_content_is_escaped() {
        let faq = FaqContent {
            headline: "<script>alert(1)</script>".into(),
            items: vec![FaqItem {
                question: "Is \"free\" free?".into(),
                answer: "a < b".into(),
            }],
        };
        let html = render(&faq);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("<details"));
    }

    #[test]
    fn test_unknown_feature_icon_degrades() {
        let features = FeaturesContent {
            headline: "F".into(),
            subheadline: None,
            features: vec![
                Feature {
                    heading: "Known".into(),
                    description: "d".into(),
                    icon: "Globe".into(),
                },
                Feature {
                    heading: "Unknown".into(),
                    description: "d".into(),
                    icon: "Hologram".into(),
                },
            ],
        };
        let html = render(&features);
        assert_eq!(html.matches("<svg").count(), 1);
        assert!(html.contains("Unknown"));
        assert!(html.contains("span-4"));
        assert!(html.contains("span-2"));
    }

    #[test]
    fn test_pricing_plan_rendering() {
        let pricing = PricingContent {
            headline: "P".into(),
            subheadline: None,
            plans: vec![
                PricingPlan {
                    name: "Starter".into(),
                    description: "d".into(),
                    price_monthly: 0.0,
                    price_annual: 0.0,
                    features: vec![PlanFeature {
                        text: "Custom domains".into(),
                        included: false,
                    }],
                    cta: "Go".into(),
                    recommended: false,
                },
                PricingPlan {
                    name: "Pro".into(),
                    description: "d".into(),
                    price_monthly: 29.0,
                    price_annual: 24.0,
                    features: vec![PlanFeature {
                        text: "A/B testing".into(),
                        included: true,
                    }],
                    cta: "Try".into(),
                    recommended: true,
                },
            ],
        };
        let html = render(&pricing);
        assert_eq!(html.matches("Most Popular").count(), 1);
        assert!(html.contains("data-monthly=\"29\""));
        assert!(html.contains("$24"));
        assert!(html.contains("forever"));
        assert!(html.contains("class=\"excluded\""));
        assert!(html.contains("class=\"included\""));
    }

    #[test]
    fn test_featured_testimonial_pull_quote() {
        let content = TestimonialsContent {
            headline: "T".into(),
            testimonials: vec![Testimonial {
                quote: "It doubled our signups.".into(),
                highlight: Some("doubled our signups".into()),
                name: "Ana".into(),
                role: "CEO".into(),
                company: "Nova".into(),
                avatar_initials: "A".into(),
            }],
        };
        let html = render(&content);
        assert!(html.contains("class=\"pull-quote\""));
        assert!(html.contains("\u{201c}doubled our signups\u{201d}"));
        assert!(html.contains("CEO, Nova"));
    }

    #[test]
    fn test_hero_variant_attribute() {
        let hero = HeroContent {
            headline: "Ship *faster* & safer".into(),
            subheadline: "S".into(),
            primary_cta: CallToAction::new("Start", "#cta"),
            secondary_cta: None,
            social_proof: None,
            variant: HeroVariant::FullBleed,
        };
        let html = render(&hero);
        assert!(html.contains("data-variant=\"full-bleed\""));
        assert!(html.contains("hero-full-bleed"));
        assert!(!html.contains("btn-secondary"));
        assert!(html.contains("Ship <em>faster</em> &amp; safer"));
    }
}
