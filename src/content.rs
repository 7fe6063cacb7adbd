//! Page copy. The records are loaded from `content/landing.json`, which is
//! embedded into the binary at build time.

use serde::Deserialize;
use thiserror::Error;

const LANDING_JSON: &str = include_str!("../content/landing.json");

const DEFAULT_CTA: &str = "Get Started";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("landing copy is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("pricing plan {0:?} has no features")]
    EmptyPlan(String),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LandingContent {
    pub brand: String,
    pub nav: Vec<String>,
    pub header_cta: String,
    pub hero: Hero,
    pub features: Section<Feature>,
    pub testimonials: Section<Testimonial>,
    pub pricing: Pricing,
    pub cta: CallToAction,
    pub footer: Footer,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub phone: PhoneMockup,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PhoneMockup {
    pub greeting: String,
    pub prompt: String,
    pub sessions: Vec<Session>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub title: String,
    pub detail: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Section<T> {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<T>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Heart,
    Sparkles,
    Leaf,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub image: Option<String>,
}

impl Testimonial {
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or("/assets/placeholder.svg")
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Pricing {
    pub title: String,
    pub subtitle: String,
    pub plans: Vec<Plan>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub period: Option<String>,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    cta: Option<String>,
}

impl Plan {
    pub fn cta(&self) -> &str {
        self.cta.as_deref().unwrap_or(DEFAULT_CTA)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub button: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Footer {
    pub links: Vec<String>,
    pub copyright: String,
}

impl LandingContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(LANDING_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: LandingContent = serde_json::from_str(json)?;
        if let Some(plan) = content.pricing.plans.iter().find(|plan| plan.features.is_empty()) {
            return Err(ContentError::EmptyPlan(plan.name.clone()));
        }
        Ok(content)
    }
}

/// Fragment link for a nav item, e.g. `Features` -> `#features`.
pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_copy_parses() {
        let content = LandingContent::load().expect("embedded content");
        assert_eq!(content.brand, "Serenity");
        assert_eq!(content.nav, ["Features", "Testimonials", "Pricing", "About"]);
        assert_eq!(content.features.items.len(), 3);
        assert_eq!(content.testimonials.items.len(), 3);
        assert_eq!(content.pricing.plans.len(), 3);
    }

    #[test]
    fn exactly_one_popular_plan() {
        let content = LandingContent::load().unwrap();
        let popular: Vec<_> = content
            .pricing
            .plans
            .iter()
            .filter(|plan| plan.popular)
            .map(|plan| plan.name.as_str())
            .collect();
        assert_eq!(popular, ["Premium"]);
    }

    #[test]
    fn starter_plan_has_its_own_call_to_action() {
        let content = LandingContent::load().unwrap();
        let ctas: Vec<_> = content.pricing.plans.iter().map(Plan::cta).collect();
        assert_eq!(ctas, ["Start Free", "Get Started", "Get Started"]);
        assert_eq!(content.pricing.plans[1].period.as_deref(), Some("/month"));
        assert_eq!(content.pricing.plans[0].period, None);
    }

    #[test]
    fn headline_splits_into_words() {
        let content = LandingContent::load().unwrap();
        assert_eq!(
            crate::motion::split_words(&content.hero.headline),
            ["Find", "Your", "Inner", "Peace", "in", "the", "Digital", "Age"]
        );
    }

    #[test]
    fn invalid_copy_is_an_error() {
        assert!(matches!(
            LandingContent::parse("{ \"brand\": 3 }"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn plan_without_features_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(LANDING_JSON).unwrap();
        value["pricing"]["plans"][2]["features"] = serde_json::json!([]);
        let err = LandingContent::parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyPlan(name) if name == "Lifetime"));
    }

    #[test]
    fn nav_anchors_are_lowercase_fragments() {
        assert_eq!(anchor("Testimonials"), "#testimonials");
    }
}
