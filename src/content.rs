//! Static landing-page content: hero copy, feature cards, pricing plans.
//! Served read-only as JSON; the browser shell owns layout and styling.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingContent {
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub pricing: Vec<PricingPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub plan: &'static str,
    pub price: &'static str,
    pub capacity: &'static str,
    pub features: &'static str,
}

pub fn landing() -> LandingContent {
    LandingContent {
        hero: Hero {
            brand: "MediCall",
            tagline: "Your Voice, Your Care, One Call Away.",
            description: "Experience the future of healthcare communication with our \
                          AI-powered platform. Connect with medical professionals \
                          instantly, get expert advice, and manage your health with \
                          confidence.",
            primary_cta: "Get Started",
            secondary_cta: "Contact Us",
        },
        features: vec![
            Feature {
                title: "24/7 Availability",
                description: "Access healthcare support anytime, day or night, whenever you need it most.",
            },
            Feature {
                title: "AI-Powered Triage",
                description: "Smart routing system that connects you with the right specialist for your specific needs.",
            },
            Feature {
                title: "Multi-Language Support",
                description: "Communicate in your preferred language with our comprehensive translation capabilities.",
            },
            Feature {
                title: "Voice & Video Calls",
                description: "Choose between voice-only or video consultations based on your comfort and needs.",
            },
            Feature {
                title: "Digital Prescriptions",
                description: "Receive electronic prescriptions that can be sent directly to your pharmacy.",
            },
            Feature {
                title: "Health Monitoring",
                description: "Track your health metrics and receive personalized recommendations over time.",
            },
        ],
        pricing: vec![
            PricingPlan {
                plan: "Free",
                price: "$0",
                capacity: "1 doctor, 10 patients",
                features: "Appointment booking only; no analytics or admin dashboard",
            },
            PricingPlan {
                plan: "Basic",
                price: "$99",
                capacity: "3 doctors, 50 patients",
                features: "Full access to core features (triage, scheduling, reminders)",
            },
            PricingPlan {
                plan: "Premium",
                price: "$299",
                capacity: "10 doctors, 200 patients",
                features: "All features, including doctor performance analytics, multilingual support, follow-ups",
            },
            PricingPlan {
                plan: "Enterprise",
                price: "Starts at $499 + custom quote",
                capacity: "Unlimited users",
                features: "Everything in Premium + EHR/EMR integrations, custom branding, API access, advanced analytics",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_content_is_complete() {
        let c = landing();
        assert_eq!(c.features.len(), 6);
        assert_eq!(c.pricing.len(), 4);
        assert_eq!(c.pricing[0].plan, "Free");
        assert_eq!(c.pricing[3].plan, "Enterprise");
        assert!(c.hero.tagline.contains("One Call Away"));
    }
}
