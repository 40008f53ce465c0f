//! Static portfolio content
//!
//! Two read-only records drive everything the views display. They are
//! defined once, never mutated, and serialized as-is into the structured
//! output.

use serde::Serialize;

/// The individual the card belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    /// Full display name
    pub name: &'static str,
    /// Role title
    pub title: &'static str,
    /// Company name
    pub company: &'static str,
    /// One-line positioning statement
    pub tagline: &'static str,
    /// City / region label
    pub location: &'static str,
    /// Phone number in dialable form
    pub phone: &'static str,
    /// Bare website host, without scheme
    pub website: &'static str,
    /// Full LinkedIn profile URL
    pub linkedin: &'static str,
    /// Connection count label, e.g. `500+`
    pub connections: &'static str,
    /// Short biography paragraph
    pub bio: &'static str,
    /// Ordered skill labels
    pub skills: &'static [&'static str],
}

impl Profile {
    /// Initials shown in the avatar slot, derived from the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Aadil Hannan",
            title: "Founder & Managing Director",
            company: "Bloocube",
            tagline: "Building a SaaS Powerhouse | Digital Marketing | Esports | Web3",
            location: "New Delhi, Delhi, India",
            phone: "+91-9798383898",
            website: "www.bloocube.com",
            linkedin: "https://www.linkedin.com/in/aadil-hannan/",
            connections: "500+",
            bio: "Hi, I'm Aadil Hannan — a startup builder, storyteller, and currently \
                  the founder of Bloocube, an AI-powered influencer marketplace helping \
                  nano/micro creators and early-stage startups grow together. My passion \
                  lies in solving real-world problems with scalable, tech-first solutions \
                  — and building communities that create lasting impact.",
            skills: &[
                "Startup Building",
                "Digital Marketing",
                "SaaS",
                "Web3",
                "Influencer Marketing",
                "Esports",
                "Content Strategy",
                "Growth Hacking",
            ],
        }
    }
}

/// One product capability entry.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    /// Pictogram shown in front of the title
    pub icon: &'static str,
    /// Capability name
    pub title: &'static str,
    /// Capability description
    pub description: &'static str,
}

/// One headline metric.
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    /// Metric value label, e.g. `3x`
    pub value: &'static str,
    /// Metric name
    pub label: &'static str,
}

/// The product the card promotes.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Product name
    pub name: &'static str,
    /// One-line pitch
    pub tagline: &'static str,
    /// Longer description paragraph
    pub description: &'static str,
    /// Ordered capability entries
    pub features: &'static [Feature],
    /// Ordered headline metrics
    pub stats: &'static [Stat],
}

impl Default for Product {
    fn default() -> Self {
        Self {
            name: "Bloocube",
            tagline: "Create content. Manage social. Run influencer marketing.",
            description: "Bloocube is an AI-powered influencer marketplace that connects \
                          nano/micro creators with early-stage startups. We help brands \
                          scale their reach and creators monetize their influence through \
                          data-driven campaigns and seamless collaboration tools.",
            features: &[
                Feature {
                    icon: "🤖",
                    title: "AI-Powered Matching",
                    description: "Smart algorithms connect the right creators with the \
                                  right brands for maximum campaign impact.",
                },
                Feature {
                    icon: "📊",
                    title: "Social Management",
                    description: "Unified dashboard to manage all your social media \
                                  channels, content, and analytics in one place.",
                },
                Feature {
                    icon: "🎯",
                    title: "Influencer Marketing",
                    description: "End-to-end campaign management from creator discovery \
                                  to performance tracking and payments.",
                },
                Feature {
                    icon: "🌐",
                    title: "Web3 Ready",
                    description: "Next-generation creator economy tools with \
                                  blockchain-backed transparency and micro-transactions.",
                },
            ],
            stats: &[
                Stat {
                    value: "500+",
                    label: "Creator Network",
                },
                Stat {
                    value: "50+",
                    label: "Brand Partners",
                },
                Stat {
                    value: "3x",
                    label: "Avg. ROI",
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_initials() {
        let profile = Profile::default();
        assert_eq!(profile.initials(), "AH");
    }

    #[test]
    fn record_shapes_match_the_card() {
        let profile = Profile::default();
        let product = Product::default();
        assert_eq!(profile.skills.len(), 8);
        assert_eq!(product.features.len(), 4);
        assert_eq!(product.stats.len(), 3);
        assert_eq!(product.name, profile.company);
    }

    #[test]
    fn records_serialize_to_json() {
        let value = serde_json::to_value(Profile::default()).unwrap();
        assert_eq!(value["name"], "Aadil Hannan");
        assert_eq!(value["skills"][0], "Startup Building");

        let value = serde_json::to_value(Product::default()).unwrap();
        assert_eq!(value["stats"][2]["value"], "3x");
        assert_eq!(value["features"][0]["title"], "AI-Powered Matching");
    }
}
