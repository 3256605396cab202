//! Static site copy for the marketing pages and navigation.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_NAME: &str = "HeartCraft";
pub const TAGLINE: &str = "Meaningful Matches. Curated With Care.";

/// A navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { title: "Home", href: "/" },
    NavItem { title: "How It Works", href: "/how-it-works" },
    NavItem { title: "About Us", href: "/about" },
    NavItem { title: "Contact", href: "/contact" },
];

pub const DASHBOARD_NAV: [NavItem; 5] = [
    NavItem { title: "Overview", href: "/dashboard" },
    NavItem { title: "My Profile", href: "/dashboard/profile" },
    NavItem { title: "My Matches", href: "/dashboard/matches" },
    NavItem { title: "Messages", href: "/dashboard/messages" },
    NavItem { title: "Settings", href: "/dashboard/settings" },
];

pub const ADMIN_NAV: [NavItem; 1] =
    [NavItem { title: "Email Templates", href: "/dashboard/admin/email-templates" }];

/// A titled blurb used for process steps and selling points.
#[derive(Clone, Copy, Debug)]
pub struct Blurb {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOW_IT_WORKS_STEPS: [Blurb; 4] = [
    Blurb {
        title: "Submit Your Profile",
        description: "Create a detailed, private profile focusing on your personality, values, and relationship goals.",
    },
    Blurb {
        title: "Expert Review",
        description: "Our experienced matchmakers carefully review your profile to understand what you're looking for.",
    },
    Blurb {
        title: "Manual Matching",
        description: "We thoughtfully hand-pick potential matches based on deep compatibility, not algorithms.",
    },
    Blurb {
        title: "Receive Your Match",
        description: "Get notified when we find a highly compatible match. You can view their profile in your private dashboard.",
    },
];

pub const WHY_CHOOSE_US: [Blurb; 3] = [
    Blurb {
        title: "Manual Vetting",
        description: "Every profile is reviewed by a real person to ensure quality and authenticity.",
    },
    Blurb {
        title: "Privacy-Focused",
        description: "Your profile is only visible to our team and your hand-picked matches. No public browsing.",
    },
    Blurb {
        title: "For Serious Relationships",
        description: "Our community is for individuals committed to finding a genuine, long-term partnership.",
    },
];

/// A couple the service matched, shown as social proof.
#[derive(Clone, Copy, Debug)]
pub struct SuccessStory {
    pub names: &'static str,
    pub matched_date: &'static str,
    pub quote: &'static str,
}

pub const SUCCESS_STORIES: [SuccessStory; 3] = [
    SuccessStory {
        names: "Jessica & Tom",
        matched_date: "June 2023",
        quote: "The personal touch made all the difference. We were matched on values we both hold dear.",
    },
    SuccessStory {
        names: "Maria & David",
        matched_date: "September 2023",
        quote: "We were both tired of the dating app scene. HeartCraft introduced us in a thoughtful way that felt natural and right.",
    },
    SuccessStory {
        names: "Chloe & Ben",
        matched_date: "November 2023",
        quote: "Our matchmaker saw a connection we might have missed online. We're now engaged!",
    },
];

/// A subscription tier on the pricing section.
#[derive(Clone, Copy, Debug)]
pub struct PricingPlan {
    pub title: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub const PRICING_PLANS: [PricingPlan; 2] = [
    PricingPlan {
        title: "Discovery",
        description: "Start your journey",
        price: 99,
        period: "month",
        features: &[
            "Detailed Profile Submission",
            "Expert Profile Review",
            "Consideration for Matches",
            "Access to Dashboard",
        ],
        featured: false,
    },
    PricingPlan {
        title: "Dedicated Search",
        description: "Our full attention",
        price: 899,
        period: "year",
        features: &[
            "Everything in Discovery",
            "Guaranteed Curated Matches",
            "Priority Matchmaker Access",
            "Post-Match Feedback Sessions",
        ],
        featured: true,
    },
];
