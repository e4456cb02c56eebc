//! Static copy for the landing page.

/// Brand and hero copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub call_to_action: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    name: "Velocis",
    tagline: "Speed. Precision. Modern Web Development.",
    description: "Speed-focused web development for businesses. One-time builds or monthly plans.",
    call_to_action: "Get Started",
};

/// One card in the services listing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "One-Time Website",
        description: "Custom-built sites delivered fast. Perfect for businesses who want full ownership.",
        price: "Starts at $700",
    },
    Service {
        title: "Monthly Plans",
        description: "Ongoing updates, hosting, and support with no upfront cost.",
        price: "From $100/mo",
    },
    Service {
        title: "Custom Solutions",
        description: "Need something more complex? Let\u{2019}s build something powerful together.",
        price: "Let\u{2019}s talk",
    },
];

/// Footer line for the given year.
pub fn copyright(year: i32) -> String {
    format!("\u{00A9} {} {}. All rights reserved.", year, SITE.name)
}
