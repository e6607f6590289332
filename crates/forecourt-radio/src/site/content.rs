//! Copy and fixed data for the landing page.

pub const PAGE_TITLE: &str = "Forecourt-Radio | Fuel Station Radio & Advertising";
pub const META_DESCRIPTION: &str = "Forecourt-Radio is a curated music and advertising radio service for service stations and fuel forecourts.";

pub const BRAND: &str = "Forecourt-Radio";
pub const HERO_BADGE: &str = "Designed for service stations & fuel retailers";
pub const HERO_CTA: &str = "Enquire now";
pub const HERO_INTRO: &str = "Forecourt-Radio streams music and targeted advertising directly to your PA speakers, so customers enjoy their fill-up while your brand and partners get heard.";
pub const FOOTER_TAGLINE: &str = "Powered by Captivate Futuristic Workspace";

/// Anchor ids shared by the nav, the call to action and the sections.
pub const SERVICES_ANCHOR: &str = "services";
pub const SAMPLES_ANCHOR: &str = "audio-samples";
pub const ENQUIRY_ANCHOR: &str = "enquiry-form";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Services",
        anchor: SERVICES_ANCHOR,
    },
    NavLink {
        label: "Samples",
        anchor: SAMPLES_ANCHOR,
    },
    NavLink {
        label: "Enquire",
        anchor: ENQUIRY_ANCHOR,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES_HEADING: &str = "What Forecourt-Radio Delivers";
pub const SERVICES_INTRO: &str = "Create an on-brand sound experience while running highly targeted advertising to customers at the pump.";

pub const SERVICES: [ServiceCard; 4] = [
    ServiceCard {
        title: "Curated music for your brand",
        description: "Keep your forecourt sounding fresh with curated playlists matched to your brand and audience.",
    },
    ServiceCard {
        title: "Targeted advertising spots",
        description: "Run dynamic ad rotations for your own promotions or partner brands during key moments of the day.",
    },
    ServiceCard {
        title: "Smart day-part scheduling",
        description: "Schedule different mixes of music and ads for morning rush, daytime, and evening traffic.",
    },
    ServiceCard {
        title: "Centralised control",
        description: "Update messages, campaigns, and playlists remotely across multiple sites in just a few clicks.",
    },
];

/// A playable demo served from the audio directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSample {
    pub title: &'static str,
    pub description: &'static str,
    pub file: &'static str,
    pub duration: Option<&'static str>,
}

impl AudioSample {
    pub fn url(&self) -> String {
        format!("/audio/{}", self.file)
    }
}

pub const SAMPLES_HEADING: &str = "Hear Forecourt-Radio in Action";
pub const SAMPLES_INTRO: &str = "Press play to hear examples of the kind of music, messages, and ad breaks we can run across your forecourt PA system.";

pub const AUDIO_SAMPLES: [AudioSample; 3] = [
    AudioSample {
        title: "Upbeat Forecourt Music Mix",
        description: "High-energy, feel-good tracks to keep customers in a good mood while they fuel up.",
        file: "rapsample.mp3",
        duration: Some("2:10 demo"),
    },
    AudioSample {
        title: "Promotional Spot – Fuel Discount",
        description: "Sample promotional message highlighting a time-limited discount on fuel or in-store offers.",
        file: "promo_sample.mp3",
        duration: Some("2:10 demo"),
    },
    AudioSample {
        title: "Music + Ad Break Example",
        description: "A short blend of music followed by a clean advertising slot, as it might sound on your forecourt.",
        file: "mixed-break-music-plus-ad.mp3",
        duration: Some("0:45 demo"),
    },
];

pub const ENQUIRY_HEADING: &str = "Enquire about Forecourt-Radio";
pub const ENQUIRY_INTRO: &str = "Tell us a little about your service station or network and we'll come back with options for music, advertising packages, and rollout.";

pub const SELLING_POINTS: [&str; 3] = [
    "Flexible pricing for single sites & chains",
    "Content & advertising tailored to your brand",
    "Technical support for PA speaker integration",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        href: "mailto:hello@forecourt-radio.com.au",
        label: "info@forecourt-radio.com",
    },
    ContactLink {
        href: "tel:+61400000000",
        label: "(08) 9368 7553",
    },
];

pub fn is_known_sample(file: &str) -> bool {
    AUDIO_SAMPLES.iter().any(|sample| sample.file == file)
}
