//! Static reference data shown by the wizard screens.
//!
//! Nothing here changes at runtime; sessions only store ids and slugs that point into
//! these tables.

use crate::model::{MvpStep, PreviewTier, WebsiteStep};

/// Number of templates shown per gallery page.
pub const TEMPLATES_PER_PAGE: usize = 6;

/// Minimum description length (in characters) for an idea submission.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

pub const AUDIENCE_SUGGESTIONS: [&str; 7] =
    ["GenZ", "SMEs", "Millennials", "B2B", "B2C", "Enterprises", "Startups"];

/// Title and blurb of one wizard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn mvp_step_info(step: MvpStep) -> StepInfo {
    let (title, description) = match step {
        MvpStep::Submit => ("Submit Idea", "Share your MVP concept with us"),
        MvpStep::Preview => ("Preview & Payment", "Review demo and choose package"),
        MvpStep::Tracking => ("Development", "Track progress and provide feedback"),
        MvpStep::Delivery => ("Delivery", "Access your completed MVP"),
    };
    StepInfo { number: step.number(), title, description }
}

pub fn website_step_info(step: WebsiteStep) -> StepInfo {
    let (title, description) = match step {
        WebsiteStep::BusinessInfo => ("Business Info", "Tell us about your business"),
        WebsiteStep::Template => ("Choose Template", "Select your design template"),
        WebsiteStep::Features => ("Features & Setup", "Configure your website features"),
        WebsiteStep::Launch => ("Launch Details", "Domain and go-live setup"),
    };
    StepInfo { number: step.number(), title, description }
}

// =============================================================================
// MVP PREVIEW PACKAGES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewPackage {
    pub tier: PreviewTier,
    pub title: &'static str,
    /// Whole US dollars.
    pub price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

impl PreviewPackage {
    /// Price in minor currency units, as the checkout gateway expects it.
    pub fn amount_minor(&self) -> u64 {
        u64::from(self.price) * 100
    }
}

pub const PREVIEW_PACKAGES: [PreviewPackage; 3] = [
    PreviewPackage {
        tier: PreviewTier::Free,
        title: "Basic Demo",
        price: 0,
        description: "Get a basic overview of your idea",
        features: &["Static screenshots", "Basic feature list", "PDF summary"],
    },
    PreviewPackage {
        tier: PreviewTier::Interactive,
        title: "Interactive Prototype",
        price: 49,
        description: "Fully interactive prototype with technical specs",
        features: &[
            "Interactive Figma prototype",
            "Architecture diagram",
            "Detailed feature specs",
            "Priority roadmap",
        ],
    },
    PreviewPackage {
        tier: PreviewTier::Investor,
        title: "Investor Package",
        price: 199,
        description: "Complete package ready for investor presentations",
        features: &[
            "Everything in Interactive",
            "Professional PDF report",
            "Market analysis",
            "Shareable investor link",
            "Video presentation",
        ],
    },
];

pub fn preview_package(tier: PreviewTier) -> &'static PreviewPackage {
    match tier {
        PreviewTier::Free => &PREVIEW_PACKAGES[0],
        PreviewTier::Interactive => &PREVIEW_PACKAGES[1],
        PreviewTier::Investor => &PREVIEW_PACKAGES[2],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// One row of the feature breakdown shown next to the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

pub const SAMPLE_FEATURES: [FeatureSpec; 4] = [
    FeatureSpec {
        id: "1",
        title: "User Authentication",
        description: "Secure login and registration system",
        priority: Priority::High,
    },
    FeatureSpec {
        id: "2",
        title: "Dashboard",
        description: "Main user interface and navigation",
        priority: Priority::High,
    },
    FeatureSpec {
        id: "3",
        title: "Payment Integration",
        description: "Stripe payment processing",
        priority: Priority::Medium,
    },
    FeatureSpec {
        id: "4",
        title: "Push Notifications",
        description: "Real-time user notifications",
        priority: Priority::Low,
    },
];

// =============================================================================
// WEBSITE NICHES & TEMPLATES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Niche {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Credentials the customer must supply before launch.
    pub requires_keys: &'static [&'static str],
}

pub const NICHES: [Niche; 4] = [
    Niche {
        id: "ecommerce",
        title: "E-Commerce Store",
        description: "Online stores with payment processing, inventory management, and customer accounts",
        features: &["Payment Gateway", "Inventory Management", "Order Tracking", "Customer Accounts"],
        requires_keys: &["razorpayKey", "razorpaySecret"],
    },
    Niche {
        id: "portfolio",
        title: "Creative Portfolio",
        description: "Showcase your work with stunning galleries and project showcases",
        features: &["Image Galleries", "Project Showcase", "Contact Forms", "Blog"],
        requires_keys: &[],
    },
    Niche {
        id: "booking",
        title: "Booking & Appointments",
        description: "Service businesses with appointment scheduling and calendar integration",
        features: &["Calendar Integration", "Online Booking", "Payment Processing", "Email Notifications"],
        requires_keys: &["calendarKey", "razorpayKey"],
    },
    Niche {
        id: "immersive3d",
        title: "Immersive 3D Experience",
        description: "Next-gen websites with 3D models, VR/AR capabilities, and interactive experiences",
        features: &["3D Models", "VR/AR Ready", "Interactive Experiences", "Immersive Navigation"],
        requires_keys: &[],
    },
];

pub fn niche(id: &str) -> Option<&'static Niche> {
    NICHES.iter().find(|n| n.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebsiteTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub demo_url: &'static str,
    pub tags: &'static [&'static str],
    pub price: u32,
    pub niche_id: &'static str,
}

pub const WEBSITE_TEMPLATES: [WebsiteTemplate; 5] = [
    WebsiteTemplate {
        id: "ecom-1",
        title: "Modern Store Pro",
        description: "Clean, modern e-commerce template with advanced features",
        demo_url: "https://demo-store.example.com",
        tags: &["eCommerce", "Modern", "Mobile-First"],
        price: 99,
        niche_id: "ecommerce",
    },
    WebsiteTemplate {
        id: "ecom-2",
        title: "Fashion Boutique",
        description: "Elegant template perfect for fashion and lifestyle brands",
        demo_url: "https://demo-fashion.example.com",
        tags: &["eCommerce", "Fashion", "Elegant"],
        price: 129,
        niche_id: "ecommerce",
    },
    WebsiteTemplate {
        id: "portfolio-1",
        title: "Creative Showcase",
        description: "Stunning portfolio template for creative professionals",
        demo_url: "https://demo-portfolio.example.com",
        tags: &["Portfolio", "Creative", "Minimal"],
        price: 79,
        niche_id: "portfolio",
    },
    WebsiteTemplate {
        id: "booking-1",
        title: "Service Pro",
        description: "Professional booking template for service businesses",
        demo_url: "https://demo-booking.example.com",
        tags: &["Booking", "Professional", "Calendar"],
        price: 99,
        niche_id: "booking",
    },
    WebsiteTemplate {
        id: "3d-1",
        title: "Immersive Experience",
        description: "Cutting-edge 3D template with VR/AR capabilities",
        demo_url: "https://demo-3d.example.com",
        tags: &["3D", "VR/AR", "Interactive"],
        price: 199,
        niche_id: "immersive3d",
    },
];

pub fn website_template(id: &str) -> Option<&'static WebsiteTemplate> {
    WEBSITE_TEMPLATES.iter().find(|t| t.id == id)
}

/// One gallery page of the templates belonging to `niche_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePage {
    pub templates: Vec<&'static WebsiteTemplate>,
    /// 1-based, clamped into `1..=total_pages`.
    pub page: usize,
    pub total_pages: usize,
}

pub fn templates_page(niche_id: &str, page: usize) -> TemplatePage {
    let matching: Vec<_> = WEBSITE_TEMPLATES.iter().filter(|t| t.niche_id == niche_id).collect();
    let total_pages = matching.len().div_ceil(TEMPLATES_PER_PAGE);
    let page = page.clamp(1, total_pages.max(1));
    let templates = matching
        .into_iter()
        .skip((page - 1) * TEMPLATES_PER_PAGE)
        .take(TEMPLATES_PER_PAGE)
        .collect();
    TemplatePage { templates, page, total_pages }
}

// =============================================================================
// 3D BRAND TEMPLATES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Minimalist,
    Photorealistic,
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeDTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub demo_url: &'static str,
    pub tags: &'static [&'static str],
    pub style: RenderStyle,
    pub brand_niche_id: &'static str,
}

pub const THREE_D_TEMPLATES: [ThreeDTemplate; 3] = [
    ThreeDTemplate {
        id: "minimalist-coffee",
        title: "Zen Coffee Experience",
        description: "Clean, minimalist design focusing on the coffee journey",
        demo_url: "https://example.com/demo1",
        tags: &["Minimalist", "Interactive", "Clean"],
        style: RenderStyle::Minimalist,
        brand_niche_id: "coffee-shop",
    },
    ThreeDTemplate {
        id: "photorealistic-fashion",
        title: "Luxury Fashion Showcase",
        description: "Photorealistic materials with advanced lighting",
        demo_url: "https://example.com/demo2",
        tags: &["Photorealistic", "Luxury", "Advanced"],
        style: RenderStyle::Photorealistic,
        brand_niche_id: "fashion-label",
    },
    ThreeDTemplate {
        id: "interactive-gallery",
        title: "Dynamic Art Space",
        description: "Interactive gallery with animated exhibitions",
        demo_url: "https://example.com/demo3",
        tags: &["Interactive", "Dynamic", "Immersive"],
        style: RenderStyle::Interactive,
        brand_niche_id: "art-gallery",
    },
];

pub fn three_d_templates_for(brand_niche_id: &str) -> impl Iterator<Item = &'static ThreeDTemplate> + '_ {
    THREE_D_TEMPLATES.iter().filter(move |t| t.brand_niche_id == brand_niche_id)
}

// =============================================================================
// INDUSTRIES & FEATURES
// =============================================================================

pub const INDUSTRIES: [&str; 11] = [
    "Restaurant & Food",
    "Professional Services",
    "E-commerce & Retail",
    "Healthcare",
    "Real Estate",
    "Education",
    "Technology",
    "Creative & Design",
    "Fitness & Wellness",
    "Consulting",
    "Other",
];

/// Lowercases and joins whitespace runs with `-`, e.g. `"Real Estate"` -> `"real-estate"`.
pub fn industry_slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

pub const WEBSITE_FEATURES: [&str; 12] = [
    "Contact Forms",
    "Online Booking/Appointments",
    "E-commerce/Online Store",
    "Payment Gateway Integration",
    "Blog/News Section",
    "Photo Gallery",
    "Customer Reviews",
    "Social Media Integration",
    "Google Maps Integration",
    "Email Newsletter Signup",
    "Live Chat Support",
    "Multi-language Support",
];
