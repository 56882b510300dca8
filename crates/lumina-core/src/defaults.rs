//! Compiled-in defaults: the starting theme and content, and the reset target.

use crate::content::{
    AboutContent, BlogPost, CompanyInfo, HomeContent, Service, SiteContent, Stat, TeamMember,
    Testimonial,
};
use crate::state::AppState;
use crate::theme::{ButtonStyle, CursorStyle, LayoutWidth, ThemeMode, ThemeSettings};

/// The theme a fresh site starts with.
pub fn default_theme() -> ThemeSettings {
    ThemeSettings {
        mode: ThemeMode::Light,
        primary_color: "#3B82F6".to_owned(),
        secondary_color: "#1E40AF".to_owned(),
        accent_color: "#F59E0B".to_owned(),
        font: "Inter".to_owned(),
        layout: LayoutWidth::Wide,
        cursor: CursorStyle::Default,
        button_style: ButtonStyle::Rounded,
        animations_enabled: true,
    }
}

/// The content a fresh site starts with.
pub fn default_content() -> SiteContent {
    SiteContent {
        home: default_home(),
        about: AboutContent {
            story: "Founded in 2020, Lumina Digital began with a simple mission: to help \
                    businesses navigate the complex digital landscape. We started as a small \
                    team of three passionate marketers and have grown into a full-service agency."
                .to_owned(),
            mission: "To empower brands with innovative digital strategies that create \
                      meaningful connections and sustainable growth."
                .to_owned(),
            values: ["Innovation", "Transparency", "Results-Driven", "Client-Centric"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        },
        company: default_company(),
        services: default_services(),
        team: default_team(),
        testimonials: default_testimonials(),
        blog: default_blog(),
    }
}

/// Defaults plus the signed-out flag: what a site with no saved state loads.
pub fn initial_state() -> AppState {
    AppState {
        theme: default_theme(),
        content: default_content(),
        is_authenticated: false,
    }
}

fn default_home() -> HomeContent {
    let stats = [
        ("Projects Completed", "500+"),
        ("Happy Clients", "120+"),
        ("Awards Won", "25"),
        ("Team Members", "15"),
    ];
    HomeContent {
        hero_title: "Transform Your Digital Presence".to_owned(),
        hero_subtitle: "We deliver cutting-edge digital marketing solutions that drive growth \
                        and engagement for forward-thinking brands."
            .to_owned(),
        hero_image: "https://images.unsplash.com/photo-1557804506-669a67965ba0?auto=format&fit=crop&q=80&w=2000"
            .to_owned(),
        stats: stats
            .into_iter()
            .map(|(label, value)| Stat {
                label: label.to_owned(),
                value: value.to_owned(),
            })
            .collect(),
    }
}

fn default_company() -> CompanyInfo {
    CompanyInfo {
        name: "Lumina Digital".to_owned(),
        tagline: "Illuminating Your Brand".to_owned(),
        description: "A premier digital marketing agency based in New York.".to_owned(),
        address: "123 Marketing Street, NY 10001".to_owned(),
        phone: "+1 (555) 123-4567".to_owned(),
        email: "hello@luminadigital.com".to_owned(),
        logo_text: "Lumina.".to_owned(),
        facebook: "https://facebook.com".to_owned(),
        twitter: "https://twitter.com".to_owned(),
        linkedin: "https://linkedin.com".to_owned(),
        instagram: "https://instagram.com".to_owned(),
    }
}

fn default_services() -> Vec<Service> {
    let rows = [
        (
            "SEO Optimization",
            "Boost your organic traffic and rank higher on search engines with our data-driven SEO strategies.",
            "Search",
            "$999/mo",
        ),
        (
            "Social Media Marketing",
            "Engage your audience and build brand loyalty across all major social platforms.",
            "Share2",
            "$1,499/mo",
        ),
        (
            "Content Strategy",
            "Compelling content that tells your story and converts visitors into loyal customers.",
            "FileText",
            "$899/mo",
        ),
        (
            "PPC Advertising",
            "Targeted ad campaigns that deliver immediate results and high ROI.",
            "MousePointer",
            "$2,000/mo",
        ),
        (
            "Email Marketing",
            "Personalized email campaigns that nurture leads and drive retention.",
            "Mail",
            "$599/mo",
        ),
        (
            "Web Analytics",
            "Deep insights into user behavior to optimize your digital performance.",
            "BarChart",
            "$799/mo",
        ),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((title, description, icon, price), id)| Service {
            id: id.to_string(),
            title: title.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            price: Some(price.to_owned()),
        })
        .collect()
}

fn default_team() -> Vec<TeamMember> {
    let rows = [
        ("Sarah Johnson", "CEO & Founder", "10+ years in digital strategy.", "photo-1573496359142-b8d87734a5a2"),
        ("Michael Chen", "Creative Director", "Award-winning designer.", "photo-1472099645785-5658abf4ff4e"),
        ("Jessica Williams", "Head of SEO", "Search algorithm expert.", "photo-1580489944761-15a19d654956"),
        ("David Miller", "Tech Lead", "Full-stack wizard.", "photo-1500648767791-00dcc994a43e"),
        ("Emma Wilson", "Content Strategist", "Storyteller at heart.", "photo-1438761681033-6461ffad8d80"),
        ("James Taylor", "PPC Specialist", "ROI focused marketer.", "photo-1507003211169-0a1dd7228f2d"),
        ("Olivia Brown", "Social Media Manager", "Trend spotter.", "photo-1544005313-94ddf0286df2"),
        ("Robert Davis", "Account Manager", "Client success champion.", "photo-1519085360753-af0119f7cbe7"),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((name, role, bio, photo), id)| TeamMember {
            id: id.to_string(),
            name: name.to_owned(),
            role: role.to_owned(),
            bio: bio.to_owned(),
            image: format!(
                "https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=400"
            ),
        })
        .collect()
}

fn default_testimonials() -> Vec<Testimonial> {
    let rows = [
        (
            "John Doe",
            "Tech Startups Inc.",
            "Lumina transformed our online presence. Our leads tripled in 3 months!",
            5,
        ),
        (
            "Jane Smith",
            "Fashion Forward",
            "The creative team is outstanding. They truly understood our brand vision.",
            5,
        ),
        (
            "Bob Wilson",
            "Local Eats",
            "Professional, responsive, and effective. Highly recommended.",
            4,
        ),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((name, company, content, rating), id)| Testimonial {
            id: id.to_string(),
            name: name.to_owned(),
            company: company.to_owned(),
            content: content.to_owned(),
            rating,
        })
        .collect()
}

fn default_blog() -> Vec<BlogPost> {
    let rows = [
        (
            "The Future of SEO in 2024",
            "Discover the latest trends shaping the search landscape this year.",
            "SEO",
            "2023-10-15",
            "Jessica Williams",
            "photo-1432888498266-38ffec3eaf0a",
        ),
        (
            "Mastering Social Media Algorithms",
            "How to get your content seen by more people without paying for ads.",
            "Social Media",
            "2023-10-12",
            "Olivia Brown",
            "photo-1611162617474-5b21e879e113",
        ),
        (
            "Content Marketing 101",
            "Building a strategy that drives engagement and loyalty.",
            "Content",
            "2023-10-10",
            "Emma Wilson",
            "photo-1499750310159-52f0f834631e",
        ),
    ];
    rows.into_iter()
        .zip(1..)
        .map(|((title, excerpt, category, date, author, photo), id)| BlogPost {
            id: id.to_string(),
            title: title.to_owned(),
            excerpt: excerpt.to_owned(),
            content: "Full article content goes here...".to_owned(),
            category: category.to_owned(),
            image: format!(
                "https://images.unsplash.com/{photo}?auto=format&fit=crop&q=80&w=800"
            ),
            date: date.to_owned(),
            author: author.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_have_sequential_ids() {
        let content = default_content();
        let ids: Vec<_> = content.services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(content.team.len(), 8);
        assert_eq!(content.team[7].id, "8");
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.blog.len(), 3);
    }

    #[test]
    fn initial_state_is_signed_out() {
        let state = initial_state();
        assert!(!state.is_authenticated);
        assert_eq!(state.theme, default_theme());
        assert_eq!(state.content, default_content());
    }

    #[test]
    fn every_default_service_icon_is_registered() {
        let icons = crate::icons::IconRegistry::default();
        for service in default_content().services {
            assert!(icons.contains(&service.icon), "missing icon {}", service.icon);
        }
    }
}
