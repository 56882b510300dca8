//! Site content: page copy, company details, and the editable collections.

use serde::{Deserialize, Serialize};

/// A single headline figure on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Hero section and statistics for the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    pub stats: Vec<Stat>,
}

/// Copy for the about page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub story: String,
    pub mission: String,
    pub values: Vec<String>,
}

/// Brand and contact details shown in the header, footer, and contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo_text: String,
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
    pub instagram: String,
}

/// An offered service. `icon` is a name looked up in the icon registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image: String,
    pub date: String,
    pub author: String,
}

impl BlogPost {
    /// Case-insensitive substring match on title or category.
    ///
    /// An empty term matches every post.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.category.to_lowercase().contains(&term)
    }
}

/// A client quote. `rating` is expected to be 1–5 but is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
}

/// Everything the public pages render, apart from the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub home: HomeContent,
    pub about: AboutContent,
    pub services: Vec<Service>,
    pub team: Vec<TeamMember>,
    pub blog: Vec<BlogPost>,
    pub testimonials: Vec<Testimonial>,
    pub company: CompanyInfo,
}

impl Default for SiteContent {
    fn default() -> Self {
        crate::defaults::default_content()
    }
}

impl SiteContent {
    /// Posts whose title or category contains `term`, in stored order.
    pub fn search_blog<'a>(&'a self, term: &str) -> Vec<&'a BlogPost> {
        self.blog.iter().filter(|post| post.matches(term)).collect()
    }
}

/// A partial content update.
///
/// Merging happens at this level only: a field that is `Some` replaces the
/// stored sub-object or collection whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<HomeContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<TeamMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<Vec<BlogPost>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyInfo>,
}

impl ContentPatch {
    /// Shallow-merge this patch over `content`.
    #[must_use]
    pub fn apply_to(&self, content: &SiteContent) -> SiteContent {
        let mut merged = content.clone();
        if let Some(home) = &self.home {
            merged.home = home.clone();
        }
        if let Some(about) = &self.about {
            merged.about = about.clone();
        }
        if let Some(services) = &self.services {
            merged.services.clone_from(services);
        }
        if let Some(team) = &self.team {
            merged.team.clone_from(team);
        }
        if let Some(blog) = &self.blog {
            merged.blog.clone_from(blog);
        }
        if let Some(testimonials) = &self.testimonials {
            merged.testimonials.clone_from(testimonials);
        }
        if let Some(company) = &self.company {
            merged.company = company.clone();
        }
        merged
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn service_price_is_optional_on_the_wire() {
        let service: Service = serde_json::from_str(
            r#"{"id":"9","title":"Audit","description":"d","icon":"Search"}"#,
        )
        .unwrap();
        assert_eq!(service.price, None);

        let json = serde_json::to_value(&service).unwrap();
        assert!(json.get("price").is_none());
    }

    #[test]
    fn company_uses_camel_case_logo_text() {
        let json = serde_json::to_value(CompanyInfo::default()).unwrap();
        assert!(json.get("logoText").is_some());
    }

    #[test]
    fn blog_search_matches_title_or_category_ignoring_case() {
        let content = SiteContent::default();

        let seo: Vec<_> = content.search_blog("seo").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(seo, vec!["1"]);

        let social: Vec<_> = content
            .search_blog("SOCIAL")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(social, vec!["2"]);

        assert_eq!(content.search_blog("").len(), content.blog.len());
        assert!(content.search_blog("no such thing").is_empty());
    }

    #[test]
    fn patch_replaces_collections_whole() {
        let content = SiteContent::default();
        let kept = vec![content.team[0].clone()];
        let patch = ContentPatch {
            team: Some(kept.clone()),
            ..ContentPatch::default()
        };

        let merged = patch.apply_to(&content);
        assert_eq!(merged.team, kept);
        assert_eq!(merged.services, content.services);
        assert_eq!(merged.company, content.company);
    }

    #[test]
    fn patch_wire_format_only_carries_present_keys() {
        let patch: ContentPatch =
            serde_json::from_str(r#"{"about":{"story":"s","mission":"m","values":[]}}"#).unwrap();
        assert!(patch.about.is_some());
        assert!(patch.home.is_none());

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
    }
}
