//! Editor helpers: build the action an admin editor dispatches.
//!
//! Editors never touch the state directly. They read one slice from a
//! snapshot, produce a changed copy, and submit it as a merge: the changed
//! theme keys, or a whole replacement object or collection for content.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Local, NaiveDate, Utc};

use crate::action::Action;
use crate::content::{
    AboutContent, BlogPost, CompanyInfo, ContentPatch, HomeContent, Service, SiteContent,
    TeamMember, Testimonial,
};
use crate::theme::ThemePatch;

/// Merge the given theme keys.
pub fn set_theme(patch: ThemePatch) -> Action {
    Action::SetTheme(patch)
}

pub fn replace_company(company: CompanyInfo) -> Action {
    Action::UpdateContent(ContentPatch {
        company: Some(company),
        ..ContentPatch::default()
    })
}

pub fn replace_home(home: HomeContent) -> Action {
    Action::UpdateContent(ContentPatch {
        home: Some(home),
        ..ContentPatch::default()
    })
}

pub fn replace_about(about: AboutContent) -> Action {
    Action::UpdateContent(ContentPatch {
        about: Some(about),
        ..ContentPatch::default()
    })
}

/// An item of one of the editable collections.
pub trait CollectionEntry: Clone + Sized {
    /// The entry appended by an editor's "add" button.
    fn placeholder(id: String, today: NaiveDate) -> Self;

    /// The collection this entry type lives in.
    fn collection(content: &SiteContent) -> &[Self];

    /// A content patch replacing the whole collection with `entries`.
    fn patch(entries: Vec<Self>) -> ContentPatch;
}

impl CollectionEntry for Service {
    fn placeholder(id: String, _today: NaiveDate) -> Self {
        Self {
            id,
            title: "New Service".to_owned(),
            description: "Description here".to_owned(),
            icon: "Star".to_owned(),
            price: Some("$0".to_owned()),
        }
    }

    fn collection(content: &SiteContent) -> &[Self] {
        &content.services
    }

    fn patch(entries: Vec<Self>) -> ContentPatch {
        ContentPatch {
            services: Some(entries),
            ..ContentPatch::default()
        }
    }
}

impl CollectionEntry for TeamMember {
    fn placeholder(id: String, _today: NaiveDate) -> Self {
        Self {
            id,
            name: "New Member".to_owned(),
            role: "Role".to_owned(),
            bio: "Bio".to_owned(),
            image: "https://via.placeholder.com/150".to_owned(),
        }
    }

    fn collection(content: &SiteContent) -> &[Self] {
        &content.team
    }

    fn patch(entries: Vec<Self>) -> ContentPatch {
        ContentPatch {
            team: Some(entries),
            ..ContentPatch::default()
        }
    }
}

impl CollectionEntry for BlogPost {
    fn placeholder(id: String, today: NaiveDate) -> Self {
        Self {
            id,
            title: "New Post".to_owned(),
            excerpt: "Excerpt".to_owned(),
            content: "Content".to_owned(),
            category: "General".to_owned(),
            image: "https://via.placeholder.com/800x400".to_owned(),
            date: today.format("%Y-%m-%d").to_string(),
            author: "Admin".to_owned(),
        }
    }

    fn collection(content: &SiteContent) -> &[Self] {
        &content.blog
    }

    fn patch(entries: Vec<Self>) -> ContentPatch {
        ContentPatch {
            blog: Some(entries),
            ..ContentPatch::default()
        }
    }
}

impl CollectionEntry for Testimonial {
    fn placeholder(id: String, _today: NaiveDate) -> Self {
        Self {
            id,
            name: "New Client".to_owned(),
            company: "Company".to_owned(),
            content: "Testimonial".to_owned(),
            rating: 5,
        }
    }

    fn collection(content: &SiteContent) -> &[Self] {
        &content.testimonials
    }

    fn patch(entries: Vec<Self>) -> ContentPatch {
        ContentPatch {
            testimonials: Some(entries),
            ..ContentPatch::default()
        }
    }
}

/// Append `entry` to its collection.
pub fn appended<T: CollectionEntry>(content: &SiteContent, entry: T) -> Action {
    let mut entries = T::collection(content).to_vec();
    entries.push(entry);
    Action::UpdateContent(T::patch(entries))
}

/// Replace the entry at `index`. Out of range submits the collection unchanged.
pub fn updated_at<T: CollectionEntry>(content: &SiteContent, index: usize, entry: T) -> Action {
    edited_at(content, index, |slot: &mut T| *slot = entry)
}

/// Edit the entry at `index` in place. Out of range submits the collection
/// unchanged without calling `edit`.
pub fn edited_at<T, F>(content: &SiteContent, index: usize, edit: F) -> Action
where
    T: CollectionEntry,
    F: FnOnce(&mut T),
{
    let mut entries = T::collection(content).to_vec();
    if let Some(slot) = entries.get_mut(index) {
        edit(slot);
    }
    Action::UpdateContent(T::patch(entries))
}

/// Remove the entry at `index`. Out of range submits the collection unchanged.
pub fn removed_at<T: CollectionEntry>(content: &SiteContent, index: usize) -> Action {
    let mut entries = T::collection(content).to_vec();
    if index < entries.len() {
        entries.remove(index);
    }
    Action::UpdateContent(T::patch(entries))
}

/// Issues ids for new collection entries.
///
/// Ids are the current Unix time in milliseconds as a decimal string, bumped
/// when needed so that every id is strictly greater than the last one issued.
#[derive(Debug, Default)]
pub struct EntryIds {
    last: AtomicI64,
}

impl EntryIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(seen) => last = seen,
            }
        }
    }

    /// A placeholder entry with a fresh id and today's local date.
    pub fn placeholder<T: CollectionEntry>(&self) -> T {
        T::placeholder(self.next_id(), Local::now().date_naive())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::reducer::reduce;
    use crate::state::AppState;
    use crate::theme::ThemeMode;

    fn content_of(action: &Action) -> &ContentPatch {
        match action {
            Action::UpdateContent(patch) => patch,
            other => panic!("expected UPDATE_CONTENT, got {}", other.tag()),
        }
    }

    #[test]
    fn theme_helper_carries_only_changed_keys() {
        let action = set_theme(ThemePatch {
            mode: Some(ThemeMode::Dark),
            ..ThemePatch::default()
        });
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "SET_THEME");
        assert_eq!(json["payload"], serde_json::json!({ "mode": "dark" }));
    }

    #[test]
    fn replacing_company_touches_only_company() {
        let state = AppState::default();
        let mut company = state.content.company.clone();
        company.name = "Nova".to_owned();

        let patch = content_of(&replace_company(company.clone())).clone();
        assert_eq!(patch.company, Some(company));
        assert!(patch.home.is_none());
        assert!(patch.services.is_none());
    }

    #[test]
    fn append_adds_placeholder_at_the_end() {
        let state = AppState::default();
        let ids = EntryIds::new();
        let entry: Service = ids.placeholder();

        let after = reduce(&state, &appended(&state.content, entry.clone()));
        assert_eq!(after.content.services.len(), state.content.services.len() + 1);
        assert_eq!(after.content.services.last(), Some(&entry));
        assert_eq!(entry.title, "New Service");
        assert_eq!(entry.icon, "Star");
        assert_eq!(entry.price.as_deref(), Some("$0"));
    }

    #[test]
    fn blog_placeholder_is_dated_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let post = BlogPost::placeholder("42".to_owned(), today);
        assert_eq!(post.date, "2024-03-09");
        assert_eq!(post.author, "Admin");
        assert_eq!(post.category, "General");
        assert_eq!(post.image, "https://via.placeholder.com/800x400");
    }

    #[test]
    fn other_placeholders() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let member = TeamMember::placeholder("1".to_owned(), today);
        assert_eq!(member.name, "New Member");
        assert_eq!(member.image, "https://via.placeholder.com/150");

        let quote = Testimonial::placeholder("2".to_owned(), today);
        assert_eq!(quote.name, "New Client");
        assert_eq!(quote.rating, 5);
    }

    #[test]
    fn update_replaces_only_the_indexed_entry() {
        let state = AppState::default();
        let mut member = state.content.team[2].clone();
        member.role = "Head of Growth".to_owned();

        let after = reduce(&state, &updated_at(&state.content, 2, member.clone()));
        assert_eq!(after.content.team[2], member);
        assert_eq!(after.content.team[0], state.content.team[0]);
        assert_eq!(after.content.team.len(), state.content.team.len());
    }

    #[test]
    fn remove_drops_the_indexed_entry() {
        let state = AppState::default();
        let after = reduce(&state, &removed_at::<Testimonial>(&state.content, 0));
        assert_eq!(after.content.testimonials, state.content.testimonials[1..].to_vec());
    }

    #[test]
    fn out_of_range_edits_submit_the_collection_unchanged() {
        let state = AppState::default();
        let past_end = state.content.blog.len();

        let removed = removed_at::<BlogPost>(&state.content, past_end);
        assert_eq!(content_of(&removed).blog.as_ref(), Some(&state.content.blog));

        let post = state.content.blog[0].clone();
        let updated = updated_at(&state.content, past_end + 5, post);
        assert_eq!(reduce(&state, &updated), state);
    }

    #[test]
    fn edit_in_place_changes_one_field() {
        let state = AppState::default();
        let action = edited_at(&state.content, 1, |service: &mut Service| {
            service.price = None;
        });
        let after = reduce(&state, &action);
        assert_eq!(after.content.services[1].price, None);
        assert_eq!(after.content.services[1].title, state.content.services[1].title);
        assert_eq!(after.content.services[0], state.content.services[0]);
    }

    #[test]
    fn ids_strictly_increase() {
        let ids = EntryIds::new();
        let issued: Vec<i64> = (0..100).map(|_| ids.next_id().parse().unwrap()).collect();
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        assert!(issued[0] >= Utc::now().timestamp_millis() - 60_000);
    }
}
