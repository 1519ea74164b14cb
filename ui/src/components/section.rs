use leptos::prelude::*;

use super::utils::scroll_to_id;

/// Page sections reachable from the navbar and footer, in page order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Details,
    Notes,
    Register,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Details,
        Section::Notes,
        Section::Register,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Details => "details",
            Section::Notes => "notes",
            Section::Register => "register",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Details => "Details",
            Section::Notes => "Important Notes",
            Section::Register => "Register",
            Section::Contact => "Contact",
        }
    }

    /// Accepts a location hash with or without the leading `#`.
    pub fn from_hash(hash: &str) -> Option<Section> {
        let id = hash.strip_prefix('#').unwrap_or(hash);
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn scroll_into_view(self) {
        scroll_to_id(self.id());
    }
}

pub trait SectionLink {
    fn nav_button(self, class: &'static str) -> impl IntoView;
}

impl SectionLink for Section {
    fn nav_button(self, class: &'static str) -> impl IntoView {
        view! {
            <button
                type="button"
                class=class
                on:click=move |_| self.scroll_into_view()
            >
                {self.label()}
            </button>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn page_order() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["About", "Details", "Important Notes", "Register", "Contact"]);
    }

    #[test]
    fn hash_lookup() {
        assert_eq!(Section::from_hash("#notes"), Some(Section::Notes));
        assert_eq!(Section::from_hash("register"), Some(Section::Register));
        assert_eq!(Section::from_hash(""), None);
        assert_eq!(Section::from_hash("#"), None);
        assert_eq!(Section::from_hash("#Notes"), None);
    }
}
