//! Event content bundled into the wasm at build time.
//!
//! Everything the page displays (dates, prizes, contact details, rules) comes
//! from `data/event.toml`, parsed once on first access. Free text may name
//! structured values as `{host}`, `{prize_pool}`, `{winning_teams}`,
//! `{team_size}` or `{duration_hours}`; see [`EventInfo::fill`].

use anyhow::{Context, Result, ensure};
use chrono::{Datelike, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::components::icon::Icon;

const BUNDLED: &str = include_str!("../data/event.toml");

static EVENT: Lazy<Result<EventInfo>> = Lazy::new(|| EventInfo::from_toml(BUNDLED));

/// The bundled event, or the reason it failed to load.
pub fn event() -> Result<&'static EventInfo, &'static anyhow::Error> {
    EVENT.as_ref()
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventInfo {
    pub event: Event,
    pub team: TeamSize,
    pub prizes: Prizes,
    pub registration: Registration,
    pub contact: Contact,
    pub about: About,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub host: String,
    pub name: String,
    pub tagline: String,
    pub date: NaiveDate,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub venue: String,
    pub campus: String,
    pub badge: String,
    pub hero_image: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TeamSize {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Prizes {
    pub pool: u64,
    pub currency: String,
    pub winning_teams: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Registration {
    pub form_url: String,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub spots_limited: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub summary: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub icon: Icon,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
}

/// One tile of the Details grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: Icon,
    pub label: &'static str,
    pub value: String,
}

impl EventInfo {
    pub fn from_toml(src: &str) -> Result<Self> {
        let info: EventInfo = toml::from_str(src).context("parse event content")?;
        info.validate()?;
        Ok(info)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.team.min > 0, "team size minimum must be at least 1");
        ensure!(
            self.team.min <= self.team.max,
            "team size minimum {} exceeds maximum {}",
            self.team.min,
            self.team.max
        );
        ensure!(
            self.event.ends_at > self.event.starts_at,
            "event ends at {} before it starts at {}",
            self.event.ends_at,
            self.event.starts_at
        );
        let url = self.registration.form_url.as_str();
        ensure!(
            url.starts_with("https://") || url.starts_with("http://"),
            "registration form url must be http(s): {url}"
        );
        ensure!(
            self.contact.email.contains('@'),
            "contact email looks invalid: {}",
            self.contact.email
        );
        ensure!(
            self.contact.phone.chars().any(|c| c.is_ascii_digit()),
            "contact phone has no digits: {}",
            self.contact.phone
        );
        ensure!(!self.notes.is_empty(), "at least one note is required");

        let texts = std::iter::once(&self.about.summary)
            .chain(self.about.cards.iter().map(|c| &c.body))
            .chain(self.notes.iter().map(|n| &n.body));
        for text in texts {
            let filled = self.fill(text);
            ensure!(
                !filled.contains('{') && !filled.contains('}'),
                "unknown placeholder in: {text}"
            );
        }
        Ok(())
    }

    /// Substitutes structured values into free text so copy can't drift from
    /// the `[prizes]`, `[team]` and schedule tables.
    pub fn fill(&self, text: &str) -> String {
        text.replace("{host}", &self.event.host)
            .replace("{prize_pool}", &self.prizes.amount_label())
            .replace("{winning_teams}", &self.prizes.winning_teams.to_string())
            .replace("{team_size}", &self.team.label())
            .replace("{duration_hours}", &self.duration_hours().to_string())
    }

    pub fn year(&self) -> i32 {
        self.event.date.year()
    }

    /// "November 15, 2025"
    pub fn date_label(&self) -> String {
        self.event.date.format("%B %-d, %Y").to_string()
    }

    /// "2:00 PM - 4:00 PM"
    pub fn time_label(&self) -> String {
        format!(
            "{} - {}",
            self.event.starts_at.format("%-I:%M %p"),
            self.event.ends_at.format("%-I:%M %p")
        )
    }

    pub fn duration_hours(&self) -> i64 {
        (self.event.ends_at - self.event.starts_at).num_hours()
    }

    /// "KC College Treasure Hunt"
    pub fn brand(&self) -> String {
        format!("{} {}", self.event.host, self.event.name)
    }

    pub fn details(&self) -> Vec<Detail> {
        vec![
            Detail { icon: Icon::Calendar, label: "Date", value: self.date_label() },
            Detail { icon: Icon::Clock, label: "Time", value: self.time_label() },
            Detail { icon: Icon::MapPin, label: "Venue", value: self.event.campus.clone() },
            Detail {
                icon: Icon::Users,
                label: "Team Size",
                value: format!("{} Players per Team", self.team.label()),
            },
            Detail {
                icon: Icon::Trophy,
                label: "Prizes",
                value: format!(
                    "{} for Top {} Teams",
                    self.prizes.amount_label(),
                    self.prizes.winning_teams
                ),
            },
            Detail {
                icon: Icon::CheckCircle,
                label: "Registration",
                value: if self.registration.is_free() {
                    "Completely FREE!".to_owned()
                } else {
                    format!("{}{}", self.prizes.currency, group_thousands(self.registration.fee))
                },
            },
        ]
    }

    pub fn registration_fee_label(&self) -> String {
        if self.registration.is_free() {
            "FREE".to_owned()
        } else {
            format!("{}{}", self.prizes.currency, group_thousands(self.registration.fee))
        }
    }
}

impl TeamSize {
    /// "3-5", or a single number when min and max agree.
    pub fn label(&self) -> String {
        if self.min == self.max {
            self.min.to_string()
        } else {
            format!("{}-{}", self.min, self.max)
        }
    }
}

impl Prizes {
    /// "₹2,000"
    pub fn amount_label(&self) -> String {
        format!("{}{}", self.currency, group_thousands(self.pool))
    }
}

impl Registration {
    pub fn is_free(&self) -> bool {
        self.fee == 0
    }
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Keeps digits and a leading `+`: "+91 90000 00000" -> "tel:+919000000000".
    pub fn tel(&self) -> String {
        let trimmed = self.phone.trim();
        let mut out = String::from("tel:");
        if trimmed.starts_with('+') {
            out.push('+');
        }
        out.extend(trimmed.chars().filter(char::is_ascii_digit));
        out
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> &'static EventInfo {
        event().expect("bundled content should load")
    }

    fn with(patch: impl Fn(&str) -> String) -> Result<EventInfo> {
        EventInfo::from_toml(&patch(BUNDLED))
    }

    #[test]
    fn bundled_content_loads() {
        let info = bundled();
        assert_eq!(info.brand(), "KC College Treasure Hunt");
        assert_eq!(info.year(), 2025);
        assert_eq!(info.notes.len(), 4);
        assert_eq!(info.about.cards.len(), 2);
        assert_eq!(info.about.cards[0].icon, Icon::Trophy);
    }

    #[test]
    fn date_and_time_labels() {
        let info = bundled();
        assert_eq!(info.date_label(), "November 15, 2025");
        assert_eq!(info.time_label(), "2:00 PM - 4:00 PM");
        assert_eq!(info.duration_hours(), 2);
    }

    #[test]
    fn prize_and_team_labels() {
        let info = bundled();
        assert_eq!(info.prizes.amount_label(), "₹2,000");
        assert_eq!(info.team.label(), "3-5");
        assert_eq!(TeamSize { min: 4, max: 4 }.label(), "4");
        assert_eq!(info.registration_fee_label(), "FREE");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn contact_links() {
        let c = &bundled().contact;
        assert_eq!(c.mailto(), "mailto:treasurehunt@kccollege.edu.in");
        assert_eq!(c.tel(), "tel:+919000000000");

        let local = Contact { email: "a@b".into(), phone: "022 2285-5726".into() };
        assert_eq!(local.tel(), "tel:02222855726");
    }

    #[test]
    fn details_in_page_order() {
        let labels: Vec<_> = bundled().details().iter().map(|d| d.label).collect();
        assert_eq!(labels, ["Date", "Time", "Venue", "Team Size", "Prizes", "Registration"]);

        let details = bundled().details();
        assert_eq!(details[3].value, "3-5 Players per Team");
        assert_eq!(details[4].value, "₹2,000 for Top 2 Teams");
        assert_eq!(details[5].value, "Completely FREE!");
    }

    #[test]
    fn paid_registration_shows_amount() {
        let info = with(|s| s.replace("fee           = 0", "fee           = 1500")).unwrap();
        assert!(!info.registration.is_free());
        assert_eq!(info.registration_fee_label(), "₹1,500");
        assert_eq!(info.details()[5].value, "₹1,500");
    }

    #[test]
    fn free_text_is_filled_from_tables() {
        let info = bundled();
        assert!(info.fill(&info.about.cards[0].body).starts_with("Win prizes worth ₹2,000 for the top 2 teams!"));
        assert!(info.fill(&info.about.cards[1].body).starts_with("Form teams of 3-5 players"));
        assert!(info.fill(&info.notes[2].body).ends_with("throughout the 2-hour event."));
        assert!(info.fill(&info.about.summary).contains("across the KC College campus"));
    }

    #[test]
    fn edited_tables_flow_into_cards_and_notes() {
        let info = with(|s| {
            s.replace("pool          = 2000", "pool          = 5000")
                .replace("winning_teams = 2", "winning_teams = 3")
                .replace("max = 5", "max = 6")
                .replace("ends_at    = \"16:00:00\"", "ends_at    = \"17:00:00\"")
        })
        .unwrap();

        assert_eq!(info.details()[4].value, "₹5,000 for Top 3 Teams");
        assert!(info.fill(&info.about.cards[0].body).starts_with("Win prizes worth ₹5,000 for the top 3 teams!"));
        assert!(info.fill(&info.about.cards[1].body).starts_with("Form teams of 3-6 players"));
        assert!(info.fill(&info.notes[2].body).ends_with("throughout the 3-hour event."));
    }

    #[test]
    fn rejects_unknown_placeholder() {
        let err = with(|s| s.replace("{team_size}", "{squad}")).unwrap_err();
        assert!(err.to_string().contains("unknown placeholder"));
    }

    #[test]
    fn rejects_inverted_team_size() {
        let err = with(|s| s.replace("min = 3", "min = 6")).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn rejects_empty_team() {
        assert!(with(|s| s.replace("min = 3", "min = 0")).is_err());
    }

    #[test]
    fn rejects_end_before_start() {
        let err = with(|s| s.replace("ends_at    = \"16:00:00\"", "ends_at    = \"13:00:00\""))
            .unwrap_err();
        assert!(err.to_string().contains("before it starts"));
    }

    #[test]
    fn rejects_non_http_form_url() {
        assert!(with(|s| s.replace("https://forms.google.com", "javascript:alert(1)")).is_err());
    }

    #[test]
    fn rejects_bad_contact() {
        assert!(with(|s| s.replace("treasurehunt@kccollege.edu.in", "nobody")).is_err());
        assert!(with(|s| s.replace("+91 90000 00000", "call us")).is_err());
    }

    #[test]
    fn malformed_toml_has_context() {
        let err = EventInfo::from_toml("[event").unwrap_err();
        assert_eq!(err.to_string(), "parse event content");
    }
}
