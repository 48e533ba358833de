//! User-facing alerts. Every page starts with an empty container; alerts are
//! added by whatever the page does afterwards and can be dismissed through a
//! session cookie.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::utils::cookies::DismissedAlert;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl AlertLevel {
    fn precedence(&self) -> u8 {
        match self {
            AlertLevel::Error => 2,
            AlertLevel::Warning => 1,
            AlertLevel::Info => 0,
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertLevel::Info => write!(f, "info"),
            AlertLevel::Warning => write!(f, "warning"),
            AlertLevel::Error => write!(f, "error"),
        }
    }
}

impl sailfish::runtime::Render for AlertLevel {
    fn render(
        &self,
        b: &mut sailfish::runtime::Buffer,
    ) -> Result<(), sailfish::runtime::RenderError> {
        self.to_string().render(b)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Alert {
    pub message: String,
    pub level: AlertLevel,
    pub id: String,
    pub dismissible: bool,
    pub link: Option<String>,
    pub title: Option<String>,
}

impl Alert {
    /// The id is derived from the message, so the same alert keeps the same
    /// id across requests and dismissals hold.
    pub fn new(message: &str) -> Alert {
        let mut s = DefaultHasher::new();
        message.hash(&mut s);

        Alert {
            message: message.to_string(),
            level: AlertLevel::Info,
            id: s.finish().to_string(),
            dismissible: true,
            link: None,
            title: None,
        }
    }

    pub fn set_level(mut self, level: AlertLevel) -> Alert {
        self.level = level;
        self
    }

    pub fn set_dismissible(mut self, dismissible: bool) -> Alert {
        self.dismissible = dismissible;
        self
    }

    pub fn set_link(mut self, link: &str) -> Alert {
        self.link = Some(link.into());
        self
    }

    pub fn set_title(mut self, title: &str) -> Alert {
        self.title = Some(title.into());
        self
    }
}

/// Extensible mapping of alert id to alert.
#[derive(Debug, Clone, Default)]
pub struct Alerts {
    alerts: HashMap<String, Alert>,
}

impl Alerts {
    pub fn new() -> Alerts {
        Alerts::default()
    }

    pub fn insert(&mut self, alert: Alert) {
        self.alerts.insert(alert.id.clone(), alert);
    }

    pub fn get(&self, id: &str) -> Option<&Alert> {
        self.alerts.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn extend<I>(&mut self, alerts: I)
    where
        I: IntoIterator<Item = Alert>,
    {
        for alert in alerts {
            self.insert(alert);
        }
    }

    /// The alert a page should surface next: highest level first, id order
    /// breaking ties, dismissed alerts skipped.
    pub fn next_alert(&self, dismissed: &[DismissedAlert]) -> Option<&Alert> {
        let mut visible: Vec<&Alert> = self
            .alerts
            .values()
            .filter(|alert| !dismissed.iter().any(|d| d.id == alert.id))
            .collect();

        visible.sort_by(|a, b| {
            b.level
                .precedence()
                .cmp(&a.level.precedence())
                .then_with(|| a.id.cmp(&b.id))
        });

        visible.first().copied()
    }
}
