//! In-page sections and their `#anchor` links.

use std::fmt;
use std::str::FromStr;

use crate::error::{PortfolioError, Result};

/// A scroll target on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// Top of the page (the logo link)
    Top,
    About,
    Skills,
    Education,
    Experience,
    Projects,
    Contact,
}

/// Sections listed in the desktop bar and the mobile menu, in order.
pub const NAV_SECTIONS: [Section; 5] = [
    Section::About,
    Section::Skills,
    Section::Education,
    Section::Experience,
    Section::Projects,
];

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Top,
        Section::About,
        Section::Skills,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Top => "top",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Label shown in navigation, if the section is listed there
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Section::About => Some("About Me"),
            Section::Skills => Some("Skills"),
            Section::Education => Some("Education"),
            Section::Experience => Some("Experience"),
            Section::Projects => Some("Projects"),
            Section::Top | Section::Contact => None,
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    /// Parse an in-page href such as `#skills`.
    pub fn from_href(href: &str) -> Result<Self> {
        let id = href
            .strip_prefix('#')
            .filter(|id| !id.is_empty())
            .ok_or_else(|| PortfolioError::InvalidAnchor(href.to_string()))?;
        id.parse()
    }
}

impl FromStr for Section {
    type Err = PortfolioError;

    fn from_str(id: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| PortfolioError::UnknownSection(id.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
