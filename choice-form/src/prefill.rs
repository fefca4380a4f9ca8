//! Prefilling the page from URL query parameters.

use tracing::debug;
use url::{Url, form_urlencoded};

use crate::ChoicePage;
use crate::page::{STORAGE_FIELD, USER_FIELD};

/// Error type for reading prefill parameters.
#[derive(Debug, thiserror::Error)]
pub enum PrefillError {
    /// The page address could not be parsed at all.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// The two query parameters the page understands.
///
/// Empty parameters are treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefillParams {
    storage: Option<String>,
    user: Option<String>,
}

impl PrefillParams {
    pub fn new(storage: Option<String>, user: Option<String>) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            storage: present(storage),
            user: present(user),
        }
    }

    /// Params for a prefilled page.
    pub fn prefilled(storage: impl Into<String>, user: impl Into<String>) -> Self {
        Self::new(Some(storage.into()), Some(user.into()))
    }

    /// Read the params from a query string such as `?storage=business&user=arlene`.
    ///
    /// The leading `?` is optional. For repeated keys the first occurrence
    /// wins; unknown keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut storage = None;
        let mut user = None;
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                STORAGE_FIELD => &mut storage,
                USER_FIELD => &mut user,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        Self::new(storage, user)
    }

    /// Read the params from a full page address.
    pub fn from_url(url: &str) -> Result<Self, PrefillError> {
        let url = Url::parse(url)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    pub fn storage(&self) -> Option<&str> {
        self.storage.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Both parameters are present, so the form gets prefilled.
    pub fn is_prefilled(&self) -> bool {
        self.storage.is_some() && self.user.is_some()
    }

    /// Encode back into a query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(storage) = &self.storage {
            serializer.append_pair(STORAGE_FIELD, storage);
        }
        if let Some(user) = &self.user {
            serializer.append_pair(USER_FIELD, user);
        }
        serializer.finish()
    }

    /// The navigation link shown next to the submit button.
    pub fn toggle_link(&self) -> NavLink {
        if self.is_prefilled() {
            NavLink {
                label: "Without Prefill",
                href: "/".to_string(),
            }
        } else {
            let target = Self::prefilled("business", "arlene");
            NavLink {
                label: "Prefill",
                href: format!("?{}", target.to_query()),
            }
        }
    }
}

/// A link that switches between the prefilled and the bare page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

impl NavLink {
    /// The params the page has after following this link.
    pub fn params(&self) -> PrefillParams {
        self.href
            .split_once('?')
            .map(|(_, query)| PrefillParams::from_query(query))
            .unwrap_or_default()
    }
}

/// Re-applies prefill params to the page whenever they change.
///
/// The first call always applies, like an effect running on mount.
#[derive(Debug, Clone, Default)]
pub struct PrefillSync {
    last: Option<PrefillParams>,
}

impl PrefillSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The params applied most recently.
    pub fn last(&self) -> Option<&PrefillParams> {
        self.last.as_ref()
    }

    /// Apply `params` if they differ from the last applied ones.
    ///
    /// Returns whether the page was touched.
    pub fn sync(&mut self, page: &mut ChoicePage, params: &PrefillParams) -> bool {
        if self.last.as_ref() == Some(params) {
            debug!("prefill params unchanged");
            return false;
        }
        page.apply_external_values(params.storage(), params.user());
        self.last = Some(params.clone());
        true
    }
}
