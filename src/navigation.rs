use serde::{Deserialize, Serialize};

use crate::entities::Destination;
use crate::error::{invalid_state_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Destinations,
}

/// What the main area renders. List and detail are both projections of
/// `Page::Destinations`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum View {
    Home,
    DestinationsList,
    DestinationDetail { destination: Destination },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum ScrollTarget {
    Top,
    Section(String),
}

impl ScrollTarget {
    /// Accepts `"#fleet"` as well as `"fleet"`.
    pub fn section(hint: &str) -> Option<Self> {
        let id = hint.trim().trim_start_matches('#');

        if id.is_empty() {
            return None;
        }

        Some(Self::Section(id.to_string()))
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Navigator {
    current_page: Page,
    selected_destination: Option<Destination>,
    pending_scroll: Option<ScrollTarget>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current_page: Page::Home,
            selected_destination: None,
            pending_scroll: None,
        }
    }
}

impl Navigator {
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn selected_destination(&self) -> Option<&Destination> {
        self.selected_destination.as_ref()
    }

    pub fn view(&self) -> View {
        match (self.current_page, &self.selected_destination) {
            (Page::Home, _) => View::Home,
            (Page::Destinations, None) => View::DestinationsList,
            (Page::Destinations, Some(destination)) => View::DestinationDetail {
                destination: destination.clone(),
            },
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn navigate(&mut self, page: Page, section: Option<&str>) {
        self.current_page = page;
        self.selected_destination = None;

        self.pending_scroll = match (page, section.and_then(ScrollTarget::section)) {
            (Page::Home, Some(target)) => Some(target),
            _ => Some(ScrollTarget::Top),
        };
    }

    #[tracing::instrument(skip_all, fields(destination_id = destination.id))]
    pub fn select_destination(&mut self, destination: Destination) -> Result<(), Error> {
        if self.view() != View::DestinationsList {
            tracing::warn!("destination selected outside of the destinations list");
            return Err(invalid_state_error());
        }

        self.selected_destination = Some(destination);
        self.pending_scroll = Some(ScrollTarget::Top);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn back_to_list(&mut self) -> Result<(), Error> {
        if self.selected_destination.is_none() {
            tracing::warn!("back to list requested without a selected destination");
            return Err(invalid_state_error());
        }

        self.selected_destination = None;
        self.pending_scroll = Some(ScrollTarget::Top);

        Ok(())
    }

    pub fn pending_scroll(&self) -> Option<&ScrollTarget> {
        self.pending_scroll.as_ref()
    }

    /// Hands the pending scroll target to the view layer exactly once.
    pub fn take_scroll_target(&mut self) -> Option<ScrollTarget> {
        self.pending_scroll.take()
    }

    #[cfg(test)]
    fn selection_is_consistent(&self) -> bool {
        self.selected_destination.is_none() || self.current_page == Page::Destinations
    }
}
