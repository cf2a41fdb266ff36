//! Server-side rendering of a [`Snapshot`] into a full HTML page.
//!
//! Markup is deliberately plain. Every piece of catalog data or visitor input
//! goes through [`escape`] before it is interpolated.

mod destinations;
mod forms;
mod home;

use chrono::{Datelike, Utc};

use crate::navigation::{ScrollTarget, View};
use crate::session::Snapshot;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

/// Section ids a view renders, in document order.
pub fn sections(view: &View) -> &'static [&'static str] {
    match view {
        View::Home => &["home", "fleet", "quote"],
        View::DestinationsList => &["destinations"],
        View::DestinationDetail { .. } => &[],
    }
}

/// Resolves a pending scroll target against what `view` actually renders.
/// A section that is not on the page resolves to nothing.
pub fn resolve_scroll(view: &View, target: Option<ScrollTarget>) -> Option<ScrollTarget> {
    match target? {
        ScrollTarget::Top => Some(ScrollTarget::Top),
        ScrollTarget::Section(id) if sections(view).contains(&id.as_str()) => {
            Some(ScrollTarget::Section(id))
        }
        ScrollTarget::Section(id) => {
            tracing::debug!("scroll target #{} not rendered, ignoring", id);
            None
        }
    }
}

/// Address a visitor is redirected to after navigating. A rendered section
/// becomes the URL fragment so the browser scrolls to it once the page is
/// loaded; every other target lands at the top of `/`.
pub fn landing_location(view: &View, target: Option<ScrollTarget>) -> String {
    match resolve_scroll(view, target) {
        Some(ScrollTarget::Section(id)) => format!("/#{}", id),
        _ => "/".to_string(),
    }
}

pub fn render_page(snapshot: &Snapshot, scroll: Option<ScrollTarget>) -> String {
    let scroll_attr = match resolve_scroll(&snapshot.view, scroll) {
        Some(ScrollTarget::Top) => r#" data-scroll-target="top""#.to_string(),
        Some(ScrollTarget::Section(id)) => format!(r#" data-scroll-target="{}""#, escape(&id)),
        None => String::new(),
    };

    let main = match &snapshot.view {
        View::Home => home::render(snapshot),
        View::DestinationsList => destinations::render_list(snapshot),
        View::DestinationDetail { destination } => destinations::render_detail(destination),
    };

    let modal = if snapshot.booking.is_open {
        forms::render_booking(&snapshot.booking)
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Coco Tours</title>
</head>
<body>
{header}
<main{scroll_attr}>
{main}
</main>
{modal}
{footer}
</body>
</html>
"#,
        header = render_header(),
        scroll_attr = scroll_attr,
        main = main,
        modal = modal,
        footer = render_footer(),
    )
}

/// A button that posts a navigation request.
pub(crate) fn nav_button(page: &str, section: Option<&str>, label: &str) -> String {
    let section = section
        .map(|s| format!(r#"<input type="hidden" name="section" value="{}">"#, escape(s)))
        .unwrap_or_default();

    format!(
        r#"<form method="post" action="/navigate"><input type="hidden" name="page" value="{}">{}<button>{}</button></form>"#,
        escape(page),
        section,
        escape(label)
    )
}

fn render_header() -> String {
    format!(
        "<header>\n{}\n<nav>\n{}\n{}\n{}\n{}\n</nav>\n</header>",
        nav_button("home", None, "Coco Tours"),
        nav_button("home", Some("#home"), "Home"),
        nav_button("home", Some("#fleet"), "Our Fleet"),
        nav_button("destinations", None, "Destinations"),
        nav_button("home", Some("#quote"), "Get a Quote"),
    )
}

fn render_footer() -> String {
    format!(
        r#"<footer>
<p>&copy; {} Coco Tours. All Rights Reserved.</p>
<p>Your trusted partner in Sri Lankan travel.</p>
</footer>"#,
        Utc::now().year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fakes::{destination, vehicle};
    use crate::session::Session;

    fn loaded() -> Session {
        let mut session = Session::default();
        session.catalog.settle(
            Ok(vec![vehicle(1, "Luxury SUV")]),
            Ok(vec![destination(5, "Sigiriya <Rock>")]),
        );
        session
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn unknown_section_is_dropped() {
        let target = ScrollTarget::section("#nowhere");
        assert_eq!(resolve_scroll(&View::Home, target), None);

        let target = ScrollTarget::section("#fleet");
        assert_eq!(resolve_scroll(&View::DestinationsList, target), None);
    }

    #[test]
    fn known_section_survives() {
        let target = ScrollTarget::section("#quote");
        assert_eq!(
            resolve_scroll(&View::Home, target),
            Some(ScrollTarget::Section("quote".into()))
        );
        assert_eq!(
            resolve_scroll(&View::DestinationsList, Some(ScrollTarget::Top)),
            Some(ScrollTarget::Top)
        );
    }

    #[test]
    fn landing_carries_rendered_section_only() {
        assert_eq!(
            landing_location(&View::Home, ScrollTarget::section("#fleet")),
            "/#fleet"
        );
        assert_eq!(landing_location(&View::Home, ScrollTarget::section("quote")), "/#quote");
        assert_eq!(
            landing_location(&View::Home, ScrollTarget::section("#\r\nSet-Cookie: x")),
            "/"
        );
        assert_eq!(landing_location(&View::DestinationsList, Some(ScrollTarget::Top)), "/");
        assert_eq!(landing_location(&View::Home, None), "/");
    }

    #[test]
    fn home_shows_loading_then_fleet() {
        let session = Session::default();
        let html = render_page(&session.snapshot(), None);
        assert!(html.contains("Loading vehicles..."));

        let session = loaded();
        let html = render_page(&session.snapshot(), Some(ScrollTarget::Section("fleet".into())));
        assert!(!html.contains("Loading vehicles..."));
        assert!(html.contains("Luxury SUV"));
        assert!(html.contains(r#"<main data-scroll-target="fleet">"#));
    }

    #[test]
    fn destination_names_are_escaped() {
        let mut session = loaded();
        session.navigator.navigate(crate::navigation::Page::Destinations, None);

        let html = render_page(&session.snapshot(), None);
        assert!(html.contains("Sigiriya &lt;Rock&gt;"));
        assert!(!html.contains("Sigiriya <Rock>"));
    }

    #[test]
    fn detail_view_renders_selection() {
        let mut session = loaded();
        session.navigator.navigate(crate::navigation::Page::Destinations, None);
        session
            .navigator
            .select_destination(destination(5, "Sigiriya"))
            .unwrap();

        let html = render_page(&session.snapshot(), None);
        assert!(html.contains("About Sigiriya"));
        assert!(html.contains("Back to All Destinations"));
    }

    #[test]
    fn empty_catalog_renders_empty_grids() {
        let mut session = Session::default();
        session
            .catalog
            .settle(Err(crate::error::upstream_error()), Ok(Vec::new()));

        let html = render_page(&session.snapshot(), None);
        assert!(html.contains(r#"<div class="grid"></div>"#));
    }
}
