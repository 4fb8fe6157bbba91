//! Page links for paged listings.

use markupui_core::{
    Block, Build, Element, Environment, HasAttributes, HasChildren, Node, configurable, html,
};

use crate::style;

/// Query parameter carrying the page number.
pub const PAGE_PARAM: &str = "paged";

/// An entry in the page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A page number.
    Page(u32),
    /// Skipped pages.
    Gap,
}

/// The pages to link around `current`: the first and last page, `window`
/// pages on each side of `current`, and [`PageSlot::Gap`] where pages are
/// skipped. A gap that would hide a single page shows that page instead.
///
/// `current` is clamped into `1..=total`; `total == 0` yields nothing.
#[must_use]
pub fn page_window(current: u32, total: u32, window: u32) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let start = current.saturating_sub(window).max(1);
    let end = current.saturating_add(window).min(total);

    let mut pages = Vec::new();
    pages.push(1);
    pages.extend(start..=end);
    pages.push(total);
    pages.dedup();

    let mut slots = Vec::with_capacity(pages.len() + 2);
    let mut previous = 0;
    for page in pages {
        if page <= previous {
            continue;
        }
        match page - previous {
            1 => {}
            2 => slots.push(PageSlot::Page(page - 1)),
            _ if previous > 0 => slots.push(PageSlot::Gap),
            _ => {}
        }
        slots.push(PageSlot::Page(page));
        previous = page;
    }
    slots
}

/// Sets `paged={page}` on `base`, replacing an existing `paged` argument.
/// Page 1 removes the argument. A `#fragment` stays at the end.
#[must_use]
pub fn page_url(base: &str, page: u32) -> String {
    let (rest, fragment) = base.split_once('#').map_or((base, None), |(rest, f)| (rest, Some(f)));
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut args: Vec<String> = query
        .split('&')
        .filter(|arg| !arg.is_empty())
        .filter(|arg| arg.split('=').next() != Some(PAGE_PARAM))
        .map(str::to_owned)
        .collect();
    if page > 1 {
        args.push(format!("{PAGE_PARAM}={page}"));
    }

    let mut url = path.to_owned();
    if !args.is_empty() {
        url.push('?');
        url.push_str(&args.join("&"));
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

/// Configuration for [`Pagination`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PaginationConfig {
    /// Current page, 1-based.
    pub current: u32,
    /// Number of pages.
    pub total: u32,
    /// Listing URL without the page parameter.
    pub base_url: String,
    /// Pages shown on each side of the current one.
    pub window: u32,
    /// Label of the previous-page link.
    pub prev_label: String,
    /// Label of the next-page link.
    pub next_label: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
            base_url: String::new(),
            window: 2,
            prev_label: "\u{2039} Previous".into(),
            next_label: "Next \u{203a}".into(),
        }
    }
}

impl Block for PaginationConfig {
    const NAME: &'static str = "pagination";
}

impl PaginationConfig {
    fn link(&self, env: &Environment, page: u32, label: String) -> Element {
        html::a(env.url(&page_url(&self.base_url, page)), label)
            .class(&Self::parts().part("link"))
    }
}

impl Build for PaginationConfig {
    fn build(&self, env: &Environment) -> Node {
        if self.total <= 1 {
            return Node::empty();
        }
        env.enqueue_style("markupui-pagination", style::PAGINATION);
        let parts = Self::parts();
        let current = self.current.clamp(1, self.total);

        let mut nav = html::element("nav")
            .class(Self::NAME)
            .aria("label", env.translate("Pagination"));
        if current > 1 {
            nav.push_child(
                self.link(env, current - 1, env.translate(&self.prev_label))
                    .class(&parts.part("prev"))
                    .attr("rel", "prev"),
            );
        }
        for slot in page_window(current, self.total, self.window) {
            match slot {
                PageSlot::Page(page) if page == current => nav.push_child(
                    html::span()
                        .class(&parts.part("link"))
                        .class(&parts.part_variant("link", "current"))
                        .aria("current", "page")
                        .text(page.to_string()),
                ),
                PageSlot::Page(page) => nav.push_child(self.link(env, page, page.to_string())),
                PageSlot::Gap => nav.push_child(
                    html::span()
                        .class(&parts.part("ellipsis"))
                        .attr("aria-hidden", "true")
                        .text("\u{2026}"),
                ),
            }
        }
        if current < self.total {
            nav.push_child(
                self.link(env, current + 1, env.translate(&self.next_label))
                    .class(&parts.part("next"))
                    .attr("rel", "next"),
            );
        }
        nav.into()
    }
}

configurable!(
    /// Page links. Renders nothing when there is at most one page.
    Pagination,
    PaginationConfig
);

impl Pagination {
    /// Links for `total` pages of `base_url`, on page `current`.
    pub fn new(env: &Environment, base_url: impl Into<String>, current: u32, total: u32) -> Self {
        Self::from_config(
            env,
            PaginationConfig {
                current,
                total,
                base_url: base_url.into(),
                ..PaginationConfig::default()
            },
        )
    }

    /// Sets how many pages show on each side of the current one.
    pub fn window(mut self, window: u32) -> Self {
        self.config_mut().window = window;
        self
    }

    /// Sets the previous and next link labels.
    pub fn labels(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        let config = self.config_mut();
        config.prev_label = prev.into();
        config.next_label = next.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use markupui_core::Render;

    use super::{PageSlot::Gap, PageSlot::Page, *};

    #[test]
    fn window_with_gaps() {
        assert_eq!(
            page_window(10, 20, 2),
            [Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
        );
    }

    #[test]
    fn single_skipped_page_is_shown() {
        assert_eq!(
            page_window(4, 6, 1),
            [Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
        assert_eq!(page_window(1, 3, 0), [Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn window_edges() {
        assert_eq!(page_window(1, 1, 2), [Page(1)]);
        assert!(page_window(0, 0, 2).is_empty());
        assert_eq!(page_window(99, 5, 1), [Page(1), Gap, Page(4), Page(5)]);
    }

    #[test]
    fn page_urls() {
        assert_eq!(page_url("edit.php", 1), "edit.php");
        assert_eq!(page_url("edit.php", 3), "edit.php?paged=3");
        assert_eq!(page_url("edit.php?post_type=page", 2), "edit.php?post_type=page&paged=2");
    }

    #[test]
    fn existing_page_argument_is_replaced() {
        assert_eq!(page_url("edit.php?paged=3", 1), "edit.php");
        assert_eq!(page_url("edit.php?paged=3", 4), "edit.php?paged=4");
        assert_eq!(
            page_url("edit.php?paged=3&post_type=page", 2),
            "edit.php?post_type=page&paged=2"
        );
        assert_eq!(page_url("edit.php?pagedx=1", 2), "edit.php?pagedx=1&paged=2");
    }

    #[test]
    fn fragment_stays_last() {
        assert_eq!(page_url("edit.php#list", 2), "edit.php?paged=2#list");
        assert_eq!(page_url("edit.php?s=x&paged=9#list", 1), "edit.php?s=x#list");
    }

    #[test]
    fn nothing_for_a_single_page() {
        let env = Environment::new();
        assert_eq!(Pagination::new(&env, "edit.php", 1, 1).render(), "");
        assert_eq!(Pagination::new(&env, "edit.php", 1, 0).render(), "");
    }

    #[test]
    fn renders_links_around_current_page() {
        let env = Environment::new();
        let markup = Pagination::new(&env, "edit.php", 2, 3).render();
        assert_eq!(
            markup,
            concat!(
                r#"<nav class="pagination" aria-label="Pagination">"#,
                r#"<a href="edit.php" class="pagination-link pagination-prev" rel="prev">‹ Previous</a>"#,
                r#"<a href="edit.php" class="pagination-link">1</a>"#,
                r#"<span class="pagination-link pagination-link--current" aria-current="page">2</span>"#,
                r#"<a href="edit.php?paged=3" class="pagination-link">3</a>"#,
                r#"<a href="edit.php?paged=3" class="pagination-link pagination-next" rel="next">Next ›</a>"#,
                "</nav>"
            )
        );
    }
}
