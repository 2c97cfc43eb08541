//! Pagination section - Previous, one button per page, Next.
//!
//! The controls are computed as a `PaginationView` first so the button
//! logic can be checked without parsing HTML.

use catalog_core::PageResult;

/// Attribute carrying a button's target page.
pub const PAGE_ATTR: &str = "data-page";

/// Which control a button is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Previous,
    Page,
    Next,
}

/// A single pagination button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub kind: ButtonKind,
    pub label: String,
    /// Page loaded on activation; `None` when disabled.
    pub target: Option<u32>,
    pub active: bool,
}

impl PageButton {
    /// Check if the button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.target.is_none()
    }
}

/// Pagination controls for one page of results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationView {
    pub buttons: Vec<PageButton>,
}

impl PaginationView {
    /// Build the controls. Empty when there is at most one page.
    pub fn from_page(page: &PageResult) -> Self {
        let current = page.current_page;
        let total = page.total_pages;

        if total <= 1 {
            return Self::default();
        }

        let in_range = |p: u32| (1..=total).contains(&p);
        let mut buttons = Vec::with_capacity(button_count(total));

        buttons.push(PageButton {
            kind: ButtonKind::Previous,
            label: "Previous".to_string(),
            target: current.checked_sub(1).filter(|&p| in_range(p)),
            active: false,
        });

        for p in 1..=total {
            buttons.push(PageButton {
                kind: ButtonKind::Page,
                label: p.to_string(),
                target: Some(p),
                active: p == current,
            });
        }

        buttons.push(PageButton {
            kind: ButtonKind::Next,
            label: "Next".to_string(),
            target: current.checked_add(1).filter(|&p| in_range(p)),
            active: false,
        });

        Self { buttons }
    }

    /// Check if no controls are shown.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// The page marked active, if any.
    pub fn active_page(&self) -> Option<u32> {
        self.buttons
            .iter()
            .find(|b| b.active)
            .and_then(|b| b.target)
    }

    /// Render the buttons to HTML.
    pub fn render(&self) -> String {
        self.buttons.iter().map(render_button).collect()
    }
}

fn render_button(button: &PageButton) -> String {
    let class = if button.active { r#" class="active""# } else { "" };
    match button.target {
        Some(page) => format!(
            r#"<button type="button"{class} {PAGE_ATTR}="{page}">{label}</button>"#,
            label = button.label,
        ),
        None => format!(
            r#"<button type="button"{class} disabled>{label}</button>"#,
            label = button.label,
        ),
    }
}

/// Previous, one button per page, Next. Saturates where `usize` is 32 bits.
fn button_count(total_pages: u32) -> usize {
    usize::try_from(total_pages)
        .unwrap_or(usize::MAX)
        .saturating_add(2)
}

/// Render the pagination section for a page of results.
pub fn render_pagination(page: &PageResult) -> String {
    PaginationView::from_page(page).render()
}
