//! Page-number strip under the product table.
//!
//! The link list is a pure function of the server's `Pagination`; the
//! component only renders it and reports clicks on enabled links.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::net::types::Pagination;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Previous,
    Page,
    Next,
}

/// One entry of the strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub kind: LinkKind,
    pub page: u32,
    pub active: bool,
    pub disabled: bool,
}

impl PageLink {
    pub fn label(&self) -> String {
        match self.kind {
            LinkKind::Previous => "«".to_owned(),
            LinkKind::Page => self.page.to_string(),
            LinkKind::Next => "»".to_owned(),
        }
    }

    /// Page to request when clicked; disabled links request nothing.
    pub fn target(&self) -> Option<u32> {
        if self.disabled { None } else { Some(self.page) }
    }

    fn class(&self) -> &'static str {
        match (self.disabled, self.active) {
            (true, _) => "pagination__item pagination__item--disabled",
            (false, true) => "pagination__item pagination__item--active",
            (false, false) => "pagination__item",
        }
    }
}

/// Previous link, one link per page, next link.
pub fn page_links(pagination: &Pagination) -> Vec<PageLink> {
    let current = pagination.current_page;
    let mut links = Vec::with_capacity(pagination.total_pages as usize + 2);
    links.push(PageLink {
        kind: LinkKind::Previous,
        page: current.saturating_sub(1),
        active: false,
        disabled: !pagination.has_previous,
    });
    links.extend((1..=pagination.total_pages).map(|page| PageLink {
        kind: LinkKind::Page,
        page,
        active: page == current,
        disabled: false,
    }));
    links.push(PageLink {
        kind: LinkKind::Next,
        page: current.saturating_add(1),
        active: false,
        disabled: !pagination.has_next,
    });
    links
}

/// Pagination control. Renders nothing until a pagination struct exists.
#[component]
pub fn PaginationBar(#[prop(into)] pagination: Signal<Option<Pagination>>, on_page: Callback<u32>) -> impl IntoView {
    let links = move || pagination.get().map(|p| page_links(&p)).unwrap_or_default();

    view! {
        <Show when=move || pagination.get().is_some()>
            <nav class="pagination" aria-label="Product pages">
                <ul class="pagination__list">
                    {move || {
                        links()
                            .into_iter()
                            .map(|link| {
                                let target = link.target();
                                view! {
                                    <li class=link.class()>
                                        <a
                                            class="pagination__link"
                                            href="#"
                                            aria-disabled=link.disabled.to_string()
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                if let Some(page) = target {
                                                    on_page.run(page);
                                                }
                                            }
                                        >
                                            {link.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </nav>
        </Show>
    }
}
