use crate::constants::*;
use crate::core::constants::FILTER_FADE_DELAY_MS;
use crate::core::{partition_cards, AccordionState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hamburger toggles the mobile menu; any nav link closes it.
pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (
        document.get_element_by_id(HAMBURGER_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) else {
        log::warn!("[menu] missing #{} or #{}", HAMBURGER_ID, NAV_MENU_ID);
        return;
    };

    let (h, m) = (hamburger.clone(), menu.clone());
    dom::add_click_listener(document, HAMBURGER_ID, move || {
        _ = m.class_list().toggle(ACTIVE_CLASS);
        _ = h.class_list().toggle(ACTIVE_CLASS);
    });

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let (h, m) = (hamburger.clone(), menu.clone());
        dom::add_listener(&link, "click", move |_ev: web::Event| {
            dom::set_class(&m, ACTIVE_CLASS, false);
            dom::set_class(&h, ACTIVE_CLASS, false);
        });
    }
}

fn apply_filter(cards: &[web::Element], filter: Option<&str>) {
    let categories: Vec<Option<String>> =
        cards.iter().map(|c| c.get_attribute(CATEGORY_ATTR)).collect();
    let shown = partition_cards(filter, categories.iter().map(|c| c.as_deref()));
    for (card, show) in cards.iter().zip(shown) {
        if show {
            dom::set_style(card, "display", "block");
            dom::set_class(card, HIDDEN_CLASS, false);
            let card = card.clone();
            dom::set_timeout(FILTER_FADE_DELAY_MS, move || {
                dom::set_style(&card, "animation", FILTER_FADE_ANIMATION);
            });
        } else {
            dom::set_style(card, "display", "none");
            dom::set_class(card, HIDDEN_CLASS, true);
        }
    }
}

/// Category buttons: the clicked one becomes the only active button and the
/// product cards are shown or hidden to match.
pub fn wire_product_filter(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, FILTER_BUTTON_SELECTOR));
    let cards = Rc::new(dom::query_all(document, PRODUCT_CARD_SELECTOR));
    if buttons.is_empty() {
        return;
    }
    for button in buttons.iter() {
        let (all_buttons, cards, clicked) = (buttons.clone(), cards.clone(), button.clone());
        dom::add_listener(button, "click", move |_ev: web::Event| {
            for b in all_buttons.iter() {
                dom::set_class(b, ACTIVE_CLASS, false);
            }
            dom::set_class(&clicked, ACTIVE_CLASS, true);
            let filter = clicked.get_attribute(FILTER_ATTR);
            log::info!("[filter] {}", filter.as_deref().unwrap_or("all"));
            apply_filter(&cards, filter.as_deref());
        });
    }
    log::info!(
        "[filter] {} buttons, {} cards",
        buttons.len(),
        cards.len()
    );
}

/// Single-open accordion over `.accordion-item` elements.
pub fn wire_accordion(document: &web::Document) {
    let items = Rc::new(dom::query_all(document, ACCORDION_ITEM_SELECTOR));
    let initially_open = items
        .iter()
        .position(|item| item.class_list().contains(ACTIVE_CLASS));
    let state = Rc::new(RefCell::new(AccordionState::with_open(initially_open)));

    for (index, item) in items.iter().enumerate() {
        let Ok(Some(header)) = item.query_selector(ACCORDION_HEADER_SELECTOR) else {
            log::warn!("[accordion] item {} has no header", index);
            continue;
        };
        let (items, state) = (items.clone(), state.clone());
        dom::add_listener(&header, "click", move |_ev: web::Event| {
            let open = state.borrow_mut().toggle(index);
            for (i, it) in items.iter().enumerate() {
                dom::set_class(it, ACTIVE_CLASS, open == Some(i));
            }
        });
    }
}
