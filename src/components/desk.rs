//! Desktop Component
//!
//! Gridded desk holding the pager and every sent message card. Pointer
//! movement is tracked on the desk itself so a fast drag never loses its
//! card.

use std::rc::Rc;

use beeper_core::{CardId, Desk, Point, SentMessage, Viewport};
use dioxus::prelude::*;

use crate::components::{MessageCard, PagerDevice};
use crate::context::get_initial_viewport;

/// Full-window desk with the pager and pinned message cards
#[component]
pub fn Desktop() -> Element {
    let mut desk = use_signal(Desk::new);
    let mut viewport = use_signal(get_initial_viewport);
    let mut surface = use_signal(|| Option::<Rc<MountedData>>::None);

    // Re-read the desk size; the window may have been resized since mount
    let measure = move || async move {
        let Some(element) = surface.peek().clone() else {
            return;
        };
        match element.get_client_rect().await {
            Ok(rect) => {
                let size = Viewport::new(rect.size.width, rect.size.height);
                if size != *viewport.peek() {
                    tracing::debug!(width = size.width, height = size.height, "desk resized");
                    viewport.set(size);
                }
            }
            Err(e) => tracing::debug!(error = ?e, "desk measurement failed"),
        }
    };

    let on_send = move |sent: SentMessage| {
        spawn(async move {
            measure().await;
            let mut desk = desk.write();
            let card = desk.pin(sent, viewport());
            tracing::info!(id = %card.id, theme = %card.theme, "message pinned");
        });
    };

    let on_drag_start = move |(id, at): (CardId, Point)| {
        desk.write().begin_drag(&id, at);
        spawn(measure());
    };

    let on_delete = move |id: CardId| {
        if desk.write().delete(&id) {
            tracing::info!(%id, "card deleted");
        }
    };

    let handle_pointermove = move |e: PointerEvent| {
        if desk.peek().dragging().is_none() {
            return;
        }
        let at = e.client_coordinates();
        desk.write().drag_to(Point::new(at.x, at.y), viewport());
    };

    let mut release = move || {
        if desk.peek().dragging().is_some() {
            desk.write().end_drag();
        }
    };

    let dragging = desk.read().dragging().copied();
    let cards = desk.read().cards().to_vec();

    rsx! {
        div {
            class: "desk",
            onmounted: move |e: MountedEvent| {
                surface.set(Some(e.data()));
                spawn(measure());
            },
            onpointermove: handle_pointermove,
            onpointerup: move |_| release(),
            onpointerleave: move |_| release(),

            div { class: "desk__grid" }
            div { class: "desk__vignette" }

            header { class: "desk__header",
                h1 { class: "desk__title", "BEEPER.FIX" }
                p { class: "desk__hint", "DRAG CARDS TO ORGANIZE • USE AI BUTTON FOR 90s SLANG" }
            }

            main { class: "desk__stage",
                div { class: "pager-slot",
                    PagerDevice { on_send: on_send }
                }
            }

            for card in cards {
                MessageCard {
                    key: "{card.id}",
                    dragging: dragging == Some(card.id),
                    card: card.clone(),
                    on_drag_start: on_drag_start,
                    on_delete: on_delete,
                }
            }

            footer { class: "desk__footer", "POWERED BY GOOGLE GEMINI • RETRO TECH V1.0" }
        }
    }
}
