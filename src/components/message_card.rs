//! Message card component.
//!
//! A paper slip pinned to the desk. The text types itself out one character
//! at a time; pressing anywhere but the delete button starts a drag.

use beeper_core::{CardId, Point, Typewriter, REVEAL_TICK};
use dioxus::prelude::*;

/// Props for the MessageCard component.
#[derive(Props, Clone, PartialEq)]
pub struct MessageCardProps {
    /// Card data owned by the desk
    pub card: beeper_core::MessageCard,
    /// Whether this card is the one being dragged
    #[props(default = false)]
    pub dragging: bool,
    /// Handler called with the card id and pointer position on press
    pub on_drag_start: EventHandler<(CardId, Point)>,
    /// Handler called when the delete control is clicked
    pub on_delete: EventHandler<CardId>,
}

/// Draggable, deletable message card with typewriter reveal.
///
/// # Example
///
/// ```ignore
/// MessageCard {
///     card: card.clone(),
///     dragging: false,
///     on_drag_start: move |(id, at)| desk.write().begin_drag(&id, at),
///     on_delete: move |id| desk.write().delete(&id),
/// }
/// ```
#[component]
pub fn MessageCard(props: MessageCardProps) -> Element {
    let card = &props.card;
    let id = card.id;

    let mut typewriter = use_signal(|| Typewriter::new(card.text.clone()));
    let mut reveal_task = use_signal(|| Option::<Task>::None);

    // Restart the reveal whenever the text changes
    let text = card.text.clone();
    use_effect(use_reactive((&text,), move |(text,)| {
        if let Some(task) = reveal_task.take() {
            task.cancel();
        }
        typewriter.write().restart(text);

        let task = spawn(async move {
            let mut interval = tokio::time::interval(REVEAL_TICK);
            // First tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if !typewriter.write().tick() {
                    break;
                }
            }
        });
        reveal_task.set(Some(task));
    }));

    let on_drag_start = props.on_drag_start;
    let on_delete = props.on_delete;

    let handle_pointerdown = move |e: PointerEvent| {
        let at = e.client_coordinates();
        on_drag_start.call((id, Point::new(at.x, at.y)));
    };

    let card_class = if props.dragging {
        format!("card {} card--dragging", card.theme.css_class())
    } else {
        format!("card {}", card.theme.css_class())
    };
    let style = format!(
        "left: {}px; top: {}px; rotate: {}deg;",
        card.x, card.y, card.rotation
    );
    let visible = typewriter.read().visible().to_string();

    rsx! {
        div {
            class: "{card_class}",
            style: "{style}",
            onpointerdown: handle_pointerdown,

            div { class: "card__header",
                span { class: "card__time",
                    span { class: "card__grip", "⠿" }
                    "{card.timestamp}"
                }
                button {
                    class: "card__delete",
                    title: "Delete",
                    onpointerdown: move |e: PointerEvent| e.stop_propagation(),
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        on_delete.call(id);
                    },
                    "✕"
                }
            }

            div { class: "card__body",
                "{visible}"
                span { class: "card__caret" }
            }

            div { class: "card__footer",
                div { class: "card__bar" }
                span { class: "card__brand", "MOTOROLA" }
            }
        }
    }
}
