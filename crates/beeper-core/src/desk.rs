//! The desk: ordered collection of message cards.
//!
//! Insertion order is render order, so later cards sit on top. The card
//! being dragged is drawn above everything without being reordered.

use std::fmt;

use chrono::{DateTime, TimeZone};
use rand::Rng;
use ulid::Ulid;

use crate::card::{CardId, MessageCard};
use crate::drag::{Bounds, DragSession, Point};
use crate::message::SentMessage;

/// Rendered card footprint, used to keep cards on the desk
pub const CARD_WIDTH: f64 = 256.0;
pub const CARD_HEIGHT: f64 = 150.0;

/// Cards spawn this far right of center so they clear the pager
const SPAWN_OFFSET_X: f64 = 200.0;
/// Half-width of the random spawn jitter
const SPAWN_JITTER: f64 = 50.0;
/// Maximum tilt either way, degrees
const MAX_TILT: f64 = 5.0;

const TIMESTAMP_FORMAT: &str = "%I:%M %p";

/// Size of the visible desk area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

struct ActiveDrag {
    id: CardId,
    session: DragSession,
}

/// Owner of all cards currently on the desk
#[derive(Default)]
pub struct Desk {
    cards: Vec<MessageCard>,
    last_id: Option<Ulid>,
    drag: Option<ActiveDrag>,
}

impl fmt::Debug for Desk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Desk")
            .field("cards", &self.cards.len())
            .field("dragging", &self.dragging())
            .finish()
    }
}

impl Desk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[MessageCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&MessageCard> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Pin a freshly sent message to the desk.
    ///
    /// The card lands right of the viewport center with random jitter and a
    /// small random tilt, and goes on top of the stack.
    pub fn spawn<R, Tz>(
        &mut self,
        sent: SentMessage,
        viewport: Viewport,
        rng: &mut R,
        now: DateTime<Tz>,
    ) -> &MessageCard
    where
        R: Rng,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let center = viewport.center();
        let card = MessageCard {
            id: self.next_id(),
            text: sent.text,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
            x: center.x + rng.random_range(-SPAWN_JITTER..SPAWN_JITTER) + SPAWN_OFFSET_X,
            y: center.y + rng.random_range(-SPAWN_JITTER..SPAWN_JITTER),
            rotation: rng.random_range(-MAX_TILT..MAX_TILT),
            theme: sent.theme,
        };
        tracing::debug!(id = %card.id, theme = %card.theme, "card spawned");

        self.cards.push(card);
        &self.cards[self.cards.len() - 1]
    }

    /// [`Desk::spawn`] with the thread RNG and local wall-clock time
    pub fn pin(&mut self, sent: SentMessage, viewport: Viewport) -> &MessageCard {
        self.spawn(sent, viewport, &mut rand::rng(), chrono::Local::now())
    }

    /// Remove a card. Unknown ids are ignored.
    pub fn delete(&mut self, id: &CardId) -> bool {
        let Some(index) = self.cards.iter().position(|c| &c.id == id) else {
            tracing::debug!(%id, "delete of unknown card ignored");
            return false;
        };
        self.cards.remove(index);
        if self.dragging() == Some(id) {
            self.drag = None;
        }
        true
    }

    /// Region a card's top-left corner may occupy
    pub fn bounds(viewport: Viewport) -> Bounds {
        Bounds::new(
            0.0,
            0.0,
            viewport.width - CARD_WIDTH,
            viewport.height - CARD_HEIGHT,
        )
    }

    /// Start dragging `id`, grabbed at `pointer`. Ends any previous drag.
    pub fn begin_drag(&mut self, id: &CardId, pointer: Point) -> bool {
        let Some(card) = self.get(id) else {
            return false;
        };
        let session = DragSession::start(Point::new(card.x, card.y), pointer);
        self.drag = Some(ActiveDrag { id: *id, session });
        true
    }

    /// Move the dragged card to follow `pointer`. Returns its new position.
    pub fn drag_to(&mut self, pointer: Point, viewport: Viewport) -> Option<Point> {
        let drag = self.drag.as_ref()?;
        let position = drag.session.position_for(pointer, &Self::bounds(viewport));
        let id = drag.id;

        let card = self.cards.iter_mut().find(|c| c.id == id)?;
        card.x = position.x;
        card.y = position.y;
        Some(position)
    }

    /// Release the dragged card where it is
    pub fn end_drag(&mut self) -> Option<CardId> {
        self.drag.take().map(|d| d.id)
    }

    pub fn dragging(&self) -> Option<&CardId> {
        self.drag.as_ref().map(|d| &d.id)
    }

    fn next_id(&mut self) -> CardId {
        let fresh = Ulid::new();
        let id = match self.last_id {
            Some(last) if fresh <= last => last.increment().unwrap_or(fresh),
            _ => fresh,
        };
        self.last_id = Some(id);
        CardId::from_ulid(id)
    }
}
