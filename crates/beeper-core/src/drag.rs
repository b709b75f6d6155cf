//! Drag geometry: elastic constraints for moving cards around the desk.
//!
//! Positions refer to a card's top-left corner. While dragging, movement past
//! a bound is damped by [`DRAG_ELASTIC`]; on release the card stays where it
//! was last drawn.

/// Fraction of overshoot allowed past a bound
pub const DRAG_ELASTIC: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Region a card's top-left corner may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds are normalized so `min <= max` on both axes
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x: min_x.min(max_x),
            min_y: min_y.min(max_y),
            max_x: max_x.max(min_x),
            max_y: max_y.max(min_y),
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// Pull a free position back toward the bounds, keeping `elastic` of the overshoot
    pub fn constrain(&self, p: Point, elastic: f64) -> Point {
        Point {
            x: elastic_axis(p.x, self.min_x, self.max_x, elastic),
            y: elastic_axis(p.y, self.min_y, self.max_y, elastic),
        }
    }
}

fn elastic_axis(value: f64, min: f64, max: f64, elastic: f64) -> f64 {
    if value < min {
        min - (min - value) * elastic
    } else if value > max {
        max + (value - max) * elastic
    } else {
        value
    }
}

/// One press-drag-release gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    grab_offset: Point,
}

impl DragSession {
    /// Begin dragging a card at `card_origin` grabbed at `pointer`
    pub fn start(card_origin: Point, pointer: Point) -> Self {
        Self {
            grab_offset: Point::new(pointer.x - card_origin.x, pointer.y - card_origin.y),
        }
    }

    /// Card position for the current pointer location
    pub fn position_for(&self, pointer: Point, bounds: &Bounds) -> Point {
        let free = Point::new(pointer.x - self.grab_offset.x, pointer.y - self.grab_offset.y);
        bounds.constrain(free, DRAG_ELASTIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_inside_bounds_follows_pointer() {
        let session = DragSession::start(Point::new(10.0, 10.0), Point::new(15.0, 12.0));
        let pos = session.position_for(Point::new(55.0, 42.0), &bounds());
        assert_eq!(pos, Point::new(50.0, 40.0));
    }

    #[test]
    fn test_overshoot_is_damped() {
        let session = DragSession::start(Point::new(90.0, 50.0), Point::new(90.0, 50.0));
        let pos = session.position_for(Point::new(200.0, 50.0), &bounds());
        assert!((pos.x - 110.0).abs() < 1e-9);
        assert_eq!(pos.y, 50.0);

        let pos = session.position_for(Point::new(-50.0, -20.0), &bounds());
        assert!((pos.x + 5.0).abs() < 1e-9);
        assert!((pos.y + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_normalized() {
        let b = Bounds::new(100.0, 50.0, 0.0, 0.0);
        assert_eq!(b.min_x, 0.0);
        assert_eq!(b.max_x, 100.0);
        assert!(b.contains(Point::new(50.0, 25.0)));
        assert!(!b.contains(Point::new(150.0, 25.0)));
    }
}
