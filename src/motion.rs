//! Scroll and pointer driven animation values.
//!
//! Everything here is a plain function of its inputs; components feed in
//! the current scroll offset or pointer position each frame.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

pub fn parallax_offset(scroll_y: f64, speed: f64, direction: Direction) -> Offset {
    let d = scroll_y * speed;
    match direction {
        Direction::Up => Offset { x: 0.0, y: -d },
        Direction::Down => Offset { x: 0.0, y: d },
        Direction::Left => Offset { x: -d, y: 0.0 },
        Direction::Right => Offset { x: d, y: 0.0 },
    }
}

/// Percentage of the page scrolled, in `0.0..=100.0`.
pub fn reading_progress(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Linearly map `progress` in `0.0..=1.0` onto `from..=to`, clamped.
pub fn map_range(progress: f64, from: f64, to: f64) -> f64 {
    from + (to - from) * progress.clamp(0.0, 1.0)
}

/// Pull toward the pointer, proportional to its distance from the
/// element's centre. Outside `area` the element rests.
pub fn magnetic_offset(pointer: (f64, f64), centre: (f64, f64), strength: f64, area: f64) -> Offset {
    let x = (pointer.0 - centre.0) * strength;
    let y = (pointer.1 - centre.1) * strength;
    if x.hypot(y) < area {
        Offset { x, y }
    } else {
        Offset::ZERO
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpringState {
    pub value: f64,
    pub velocity: f64,
}

impl SpringState {
    /// At rest on `target`, within a thousandth.
    pub fn is_settled(&self, target: f64) -> bool {
        (self.value - target).abs() < 1e-3 && self.velocity.abs() < 1e-3
    }
}

impl Spring {
    /// Advance `state` toward `target` by `dt` seconds (unit mass,
    /// semi-implicit Euler).
    pub fn step(&self, state: SpringState, target: f64, dt: f64) -> SpringState {
        let force = self.stiffness * (target - state.value) - self.damping * state.velocity;
        let velocity = state.velocity + force * dt;
        SpringState {
            value: state.value + velocity * dt,
            velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_directions() {
        assert_eq!(
            parallax_offset(100.0, 0.5, Direction::Up),
            Offset { x: 0.0, y: -50.0 }
        );
        assert_eq!(
            parallax_offset(100.0, 0.5, Direction::Down),
            Offset { x: 0.0, y: 50.0 }
        );
        assert_eq!(
            parallax_offset(100.0, 0.3, Direction::Left).y,
            0.0
        );
        assert_eq!(
            parallax_offset(200.0, 0.25, Direction::Right),
            Offset { x: 50.0, y: 0.0 }
        );
    }

    #[test]
    fn test_reading_progress_clamped() {
        assert_eq!(reading_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(reading_progress(1500.0, 2000.0, 1000.0), 100.0);
        assert_eq!(reading_progress(-20.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_reading_progress_short_page() {
        assert_eq!(reading_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(reading_progress(10.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(0.0, 0.8, 1.2), 0.8);
        assert_eq!(map_range(1.0, 0.0, 360.0), 360.0);
        assert_eq!(map_range(0.5, 0.0, 360.0), 180.0);
        assert_eq!(map_range(2.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_magnetic_offset_area() {
        let near = magnetic_offset((110.0, 100.0), (100.0, 100.0), 0.3, 100.0);
        assert!((near.x - 3.0).abs() < 1e-9);
        assert_eq!(near.y, 0.0);

        let far = magnetic_offset((1000.0, 100.0), (100.0, 100.0), 0.3, 100.0);
        assert_eq!(far, Offset::ZERO);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let spring = Spring::default();
        let mut state = SpringState::default();
        assert!(!state.is_settled(1.0));
        assert!(state.is_settled(0.0));
        for _ in 0..600 {
            state = spring.step(state, 1.0, 1.0 / 60.0);
        }
        assert!((state.value - 1.0).abs() < 1e-3, "value was {}", state.value);
        assert!(state.velocity.abs() < 1e-3);
        assert!(state.is_settled(1.0));

        let moving = SpringState {
            value: 1.0,
            velocity: 0.5,
        };
        assert!(!moving.is_settled(1.0));
    }

    #[test]
    fn test_translate_css() {
        assert_eq!(
            Offset { x: 1.5, y: -2.0 }.translate(),
            "translate(1.5px, -2px)"
        );
    }
}
