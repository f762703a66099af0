//! Timer-driven carousel state.

use std::rc::Rc;

use yew::Reducible;

/// Actions a rotating carousel responds to.
pub enum CarouselAction {
    /// Periodic tick: move to the next slide, wrapping at the end.
    Advance,
    /// Direct selection, e.g. from a pagination dot.
    Jump(usize),
}

/// Active index of a `len`-slide carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Advance => (self.index + 1) % self.len,
            CarouselAction::Jump(to) => to.min(self.len - 1),
        };
        Rc::new(Self { index, len: self.len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(state: Rc<CarouselState>) -> Rc<CarouselState> {
        state.reduce(CarouselAction::Advance)
    }

    #[test]
    fn advancing_len_times_returns_to_the_start() {
        let mut state = Rc::new(CarouselState::new(3));
        let start = state.index;
        for _ in 0..3 {
            state = tick(state);
        }
        assert_eq!(state.index, start);
    }

    #[test]
    fn advance_wraps_modulo_len() {
        let state = Rc::new(CarouselState { index: 2, len: 3 });
        assert_eq!(tick(state).index, 0);
    }

    #[test]
    fn jump_selects_directly_and_clamps() {
        let state = Rc::new(CarouselState::new(3));
        let state = state.reduce(CarouselAction::Jump(2));
        assert_eq!(state.index, 2);
        let state = state.reduce(CarouselAction::Jump(9));
        assert_eq!(state.index, 2);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let state = Rc::new(CarouselState::new(0));
        let state = tick(state);
        assert_eq!(state.index, 0);
        let state = state.reduce(CarouselAction::Jump(4));
        assert_eq!(state.index, 0);
    }
}
