//! Button collections - one interaction layer ("screen") of buttons
//!
//! Insertion order is z-order: the last button added sits on top. Updates
//! run topmost-first so an upper button can claim the pointer before lower
//! buttons see it; drawing runs index-ascending so upper buttons paint
//! over lower ones.

use std::ops::{Index, IndexMut};

use crate::backend::MenuRenderBackend;
use crate::config::MenuConfig;
use crate::foundation::math::Vec2i;
use crate::input::PointerSnapshot;
use crate::widgets::button::{Button, DEFAULT_CLICK_HOLD_FRAMES};

/// An ordered set of buttons sharing one pointer and one z-order
///
/// `A` is the argument payload type of the contained buttons' click
/// actions. A collection holds its buttons by value; removing one hands
/// it back to the caller.
pub struct ButtonCollection<A = ()> {
    buttons: Vec<Button<A>>,

    /// Translation applied to every button's hit-box and draw position
    /// this frame; mutable between frames (e.g. for scrolling panels)
    pub offset: Vec2i,

    click_hold_frames: u32,
    current: PointerSnapshot,
    previous: PointerSnapshot,
}

impl<A> ButtonCollection<A> {
    /// Create an empty collection with the default click cool-down
    pub fn new() -> Self {
        Self::with_click_hold_frames(DEFAULT_CLICK_HOLD_FRAMES)
    }

    /// Create an empty collection with an explicit click cool-down
    ///
    /// `click_hold_frames` is how long a button stays visibly pressed
    /// after release; it propagates to every button added afterwards.
    pub fn with_click_hold_frames(click_hold_frames: u32) -> Self {
        Self {
            buttons: Vec::new(),
            offset: Vec2i::zeros(),
            click_hold_frames,
            current: PointerSnapshot::default(),
            previous: PointerSnapshot::default(),
        }
    }

    /// Create an empty collection configured from a [`MenuConfig`]
    pub fn from_config(config: &MenuConfig) -> Self {
        Self::with_click_hold_frames(config.click_hold_frames)
    }

    /// Number of buttons in the collection
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Is the collection empty?
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Add a button on top of the existing ones
    ///
    /// The collection's click cool-down is stamped onto the button at add
    /// time only; changing the collection's setting later does not reach
    /// buttons already added.
    pub fn add(&mut self, mut button: Button<A>) {
        button.set_click_hold_frames(self.click_hold_frames);
        self.buttons.push(button);
    }

    /// Remove and return the button at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; misuse surfaces immediately
    /// instead of being clamped.
    pub fn remove(&mut self, index: usize) -> Button<A> {
        self.buttons.remove(index)
    }

    /// Remove every button
    pub fn clear(&mut self) {
        self.buttons.clear();
    }

    /// The button at `index`, bottom-most first
    pub fn get(&self, index: usize) -> Option<&Button<A>> {
        self.buttons.get(index)
    }

    /// Mutable access to the button at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Button<A>> {
        self.buttons.get_mut(index)
    }

    /// Iterate the buttons in z-order, bottom-most first
    pub fn iter(&self) -> std::slice::Iter<'_, Button<A>> {
        self.buttons.iter()
    }

    /// Iterate the buttons mutably, bottom-most first
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Button<A>> {
        self.buttons.iter_mut()
    }

    /// The pointer snapshot driving the current frame
    pub fn pointer(&self) -> &PointerSnapshot {
        &self.current
    }

    /// The pointer snapshot from the previous frame
    ///
    /// Retained for hosts doing their own press/release edge detection;
    /// the widget state machines only consume the current snapshot.
    pub fn previous_pointer(&self) -> &PointerSnapshot {
        &self.previous
    }

    /// Advance every button by one frame against the given snapshot
    ///
    /// Buttons update in reverse order so upper buttons block lower
    /// buttons: as soon as one claims the pointer, all buttons beneath it
    /// are forced through the preempted transition. Every button still
    /// updates, so appearances stay consistent.
    pub fn update(&mut self, pointer: PointerSnapshot) {
        self.previous = std::mem::replace(&mut self.current, pointer);

        let mut blocked = false;
        for button in self.buttons.iter_mut().rev() {
            if button.update(&self.current, blocked, self.offset) {
                blocked = true;
            }
        }
    }

    /// Draw every visible button, bottom-most first
    ///
    /// Draw order only affects visual overlap; input arbitration happens
    /// entirely in [`update`](Self::update).
    pub fn draw<B: MenuRenderBackend>(&self, backend: &mut B) {
        log::trace!("drawing menu layer: {} buttons", self.buttons.len());
        for button in &self.buttons {
            button.draw(backend, self.offset);
        }
    }

    /// Enable every button; takes effect on the next update
    pub fn enable_all(&mut self) {
        self.set_enabled_all(true);
    }

    /// Disable every button; takes effect on the next update
    pub fn disable_all(&mut self) {
        self.set_enabled_all(false);
    }

    /// Show or hide every button; takes effect on the next update
    pub fn set_visible_all(&mut self, visible: bool) {
        for button in &mut self.buttons {
            button.set_visible(visible);
        }
    }

    /// Flip every button's enabled flag; takes effect on the next update
    pub fn toggle_enabled_all(&mut self) {
        for button in &mut self.buttons {
            button.set_enabled(!button.enabled());
        }
    }

    /// Flip every button's visible flag; takes effect on the next update
    pub fn toggle_visible_all(&mut self) {
        for button in &mut self.buttons {
            button.set_visible(!button.visible());
        }
    }

    fn set_enabled_all(&mut self, enabled: bool) {
        for button in &mut self.buttons {
            button.set_enabled(enabled);
        }
    }
}

impl<A> Default for ButtonCollection<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Index<usize> for ButtonCollection<A> {
    type Output = Button<A>;

    /// # Panics
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &Self::Output {
        &self.buttons[index]
    }
}

impl<A> IndexMut<usize> for ButtonCollection<A> {
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buttons[index]
    }
}

impl<'a, A> IntoIterator for &'a ButtonCollection<A> {
    type Item = &'a Button<A>;
    type IntoIter = std::slice::Iter<'a, Button<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A> IntoIterator for &'a mut ButtonCollection<A> {
    type Item = &'a mut Button<A>;
    type IntoIter = std::slice::IterMut<'a, Button<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Rect;
    use crate::rendering::{DrawQuad, TextureId};
    use crate::widgets::button::{ButtonState, ButtonVisuals, StatePalette};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Recorder(Vec<DrawQuad>);

    impl MenuRenderBackend for Recorder {
        fn draw_quad(&mut self, quad: DrawQuad) {
            self.0.push(quad);
        }
    }

    fn counting_button(bounds: Rect, texture: u32) -> (Button<()>, Rc<Cell<u32>>) {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let button = Button::new(
            bounds,
            ButtonVisuals::tinted(TextureId(texture), StatePalette::default()),
            Some(Box::new(move |_: &()| counter.set(counter.get() + 1))),
            (),
        );
        (button, clicks)
    }

    fn run_click(menu: &mut ButtonCollection<()>, x: i32, y: i32) {
        menu.update(PointerSnapshot::released(x, y));
        menu.update(PointerSnapshot::pressed(x, y));
        menu.update(PointerSnapshot::released(x, y));
        menu.update(PointerSnapshot::released(x, y));
        menu.update(PointerSnapshot::released(x, y));
    }

    #[test]
    fn test_topmost_button_blocks_lower() {
        let mut menu = ButtonCollection::new();
        let (bottom, bottom_clicks) = counting_button(Rect::new(0, 0, 100, 100), 0);
        let (top, top_clicks) = counting_button(Rect::new(50, 50, 100, 100), 1);
        menu.add(bottom);
        menu.add(top);

        // Pointer in the overlap region: only the top button reacts, the
        // bottom one is forced through the preempted transition.
        menu.update(PointerSnapshot::released(75, 75));
        assert_eq!(menu[1].state(), ButtonState::Hovering);
        assert_eq!(menu[0].state(), ButtonState::Active);

        run_click(&mut menu, 75, 75);
        assert_eq!(top_clicks.get(), 1);
        assert_eq!(bottom_clicks.get(), 0);
    }

    #[test]
    fn test_lower_button_reacts_outside_overlap() {
        let mut menu = ButtonCollection::new();
        let (bottom, bottom_clicks) = counting_button(Rect::new(0, 0, 100, 100), 0);
        let (top, _) = counting_button(Rect::new(50, 50, 100, 100), 1);
        menu.add(bottom);
        menu.add(top);

        // Pointer over the bottom button only: nothing above claims it.
        run_click(&mut menu, 25, 25);
        assert_eq!(bottom_clicks.get(), 1);
    }

    #[test]
    fn test_hold_frames_propagate_at_add_time() {
        let mut menu = ButtonCollection::with_click_hold_frames(4);
        let (button, clicks) = counting_button(Rect::new(0, 0, 100, 100), 0);
        menu.add(button);

        menu.update(PointerSnapshot::released(50, 50));
        menu.update(PointerSnapshot::pressed(50, 50));
        menu.update(PointerSnapshot::released(50, 50));

        // Three countdown frames pass without a commit...
        for _ in 0..3 {
            menu.update(PointerSnapshot::released(50, 50));
            assert_eq!(clicks.get(), 0);
        }

        // ...and the fourth commits.
        menu.update(PointerSnapshot::released(50, 50));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_offset_shifts_hit_testing() {
        let mut menu = ButtonCollection::new();
        let (button, clicks) = counting_button(Rect::new(0, 0, 100, 100), 0);
        menu.add(button);
        menu.offset = Vec2i::new(200, 200);

        // The pre-offset position no longer hits.
        menu.update(PointerSnapshot::released(50, 50));
        assert_eq!(menu[0].state(), ButtonState::Active);

        // The offset position does.
        run_click(&mut menu, 250, 250);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_draw_runs_index_ascending_with_offset() {
        let mut menu = ButtonCollection::new();
        let (bottom, _) = counting_button(Rect::new(0, 0, 10, 10), 0);
        let (top, _) = counting_button(Rect::new(5, 5, 10, 10), 1);
        menu.add(bottom);
        menu.add(top);
        menu.offset = Vec2i::new(1, 2);

        let mut recorder = Recorder(Vec::new());
        menu.draw(&mut recorder);

        assert_eq!(recorder.0.len(), 2);
        assert_eq!(recorder.0[0].texture, TextureId(0));
        assert_eq!(recorder.0[0].dest, Rect::new(1, 2, 10, 10));
        assert_eq!(recorder.0[1].texture, TextureId(1));
        assert_eq!(recorder.0[1].dest, Rect::new(6, 7, 10, 10));
    }

    #[test]
    fn test_hidden_buttons_are_skipped_in_draw() {
        let mut menu = ButtonCollection::new();
        let (a, _) = counting_button(Rect::new(0, 0, 10, 10), 0);
        let (b, _) = counting_button(Rect::new(20, 0, 10, 10), 1);
        menu.add(a);
        menu.add(b);
        menu[0].set_visible(false);

        let mut recorder = Recorder(Vec::new());
        menu.draw(&mut recorder);

        assert_eq!(recorder.0.len(), 1);
        assert_eq!(recorder.0[0].texture, TextureId(1));
    }

    #[test]
    fn test_bulk_flag_operations() {
        let mut menu = ButtonCollection::new();
        let (a, _) = counting_button(Rect::new(0, 0, 10, 10), 0);
        let (b, _) = counting_button(Rect::new(20, 0, 10, 10), 1);
        menu.add(a);
        menu.add(b);

        menu.disable_all();
        menu.update(PointerSnapshot::released(5, 5));
        assert_eq!(menu[0].state(), ButtonState::Inactive);
        assert_eq!(menu[1].state(), ButtonState::Inactive);

        menu.enable_all();
        menu.update(PointerSnapshot::released(5, 5));
        assert_eq!(menu[0].state(), ButtonState::Hovering);
        assert_eq!(menu[1].state(), ButtonState::Active);

        menu.set_visible_all(false);
        assert!(!menu[0].visible() && !menu[1].visible());

        menu.toggle_visible_all();
        assert!(menu[0].visible() && menu[1].visible());

        menu[0].set_enabled(false);
        menu.toggle_enabled_all();
        assert!(menu[0].enabled());
        assert!(!menu[1].enabled());
    }

    #[test]
    fn test_element_management() {
        let mut menu = ButtonCollection::new();
        assert!(menu.is_empty());

        let (a, _) = counting_button(Rect::new(0, 0, 10, 10), 0);
        let (b, _) = counting_button(Rect::new(20, 0, 10, 10), 1);
        menu.add(a);
        menu.add(b);
        assert_eq!(menu.len(), 2);

        // Removal hands the button back instead of destroying it.
        let removed = menu.remove(0);
        assert_eq!(removed.bounds(), Rect::new(0, 0, 10, 10));
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].bounds(), Rect::new(20, 0, 10, 10));

        assert!(menu.get(5).is_none());

        menu.clear();
        assert!(menu.is_empty());
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_removal_panics() {
        let mut menu: ButtonCollection<()> = ButtonCollection::new();
        menu.remove(0);
    }

    #[test]
    fn test_pointer_snapshots_rotate() {
        let mut menu: ButtonCollection<()> = ButtonCollection::new();

        menu.update(PointerSnapshot::pressed(10, 10));
        menu.update(PointerSnapshot::released(20, 20));

        assert!(menu.pointer().is_released());
        assert!(menu.previous_pointer().is_pressed());
        assert_eq!(menu.previous_pointer().position.x, 10);
    }

    #[test]
    fn test_blocked_chain_stops_at_first_claim() {
        let mut menu = ButtonCollection::new();
        let (bottom, _) = counting_button(Rect::new(0, 0, 100, 100), 0);
        let (middle, _) = counting_button(Rect::new(0, 0, 100, 100), 1);
        let (top, _) = counting_button(Rect::new(200, 200, 10, 10), 2);
        menu.add(bottom);
        menu.add(middle);
        menu.add(top);

        // Top button misses the pointer, so the middle one claims it and
        // the bottom one is blocked.
        menu.update(PointerSnapshot::released(50, 50));
        assert_eq!(menu[2].state(), ButtonState::Active);
        assert_eq!(menu[1].state(), ButtonState::Hovering);
        assert_eq!(menu[0].state(), ButtonState::Active);
    }
}
