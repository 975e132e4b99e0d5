//! Visible-range tracking for the horizontally scrolling day carousel.
//!
//! Every event (mount, scroll, resize, visibility change) funnels into one
//! recomputation over live geometry. Nothing is updated incrementally and no
//! geometry is cached between events.

use serde::{Deserialize, Serialize};

use crate::ScrollDirection;

/// Left and right edges of an element in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HorizontalBounds {
    pub left: f64,
    pub right: f64,
}

impl HorizontalBounds {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// True when `inner` lies entirely within these bounds (edges inclusive)
    pub fn contains(&self, inner: &HorizontalBounds) -> bool {
        inner.left >= self.left && inner.right <= self.right
    }
}

/// Scroll extent of the carousel container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset
    pub scroll_left: f64,
    /// Visible width of the container
    pub client_width: f64,
    /// Total scrollable width of the content
    pub scroll_width: f64,
}

impl ScrollMetrics {
    pub fn is_at_start(&self) -> bool {
        self.scroll_left == 0.0
    }

    /// Reaching or overshooting the end counts, so fractional overflow is tolerated
    pub fn is_at_end(&self) -> bool {
        self.scroll_left + self.client_width >= self.scroll_width
    }
}

/// Derived carousel facts, replaced wholesale on every recomputation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselViewportState {
    pub is_at_start: bool,
    pub is_at_end: bool,
    /// Highest index of a card lying fully inside the container, if any
    pub last_fully_visible_index: Option<usize>,
}

impl Default for CarouselViewportState {
    /// State for a container that is not mounted yet
    fn default() -> Self {
        recompute(None, std::iter::empty(), ScrollMetrics::default())
    }
}

impl CarouselViewportState {
    pub fn is_prev_disabled(&self) -> bool {
        self.is_at_start
    }

    /// "Next" is disabled when the last card is fully visible OR the scroll
    /// extent is exhausted. Either signal alone is enough; the two can
    /// disagree by a fractional pixel, and a single card wider than the
    /// container is never fully visible at all.
    pub fn is_next_disabled(&self, card_count: usize) -> bool {
        if card_count == 0 {
            return true;
        }
        self.last_fully_visible_index == Some(card_count - 1) || self.is_at_end
    }
}

/// Compute the carousel state from a geometry snapshot.
///
/// `cards` is in left-to-right order; `None` entries are cards with no
/// geometry (not mounted) and never count as fully visible. Without a
/// container no card is fully visible. The scan covers every card and keeps
/// the last qualifying index.
pub fn recompute<I>(
    container: Option<HorizontalBounds>,
    cards: I,
    metrics: ScrollMetrics,
) -> CarouselViewportState
where
    I: IntoIterator<Item = Option<HorizontalBounds>>,
{
    let mut last_fully_visible_index = None;

    if let Some(container) = container {
        for (index, card) in cards.into_iter().enumerate() {
            if let Some(card) = card {
                if container.contains(&card) {
                    last_fully_visible_index = Some(index);
                }
            }
        }
    }

    CarouselViewportState {
        is_at_start: metrics.is_at_start(),
        is_at_end: metrics.is_at_end(),
        last_fully_visible_index,
    }
}

/// Scroll offset one card away from `scroll_left`. Not clamped; the
/// platform clamps at the real boundaries.
pub fn scroll_target(scroll_left: f64, card_width: f64, direction: ScrollDirection) -> f64 {
    scroll_left + direction.sign() * card_width
}

/// Read access to live layout, plus the one scroll command the carousel issues
pub trait CarouselLayout {
    type Handle;

    /// Container edges, `None` while the container is not mounted
    fn container_bounds(&self) -> Option<HorizontalBounds>;

    /// Card edges, `None` when the card has no layout
    fn card_bounds(&self, card: &Self::Handle) -> Option<HorizontalBounds>;

    /// Degenerate zero metrics while the container is not mounted
    fn scroll_metrics(&self) -> ScrollMetrics;

    fn card_width(&self, card: &Self::Handle) -> f64;

    /// Animated scroll of the container to an absolute offset
    fn smooth_scroll_to(&self, left: f64);
}

/// Visibility-change notifications for individual cards
pub trait VisibilityObserver<H> {
    fn observe(&self, card: &H);
    fn unobserve(&self, card: &H);
}

#[derive(Debug)]
struct CardSlot<H> {
    key: String,
    handle: Option<H>,
}

/// Owns the registry of rendered card handles and the last computed state.
///
/// Slots are indexed by card position and tagged with the card's day key.
/// Handles arrive as cards mount and leave as they unmount or the card list
/// is replaced.
#[derive(Debug)]
pub struct ViewportTracker<H> {
    cards: Vec<CardSlot<H>>,
    state: CarouselViewportState,
}

impl<H> Default for ViewportTracker<H> {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            state: CarouselViewportState::default(),
        }
    }
}

impl<H> ViewportTracker<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CarouselViewportState {
        self.state
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn mounted_count(&self) -> usize {
        self.cards.iter().filter(|slot| slot.handle.is_some()).count()
    }

    pub fn is_prev_disabled(&self) -> bool {
        self.state.is_prev_disabled()
    }

    pub fn is_next_disabled(&self) -> bool {
        self.state.is_next_disabled(self.cards.len())
    }

    /// Replace the card list. Observation of every previously registered
    /// handle is torn down first; the new slots start unmounted.
    pub fn set_cards<K, O>(&mut self, keys: &[K], observer: &O)
    where
        K: AsRef<str>,
        O: VisibilityObserver<H> + ?Sized,
    {
        self.teardown(observer);
        self.cards = keys
            .iter()
            .map(|key| CardSlot {
                key: key.as_ref().to_string(),
                handle: None,
            })
            .collect();
    }

    /// Register the rendered element for the card at `index` and start
    /// observing it. Rejected (false) when `index` is outside the card list
    /// or the slot there belongs to a different day key, i.e. the handle
    /// comes from a stale render.
    pub fn mount_card<O>(&mut self, index: usize, key: &str, handle: H, observer: &O) -> bool
    where
        O: VisibilityObserver<H> + ?Sized,
    {
        let Some(slot) = self.cards.get_mut(index) else {
            return false;
        };
        if slot.key != key {
            return false;
        }
        if let Some(previous) = slot.handle.take() {
            observer.unobserve(&previous);
        }
        observer.observe(&handle);
        slot.handle = Some(handle);
        true
    }

    /// Re-read geometry for every card and replace the stored state
    pub fn recompute<P>(&mut self, layout: &P) -> CarouselViewportState
    where
        P: CarouselLayout<Handle = H> + ?Sized,
    {
        let cards = self
            .cards
            .iter()
            .map(|slot| slot.handle.as_ref().and_then(|card| layout.card_bounds(card)));
        self.state = recompute(layout.container_bounds(), cards, layout.scroll_metrics());
        self.state
    }

    /// A resize can change which cards are visible without a scroll event,
    /// so every mounted card is re-registered before recomputing.
    pub fn on_resize<P, O>(&mut self, layout: &P, observer: &O) -> CarouselViewportState
    where
        P: CarouselLayout<Handle = H> + ?Sized,
        O: VisibilityObserver<H> + ?Sized,
    {
        for card in self.cards.iter().filter_map(|slot| slot.handle.as_ref()) {
            observer.unobserve(card);
            observer.observe(card);
        }
        self.recompute(layout)
    }

    /// Scroll one card width (measured on the first card) in `direction`.
    ///
    /// Does nothing and returns `None` while the control for `direction` is
    /// disabled. Otherwise fire-and-forget: the stored state only changes when
    /// the resulting scroll event comes back through `recompute`. Returns the
    /// requested offset.
    pub fn scroll_by<P>(&self, direction: ScrollDirection, layout: &P) -> Option<f64>
    where
        P: CarouselLayout<Handle = H> + ?Sized,
    {
        let disabled = match direction {
            ScrollDirection::Prev => self.is_prev_disabled(),
            ScrollDirection::Next => self.is_next_disabled(),
        };
        if disabled {
            return None;
        }

        let card_width = self
            .cards
            .first()
            .and_then(|slot| slot.handle.as_ref())
            .map(|card| layout.card_width(card))
            .unwrap_or(0.0);
        let target = scroll_target(layout.scroll_metrics().scroll_left, card_width, direction);
        layout.smooth_scroll_to(target);
        Some(target)
    }

    /// Stop observing every registered card and drop the handles
    pub fn teardown<O>(&mut self, observer: &O)
    where
        O: VisibilityObserver<H> + ?Sized,
    {
        for slot in self.cards.iter_mut() {
            if let Some(card) = slot.handle.take() {
                observer.unobserve(&card);
            }
        }
    }
}
