//! Application state (pure core).
//!
//! Owns the current page, the per-page widget state, and the drawer.
//! Strip state has page lifetime: it is created when its page is
//! entered and discarded when the page is left, so returning to a page
//! starts its strips from the first card again.

use crate::model::{KeyAction, Profile, ThemeMode};
use crate::state::category::CategoryState;
use crate::state::drawer::DrawerState;
use crate::state::pager::Pager;
use crate::view::constants::{CARD_GAP, CARD_WIDTH, REMEASURE_DELAY_TICKS, SLIDE_TICKS};
use crate::view_state::{strip_overflows, CellOffset, Remeasure, Slide, StripLayout};
use ratatui::layout::Rect;

/// Which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Hero headline and skill categories.
    #[default]
    Home,
    /// About card strip.
    About,
    /// Collapsible project categories.
    Projects,
    /// Shown for an unrecognized `--page` value.
    NotFound,
}

impl Page {
    /// Resolve a page name from config/CLI. Unknown names land on the
    /// not-found page.
    pub fn from_name(name: &str) -> Self {
        match name {
            "home" => Page::Home,
            "about" => Page::About,
            "projects" => Page::Projects,
            _ => Page::NotFound,
        }
    }

    /// Title shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::NotFound => "404",
        }
    }

    /// Next page in the Tab cycle. The not-found page cycles home.
    pub fn next(&self) -> Self {
        match self {
            Page::Home => Page::About,
            Page::About => Page::Projects,
            Page::Projects => Page::Home,
            Page::NotFound => Page::Home,
        }
    }
}

/// Section of the home page currently in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeSection {
    /// Headline, tagline, and the blinking arrow.
    #[default]
    Hero,
    /// Skill category columns.
    Skills,
}

/// Outcome of one timer tick over the strip states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// A slide transition moved this tick; the frame needs redrawing.
    pub animating: bool,
    /// A deferred re-measure fired; overflow should be recomputed.
    pub measure_due: bool,
}

/// Pagination, slide, and overflow state for one card strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripState {
    layout: StripLayout,
    pager: Pager,
    slide: Slide,
    overflow: bool,
    remeasure: Remeasure,
}

impl StripState {
    /// Fresh strip over `count` cards, at rest on the first card, with
    /// an initial measurement scheduled for the first tick.
    pub fn new(count: usize) -> Self {
        let layout = StripLayout::new(CARD_WIDTH, CARD_GAP);
        let mut remeasure = Remeasure::idle();
        remeasure.schedule(0);
        Self {
            layout,
            pager: Pager::new(count),
            slide: Slide::settled_at(layout.target_offset(0), SLIDE_TICKS),
            overflow: false,
            remeasure,
        }
    }

    /// Card metrics for this strip.
    pub fn layout(&self) -> StripLayout {
        self.layout
    }

    /// Pagination position.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Current strip offset (mid-slide values included).
    pub fn offset(&self) -> CellOffset {
        self.slide.current()
    }

    /// Whether the strip content exceeds its area, per the last
    /// measurement.
    pub fn overflow(&self) -> bool {
        self.overflow
    }

    /// Whether the back affordance should render.
    pub fn show_prev(&self) -> bool {
        self.overflow && !self.pager.at_start()
    }

    /// Whether the forward affordance should render.
    pub fn show_next(&self) -> bool {
        self.overflow && !self.pager.at_end()
    }

    /// Apply a pagination action, retargeting the slide and deferring a
    /// re-measure until the transition has settled.
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Advance => self.pager.advance(),
            KeyAction::Retreat => self.pager.retreat(),
            KeyAction::FirstCard => self.pager.first(),
            KeyAction::LastCard => self.pager.last(),
            _ => return,
        }
        self.slide.retarget(self.layout.target_offset(self.pager.index()));
        self.remeasure.schedule(REMEASURE_DELAY_TICKS);
    }

    /// Advance animation and measurement countdowns by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        TickOutcome {
            animating: self.slide.tick(),
            measure_due: self.remeasure.tick(),
        }
    }

    /// Recompute the overflow flag from the strip's rendered area.
    pub fn measure(&mut self, area: Rect) {
        let count = self.pager.count();
        let offset = self.slide.current();
        self.overflow = strip_overflows(
            self.layout.first_leading_edge(area, count, offset),
            self.layout.last_trailing_edge(area, count, offset),
            area.left() as i32,
            area.right() as i32,
        );
    }
}

/// Top-level application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Site content.
    pub profile: Profile,
    /// Page currently shown.
    pub page: Page,
    /// Active palette.
    pub theme: ThemeMode,
    /// Help overlay visibility.
    pub help_visible: bool,
    /// Section of the home page in view.
    pub home_section: HomeSection,
    /// Strip state for the about page.
    pub about_strip: StripState,
    /// One strip per project category.
    pub project_strips: Vec<StripState>,
    /// Fold/focus state for the project categories.
    pub categories: CategoryState,
    /// The card drawer.
    pub drawer: DrawerState,
    /// Blink phase for the home-page arrow.
    pub blink_on: bool,
}

impl AppState {
    /// Build state for a profile, starting on `page` with `theme`.
    pub fn new(profile: Profile, theme: ThemeMode, page: Page) -> Self {
        let about_strip = StripState::new(profile.about.len());
        let project_strips = profile
            .projects
            .iter()
            .map(|category| StripState::new(category.cards.len()))
            .collect::<Vec<_>>();
        let categories = CategoryState::new(profile.projects.len());

        Self {
            profile,
            page,
            theme,
            help_visible: false,
            home_section: HomeSection::default(),
            about_strip,
            project_strips,
            categories,
            drawer: DrawerState::new(),
            blink_on: true,
        }
    }

    /// Switch pages, remounting the target page's widgets.
    ///
    /// Strip, section, and fold state belong to a page instance; the
    /// new page starts fresh and the drawer closes.
    pub fn go_to(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        self.page = page;
        self.drawer.close();
        match page {
            Page::Home => self.home_section = HomeSection::default(),
            Page::About => self.about_strip = StripState::new(self.profile.about.len()),
            Page::Projects => {
                self.project_strips = self
                    .profile
                    .projects
                    .iter()
                    .map(|category| StripState::new(category.cards.len()))
                    .collect();
                self.categories = CategoryState::new(self.profile.projects.len());
            }
            Page::NotFound => {}
        }
    }

    /// The strip the pagination actions currently address, if any.
    ///
    /// On the projects page this is the focused category's strip, and
    /// only while that category is open.
    pub fn active_strip(&self) -> Option<&StripState> {
        match self.page {
            Page::About => Some(&self.about_strip),
            Page::Projects if self.categories.focused_is_open() => {
                self.project_strips.get(self.categories.focused())
            }
            _ => None,
        }
    }

    /// Mutable access to the active strip.
    pub fn active_strip_mut(&mut self) -> Option<&mut StripState> {
        match self.page {
            Page::About => Some(&mut self.about_strip),
            Page::Projects if self.categories.focused_is_open() => {
                self.project_strips.get_mut(self.categories.focused())
            }
            _ => None,
        }
    }

    /// Cards belonging to the active strip.
    pub fn active_cards(&self) -> &[crate::model::Card] {
        match self.page {
            Page::About => &self.profile.about,
            Page::Projects if self.categories.focused_is_open() => {
                self.profile.project_cards(self.categories.focused())
            }
            _ => &[],
        }
    }

    /// Advance all strip animations and measurement countdowns.
    pub fn tick_strips(&mut self) -> TickOutcome {
        let mut outcome = self.about_strip.tick();
        for strip in &mut self.project_strips {
            let t = strip.tick();
            outcome.animating |= t.animating;
            outcome.measure_due |= t.measure_due;
        }
        outcome
    }

    /// Flip the arrow blink phase.
    pub fn toggle_blink(&mut self) {
        self.blink_on = !self.blink_on;
    }
}
