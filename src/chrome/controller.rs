//! Frameless window controller
//!
//! Owns the chrome state of one top-level window: the frameless flag, resize
//! border, content margins and the attached title bar. It answers native
//! non-client messages so the OS keeps snap, resize and maximize working
//! without drawing its own title bar.

use log::{debug, info, trace};
use std::sync::Arc;

use crate::config::ChromeConfig;
use crate::error::FramelessResult;
use crate::geometry::{scale_by_ratio, unscale_by_ratio, Margins, Point, Rect};
use crate::platform;

use super::decorations::apply_chrome_mode;
use super::hit_test::{classify, HitTest, HitTestParams};
use super::host::WindowHost;
use super::state::{WindowFlags, WindowStates};
use super::strategy::{ChromeStrategy, NativeEventResult, NativeMessage, PowerEvent, RawMessage};
use super::title_bar::{TitleBarSlot, TitleBarSurface};

/// Callback run after every observed window-state transition
pub type StateObserver = Box<dyn FnMut(WindowStates)>;

/// Platform-neutral outcome of handling a `NativeMessage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Report an empty non-client area
    ZeroNonClient,
    /// Report this hit-test classification
    Hit(HitTest),
    /// Leave the message to default handling
    PassThrough,
}

/// A top-level window whose native chrome is replaced by the application's.
pub struct FramelessWindow<H: WindowHost> {
    host: H,
    strategy: Box<dyn ChromeStrategy>,
    frameless: bool,
    /// Physical pixels once frameless setup has run
    resize_area_width: i32,
    margin: i32,
    margin_on_maximized: i32,
    extra_top_margin: i32,
    movable: bool,
    resizable: bool,
    default_flags: WindowFlags,
    title_bar: TitleBarSlot,
    /// Physical pixels
    title_bar_height: i32,
    applied_margins: Margins,
    state: WindowStates,
    shown_once: bool,
    observers: Vec<StateObserver>,
}

impl<H: WindowHost> FramelessWindow<H> {
    /// Wrap `host`, stripping its native frame when `frameless` is set.
    pub fn new(
        frameless: bool,
        host: H,
        config: &ChromeConfig,
        strategy: Box<dyn ChromeStrategy>,
    ) -> FramelessResult<Self> {
        let default_flags = host.window_flags();

        let mut window = Self {
            host,
            strategy,
            frameless,
            resize_area_width: config.resize_area_width,
            margin: config.margin,
            margin_on_maximized: config.margin_on_maximized,
            extra_top_margin: config.extra_top_margin,
            movable: config.movable,
            resizable: config.resizable,
            default_flags,
            title_bar: TitleBarSlot::Unset,
            title_bar_height: 0,
            applied_margins: Margins::ZERO,
            state: WindowStates::NORMAL,
            shown_once: false,
            observers: Vec::new(),
        };

        if frameless {
            window.setup_frameless()?;
        }

        Ok(window)
    }

    /// Build from `config`, using its `frameless` setting and the platform's strategy
    pub fn from_config(host: H, config: &ChromeConfig) -> FramelessResult<Self> {
        Self::new(config.frameless, host, config, platform::default_strategy())
    }

    /// Default settings and the platform's strategy
    pub fn with_defaults(frameless: bool, host: H) -> FramelessResult<Self> {
        Self::new(frameless, host, &ChromeConfig::default(), platform::default_strategy())
    }

    fn setup_frameless(&mut self) -> FramelessResult<()> {
        let ratio = self.host.device_pixel_ratio();
        self.resize_area_width = scale_by_ratio(self.resize_area_width, ratio);

        let mode = apply_chrome_mode(true, self.strategy.platform(), self.default_flags);
        self.host.set_window_flags(mode.flags);
        if !mode.native.is_empty() {
            self.strategy
                .apply_native_style(self.host.native_handle(), mode.native)?;
        }

        info!(
            "Frameless chrome enabled (strategy={}, resize border={}px, native={:?})",
            self.strategy.name(),
            self.resize_area_width,
            mode.native
        );
        Ok(())
    }

    pub fn is_frameless(&self) -> bool {
        self.frameless
    }

    /// Call whenever the window becomes visible
    pub fn shown(&mut self) {
        if self.frameless && !self.shown_once {
            debug!("First show, forcing a full redraw");
            self.host.force_redraw();
        }
        self.shown_once = true;
    }

    /// Attach the application's title bar.
    ///
    /// # Panics
    ///
    /// If the window is not frameless, or a title bar is already attached.
    pub fn set_title_bar(&mut self, surface: Arc<dyn TitleBarSurface>) {
        assert!(
            self.frameless,
            "set_title_bar: a title bar can only be attached to a frameless window"
        );
        if let Err(e) = self.title_bar.set(surface) {
            panic!("set_title_bar: {}", e);
        }

        self.recompute_title_bar_height();
        info!("Title bar attached, caption height {}px", self.title_bar_height);
    }

    pub fn title_bar(&self) -> Option<&Arc<dyn TitleBarSurface>> {
        self.title_bar.get()
    }

    /// Handle a raw platform message. `PassThrough` means the caller runs its
    /// default window procedure and returns that result unchanged.
    pub fn native_event(&mut self, raw: &RawMessage) -> NativeEventResult {
        if !self.frameless {
            return NativeEventResult::PassThrough;
        }

        let Some(message) = self.strategy.decode(raw) else {
            return NativeEventResult::PassThrough;
        };

        match self.handle_message(&message) {
            Disposition::ZeroNonClient => NativeEventResult::Handled(0),
            Disposition::Hit(hit) => NativeEventResult::Handled(self.strategy.hit_code(hit)),
            Disposition::PassThrough => NativeEventResult::PassThrough,
        }
    }

    /// Handle an already decoded message
    pub fn handle_message(&mut self, message: &NativeMessage) -> Disposition {
        if !self.frameless {
            return Disposition::PassThrough;
        }

        match *message {
            NativeMessage::NcCalcSize => Disposition::ZeroNonClient,
            NativeMessage::NcHitTest { cursor, window } => match self.hit_test(cursor, window) {
                Some(hit) => Disposition::Hit(hit),
                None => Disposition::PassThrough,
            },
            NativeMessage::PowerBroadcast(PowerEvent::Suspend) => {
                // Some frameless windows render garbage after sleep unless minimized first.
                info!("System suspending, minimizing window");
                self.host.show_minimized();
                Disposition::PassThrough
            }
            NativeMessage::PowerBroadcast(PowerEvent::ResumeAutomatic) => {
                info!("System resumed, restoring window");
                self.host.show_normal();
                Disposition::PassThrough
            }
            NativeMessage::PowerBroadcast(PowerEvent::Other(_)) => Disposition::PassThrough,
        }
    }

    /// Classify the screen point `cursor` against the window at `window`.
    pub fn hit_test(&self, cursor: Point, window: Rect) -> Option<HitTest> {
        if !self.frameless {
            return None;
        }

        // Window-relative physical pixels; client width/height disagree with
        // the window rect under DPI scaling.
        let pos = cursor.relative_to(window.origin());
        let title_bar = self.title_bar.get();
        let params = HitTestParams {
            border: self.resize_area_width,
            resizable: self.resizable,
            movable: self.movable,
            caption_height: title_bar.map(|_| self.title_bar_height),
        };

        let ratio = self.host.device_pixel_ratio();
        let content_origin = self.applied_margins.content_origin();
        let hit = classify(pos, window.size(), &params, |p| {
            title_bar.is_some_and(|bar| {
                let logical = Point::new(unscale_by_ratio(p.x, ratio), unscale_by_ratio(p.y, ratio));
                bar.is_interactive_at(logical.relative_to(content_origin))
            })
        });

        trace!("Hit-test {:?} in {:?} -> {:?}", pos, window.size(), hit);
        hit
    }

    /// Report the window's new state. Returns whether it differed from the last one.
    pub fn window_state_changed(&mut self, new_state: WindowStates) -> bool {
        let old_state = self.state;
        if old_state == new_state {
            return false;
        }
        self.state = new_state;
        debug!("Window state {:?} -> {:?}", old_state, new_state);

        if self.frameless {
            self.update_margins();
        }

        for observer in self.observers.iter_mut() {
            observer(new_state);
        }
        true
    }

    /// Register a callback for window-state transitions
    pub fn on_window_state_changed<F>(&mut self, observer: F)
    where
        F: FnMut(WindowStates) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn update_margins(&mut self) {
        let margins = if self.state.is_maximized_windowed() {
            Margins::uniform_with_top(self.margin_on_maximized, self.extra_top_margin)
        } else {
            Margins::uniform_with_top(self.margin, self.extra_top_margin)
        };

        self.host.set_contents_margins(margins);
        self.applied_margins = margins;
        self.recompute_title_bar_height();
    }

    fn recompute_title_bar_height(&mut self) {
        let ratio = self.host.device_pixel_ratio();
        self.title_bar_height = match self.title_bar.get() {
            Some(bar) => scale_by_ratio(bar.height().saturating_add(self.applied_margins.top), ratio),
            None => 0,
        };
    }

    /// Caption band height in physical pixels
    pub fn title_bar_height(&self) -> i32 {
        self.title_bar_height
    }

    /// Content margins last pushed to the host
    pub fn content_margins(&self) -> Margins {
        self.applied_margins
    }

    /// Resize border in physical pixels (logical when not frameless)
    pub fn resize_area_width(&self) -> i32 {
        self.resize_area_width
    }

    /// Decoration flags the host had before the frame was stripped
    pub fn default_flags(&self) -> WindowFlags {
        self.default_flags
    }

    pub fn window_state(&self) -> WindowStates {
        self.state
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
