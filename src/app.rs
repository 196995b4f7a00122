use macroquad::color::Color;
use macroquad::logging::info;
use macroquad::math::Rect;
use macroquad::window::{clear_background, screen_height, screen_width};

use crate::audio::CuePlayer;
use crate::game::{Game, GridDimensions, Settings, StepEngine};
use crate::input::{InputSubscription, TouchPad};
use crate::render::{MacroquadSurface, Renderer, hud};

const BACKGROUND: Color = Color::new(0.09, 0.09, 0.11, 1.0);
const CANVAS_BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Where everything goes in the window, computed once at mount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub screen: Rect,
    pub header: Rect,
    pub canvas: Rect,
    /// Only on compact screens
    pub pad: Option<Rect>,
    pub grid: GridDimensions,
}

impl Layout {
    pub fn compute(screen_w: f32, screen_h: f32, settings: &Settings) -> Self {
        let screen = Rect::new(0.0, 0.0, screen_w.max(0.0), screen_h.max(0.0));
        let header_h = settings.header_height.min(screen.h);

        let pad_h = if screen.w < settings.compact_width {
            (screen.w * 0.5).min((screen.h - header_h) * 0.35).max(0.0)
        } else {
            0.0
        };

        let container_h = (screen.h - header_h - pad_h).max(0.0);
        let grid = GridDimensions::fit(screen.w, container_h, settings.cell_size);
        let (canvas_w, canvas_h) = grid.canvas_size();

        let canvas = Rect::new(
            (screen.w - canvas_w) * 0.5,
            header_h + (container_h - canvas_h) * 0.5,
            canvas_w,
            canvas_h,
        );
        let header = Rect::new(0.0, 0.0, screen.w, header_h);
        let pad = (pad_h > 0.0).then(|| Rect::new(0.0, header_h + container_h, screen.w, pad_h));

        Self {
            screen,
            header,
            canvas,
            pad,
            grid,
        }
    }
}

/// The mounted game: owns the state machine and all its collaborators
pub struct App {
    layout: Layout,
    game: Game,
    renderer: Renderer,
    surface: MacroquadSurface,
    input: InputSubscription,
    cues: Box<dyn CuePlayer>,
}

impl App {
    /// Size the grid to the current window and subscribe to input.
    pub fn mount(settings: Settings, cues: Box<dyn CuePlayer>) -> Self {
        let layout = Layout::compute(screen_width(), screen_height(), &settings);
        info!(
            "Mounted {}x{} grid ({}px cells) in a {}x{} window",
            layout.grid.cells_x,
            layout.grid.cells_y,
            layout.grid.cell_size,
            layout.screen.w,
            layout.screen.h
        );

        let mut surface = MacroquadSurface::new(CANVAS_BACKGROUND);
        surface.resize(layout.canvas.w, layout.canvas.h);
        surface.place(layout.canvas.x, layout.canvas.y);

        Self {
            game: Game::new(StepEngine::new(layout.grid), &settings),
            renderer: Renderer::new(layout.grid),
            input: InputSubscription::subscribe(layout.pad.map(TouchPad::layout)),
            surface,
            layout,
            cues,
        }
    }

    /// Input, then at most one tick, then a full redraw.
    pub fn frame(&mut self, now: f64) {
        for event in self.input.poll(self.game.phase().is_running()) {
            self.game.handle(event, now);
        }
        self.game.update(now, self.cues.as_mut());
        self.draw();
    }

    fn draw(&mut self) {
        clear_background(BACKGROUND);
        hud::draw_header(self.layout.header, self.game.score());
        self.renderer.paint(self.game.board(), &mut self.surface);
        if let Some(pad) = self.input.pad() {
            hud::draw_pad(pad);
        }
        hud::draw_overlay(self.layout.screen, self.game.phase(), self.game.score());
    }

    pub fn teardown(&mut self) {
        self.input.unsubscribe();
        info!("Unmounted after a final score of {}", self.game.score());
    }
}
