//! Brick Breaker entry point
//!
//! Wasm builds wire the menu, input handlers, tick timer, and modal
//! continuations around the simulation. Native builds run a headless
//! autoplay demo of the same core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::consts::*;
    use brick_breaker::renderer::CanvasRenderer;
    use brick_breaker::sim::{Difficulty, GameEvent, GameState, TickInput, tick};
    use brick_breaker::ui::{self, ModalRequest};

    /// Everything the browser-side handlers share
    struct Game {
        state: GameState,
        input: TickInput,
        renderer: CanvasRenderer,
        /// Handle of the running interval timer, if any. Starting a new
        /// loop always cancels this first so tick streams never overlap.
        interval: Option<i32>,
        /// Difficulty picked in the menu, applied on start
        difficulty: Difficulty,
    }

    impl Game {
        fn new(renderer: CanvasRenderer) -> Self {
            let seed = js_sys::Date::now() as u64;
            Self {
                state: GameState::new(Difficulty::Easy, seed),
                input: TickInput::default(),
                renderer,
                interval: None,
                difficulty: Difficulty::Easy,
            }
        }

        /// Begin a fresh run with the menu's difficulty selection
        fn start_run(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.state = GameState::new(self.difficulty, seed);
            self.input = TickInput::default();
            log::info!(
                "new {} run with seed {}",
                self.difficulty.as_str(),
                seed
            );
        }
    }

    /// Cancel the tick timer if one is running
    fn stop_loop(game: &Rc<RefCell<Game>>) {
        if let Some(handle) = game.borrow_mut().interval.take() {
            web_sys::window()
                .expect("no window")
                .clear_interval_with_handle(handle);
        }
    }

    /// Start the fixed-interval tick timer. Idempotent: any running
    /// timer is cancelled first.
    fn start_loop(game: Rc<RefCell<Game>>) {
        stop_loop(&game);

        let closure = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || run_tick(&game))
        };
        let handle = web_sys::window()
            .expect("no window")
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS,
            )
            .expect("failed to set interval");
        closure.forget();
        game.borrow_mut().interval = Some(handle);
    }

    /// One timer firing: advance the sim, draw, then react to events
    fn run_tick(game: &Rc<RefCell<Game>>) {
        let events = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            let events = tick(&mut g.state, &g.input);
            // Pointer position is one-shot; held keys persist
            g.input.pointer_x = None;
            if let Err(e) = g.renderer.render(&g.state) {
                log::warn!("render error: {:?}", e);
            }
            events
        };

        if events.iter().any(|e| {
            matches!(
                e,
                GameEvent::BrickDestroyed { .. } | GameEvent::BallDropped
            )
        }) {
            let g = game.borrow();
            ui::update_hud(g.state.score, g.state.lives);
        }

        for event in events {
            match event {
                GameEvent::LevelCleared { level } => {
                    stop_loop(game);
                    let game = game.clone();
                    let request = ModalRequest::level_complete(level);
                    let result = ui::show_modal(&request, move |_confirmed| {
                        game.borrow_mut().state.advance_level();
                        start_loop(game.clone());
                    });
                    if let Err(e) = result {
                        log::error!("failed to show modal: {:?}", e);
                    }
                }
                GameEvent::GameOver { score } => {
                    stop_loop(game);
                    let game = game.clone();
                    let request = ModalRequest::game_over(score);
                    let result = ui::show_modal(&request, move |confirmed| {
                        if confirmed {
                            {
                                let mut g = game.borrow_mut();
                                g.state.reset_game();
                                ui::update_hud(g.state.score, g.state.lives);
                            }
                            start_loop(game.clone());
                        } else {
                            reload_page();
                        }
                    });
                    if let Err(e) = result {
                        log::error!("failed to show modal: {:?}", e);
                    }
                }
                GameEvent::GameWon { score } => {
                    stop_loop(game);
                    let request = ModalRequest::game_won(score);
                    let result = ui::show_modal(&request, move |_confirmed| {
                        reload_page();
                    });
                    if let Err(e) = result {
                        log::error!("failed to show modal: {:?}", e);
                    }
                }
                _ => {}
            }
        }
    }

    fn reload_page() {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let renderer = CanvasRenderer::new(context, "classic");
        let game = Rc::new(RefCell::new(Game::new(renderer)));

        setup_input_handlers(&canvas, game.clone());
        setup_menu(game);

        log::info!("Brick Breaker ready, waiting for menu");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key hold state, latched until keyup
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" => g.input.right_held = true,
                    "ArrowLeft" => g.input.left_held = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" => g.input.right_held = false,
                    "ArrowLeft" => g.input.left_held = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer position relative to the play surface; last write wins
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let relative_x = event.client_x() as f32 - rect.left() as f32;
                if relative_x > 0.0 && relative_x < CANVAS_WIDTH {
                    game.borrow_mut().input.pointer_x = Some(relative_x);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Difficulty buttons, theme select, and the start button
    fn setup_menu(game: Rc<RefCell<Game>>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let id = format!("{}Button", difficulty.as_str());
            if let Some(button) = document.get_element_by_id(&id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().difficulty = difficulty;
                    let document = web_sys::window().unwrap().document().unwrap();
                    if let Some(el) = document.get_element_by_id("startButtonContainer") {
                        let _ = el.class_list().remove_1("d-none");
                    }
                });
                let _ = button
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(button) = document.get_element_by_id("startButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(el) = document.get_element_by_id("menu") {
                    let _ = el.class_list().add_1("d-none");
                }
                if let Some(el) = document.get_element_by_id("gameArea") {
                    let _ = el.class_list().remove_1("d-none");
                }

                // Opaque theme tag, forwarded to the background only
                let theme = document
                    .get_element_by_id("themeSelect")
                    .and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok())
                    .map(|select| select.value())
                    .unwrap_or_else(|| "classic".to_string());

                {
                    let mut g = game.borrow_mut();
                    g.renderer.set_theme(theme);
                    g.start_run();
                    ui::update_hud(g.state.score, g.state.lives);
                }
                start_loop(game.clone());
            });
            let _ =
                button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::sim::{Difficulty, GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Brick Breaker (native) starting headless demo...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB1CC);
    let mut state = GameState::new(Difficulty::Medium, seed);
    log::info!("seed {}, {} bricks", seed, state.bricks.active_count());

    let mut ticks = 0u64;
    'demo: while ticks < 5_000_000 {
        // Trivial autopilot: keep the paddle under the ball
        let input = TickInput {
            pointer_x: Some(state.ball.pos.x),
            ..Default::default()
        };
        for event in tick(&mut state, &input) {
            match event {
                GameEvent::LevelCleared { level } => {
                    log::info!("level cleared, advancing to {}", level);
                    state.advance_level();
                }
                GameEvent::GameOver { score } => {
                    log::info!("game over, score {}", score);
                    break 'demo;
                }
                GameEvent::GameWon { score } => {
                    log::info!("game won, score {}", score);
                    break 'demo;
                }
                _ => {}
            }
        }
        ticks += 1;
    }

    println!(
        "demo finished after {} ticks: score {}, lives {}, level {}",
        ticks, state.score, state.lives, state.level
    );
}
