//! Flappy Canvas entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use flappy_canvas::Settings;
    use flappy_canvas::audio::{AudioManager, SoundEffect};
    use flappy_canvas::render::CanvasRenderer;
    use flappy_canvas::sim::{GameEvent, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        audio: AudioManager,
        settings: Settings,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer, audio: AudioManager, settings: Settings) -> Self {
            let state = GameState::new(seed, renderer.width() as f32, renderer.height() as f32);
            Self {
                state,
                renderer,
                audio,
                settings,
                input: TickInput::default(),
            }
        }

        /// Run one animation frame: a single simulation tick plus a draw
        fn frame(&mut self) {
            let input = self.input.clone();
            tick(&mut self.state, &input);

            // Clear one-shot inputs after processing
            self.input.flap = false;

            for event in self.state.drain_events() {
                self.handle_event(event);
            }

            self.renderer.draw(&self.state);
        }

        fn handle_event(&self, event: GameEvent) {
            match event {
                GameEvent::Flapped => self.audio.play(SoundEffect::Flap),
                GameEvent::Scored(score) => set_text("currentScore", &score.to_string()),
                GameEvent::GameOver { score } => {
                    self.audio.play(SoundEffect::Collision);
                    set_text("finalScore", &score.to_string());
                    show_element("gameOver");
                    log::info!("Game over with score {score}");
                }
            }
        }

        /// Start a fresh session. The old state is discarded wholesale;
        /// there is deliberately no partial reset.
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(
                seed,
                self.renderer.width() as f32,
                self.renderer.height() as f32,
            );
            self.input = TickInput::default();

            hide_element("gameOver");
            set_text("currentScore", "0");
            log::info!("Game restarted with seed: {seed}");
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.set_text_content(Some(text));
        }
    }

    fn show_element(id: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let _ = el.class_list().remove_1("d-none");
        }
    }

    fn hide_element(id: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let _ = el.class_list().add_1("d-none");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Field dimensions are fixed for the session by the canvas attributes
        let renderer = CanvasRenderer::new(&canvas).expect("no 2d context");

        let settings = Settings::load();
        let mut audio = AudioManager::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer, audio, settings)));

        log::info!("Game initialized with seed: {seed}");

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());
        setup_blur_mute(game.clone());

        request_animation_frame(game);

        log::info!("Flappy Canvas running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard: Space flaps
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        let mut g = game.borrow_mut();
                        g.input.flap = true;
                        // Browsers only allow audio after a user gesture
                        g.audio.resume();
                    }
                    "KeyM" => {
                        let mut g = game.borrow_mut();
                        let muted = g.settings.toggle_muted();
                        g.audio.set_muted(muted);
                        g.settings.save();
                        log::info!("Muted: {muted}");
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click on the play field flaps
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.input.flap = true;
                g.audio.resume();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                game.borrow_mut().restart(seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_blur_mute(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Mute while the window is unfocused (setting-controlled)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restore the user's mute preference on focus
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                let muted = g.settings.muted;
                g.audio.set_muted(muted);
            });
            let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode is a headless smoke run - build for wasm32 to play in the browser");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation without a browser: flap on a fixed cadence until
/// the bird dies (or a tick cap is reached) and report the outcome.
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use flappy_canvas::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(42, 400.0, 600.0);
    let mut ticks = 0u32;

    while state.phase == GamePhase::Running && ticks < 10_000 {
        let input = TickInput {
            flap: ticks % 32 == 0,
        };
        tick(&mut state, &input);
        for event in state.drain_events() {
            if let GameEvent::Scored(score) = event {
                log::info!("score: {score}");
            }
        }
        ticks += 1;
    }

    println!(
        "Headless run ended after {ticks} ticks with score {}",
        state.score
    );
}
