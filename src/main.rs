//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, FocusEvent, HtmlCanvasElement, KeyboardEvent};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use canvas_pong::hud::{DebugSinks, Hud};
    use canvas_pong::renderer::{GpuSurface, RenderState, VertexBatch};
    use canvas_pong::sim::InputEvent;
    use canvas_pong::{FrameDriver, GameConfig, GameError};

    type Game = FrameDriver<GpuSurface, Element, Pcg32>;

    /// Text sink for a DOM element. A missing element gets a detached
    /// stand-in so the game still runs without that readout.
    fn text_sink(document: &Document, id: &str) -> Element {
        document
            .get_element_by_id(id)
            .or_else(|| document.create_element("span").ok())
            .expect("failed to create text sink")
    }

    /// Size the canvas and bring up WebGPU on it
    async fn create_surface(
        document: &Document,
        config: &GameConfig,
    ) -> Result<GpuSurface, GameError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| GameError::SurfaceUnavailable("no canvas element".to_string()))?
            .dyn_into()
            .map_err(|_| GameError::SurfaceUnavailable("#canvas is not a canvas".to_string()))?;

        let (width, height) = (config.width as u32, config.height as u32);
        canvas.set_width(width);
        canvas.set_height(height);

        let render_state = RenderState::for_canvas(canvas, width, height).await?;
        let batch = VertexBatch::new(config.width, config.height, config.background);
        Ok(GpuSurface::new(batch, render_state))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = GameConfig::default();
        let mut hud = Hud::new(
            text_sink(&document, "game-status"),
            text_sink(&document, "score"),
        );
        if config.debug {
            hud = hud.with_debug(DebugSinks {
                p1: text_sink(&document, "paddle1"),
                p2: text_sink(&document, "paddle2"),
                ball_pos: text_sink(&document, "ballpos"),
                ball_dir: text_sink(&document, "balldir"),
            });
        }

        let surface = create_surface(&document, &config).await;
        let seed = js_sys::Date::now() as u64;
        let game = match FrameDriver::init(config, surface, hud, Pcg32::seed_from_u64(seed)) {
            Ok(game) => Rc::new(RefCell::new(game)),
            // Already reported on the status line
            Err(_) => return,
        };

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut()
                    .push_event(InputEvent::KeyDown(event.code()));
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().push_event(InputEvent::KeyUp(event.code()));
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur (click outside, tab switch)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                game.borrow_mut().push_event(InputEvent::Blur);
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
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
        {
            let mut g = game.borrow_mut();
            g.frame();
            g.surface.present();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::Path;
    use std::time::{SystemTime, UNIX_EPOCH};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use canvas_pong::hud::Hud;
    use canvas_pong::renderer::VertexBatch;
    use canvas_pong::sim::{GameEvent, InputEvent, Phase};
    use canvas_pong::{FrameDriver, GameConfig, GameError};

    /// About ten minutes at 60 fps
    const MAX_FRAMES: u32 = 36_000;

    /// Play one unattended match on an offscreen surface. Nobody moves the
    /// paddles; a key is pressed whenever a round waits to start.
    pub fn run(config_path: Option<String>) -> Result<(), GameError> {
        let config = match config_path {
            Some(path) => GameConfig::load(Path::new(&path))?,
            None => GameConfig::default(),
        };

        let batch = VertexBatch::new(config.width, config.height, config.background);
        let hud = Hud::new(String::new(), String::new());
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut game = FrameDriver::init(config, Ok(batch), hud, Pcg32::seed_from_u64(seed))?;
        log::info!("Headless match with seed: {}", seed);

        for frame in 0..MAX_FRAMES {
            if game.state.phase() == Phase::Idle {
                game.push_event(InputEvent::KeyDown("Space".to_string()));
            }
            game.frame();

            let winner = game.state.events.iter().find_map(|e| match e {
                GameEvent::MatchWon { winner } => Some(*winner),
                _ => None,
            });
            if let Some(winner) = winner {
                println!("{:?} player won the match after {} frames", winner, frame + 1);
                return Ok(());
            }
        }

        println!(
            "No winner after {} frames, score {}",
            MAX_FRAMES, game.hud.score
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    if let Err(e) = headless::run(std::env::args().nth(1)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
