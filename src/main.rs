//! Number Challenge entry point
//!
//! Handles platform-specific initialization and wires user actions to the
//! game controller.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use number_challenge::persistence::BestScoreStore;
    use number_challenge::platform::{self, BrowserStorage};
    use number_challenge::view::dom::{self, DomView, MissingElement, ids};
    use number_challenge::{GameConfig, GameController};

    type Game = GameController<BrowserStorage, DomView>;

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Number Challenge starting...");

        if let Err(e) = start() {
            log::error!("Could not start game: {e}");
        }
    }

    fn start() -> Result<(), MissingElement> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return Ok(());
        };

        let config = GameConfig::load();
        let best = BestScoreStore::probed(BrowserStorage::from_window(), config.storage_key.clone());
        log::info!("Storage capability: {:?}", best.capability());

        let view = DomView::from_document(&document)?;
        let seed = platform::seed();
        let game = Rc::new(RefCell::new(GameController::new(config, best, view, seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_guess_form(&document, game.clone())?;
        setup_new_round_button(&document, game.clone())?;
        setup_reset_best_button(&document, game)?;

        log::info!("Number Challenge running!");
        Ok(())
    }

    fn setup_guess_form(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), MissingElement> {
        let form = dom::element(document, ids::GUESS_FORM)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let mut g = game.borrow_mut();
            let raw = g.view().input_value();
            if let Err(e) = g.submit_guess(&raw) {
                log::debug!("Guess not accepted: {e}");
            }
        });
        let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    fn setup_new_round_button(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), MissingElement> {
        let btn = dom::element(document, ids::NEW_ROUND)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().new_round();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    fn setup_reset_best_button(
        document: &web_sys::Document,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), MissingElement> {
        let btn = dom::element(document, ids::RESET_BEST)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().reset_best_score();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{self, BufRead, Write};

    use number_challenge::persistence::{BestScoreStore, MemoryStore};
    use number_challenge::view::terminal::TerminalView;
    use number_challenge::{GameConfig, GameController, platform};

    env_logger::init();
    log::info!("Number Challenge (native) starting...");

    let config = GameConfig::load();
    // No LocalStorage here; the best score lasts for this session only
    let best = BestScoreStore::probed(MemoryStore::new(), config.storage_key.clone());
    let range = config.range;
    let mut game = GameController::new(config, best, TerminalView::new(), platform::seed());

    println!(
        "Guess a number from {} to {}. Commands: n = new round, r = reset best, q = quit",
        range.min, range.max
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read input: {e}");
                break;
            }
        }

        match line.trim() {
            "q" | "quit" => break,
            "n" | "new" => game.new_round(),
            "r" | "reset" => game.reset_best_score(),
            raw => {
                if let Err(e) = game.submit_guess(raw) {
                    log::debug!("Guess not accepted: {e}");
                }
                if !game.view().input_enabled() {
                    println!("  n = new round, q = quit");
                }
            }
        }
    }

    log::info!("Bye!");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
