mod page;
mod state;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use statradar_core::{CreatureRecord, DatasetStore};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::page::{cell_at, render_page};
use crate::state::WebState;

const DATA_URL: &str = "data/pokemon.json";

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let state = Rc::new(RefCell::new(WebState::new()));

    spawn_local(fetch_store(state.clone()));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| state.borrow_mut().handle_key(&event)
    });

    terminal.on_mouse_event({
        let state = state.clone();
        move |event| {
            let mut state = state.borrow_mut();
            let Some((column, row)) = pointer_cell(event.x, event.y, state.frame_area) else {
                return;
            };
            state.handle_mouse(&event, column, row);
        }
    });

    terminal.draw_web(move |f| {
        let mut state = state.borrow_mut();
        state.begin_frame(f.area());
        render_page(&state, f);
    });

    Ok(())
}

/// Grid cell under a pointer event's client coordinates.
fn pointer_cell(x: u32, y: u32, grid: ratzilla::ratatui::layout::Rect) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    cell_at(f64::from(x), f64::from(y), (width, height), grid)
}

/// One same-origin GET for the dataset. Any failure is logged and leaves the
/// store empty, so every later lookup reports not found.
async fn fetch_store(state: Rc<RefCell<WebState>>) {
    let store = match fetch_records().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "dataset loaded");
            DatasetStore::from_records(records)
        }
        Err(message) => {
            tracing::error!("error loading dataset: {message}");
            web_sys::console::error_1(&format!("Failed to load {DATA_URL}: {message}").into());
            DatasetStore::default()
        }
    };

    state.borrow_mut().store = Some(store);
}

async fn fetch_records() -> Result<Vec<CreatureRecord>, String> {
    let window = web_sys::window().ok_or("no window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(DATA_URL, &opts)
        .map_err(|_| "could not build request".to_string())?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| "network error".to_string())?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| "unexpected response object".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body = response
        .json()
        .map_err(|_| "response has no body".to_string())?;
    let json = wasm_bindgen_futures::JsFuture::from(body)
        .await
        .map_err(|_| "body is not JSON".to_string())?;

    serde_wasm_bindgen::from_value::<Vec<CreatureRecord>>(json).map_err(|error| error.to_string())
}
