//! DOM binding: finds the page elements, feeds animation-frame time into the
//! controller and mirrors the resulting events back onto the page.
//!
//! Expected markup (created on demand where noted):
//! - `#word-display` play area, positioned so absolute children sit inside it
//! - `.bucket[data-prefix]` drop targets (a default row is added if none exist)
//! - `#score`, `#timer`, `#mistakes` text sinks
//! - `#start-button`, `#restart-button`

use crate::config::GameConfig;
use crate::dictionary::Prefix;
use crate::event::GameEvent;
use crate::game::{GameController, Phase};
use crate::geometry::{Rect, Size};
use crate::layout::{Bucket, Layout};
use crate::log::{log_events, log_line};
use crate::rng::SeededRng;
use crate::session::{GameSession, WordId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, window};

struct Page {
    controller: GameController,
    doc: Document,
    display: HtmlElement,
    // DOM node per in-flight word
    words: Vec<(WordId, HtmlElement)>,
    last_frame_ms: Option<f64>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn seeded_rng() -> SeededRng {
    SeededRng::from_entropy((now_ms() * 1000.0) as u32 ^ 0x9E37_79B9)
}

fn with_page<T>(f: impl FnOnce(&mut Page) -> Result<T, JsValue>) -> Result<T, JsValue> {
    PAGE.with(|cell| match cell.borrow_mut().as_mut() {
        Some(page) => f(page),
        None => Err(JsValue::from_str("page not initialised")),
    })
}

/// Bind the page once: locate elements, install listeners, start the frame loop.
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    if PAGE.with(|cell| cell.borrow().is_some()) {
        return Ok(());
    }
    let doc = document()?;
    let display: HtmlElement = doc
        .get_element_by_id("word-display")
        .ok_or_else(|| JsValue::from_str("no #word-display"))?
        .dyn_into()?;
    ensure_buckets(&doc, &display)?;

    let controller = GameController::new(GameConfig::default(), seeded_rng())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let page = Page {
        controller,
        doc: doc.clone(),
        display,
        words: Vec::new(),
        last_frame_ms: None,
    };
    render_idle(&page)?;
    PAGE.with(|cell| cell.replace(Some(page)));

    bind_buttons(&doc)?;
    bind_keys(&doc)?;
    start_frame_loop();
    log_line("[prefix-drop] page ready");
    Ok(())
}

/// Start a new session (also used for restart).
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    init_page()?;
    with_page(start_session)
}

#[wasm_bindgen]
pub fn restart_game() -> Result<(), JsValue> {
    start_game()
}

/// Route a `KeyboardEvent.key` value. Returns true when words moved.
#[wasm_bindgen]
pub fn handle_key(key: &str) -> bool {
    with_page(|page| {
        let moved = page.controller.handle_key(key);
        if moved {
            position_words(page)?;
        }
        Ok(moved)
    })
    .unwrap_or(false)
}

/// Abandon the current round and return to the idle screen.
#[wasm_bindgen]
pub fn reset_game() -> Result<(), JsValue> {
    with_page(|page| {
        clear_word_nodes(page);
        page.controller.reset();
        render_idle(page)
    })
}

/// Replace the game settings with a JSON object; returns to the idle screen.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let cfg = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    init_page()?;
    with_page(|page| {
        clear_word_nodes(page);
        page.controller = GameController::new(cfg, seeded_rng())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        render_idle(page)
    })
}

/// Current session as JSON (score, countdown, mistakes, in-flight words).
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn session_snapshot() -> Result<String, JsValue> {
    with_page(|page| {
        serde_json::to_string(page.controller.session())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

// --- Setup --------------------------------------------------------------------

fn ensure_buckets(doc: &Document, display: &HtmlElement) -> Result<(), JsValue> {
    if doc.get_elements_by_class_name("bucket").length() > 0 {
        return Ok(());
    }
    let width = 100.0 / Prefix::ALL.len() as f64;
    for (i, prefix) in Prefix::ALL.into_iter().enumerate() {
        let el = doc.create_element("div")?;
        el.set_class_name("bucket");
        el.set_attribute("data-prefix", prefix.label())?;
        el.set_text_content(Some(prefix.label()));
        el.set_attribute(
            "style",
            &format!(
                "position:absolute; bottom:0; left:{:.4}%; width:{:.4}%; height:50px; box-sizing:border-box; border:2px solid #444; text-align:center; line-height:46px;",
                i as f64 * width,
                width
            ),
        )?;
        display.append_child(&el)?;
    }
    Ok(())
}

fn bind_buttons(doc: &Document) -> Result<(), JsValue> {
    for id in ["start-button", "restart-button"] {
        let Some(button) = doc.get_element_by_id(id) else {
            continue;
        };
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            if let Err(err) = start_game() {
                log_line(&format!("[prefix-drop] start failed: {err:?}"));
            }
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn bind_keys(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if handle_key(&evt.key()) {
            evt.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let result = PAGE.with(|cell| match cell.borrow_mut().as_mut() {
            Some(page) => frame(page, ts),
            None => Ok(()),
        });
        if let Err(err) = result {
            log_line(&format!("[prefix-drop] frame error: {err:?}"));
        }
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// --- Per frame ----------------------------------------------------------------

fn frame(page: &mut Page, ts: f64) -> Result<(), JsValue> {
    let dt = page.last_frame_ms.map_or(0.0, |prev| ts - prev);
    page.last_frame_ms = Some(ts);
    if page.controller.phase() != Phase::Running {
        return Ok(());
    }
    let layout = measure_layout(page);
    let events = page.controller.advance(dt, &layout);
    apply_events(page, &events)?;
    position_words(page)?;
    log_events(&events);
    Ok(())
}

/// Play-area size and bucket rectangles, both relative to the play area's padding box.
fn measure_layout(page: &Page) -> Layout {
    let origin = page.display.get_bounding_client_rect();
    let dx = origin.left() + page.display.client_left() as f64;
    let dy = origin.top() + page.display.client_top() as f64;
    let play_area = Size::new(
        page.display.client_width() as f64,
        page.display.client_height() as f64,
    );

    let nodes = page.doc.get_elements_by_class_name("bucket");
    let mut buckets = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i) else { continue };
        let Some(prefix) = el
            .get_attribute("data-prefix")
            .as_deref()
            .and_then(Prefix::from_label)
        else {
            continue;
        };
        let r = el.get_bounding_client_rect();
        buckets.push(Bucket {
            prefix,
            rect: Rect::from_edges(r.left(), r.top(), r.right(), r.bottom()).translate(-dx, -dy),
        });
    }
    Layout::new(play_area, buckets)
}

fn apply_events(page: &mut Page, events: &[GameEvent]) -> Result<(), JsValue> {
    for event in events {
        match event {
            GameEvent::Spawned { id, text, .. } => {
                let Some(prefix) = page.controller.session().word(*id).map(|w| w.correct_prefix)
                else {
                    continue;
                };
                let el: HtmlElement = page.doc.create_element("div")?.dyn_into()?;
                el.set_class_name("falling-word");
                el.set_text_content(Some(*text));
                el.set_attribute("data-correct-prefix", prefix.label())?;
                page.display.append_child(&el)?;
                let r = el.get_bounding_client_rect();
                if r.width() > 0.0 {
                    page.controller
                        .set_word_size(*id, Size::new(r.width(), r.height()));
                }
                page.words.push((*id, el));
            }
            GameEvent::Resolved { id, .. } => {
                remove_word_node(page, *id);
                set_text(&page.doc, "score", &page.controller.session().score_text());
            }
            GameEvent::Tick { .. } => {
                set_text(&page.doc, "timer", &page.controller.session().timer_text());
            }
            GameEvent::Ended { .. } => {
                clear_word_nodes(page);
                if let Some(el) = page.doc.get_element_by_id("mistakes") {
                    el.set_inner_html(&summary_html(page.controller.session()));
                }
                set_visible(&page.doc, "restart-button", true)?;
            }
            GameEvent::Started { .. } | GameEvent::SpawnSkipped { .. } => {}
        }
    }
    Ok(())
}

fn position_words(page: &Page) -> Result<(), JsValue> {
    let session = page.controller.session();
    for (id, el) in &page.words {
        if let Some(word) = session.word(*id) {
            let style = el.style();
            style.set_property("left", &format!("{}%", word.horizontal_pct))?;
            style.set_property("top", &format!("{}px", word.vertical_px))?;
        }
    }
    Ok(())
}

// --- DOM helpers ----------------------------------------------------------------

fn start_session(page: &mut Page) -> Result<(), JsValue> {
    clear_word_nodes(page);
    let event = page.controller.start();
    page.last_frame_ms = None;
    refresh_texts(page);
    if let Some(el) = page.doc.get_element_by_id("mistakes") {
        el.set_inner_html("");
    }
    set_visible(&page.doc, "start-button", false)?;
    set_visible(&page.doc, "restart-button", false)?;
    log_events(&[event]);
    Ok(())
}

fn render_idle(page: &Page) -> Result<(), JsValue> {
    refresh_texts(page);
    if let Some(el) = page.doc.get_element_by_id("mistakes") {
        el.set_inner_html("");
    }
    set_visible(&page.doc, "start-button", true)?;
    set_visible(&page.doc, "restart-button", false)
}

fn refresh_texts(page: &Page) {
    let session = page.controller.session();
    set_text(&page.doc, "score", &session.score_text());
    set_text(&page.doc, "timer", &session.timer_text());
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn set_visible(doc: &Document, id: &str, visible: bool) -> Result<(), JsValue> {
    if let Some(el) = doc.get_element_by_id(id) {
        let el: HtmlElement = el.dyn_into()?;
        el.style()
            .set_property("display", if visible { "block" } else { "none" })?;
    }
    Ok(())
}

fn remove_word_node(page: &mut Page, id: WordId) {
    if let Some(idx) = page.words.iter().position(|(wid, _)| *wid == id) {
        let (_, el) = page.words.remove(idx);
        el.remove();
    }
}

fn clear_word_nodes(page: &mut Page) {
    for (_, el) in page.words.drain(..) {
        el.remove();
    }
}

fn summary_html(session: &GameSession) -> String {
    if session.mistakes.is_empty() {
        return "<p>No mistakes! Well done!</p>".to_string();
    }
    let items: String = session
        .mistakes
        .iter()
        .map(|m| format!("<li>{m}</li>"))
        .collect();
    format!("<h3>Mistakes:</h3><ul>{items}</ul>")
}
