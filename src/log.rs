use crate::event::GameEvent;

#[cfg(target_arch = "wasm32")]
pub fn log_line(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_line(message: &str) {
    println!("{message}");
}

/// Mirror gameplay events to the console. Countdown ticks are too chatty and skipped.
pub fn log_events(events: &[GameEvent]) {
    for event in events {
        if matches!(event, GameEvent::Tick { .. }) {
            continue;
        }
        log_line(&format!("[prefix-drop] {}", event.describe()));
    }
}
