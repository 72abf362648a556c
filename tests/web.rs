// Browser smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn keys_are_ignored_without_a_page() {
    assert!(!prefix_drop::handle_key("ArrowLeft"));
}

#[wasm_bindgen_test]
fn controller_runs_in_the_browser() {
    use prefix_drop::{GameConfig, GameController, Layout, Phase};
    use prefix_drop::geometry::Size;

    let mut g = GameController::with_seed(GameConfig::default(), 9).expect("valid config");
    g.start();
    let layout = Layout::uniform(Size::new(600.0, 500.0), 40.0, 50.0);
    for _ in 0..200 {
        g.advance(16.0, &layout);
    }
    assert_eq!(g.phase(), Phase::Running);
    assert_eq!(g.session().time_remaining, 117);
}
