use leptos::html::Canvas;
use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::Screen;
use crate::config::GameConfig;
use crate::game::{GameMode, StubTable, start_game};
use crate::gpu::context::init_context;
use crate::render_loop::{AnimationFrameScheduler, RenderLoop, StopHandle};

/// Brings up WebGL on `canvas` and starts the table. Failures are logged;
/// the loop simply never starts.
fn launch(canvas: HtmlCanvasElement, mode: GameMode, config: &GameConfig) -> Option<StopHandle> {
    let context = init_context(&canvas)?;

    let game = match start_game(&context.gl, mode, config, &mut StubTable) {
        Ok(game) => game,
        Err(e) => {
            log::error!("failed to initialize game graphics: {e}");
            return None;
        }
    };
    log::info!("starting {} game", game.mode);

    let texture_load = game.texture_load;
    wasm_bindgen_futures::spawn_local(async move {
        if texture_load.resolve().await {
            log::debug!("card texture loaded");
        }
    });

    let render_loop = RenderLoop::new(game.session, context.canvas);
    let stop = render_loop.stop_handle();
    wasm_bindgen_futures::spawn_local(async move {
        render_loop.run(AnimationFrameScheduler).await;
    });
    Some(stop)
}

#[component]
pub fn App(config: GameConfig) -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Start);
    let canvas_ref = NodeRef::<Canvas>::new();
    let running = StoredValue::new(None::<StopHandle>);
    let preselected = config.preselected_mode();

    let width = config.canvas_width.to_string();
    let height = config.canvas_height.to_string();

    let choose_mode = move |mode: GameMode| {
        let Some(next) = screen.get_untracked().choose_mode(mode) else {
            return;
        };
        set_screen.set(next);

        match canvas_ref.get_untracked() {
            Some(canvas) => running.set_value(launch(canvas, mode, &config)),
            None => log::error!("game canvas is not mounted"),
        }
    };
    let choose_endless = choose_mode.clone();
    let choose_money = choose_mode.clone();

    // Runs once the canvas is mounted
    Effect::new(move |_| {
        if let Some(mode) = preselected {
            set_screen.update(|s| *s = s.press_start());
            choose_mode(mode);
        }
    });

    on_cleanup(move || {
        if let Some(stop) = running.try_get_value().flatten() {
            stop.stop();
        }
    });

    view! {
        <main class="card-table">
            <div id="start-screen" class:hidden=move || !screen.get().panels().start>
                <h1>"Card Table"</h1>
                <button
                    id="start-button"
                    on:click=move |_| set_screen.update(|s| *s = s.press_start())
                >
                    "Start"
                </button>
            </div>
            <div id="mode-selection" class:hidden=move || !screen.get().panels().mode_select>
                <h2>"Choose a mode"</h2>
                <button id="endless-mode" on:click=move |_| choose_endless(GameMode::Endless)>
                    "Endless"
                </button>
                <button id="money-mode" on:click=move |_| choose_money(GameMode::Money)>
                    "Money"
                </button>
            </div>
            <canvas
                id="game-canvas"
                node_ref=canvas_ref
                width=width
                height=height
                class:hidden=move || !screen.get().panels().canvas
            ></canvas>
        </main>
    }
}
