//! Per-frame driver for a [`RenderSession`].
//!
//! The loop draws a frame, then yields to a [`FrameScheduler`] until the host
//! is ready for the next one. In the browser that is `requestAnimationFrame`,
//! so the frame rate follows the display's refresh.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;

use crate::gpu::backend::Gl;
use crate::gpu::scene::RenderSession;

/// Host primitive that suspends until the next frame should be drawn.
pub trait FrameScheduler {
    fn next_frame(&self) -> impl Future<Output = ()>;
}

impl<F: FrameScheduler + ?Sized> FrameScheduler for &F {
    fn next_frame(&self) -> impl Future<Output = ()> {
        (**self).next_frame()
    }
}

/// Resolves on the browser's next animation frame.
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn next_frame(&self) -> impl Future<Output = ()> {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(&resolve);
            }
        });
        async move {
            let _ = JsFuture::from(promise).await;
        }
    }
}

/// Anything with a drawable size in pixels.
pub trait DrawSurface {
    fn size(&self) -> (u32, u32);
}

impl DrawSurface for HtmlCanvasElement {
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

impl DrawSurface for (u32, u32) {
    fn size(&self) -> (u32, u32) {
        *self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    NotRunning,
    Running,
}

/// Requests that a running loop stop before its next frame.
///
/// The game only issues this when the table view is torn down, so in
/// practice the loop lives as long as the page.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct RenderLoop<G: Gl, S: DrawSurface> {
    session: RenderSession<G>,
    surface: S,
    state: Rc<Cell<LoopState>>,
    stop: StopHandle,
}

impl<G: Gl, S: DrawSurface> RenderLoop<G, S> {
    pub fn new(session: RenderSession<G>, surface: S) -> Self {
        Self {
            session,
            surface,
            state: Rc::new(Cell::new(LoopState::NotRunning)),
            stop: StopHandle::default(),
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Shared view of the loop state that outlives `run` consuming the loop.
    #[cfg(test)]
    pub fn state_probe(&self) -> Rc<Cell<LoopState>> {
        self.state.clone()
    }

    /// Draws frames until stopped. Returns the number of frames drawn.
    pub async fn run<F: FrameScheduler>(self, scheduler: F) -> u64 {
        self.state.set(LoopState::Running);
        log::debug!("render loop started");

        let mut frames = 0;
        while !self.stop.is_stopped() {
            self.session.draw_frame(self.surface.size());
            frames += 1;
            scheduler.next_frame().await;
        }

        log::debug!("render loop stopped after {frames} frames");
        frames
    }
}
