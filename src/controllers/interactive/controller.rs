use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render::renderer::FractalRenderer;
use log::{trace, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Renders submitted requests on a background thread.
///
/// Only the newest pending request is kept. A frame that finishes after a
/// newer request was submitted is dropped instead of presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        renderer: FractalRenderer,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("render-worker".into())
            .spawn(move || {
                Self::worker_loop(&worker_shared, &renderer);
            })
            .ok();

        if worker.is_none() {
            warn!("failed to spawn render worker, frames will not be produced");
        }

        Self { shared, worker }
    }

    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        {
            // Held so the flag cannot land between the worker's check and its wait
            let _guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>, renderer: &FractalRenderer) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(job) = guard.take() {
                        break job;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            Self::run_job(shared, renderer, job_generation, &request);
        }
    }

    /// Renders one job and presents it unless a newer request arrived meanwhile.
    fn run_job(
        shared: &SharedState,
        renderer: &FractalRenderer,
        job_generation: u64,
        request: &RenderRequest,
    ) {
        let start = Instant::now();
        let result = request.render(renderer);
        let render_duration = start.elapsed();

        let current_gen = shared.generation.load(Ordering::Acquire);
        if job_generation != current_gen {
            trace!(
                "dropping stale frame {} (latest is {})",
                job_generation, current_gen
            );
            return;
        }

        let event = match result {
            Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                generation: job_generation,
                kind: request.kind(),
                pixel_buffer,
                render_duration,
            }),
            Err(err) => {
                warn!("render {} failed: {}", job_generation, err);
                RenderEvent::Error(RenderError {
                    generation: job_generation,
                    message: err.to_string(),
                })
            }
        };

        shared.presenter_port.present(event);

        shared
            .last_completed_generation
            .store(job_generation, Ordering::Release);
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
