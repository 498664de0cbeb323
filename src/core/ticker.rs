/// Something that can run a callback on the next display refresh.
///
/// The browser implementation wraps `requestAnimationFrame`; tests drive a
/// simulated one.
pub trait FrameScheduler {
    type Handle: Copy + PartialEq;

    /// Requests one future frame. `None` if the platform refused.
    fn schedule(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Start/stop bookkeeping for one effect's redraw chain.
///
/// At most one request is outstanding at a time. A frame delivered after
/// `stop` (or one that was never requested) is rejected by `begin_frame`, so
/// a late callback cannot double the chain.
#[derive(Debug)]
pub struct AnimationLoop<H> {
    pending: Option<H>,
    active: bool,
    frames: u64,
}

impl<H> Default for AnimationLoop<H> {
    fn default() -> Self {
        Self {
            pending: None,
            active: false,
            frames: 0,
        }
    }
}

impl<H: Copy + PartialEq> AnimationLoop<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    /// Frames run since creation.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns true if this call issued a new request.
    pub fn start<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> bool {
        self.active = true;
        self.request(scheduler)
    }

    pub fn stop<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        self.active = false;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    /// Called when a scheduled frame fires. Returns whether the effect should draw.
    pub fn begin_frame(&mut self) -> bool {
        if self.pending.take().is_none() || !self.active {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Called after the effect drew. `keep_going = false` ends the chain.
    pub fn end_frame<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S, keep_going: bool) {
        if !keep_going {
            self.active = false;
            return;
        }
        if self.active {
            self.request(scheduler);
        }
    }

    fn request<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = scheduler.schedule();
        self.pending.is_some()
    }
}
