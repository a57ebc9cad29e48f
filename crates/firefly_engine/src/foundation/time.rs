//! Frame timing utilities

use std::time::Instant;

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Per-second frame statistics.
///
/// Frame times are accumulated into one-second windows. While a window is
/// open, the rolling millisecond-per-frame figures are updated; when it
/// closes, the fps figures are recomputed from the frames counted in it.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: f32,
    window_frames: u32,
    fps_avg: f32,
    fps_min: f32,
    fps_max: f32,
    ms_avg: f32,
    ms_min: f32,
    ms_max: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self {
            window: 0.0,
            window_frames: 0,
            fps_avg: 0.0,
            fps_min: f32::INFINITY,
            fps_max: 0.0,
            ms_avg: 0.0,
            ms_min: f32::INFINITY,
            ms_max: 0.0,
        }
    }

    /// Record one frame of `dt` seconds.
    ///
    /// Returns `true` when a one-second window closed on this frame, which is
    /// the moment callers typically log the fps figures.
    pub fn update(&mut self, dt: f32) -> bool {
        self.window += dt;
        if self.window < 1.0 {
            self.window_frames += 1;
            let ms = dt * 1000.0;
            self.ms_avg = (self.ms_avg + ms) * 0.5;
            if ms < self.ms_min {
                self.ms_min = ms;
            }
            if ms > self.ms_max {
                self.ms_max = ms;
            }
            false
        } else {
            let fps = self.window_frames as f32 / self.window;
            self.fps_avg = fps;
            if fps < self.fps_min {
                self.fps_min = fps;
            }
            if fps > self.fps_max {
                self.fps_max = fps;
            }
            self.window_frames = 0;
            self.window -= 1.0;
            true
        }
    }

    /// Average fps over the most recently closed window
    pub fn fps(&self) -> f32 {
        self.fps_avg
    }

    /// Lowest per-window fps seen so far
    pub fn fps_min(&self) -> f32 {
        self.fps_min
    }

    /// Highest per-window fps seen so far
    pub fn fps_max(&self) -> f32 {
        self.fps_max
    }

    /// Rolling average frame time in milliseconds
    pub fn ms_per_frame(&self) -> f32 {
        self.ms_avg
    }

    /// Shortest frame seen so far, milliseconds
    pub fn ms_per_frame_min(&self) -> f32 {
        self.ms_min
    }

    /// Longest frame seen so far, milliseconds
    pub fn ms_per_frame_max(&self) -> f32 {
        self.ms_max
    }
}
