/*
 * Debug Module
 *
 * This module defines the DebugInfo struct holding the per-frame metrics
 * shown in the debug overlay.
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    // Simulation ticks executed during the last update
    pub ticks_last_frame: u32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks_last_frame: 0,
        }
    }
}
