//! Scripted capture sources shared by the unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{Rgba, RgbaImage};
use screenwatch_capture::FrameSource;
use screenwatch_core::{CaptureError, Frame};

/// Replays scripted results, then keeps returning solid frames.
pub struct ScriptedSource {
    script: VecDeque<Result<Frame, CaptureError>>,
    calls:  Arc<AtomicUsize>,
}

impl FrameSource for ScriptedSource {
    fn capture(&mut self) -> Result<Frame, CaptureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .pop_front()
            .unwrap_or_else(|| Ok(solid(140, 100, 0)))
    }
}

/// Panics on every capture.
pub struct PanickingSource;

impl FrameSource for PanickingSource {
    fn capture(&mut self) -> Result<Frame, CaptureError> {
        panic!("capture backend crashed");
    }
}

pub fn solid(w: u32, h: u32, v: u8) -> Frame {
    Frame::new(RgbaImage::from_pixel(w, h, Rgba([v, v, v, 255])))
}

pub fn scripted(
    script: Vec<Result<Frame, CaptureError>>,
) -> (Box<dyn FrameSource>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = ScriptedSource { script: script.into(), calls: Arc::clone(&calls) };
    (Box::new(source), calls)
}
