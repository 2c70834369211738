//! Raw touch points → pan / pinch / double-tap gestures.
//!
//! Hosts that already run native recognizers skip this module and emit
//! [`GestureEvent`]s directly. Everyone else forwards raw touches here.

use glam::Vec2;

use super::event::{GestureEvent, GesturePhase};
use crate::options::GestureOptions;

/// Lifecycle stage of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger went down.
    Started,
    /// Finger moved.
    Moved,
    /// Finger lifted.
    Ended,
    /// Platform cancelled the touch.
    Cancelled,
}

/// One raw touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Platform touch identifier, stable for the life of the touch.
    pub id: u64,
    /// What happened to the touch.
    pub phase: TouchPhase,
    /// Horizontal position in physical pixels.
    pub x: f32,
    /// Vertical position in physical pixels (y down).
    pub y: f32,
    /// Monotonic timestamp in seconds.
    pub time: f64,
}

impl TouchEvent {
    fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Convert a winit touch, stamping it with `time`.
    #[cfg(feature = "winit")]
    #[must_use]
    pub fn from_winit(touch: &winit::event::Touch, time: f64) -> Self {
        let phase = match touch.phase {
            winit::event::TouchPhase::Started => TouchPhase::Started,
            winit::event::TouchPhase::Moved => TouchPhase::Moved,
            winit::event::TouchPhase::Ended => TouchPhase::Ended,
            winit::event::TouchPhase::Cancelled => TouchPhase::Cancelled,
        };
        Self {
            id: touch.id,
            phase,
            x: touch.location.x as f32,
            y: touch.location.y as f32,
            time,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PinchTrack {
    start_spread: f32,
    last_scale: f32,
}

/// Per-sequence bookkeeping from first finger down to last finger up.
#[derive(Debug, Clone, Copy, Default)]
struct Sequence {
    /// Accumulated centroid travel, with touch-count changes factored out.
    travel: Vec2,
    /// Most fingers seen at once.
    peak_touches: usize,
    /// Whether the pan recognizer has fired `Began`.
    panning: bool,
}

#[derive(Debug, Clone, Copy)]
struct Tap {
    time: f64,
    position: Vec2,
}

/// Turns raw touches into [`GestureEvent`]s.
pub struct TouchRecognizer {
    options: GestureOptions,
    /// Live touches in the order they went down.
    touches: Vec<(u64, Vec2)>,
    /// Centroid of `touches` after the last event.
    last_centroid: Option<Vec2>,
    sequence: Sequence,
    pinch: Option<PinchTrack>,
    /// Previous completed single tap, awaiting a partner.
    last_tap: Option<Tap>,
}

impl TouchRecognizer {
    /// Create a recognizer with the given thresholds.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            touches: Vec::new(),
            last_centroid: None,
            sequence: Sequence::default(),
            pinch: None,
            last_tap: None,
        }
    }

    /// Number of fingers currently tracked.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Feed one raw touch and collect the gestures it completes or updates.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        match event.phase {
            TouchPhase::Started => self.touch_started(event, &mut out),
            TouchPhase::Moved => self.touch_moved(event, &mut out),
            TouchPhase::Ended => self.touch_ended(event, &mut out),
            TouchPhase::Cancelled => self.cancel(&mut out),
        }
        out
    }

    fn touch_started(&mut self, event: TouchEvent, out: &mut Vec<GestureEvent>) {
        if let Some(slot) = self.touches.iter_mut().find(|(id, _)| *id == event.id)
        {
            slot.1 = event.position();
            return;
        }
        if self.touches.len() >= self.options.max_touches as usize {
            log::trace!("ignoring touch {} beyond max_touches", event.id);
            return;
        }
        if self.touches.is_empty() {
            self.sequence = Sequence::default();
        }
        self.touches.push((event.id, event.position()));
        self.sequence.peak_touches =
            self.sequence.peak_touches.max(self.touches.len());
        self.last_centroid = self.centroid();
        self.pan_count_changed(out);

        if self.touches.len() == 2 {
            let spread = self.spread();
            if spread > 0.0 {
                self.pinch = Some(PinchTrack {
                    start_spread: spread,
                    last_scale: 1.0,
                });
                out.push(GestureEvent::Pinch {
                    phase: GesturePhase::Began,
                    scale: 1.0,
                });
            }
        }
    }

    fn touch_moved(&mut self, event: TouchEvent, out: &mut Vec<GestureEvent>) {
        let Some(slot) = self.touches.iter_mut().find(|(id, _)| *id == event.id)
        else {
            return;
        };
        slot.1 = event.position();

        let centroid = self.centroid();
        if let (Some(prev), Some(now)) = (self.last_centroid, centroid) {
            self.sequence.travel += now - prev;
        }
        self.last_centroid = centroid;

        if self.sequence.panning {
            out.push(self.pan_event(GesturePhase::Changed));
        } else if self.sequence.travel.length() > self.options.tap_slop {
            self.sequence.panning = true;
            out.push(self.pan_event(GesturePhase::Began));
        }

        let spread = self.spread();
        if let Some(pinch) = self.pinch.as_mut() {
            pinch.last_scale = spread / pinch.start_spread;
            out.push(GestureEvent::Pinch {
                phase: GesturePhase::Changed,
                scale: pinch.last_scale,
            });
        }
    }

    fn touch_ended(&mut self, event: TouchEvent, out: &mut Vec<GestureEvent>) {
        let Some(index) = self.touches.iter().position(|(id, _)| *id == event.id)
        else {
            return;
        };
        let _ = self.touches.remove(index);
        self.last_centroid = self.centroid();

        if self.touches.len() < 2 {
            if let Some(pinch) = self.pinch.take() {
                out.push(GestureEvent::Pinch {
                    phase: GesturePhase::Ended,
                    scale: pinch.last_scale,
                });
            }
        }

        if !self.touches.is_empty() {
            self.pan_count_changed(out);
            return;
        }

        if self.sequence.panning {
            out.push(self.pan_event(GesturePhase::Ended));
        } else if self.sequence.peak_touches == 1 {
            self.register_tap(event, out);
        }
        self.sequence = Sequence::default();
    }

    fn cancel(&mut self, out: &mut Vec<GestureEvent>) {
        if self.sequence.panning {
            out.push(GestureEvent::Pan {
                phase: GesturePhase::Cancelled,
                touches: 0,
                translation: self.sequence.travel,
            });
        }
        if let Some(pinch) = self.pinch.take() {
            out.push(GestureEvent::Pinch {
                phase: GesturePhase::Cancelled,
                scale: pinch.last_scale,
            });
        }
        self.touches.clear();
        self.last_centroid = None;
        self.sequence = Sequence::default();
        self.last_tap = None;
    }

    /// Report a finger-count change to an active pan so the consumer can
    /// re-arm its capture.
    fn pan_count_changed(&self, out: &mut Vec<GestureEvent>) {
        if self.sequence.panning {
            out.push(self.pan_event(GesturePhase::Changed));
        }
    }

    fn register_tap(&mut self, event: TouchEvent, out: &mut Vec<GestureEvent>) {
        let tap = Tap {
            time: event.time,
            position: event.position(),
        };
        let paired = self.last_tap.is_some_and(|prev| {
            tap.time - prev.time <= self.options.double_tap_interval
                && tap.position.distance(prev.position)
                    <= self.options.double_tap_distance
        });
        if paired {
            self.last_tap = None;
            out.push(GestureEvent::DoubleTap);
        } else {
            self.last_tap = Some(tap);
        }
    }

    fn pan_event(&self, phase: GesturePhase) -> GestureEvent {
        GestureEvent::Pan {
            phase,
            touches: self.touches.len() as u32,
            translation: self.sequence.travel,
        }
    }

    fn centroid(&self) -> Option<Vec2> {
        if self.touches.is_empty() {
            return None;
        }
        let sum: Vec2 = self.touches.iter().map(|(_, p)| *p).sum();
        Some(sum / self.touches.len() as f32)
    }

    fn spread(&self) -> f32 {
        match self.touches.as_slice() {
            [(_, a), (_, b), ..] => a.distance(*b),
            _ => 0.0,
        }
    }
}

impl Default for TouchRecognizer {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}
