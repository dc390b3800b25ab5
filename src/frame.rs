//! Frame loop
//!
//! Each frame draws the shapes where they are now and only then advances
//! the simulation, so the first presented frame shows the spawn positions.
//! Per iteration: framebuffer size, begin, draw both, tick, present, poll.

use crate::platform::Host;
use crate::renderer::{Projection, colors};
use crate::sim::{SimState, TickReport, tick};

/// Fill colors, in shape order
pub const SHAPE_COLORS: [[f32; 4]; 2] = [colors::SHAPE_A, colors::SHAPE_B];

/// Queue one square per shape at its current position
pub fn render_shapes<H: Host>(host: &mut H, state: &SimState) {
    for (shape, color) in state.shapes.iter().zip(SHAPE_COLORS) {
        host.draw_quad(shape.pos, state.half_size, color);
    }
}

/// Run a single frame against the host
pub fn run_frame<H: Host>(host: &mut H, state: &mut SimState) -> TickReport {
    let (width, height) = host.framebuffer_size();
    host.begin_frame(Projection::from_framebuffer(width, height));
    render_shapes(host, state);

    let report = tick(state);

    host.present();
    if host.poll_input().escape_pressed {
        log::debug!("Escape pressed, closing");
        host.request_close();
    }
    report
}

/// Loop until the host asks to close, then destroy it. Returns frames run.
pub fn run<H: Host>(mut host: H, state: &mut SimState) -> u64 {
    let mut frames = 0;
    while !host.should_close() {
        run_frame(&mut host, state);
        frames += 1;
    }
    host.destroy();
    frames
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::platform::Input;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        BeginFrame(Projection),
        DrawQuad(Vec2, f32, [f32; 4]),
        Present,
        PollInput,
        RequestClose,
    }

    /// Records every call; presses Escape on a chosen poll
    struct RecordingHost {
        calls: Vec<Call>,
        size: (u32, u32),
        size_queries: Cell<u64>,
        closing: bool,
        polls: u64,
        escape_on_poll: Option<u64>,
        destroyed: Rc<Cell<u32>>,
    }

    impl RecordingHost {
        fn new(escape_on_poll: Option<u64>) -> Self {
            Self {
                calls: Vec::new(),
                size: (1000, 1000),
                size_queries: Cell::new(0),
                closing: false,
                polls: 0,
                escape_on_poll,
                destroyed: Rc::new(Cell::new(0)),
            }
        }

        fn draws(&self) -> Vec<(Vec2, f32, [f32; 4])> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::DrawQuad(p, h, color) => Some((*p, *h, *color)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Host for RecordingHost {
        fn should_close(&self) -> bool {
            self.closing
        }

        fn request_close(&mut self) {
            self.calls.push(Call::RequestClose);
            self.closing = true;
        }

        fn framebuffer_size(&self) -> (u32, u32) {
            self.size_queries.set(self.size_queries.get() + 1);
            self.size
        }

        fn begin_frame(&mut self, projection: Projection) {
            self.calls.push(Call::BeginFrame(projection));
        }

        fn draw_quad(&mut self, center: Vec2, half_size: f32, color: [f32; 4]) {
            self.calls.push(Call::DrawQuad(center, half_size, color));
        }

        fn present(&mut self) {
            self.calls.push(Call::Present);
        }

        fn poll_input(&mut self) -> Input {
            self.calls.push(Call::PollInput);
            self.polls += 1;
            Input {
                escape_pressed: self.escape_on_poll == Some(self.polls),
            }
        }

        fn destroy(self) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
    }

    #[test]
    fn first_frame_draws_spawn_positions() {
        let mut state = SimState::new(31337);
        let spawn = state.shapes;
        let mut host = RecordingHost::new(None);

        run_frame(&mut host, &mut state);

        let draws = host.draws();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0], (spawn[0].pos, state.half_size, colors::SHAPE_A));
        assert_eq!(draws[1], (spawn[1].pos, state.half_size, colors::SHAPE_B));

        // The state has already moved on by one step
        assert_eq!(state.frame, 1);
        assert_ne!(state.shapes[0].pos, spawn[0].pos);
    }

    #[test]
    fn frame_call_order() {
        let mut state = SimState::new(5);
        let mut host = RecordingHost::new(None);
        run_frame(&mut host, &mut state);

        let kinds: Vec<&str> = host
            .calls
            .iter()
            .map(|c| match c {
                Call::BeginFrame(_) => "begin",
                Call::DrawQuad(..) => "draw",
                Call::Present => "present",
                Call::PollInput => "poll",
                Call::RequestClose => "close",
            })
            .collect();
        assert_eq!(kinds, ["begin", "draw", "draw", "present", "poll"]);
        assert_eq!(host.size_queries.get(), 1);
    }

    #[test]
    fn projection_follows_framebuffer() {
        let mut state = SimState::new(5);
        let mut host = RecordingHost::new(None);
        host.size = (1600, 800);
        run_frame(&mut host, &mut state);

        assert!(host.calls.contains(&Call::BeginFrame(Projection { aspect: 2.0 })));
    }

    #[test]
    fn second_frame_draws_first_update() {
        let mut state = SimState::new(77);
        let mut host = RecordingHost::new(None);

        run_frame(&mut host, &mut state);
        let after_one = state.shapes;
        run_frame(&mut host, &mut state);

        let draws = host.draws();
        assert_eq!(draws.len(), 4);
        assert_eq!(draws[2].0, after_one[0].pos);
        assert_eq!(draws[3].0, after_one[1].pos);
    }

    #[test]
    fn escape_closes_after_current_frame() {
        let mut state = SimState::new(1);
        let host = RecordingHost::new(Some(3));
        let destroyed = host.destroyed.clone();

        let frames = run(host, &mut state);

        assert_eq!(frames, 3);
        assert_eq!(state.frame, 3);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn closed_host_runs_no_frames() {
        let mut state = SimState::new(1);
        let mut host = RecordingHost::new(None);
        host.closing = true;
        let destroyed = host.destroyed.clone();

        assert_eq!(run(host, &mut state), 0);
        assert_eq!(state.frame, 0);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn loop_matches_direct_ticks() {
        let mut looped = SimState::new(2468);
        let mut direct = SimState::new(2468);

        run(RecordingHost::new(Some(250)), &mut looped);
        for _ in 0..250 {
            tick(&mut direct);
        }

        assert_eq!(looped.shapes, direct.shapes);
        assert_eq!(looped.collisions, direct.collisions);
    }
}
