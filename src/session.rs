//! Game session: one loaded stage and the simulation running on it
//!
//! The render loop calls `advance` once per frame with the frame delta; the
//! session turns that into fixed `SIM_DT` ticks. Events leave the session as
//! owned values through `drain_events`, so UI code on another context never
//! holds references into simulation state.

use glam::{Quat, Vec2, Vec3};

use crate::config::SimConfig;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{
    BallSimulator, BallState, GameEvent, GameOutcome, PaintSnapshot, PaintTarget, TickInput,
    TickResult, Waypoint,
};
use crate::stage::Stage;

/// Everything the session reports outward
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    Game(GameEvent),
    PathSample(Waypoint),
}

pub struct GameSession {
    stage: Stage,
    sim: BallSimulator,
    /// Unsimulated frame time (seconds)
    accumulator: f32,
    outbox: Vec<SessionEvent>,
}

impl GameSession {
    pub fn new(stage: Stage, config: SimConfig) -> Self {
        let sim = BallSimulator::new(config, stage.spawn, stage.terrain.paint_target_count());
        log::info!("Session started on stage '{}'", stage.name);
        Self {
            stage,
            sim,
            accumulator: 0.0,
            outbox: Vec::new(),
        }
    }

    /// Stage reload: ball, paint and path reset together
    pub fn reset(&mut self) {
        self.sim.reset();
        self.accumulator = 0.0;
        self.outbox.clear();
        log::info!("Session reset on stage '{}'", self.stage.name);
    }

    /// Run one simulation tick of `dt` seconds
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> TickResult {
        let volumes = self.stage.collision_set();
        let result = self.sim.tick(&self.stage.terrain, &volumes, input, dt);
        if let Some(event) = result.event {
            self.outbox.push(SessionEvent::Game(event));
        }
        if let Some(waypoint) = result.waypoint {
            self.outbox.push(SessionEvent::PathSample(waypoint));
        }
        result
    }

    /// Feed one rendered frame's delta. Returns the number of ticks run.
    pub fn advance(&mut self, frame_dt: f32, input: &TickInput) -> u32 {
        if input.paused || self.sim.outcome().is_over() {
            return 0;
        }
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.tick(input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.sim.outcome().is_over() {
                self.accumulator = 0.0;
                break;
            }
        }
        substeps
    }

    /// External countdown expired
    pub fn time_out(&mut self) -> Option<GameEvent> {
        let event = self.sim.expire();
        if let Some(event) = event {
            self.outbox.push(SessionEvent::Game(event));
        }
        event
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.outbox)
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn simulator(&self) -> &BallSimulator {
        &self.sim
    }

    pub fn outcome(&self) -> GameOutcome {
        self.sim.outcome()
    }

    pub fn ball(&self) -> &BallState {
        self.sim.ball()
    }

    /// Ball pose for the renderer
    pub fn ball_pose(&self) -> (Vec3, Quat) {
        let ball = self.sim.ball();
        (ball.pos, ball.orientation)
    }

    /// Ball position in surface UV space for the terrain shader
    pub fn ball_uv(&self) -> Option<Vec2> {
        self.sim.last_paint_uv()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        self.sim.path().waypoints()
    }

    pub fn paint_snapshot(&self, target: PaintTarget) -> Option<PaintSnapshot<'_>> {
        self.sim.paint_buffers().get(target.index()).map(|b| b.snapshot())
    }

    /// Snapshot only if it changed since the renderer last uploaded it
    pub fn take_paint_update(&mut self, target: PaintTarget) -> Option<PaintSnapshot<'_>> {
        let buffer = self.sim.paint_buffers_mut().get_mut(target.index())?;
        if buffer.take_dirty() {
            Some(buffer.snapshot())
        } else {
            None
        }
    }

    /// Painted texels across all paint buffers
    pub fn painted_texels(&self) -> usize {
        self.sim.paint_buffers().iter().map(|b| b.painted_count()).sum()
    }
}
