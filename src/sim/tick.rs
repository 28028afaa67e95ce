//! Per-frame ball simulation tick
//!
//! One tick runs strictly in order: probe terrain, integrate tilt/slope/
//! gravity/friction, roll the orientation, test zones, test obstacles,
//! paint under the ball, sample the path.

use glam::{Quat, Vec2, Vec3};

use super::collision::{ColliderRole, VolumeQuery};
use super::paint::PaintBuffer;
use super::path::PathRecorder;
use super::state::{BallState, GameEvent, GameOutcome, OverReason, TickResult};
use super::terrain::{TerrainHit, TerrainProbe};
use crate::config::SimConfig;
use crate::input::TiltBaseline;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest normalized tilt reading, `None` before the sensor reports
    pub tilt: Option<Vec3>,
    /// Paused ticks leave every piece of state untouched
    pub paused: bool,
}

/// Owns the ball, its paint buffers and its path for one stage
#[derive(Debug, Clone)]
pub struct BallSimulator {
    config: SimConfig,
    spawn: Vec3,
    ball: BallState,
    outcome: GameOutcome,
    baseline: TiltBaseline,
    /// Indexed by `PaintTarget`
    paint: Vec<PaintBuffer>,
    path: PathRecorder,
    last_paint_uv: Option<Vec2>,
    ticks: u64,
}

impl BallSimulator {
    /// `paint_targets` is the number of paintable surfaces the terrain registered
    pub fn new(config: SimConfig, spawn: Vec3, paint_targets: usize) -> Self {
        let res = config.paint_resolution;
        Self {
            spawn,
            ball: BallState::at_rest(spawn),
            outcome: GameOutcome::Running,
            baseline: TiltBaseline::default(),
            paint: (0..paint_targets).map(|_| PaintBuffer::new(res, res)).collect(),
            path: PathRecorder::new(config.path_sample_interval, config.path_distance_threshold)
                .with_origin(spawn),
            last_paint_uv: None,
            ticks: 0,
            config,
        }
    }

    /// Reinitialize ball, outcome, baseline, paint and path together
    pub fn reset(&mut self) {
        self.ball = BallState::at_rest(self.spawn);
        self.outcome = GameOutcome::Running;
        self.baseline.reset();
        for buffer in &mut self.paint {
            buffer.reset();
        }
        self.path.reset();
        self.last_paint_uv = None;
        self.ticks = 0;
    }

    pub fn ball(&self) -> &BallState {
        &self.ball
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn baseline(&self) -> Option<Vec3> {
        self.baseline.get()
    }

    pub fn paint_buffers(&self) -> &[PaintBuffer] {
        &self.paint
    }

    pub fn paint_buffers_mut(&mut self) -> &mut [PaintBuffer] {
        &mut self.paint
    }

    pub fn path(&self) -> &PathRecorder {
        &self.path
    }

    /// Ball position in surface UV space as of the last paint stamp
    pub fn last_paint_uv(&self) -> Option<Vec2> {
        self.last_paint_uv
    }

    /// Non-paused ticks since the last reset
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// External countdown ran out
    pub fn expire(&mut self) -> Option<GameEvent> {
        self.transition(GameOutcome::Over(OverReason::Timeout))
    }

    /// Advance the ball by `dt` seconds
    pub fn tick<P, V>(&mut self, terrain: &P, volumes: &V, input: &TickInput, dt: f32) -> TickResult
    where
        P: TerrainProbe + ?Sized,
        V: VolumeQuery + ?Sized,
    {
        if input.paused || self.outcome.is_over() || !(dt.is_finite() && dt > 0.0) {
            return TickResult::default();
        }
        let cfg = self.config;
        self.ticks += 1;

        let ball = &mut self.ball;
        ball.prev_pos = ball.pos;

        // Device y tilts the board forward/back, which is world -z
        let tilt = self.baseline.relative(input.tilt) * cfg.tilt_sensitivity;
        let drive = Vec3::new(tilt.x, 0.0, -tilt.y);

        let hit = terrain.cast_down(ball.pos + Vec3::Y * cfg.probe_lift);
        let mut slope = Vec3::ZERO;
        if let Some(hit) = &hit {
            let floor = hit.height() + cfg.ball_radius_margin;
            if ball.pos.y < floor {
                ball.pos.y = floor;
                ball.vel.y *= cfg.floor_damping;
            }
            if let Some(normal) = hit.normal {
                slope = slope_pull(normal, cfg.slope_threshold);
            }
        }

        let accel = (drive + slope) * cfg.drive_gain;
        ball.vel.x += accel.x * dt;
        ball.vel.z += accel.z * dt;
        ball.vel.y += cfg.gravity * dt;

        let decay = (1.0 - cfg.friction * dt).max(0.0);
        ball.vel.x *= decay;
        ball.vel.z *= decay;

        ball.pos += ball.vel * dt * cfg.speed_multiplier;
        ball.orientation = roll(ball.orientation, ball.vel, dt);

        let pos = ball.pos;
        let mut event = None;
        if hit.is_none() && pos.y < cfg.dead_zone_height {
            event = self.transition(GameOutcome::Over(OverReason::FellOff));
        }
        if event.is_none() && volumes.contains(ColliderRole::End, pos) {
            event = self.transition(GameOutcome::Over(OverReason::Goal));
        }
        if event.is_none() && volumes.contains(ColliderRole::Start, pos) {
            event = self.transition(GameOutcome::Started);
        }

        let blocked = volumes.any_obstacle_contains(pos);
        if blocked {
            log::debug!("Obstacle at ({:.2}, {:.2}, {:.2}), rolling back", pos.x, pos.y, pos.z);
            self.ball.pos = self.ball.prev_pos;
            self.ball.vel = Vec3::ZERO;
        }

        if let Some(hit) = &hit {
            self.paint_at(hit);
        }

        let waypoint = self.path.sample(self.ball.pos);

        TickResult {
            event,
            waypoint,
            blocked,
        }
    }

    fn paint_at(&mut self, hit: &TerrainHit) {
        let (Some(target), Some(uv)) = (hit.paint, hit.uv) else {
            return;
        };
        match self.paint.get_mut(target.index()) {
            Some(buffer) => {
                buffer.stamp_uv(uv, self.config.brush_radius);
                self.last_paint_uv = Some(uv);
            }
            None => log::warn!("Paint target {} has no buffer", target.index()),
        }
    }

    /// Move the outcome forward. Returns the event if the outcome changed.
    fn transition(&mut self, next: GameOutcome) -> Option<GameEvent> {
        let event = match (self.outcome, next) {
            (GameOutcome::Over(_), _) => return None,
            (GameOutcome::Running, GameOutcome::Started) => GameEvent::Started,
            (_, GameOutcome::Over(reason)) => GameEvent::Over(reason),
            _ => return None,
        };
        log::info!("Outcome {:?} -> {:?} after {} ticks", self.outcome, next, self.ticks);
        self.outcome = next;
        Some(event)
    }
}

/// Horizontal pull from the terrain normal; near-flat components are dropped
fn slope_pull(normal: Vec3, threshold: f32) -> Vec3 {
    if !normal.is_finite() {
        return Vec3::ZERO;
    }
    let keep = |c: f32| if c.abs() > threshold { c } else { 0.0 };
    Vec3::new(keep(normal.x), 0.0, keep(normal.z))
}

/// Roll about the axis perpendicular to up and the horizontal heading.
/// No horizontal motion means no rotation.
fn roll(orientation: Quat, vel: Vec3, dt: f32) -> Quat {
    let horizontal = Vec3::new(vel.x, 0.0, vel.z);
    let speed = horizontal.length();
    let axis = Vec3::Y.cross(horizontal.normalize_or_zero()).normalize_or_zero();
    if axis == Vec3::ZERO || !speed.is_finite() {
        return orientation;
    }
    (Quat::from_axis_angle(axis, speed * dt) * orientation).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::collision::{Aabb, Collider, CollisionSet};
    use crate::sim::terrain::tests::flat_quad;
    use crate::sim::terrain::{SurfaceId, Terrain};
    use proptest::prelude::*;

    /// Infinite plane at a fixed height with a configurable normal
    struct Plane {
        height: f32,
        normal: Option<Vec3>,
    }

    impl TerrainProbe for Plane {
        fn cast_down(&self, origin: Vec3) -> Option<TerrainHit> {
            (origin.y >= self.height).then(|| TerrainHit {
                point: Vec3::new(origin.x, self.height, origin.z),
                normal: self.normal,
                uv: None,
                surface: SurfaceId::new(0),
                paint: None,
            })
        }
    }

    /// Nothing anywhere
    struct Void;

    impl TerrainProbe for Void {
        fn cast_down(&self, _origin: Vec3) -> Option<TerrainHit> {
            None
        }
    }

    fn no_colliders() -> CollisionSet<'static> {
        CollisionSet::new(&[])
    }

    fn sim_at(pos: Vec3) -> BallSimulator {
        BallSimulator::new(SimConfig::default(), pos, 0)
    }

    fn bits(state: &BallState) -> Vec<u32> {
        [state.pos, state.vel, state.prev_pos]
            .iter()
            .flat_map(|v| v.to_array())
            .chain(state.orientation.to_array())
            .map(f32::to_bits)
            .collect()
    }

    #[test]
    fn test_ball_settles_on_terrain() {
        let mut terrain = Terrain::new();
        terrain.add_surface("land", flat_quad(100.0, 10.0));
        let mut sim = sim_at(Vec3::new(3.0, 50.0, -7.0));
        let input = TickInput::default();

        for _ in 0..600 {
            sim.tick(&terrain, &no_colliders(), &input, SIM_DT);
        }
        let mut max_vy: f32 = 0.0;
        for _ in 0..120 {
            sim.tick(&terrain, &no_colliders(), &input, SIM_DT);
            max_vy = max_vy.max(sim.ball().vel.y.abs());
            assert!((sim.ball().pos.y - 11.0).abs() < 0.05, "y = {}", sim.ball().pos.y);
        }
        assert!(max_vy < 0.5);
        // Flat ground, no tilt: no horizontal drift
        assert_eq!(sim.ball().pos.x, 3.0);
        assert_eq!(sim.ball().pos.z, -7.0);
    }

    #[test]
    fn test_obstacle_rolls_back_and_stops() {
        let colliders = [Collider::new(
            ColliderRole::Obstacle,
            Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
        )];
        let volumes = CollisionSet::new(&colliders);
        let mut sim = sim_at(Vec3::new(-1.001, 0.0, 0.0));
        sim.ball.vel = Vec3::new(2.0, 0.0, 0.0);

        let before = sim.ball().pos;
        let result = sim.tick(&Void, &volumes, &TickInput::default(), SIM_DT);

        assert!(result.blocked);
        assert_eq!(sim.ball().pos, before);
        assert_eq!(sim.ball().vel, Vec3::ZERO);
        assert_eq!(result.event, None);
    }

    #[test]
    fn test_obstacle_at_exact_boundary() {
        let colliders = [Collider::new(
            ColliderRole::Obstacle,
            Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
        )];
        let volumes = CollisionSet::new(&colliders);
        // Resting on the face counts as inside, and moving inward stays blocked
        let mut sim = sim_at(Vec3::new(-1.0, 0.0, 0.0));
        sim.ball.vel = Vec3::new(2.0, 0.0, 0.0);

        let result = sim.tick(&Void, &volumes, &TickInput::default(), SIM_DT);

        assert!(result.blocked);
        assert_eq!(sim.ball().pos, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(sim.ball().vel, Vec3::ZERO);
    }

    #[test]
    fn test_approach_stops_at_first_penetrating_tick() {
        let colliders = [Collider::new(
            ColliderRole::Obstacle,
            Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
        )];
        let volumes = CollisionSet::new(&colliders);
        let mut sim = sim_at(Vec3::new(-3.0, 0.0, 0.0));
        let plane = Plane {
            height: -1.0,
            normal: Some(Vec3::Y),
        };

        let mut blocked_at = None;
        for i in 0..200 {
            // Keep pushing toward the box
            sim.ball.vel.x = 2.0;
            let before = sim.ball().pos;
            let result = sim.tick(&plane, &volumes, &TickInput::default(), SIM_DT);
            if result.blocked {
                assert_eq!(sim.ball().pos, before);
                assert_eq!(sim.ball().vel, Vec3::ZERO);
                blocked_at = Some(i);
                break;
            }
            assert!(!colliders[0].bounds.contains(sim.ball().pos));
        }
        assert!(blocked_at.is_some());
    }

    #[test]
    fn test_fell_off_fires_once_on_crossing_tick() {
        let mut sim = sim_at(Vec3::new(0.0, -70.0, 0.0));
        let mut fired = Vec::new();

        for _ in 0..600 {
            let pre = sim.ball().pos.y;
            let result = sim.tick(&Void, &no_colliders(), &TickInput::default(), SIM_DT);
            if let Some(event) = result.event {
                fired.push((event, pre, sim.ball().pos.y));
            }
        }

        assert_eq!(fired.len(), 1);
        let (event, pre, post) = fired[0];
        assert_eq!(event, GameEvent::Over(OverReason::FellOff));
        assert!(pre >= -80.0);
        assert!(post < -80.0);
        assert_eq!(sim.outcome(), GameOutcome::Over(OverReason::FellOff));
    }

    #[test]
    fn test_no_fell_off_while_terrain_below() {
        let mut sim = sim_at(Vec3::new(0.0, -90.0, 0.0));
        let plane = Plane {
            height: -95.0,
            normal: Some(Vec3::Y),
        };
        for _ in 0..60 {
            let result = sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT);
            assert_eq!(result.event, None);
        }
    }

    #[test]
    fn test_start_zone_fires_once() {
        let colliders = [Collider::new(
            ColliderRole::Start,
            Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0)),
        )];
        let volumes = CollisionSet::new(&colliders);
        let plane = Plane {
            height: 0.0,
            normal: Some(Vec3::Y),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));

        let started = (0..50)
            .filter_map(|_| sim.tick(&plane, &volumes, &TickInput::default(), SIM_DT).event)
            .collect::<Vec<_>>();
        assert_eq!(started, vec![GameEvent::Started]);
        assert!(sim.outcome().is_started());
    }

    #[test]
    fn test_end_zone_is_terminal() {
        let colliders = [
            Collider::new(ColliderRole::Start, Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0))),
            Collider::new(ColliderRole::End, Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0))),
        ];
        let volumes = CollisionSet::new(&colliders);
        let plane = Plane {
            height: 0.0,
            normal: Some(Vec3::Y),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));

        let result = sim.tick(&plane, &volumes, &TickInput::default(), SIM_DT);
        assert_eq!(result.event, Some(GameEvent::Over(OverReason::Goal)));

        let frozen = *sim.ball();
        let result = sim.tick(&plane, &volumes, &TickInput::default(), SIM_DT);
        assert_eq!(result, TickResult::default());
        assert_eq!(*sim.ball(), frozen);
        assert_eq!(sim.expire(), None);
    }

    #[test]
    fn test_tilt_drives_relative_to_baseline() {
        let plane = Plane {
            height: 0.0,
            normal: Some(Vec3::Y),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));

        // First reading is the baseline, so holding it produces no drive
        let rest = TickInput {
            tilt: Some(Vec3::new(0.3, 0.3, 0.9)),
            paused: false,
        };
        sim.tick(&plane, &no_colliders(), &rest, SIM_DT);
        assert_eq!(sim.ball().vel.x, 0.0);
        assert_eq!(sim.ball().vel.z, 0.0);
        assert_eq!(sim.baseline(), Some(Vec3::new(0.3, 0.3, 0.9)));

        let tilted = TickInput {
            tilt: Some(Vec3::new(0.8, 0.8, 0.9)),
            paused: false,
        };
        for _ in 0..10 {
            sim.tick(&plane, &no_colliders(), &tilted, SIM_DT);
        }
        assert!(sim.ball().vel.x > 0.0);
        assert!(sim.ball().vel.z < 0.0);
        assert!(sim.ball().pos.x > 0.0);
        assert_eq!(sim.baseline(), Some(Vec3::new(0.3, 0.3, 0.9)));
    }

    #[test]
    fn test_missing_tilt_is_no_drive() {
        let plane = Plane {
            height: 0.0,
            normal: Some(Vec3::Y),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));
        for _ in 0..30 {
            sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT);
        }
        assert_eq!(sim.ball().vel.x, 0.0);
        assert_eq!(sim.ball().vel.z, 0.0);
        assert_eq!(sim.baseline(), None);
    }

    #[test]
    fn test_slope_pulls_downhill() {
        let n = Vec3::new(0.4, 1.0, -0.3).normalize();
        let plane = Plane {
            height: 0.0,
            normal: Some(n),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));
        for _ in 0..30 {
            sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT);
        }
        assert!(sim.ball().vel.x > 0.0);
        assert!(sim.ball().vel.z < 0.0);
    }

    #[test]
    fn test_gentle_slope_and_degenerate_normal_are_flat() {
        for normal in [Some(Vec3::new(0.05, 1.0, 0.05).normalize()), None] {
            let plane = Plane { height: 0.0, normal };
            let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));
            for _ in 0..30 {
                sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT);
            }
            assert_eq!(sim.ball().vel.x, 0.0);
            assert_eq!(sim.ball().vel.z, 0.0);
        }
    }

    #[test]
    fn test_rolling_orientation() {
        let plane = Plane {
            height: 0.0,
            normal: Some(Vec3::Y),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));

        // Stationary ball does not spin
        sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT);
        assert_eq!(sim.ball().orientation, Quat::IDENTITY);

        sim.ball.vel = Vec3::new(5.0, 0.0, 0.0);
        for _ in 0..5 {
            sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT);
        }
        let q = sim.ball().orientation;
        assert!((q.length() - 1.0).abs() < 1e-5);
        // The top of the ball turns toward the direction of travel
        let top = q * Vec3::Y;
        assert!(top.x > 0.0);
        assert!(top.z.abs() < 1e-5);
    }

    #[test]
    fn test_paints_under_ball() {
        let mut terrain = Terrain::new();
        let (_, target) = terrain.add_paintable_surface("land", flat_quad(50.0, 0.0));
        let mut sim = BallSimulator::new(SimConfig::default(), Vec3::new(10.0, 1.0, -25.0), 1);

        sim.tick(&terrain, &no_colliders(), &TickInput::default(), SIM_DT);

        let buffer = &sim.paint_buffers()[target.index()];
        // uv (0.6, 0.25) on a 512 grid
        assert!(buffer.is_painted(307, 128));
        assert_eq!(buffer.painted_count(), 13);
        let uv = sim.last_paint_uv().expect("painted");
        assert!((uv - Vec2::new(0.6, 0.25)).length() < 1e-4);
    }

    #[test]
    fn test_unpaintable_surface_leaves_buffers_clear() {
        let mut terrain = Terrain::new();
        let _: SurfaceId = terrain.add_surface("fence", flat_quad(50.0, 0.0));
        let mut sim = BallSimulator::new(SimConfig::default(), Vec3::new(10.0, 1.0, -25.0), 0);
        sim.tick(&terrain, &no_colliders(), &TickInput::default(), SIM_DT);
        assert!(sim.paint_buffers().is_empty());
        assert_eq!(sim.last_paint_uv(), None);
    }

    #[test]
    fn test_path_samples_forwarded() {
        let plane = Plane {
            height: 0.0,
            normal: Some(Vec3::Y),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));
        sim.ball.vel = Vec3::new(6.0, 0.0, 0.0);

        let waypoints: Vec<_> = (0..60)
            .filter_map(|_| sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT).waypoint)
            .collect();
        assert_eq!(waypoints.len(), 2);
        assert_eq!(sim.path().waypoints(), waypoints.as_slice());
    }

    #[test]
    fn test_resting_ball_records_no_path() {
        let plane = Plane {
            height: 0.0,
            normal: Some(Vec3::Y),
        };
        let mut sim = sim_at(Vec3::new(0.0, 1.0, 0.0));
        for _ in 0..120 {
            let result = sim.tick(&plane, &no_colliders(), &TickInput::default(), SIM_DT);
            assert_eq!(result.waypoint, None);
        }
        assert!(sim.path().is_empty());
    }

    #[test]
    fn test_reset_restores_everything() {
        let mut terrain = Terrain::new();
        terrain.add_paintable_surface("land", flat_quad(50.0, 0.0));
        let mut sim = BallSimulator::new(SimConfig::default(), Vec3::new(10.0, 1.0, -25.0), 1);
        let input = TickInput {
            tilt: Some(Vec3::ZERO),
            paused: false,
        };
        sim.ball.vel = Vec3::new(4.0, 0.0, 4.0);
        for _ in 0..90 {
            sim.tick(&terrain, &no_colliders(), &input, SIM_DT);
        }
        sim.expire();
        assert!(sim.paint_buffers()[0].painted_count() > 0);
        assert!(!sim.path().is_empty());

        sim.reset();
        assert_eq!(*sim.ball(), BallState::at_rest(Vec3::new(10.0, 1.0, -25.0)));
        assert_eq!(sim.outcome(), GameOutcome::Running);
        assert_eq!(sim.baseline(), None);
        assert_eq!(sim.paint_buffers()[0].painted_count(), 0);
        assert!(sim.path().is_empty());
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut sim = sim_at(Vec3::ZERO);
        assert_eq!(sim.expire(), Some(GameEvent::Over(OverReason::Timeout)));
        assert_eq!(sim.expire(), None);
    }

    #[test]
    fn test_bad_dt_is_noop() {
        let mut sim = sim_at(Vec3::new(0.0, 5.0, 0.0));
        let before = *sim.ball();
        for dt in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            sim.tick(&Void, &no_colliders(), &TickInput::default(), dt);
        }
        assert_eq!(*sim.ball(), before);
    }

    proptest! {
        #[test]
        fn prop_paused_tick_is_bit_identical(
            px in -50.0f32..50.0, py in -50.0f32..50.0, pz in -50.0f32..50.0,
            vx in -10.0f32..10.0, vz in -10.0f32..10.0,
            tx in -1.0f32..1.0, ty in -1.0f32..1.0,
            warmup in 0usize..20,
        ) {
            let mut terrain = Terrain::new();
            terrain.add_paintable_surface("land", flat_quad(60.0, 0.0));
            let mut sim = BallSimulator::new(SimConfig::default(), Vec3::new(px, py, pz), 1);
            sim.ball.vel = Vec3::new(vx, 0.0, vz);
            let running = TickInput { tilt: Some(Vec3::new(tx, ty, 0.5)), paused: false };
            for _ in 0..warmup {
                sim.tick(&terrain, &no_colliders(), &running, SIM_DT);
            }

            let before = bits(sim.ball());
            let paint_before = sim.paint_buffers()[0].snapshot().as_bytes().to_vec();
            let path_before = sim.path().len();
            let paused = TickInput { tilt: Some(Vec3::new(ty, tx, 0.1)), paused: true };
            for _ in 0..5 {
                let result = sim.tick(&terrain, &no_colliders(), &paused, SIM_DT);
                prop_assert_eq!(result, TickResult::default());
            }
            prop_assert_eq!(bits(sim.ball()), before);
            prop_assert_eq!(sim.paint_buffers()[0].snapshot().as_bytes(), paint_before.as_slice());
            prop_assert_eq!(sim.path().len(), path_before);
        }
    }
}
