//! A toy stand-in for the host: Quake-style movement on an infinite flat
//! floor at `z = 0`.
//!
//! Ground moves apply friction then accelerate towards the wish direction;
//! air moves accelerate weakly and fall.  Pressing up on the ground jumps.
//! Only what the bot exercises is modelled: no walls, ramps, water or
//! double jumps.

use sb_agent::{AgentState, MoveCommand, Simulation};
use sb_core::{GroundRef, TickRate, Vec3, wrap_yaw};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR:         GroundRef = GroundRef(0);
const MAX_SPEED:     f64       = 320.0;
const GROUND_ACCEL:  f64       = 10.0;
const AIR_ACCEL:     f64       = 1.0;
const FRICTION:      f64       = 6.0;
const STOP_SPEED:    f64       = 100.0;
const GRAVITY:       f64       = 800.0;
const JUMP_VELOCITY: f64       = 270.0;
const JUMP_TIME_MS:  i32       = 500;

// ── FlatGround ────────────────────────────────────────────────────────────────

pub struct FlatGround {
    state: AgentState,
    tick_rate: TickRate,
    /// Commands handled so far.
    pub ticks: u64,
}

impl FlatGround {
    pub fn new(tick_rate: TickRate) -> Self {
        Self {
            state: AgentState::at_rest(Vec3::ZERO, 0.0, FLOOR),
            tick_rate,
            ticks: 0,
        }
    }

    /// The floor is re-traced from position and vertical velocity, so a
    /// ground ref left over from before a restore never sticks.
    fn on_floor(&self) -> bool {
        self.state.position.z <= 0.0 && self.state.velocity.z <= 0.0
    }

    fn accelerate(&mut self, wish_dir: Vec3, wish_speed: f64, accel: f64) {
        let current = self.state.velocity.dot(wish_dir);
        let add = wish_speed - current;
        if add <= 0.0 {
            return;
        }
        let step = (accel * self.tick_rate.tick_secs() * wish_speed).min(add);
        self.state.velocity += wish_dir * step;
    }

    fn apply_friction(&mut self) {
        let speed = self.state.velocity.length_2d();
        if speed < 1.0 {
            self.state.velocity.x = 0.0;
            self.state.velocity.y = 0.0;
            return;
        }
        let drop = speed.max(STOP_SPEED) * FRICTION * self.tick_rate.tick_secs();
        let scale = (speed - drop).max(0.0) / speed;
        self.state.velocity.x *= scale;
        self.state.velocity.y *= scale;
    }
}

impl Simulation for FlatGround {
    fn state(&self) -> AgentState {
        let mut state = self.state.clone();
        state.ground = if self.on_floor() { FLOOR } else { GroundRef::AIRBORNE };
        state
    }

    fn set_position(&mut self, position: Vec3) {
        self.state.position = position;
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.state.velocity = velocity;
    }

    fn set_view_angles(&mut self, angles: Vec3) {
        self.state.yaw = angles.y;
    }

    fn set_ground_ref(&mut self, ground: GroundRef) {
        self.state.ground = ground;
    }

    fn set_jump_time(&mut self, jump_time: i32) {
        self.state.jump_time = jump_time;
    }

    fn set_double_jumped(&mut self, double_jumped: bool) {
        self.state.double_jumped = double_jumped;
    }

    fn issue_command(&mut self, command: &MoveCommand) -> bool {
        let dt = self.tick_rate.tick_secs();
        self.state.yaw = wrap_yaw(command.yaw + self.state.delta_yaw);

        let rad = self.state.yaw.to_radians();
        let forward = Vec3::new(rad.cos(), rad.sin(), 0.0);
        let right = Vec3::new(forward.y, -forward.x, 0.0);
        let wish = forward * f64::from(command.forward_move) + right * f64::from(command.right_move);
        let wish_dir = wish.normalize();

        let mut grounded = self.on_floor();
        if grounded && command.up_move > 0 {
            self.state.velocity.z = JUMP_VELOCITY;
            self.state.jump_time = JUMP_TIME_MS;
            grounded = false;
        }

        if grounded {
            self.apply_friction();
            if let Some(dir) = wish_dir {
                self.accelerate(dir, MAX_SPEED, GROUND_ACCEL);
            }
        } else {
            if let Some(dir) = wish_dir {
                self.accelerate(dir, MAX_SPEED, AIR_ACCEL);
            }
            self.state.velocity.z -= GRAVITY * dt;
        }

        self.state.position += self.state.velocity * dt;
        if self.state.position.z <= 0.0 {
            self.state.position.z = 0.0;
            self.state.velocity.z = self.state.velocity.z.max(0.0);
        }
        self.state.ground = if self.on_floor() { FLOOR } else { GroundRef::AIRBORNE };
        self.state.jump_time = (self.state.jump_time - (dt * 1000.0) as i32).max(0);
        self.ticks += 1;
        true
    }
}
