//! Point-mass body with textbook Newtonian quantities
//!
//! A `Body` freezes its initial kinematic state (position, velocity,
//! acceleration) at construction and may rest on a shared [`Ramp`].
//! Everything else (weight and its components on the incline, normal and
//! friction forces, energies, projectile position) is computed on read.
//!
//! Quantities that need a surface or a velocity return `None` when that
//! input is absent.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::mechanics::error::MechanicsError;
use crate::mechanics::params::STANDARD_GRAVITY;
use crate::mechanics::ramp::Ramp;
use crate::mechanics::states::{Point, Vector};

#[derive(Debug, Clone)]
pub struct Body {
    mass: f64,
    g: f64,
    pos: Point,
    initial_vel: Option<Vector>,
    vel: Option<Vector>, // current velocity, see `set_velocity`
    acc: Point,
    surface: Option<Arc<Ramp>>,
}

/// Step-by-step construction of a [`Body`]
///
/// Unset fields fall back to: zero velocity, zero acceleration,
/// `g = STANDARD_GRAVITY`, no surface. One of `mass` or `weight` is required.
#[derive(Debug, Clone)]
pub struct BodyBuilder {
    pos: Point,
    mass: Option<f64>,
    weight: Option<f64>,
    vel: Option<Vector>,
    acc: Point,
    g: f64,
    surface: Option<Arc<Ramp>>,
}

impl BodyBuilder {
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Mass is derived as `weight / g` and takes precedence over `mass` unless zero
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn velocity(mut self, vel: Vector) -> Self {
        self.vel = Some(vel);
        self
    }

    pub fn without_velocity(mut self) -> Self {
        self.vel = None;
        self
    }

    pub fn acceleration(mut self, acc: Point) -> Self {
        self.acc = acc;
        self
    }

    pub fn g(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    pub fn surface(mut self, ramp: Arc<Ramp>) -> Self {
        self.surface = Some(ramp);
        self
    }

    pub fn build(self) -> Result<Body, MechanicsError> {
        // a zero weight or mass counts as not given
        let mass = match (self.weight, self.mass) {
            (Some(w), _) if w != 0.0 => w / self.g,
            (_, Some(m)) if m != 0.0 => m,
            _ => return Err(MechanicsError::MissingMass),
        };
        if !(mass.is_finite() && mass > 0.0) {
            return Err(MechanicsError::NonPositiveMass(mass));
        }

        debug!("body built at {} with mass {mass}, g={}", self.pos, self.g);

        Ok(Body {
            mass,
            g: self.g,
            pos: self.pos,
            initial_vel: self.vel,
            vel: self.vel,
            acc: self.acc,
            surface: self.surface,
        })
    }
}

impl Body {
    pub fn builder(pos: Point) -> BodyBuilder {
        BodyBuilder {
            pos,
            mass: None,
            weight: None,
            vel: Some(Vector::zero()),
            acc: Point::origin(),
            g: STANDARD_GRAVITY,
            surface: None,
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn surface(&self) -> Option<&Arc<Ramp>> {
        self.surface.as_ref()
    }

    pub fn initial_pos(&self) -> Point {
        self.pos
    }

    pub fn initial_vel(&self) -> Option<Vector> {
        self.initial_vel
    }

    pub fn initial_acc(&self) -> Point {
        self.acc
    }

    /// Replace the current velocity; initial state and `find_pos` are unaffected
    pub fn set_velocity(&mut self, vel: Option<Vector>) {
        self.vel = vel;
    }

    pub fn weight(&self) -> f64 {
        self.mass * self.g
    }

    /// Inclination of the supporting ramp in radians, if it is actually tilted
    fn tilt(&self) -> Option<f64> {
        self.surface
            .as_deref()
            .filter(|ramp| ramp.inclination() != 0.0)
            .map(Ramp::inclination_rad)
    }

    /// Weight component perpendicular to the surface
    pub fn weight_y(&self) -> f64 {
        match self.tilt() {
            Some(theta) => self.weight() * theta.cos(),
            None => self.weight(),
        }
    }

    /// Weight component along the surface
    pub fn weight_x(&self) -> f64 {
        match self.tilt() {
            Some(theta) => self.weight() * theta.sin(),
            None => self.weight(),
        }
    }

    pub fn normal_force(&self) -> Option<f64> {
        self.surface.as_ref().map(|_| self.weight_y())
    }

    pub fn friction_force(&self) -> Option<f64> {
        let ramp = self.surface.as_deref()?;
        match ramp.friction_coefficient() {
            Some(mu) => Some(mu * self.weight_y()),
            None => {
                warn!("friction requested but the supporting ramp has no friction coefficient");
                None
            }
        }
    }

    /// Work of friction over displacement `s`; `None` when friction is absent or zero
    pub fn work_other_forces(&self, s: f64) -> Option<f64> {
        self.friction_force().filter(|ff| *ff != 0.0).map(|ff| ff * s)
    }

    pub fn potential_energy(&self) -> f64 {
        self.mass * self.g * self.pos.y
    }

    pub fn kinetic_energy(&self) -> Option<f64> {
        self.velocity().map(|v| 0.5 * self.mass * v * v)
    }

    pub fn total_mechanical_energy(&self) -> Option<f64> {
        self.kinetic_energy().map(|ke| ke + self.potential_energy())
    }

    /// Speed, i.e. the magnitude of the current velocity vector
    pub fn velocity(&self) -> Option<f64> {
        self.vel.as_ref().map(Vector::magnitude)
    }

    /// Projectile position `(x, y)` after `t` seconds from the initial state
    ///
    /// x(t) = x0 + vx*t + a_x*t^2/2
    /// y(t) = y0 + vy*t - g*t^2/2
    ///
    /// The vertical term always uses the body's own `g`, never `acc.y`.
    pub fn find_pos(&self, t: f64) -> (f64, f64) {
        let v0 = self.initial_vel.unwrap_or_default();
        let x = self.pos.x + v0.x() * t + 0.5 * self.acc.x * t * t;
        let y = self.pos.y + v0.y() * t - 0.5 * self.g * t * t;
        (x, y)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body({})", self.pos)
    }
}
