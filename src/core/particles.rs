use crate::core::constants::{
    CONNECTION_DIST, CONNECTION_WIDTH, PARTICLE_MAX_RADIUS, PARTICLE_RGB, PARTICLE_SPEED_SPAN,
    REPEL_DAMPING, REPEL_RADIUS,
};
use crate::core::error::{require_positive, ParamsError};
use crate::core::pointer::PointerState;
use crate::core::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub repel_radius: f32,
    pub repel_damping: f32,
    pub connection_dist: f32,
    pub connection_width: f32,
    pub speed_span: f32,
    pub max_radius: f32,
    pub color: Rgba,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            repel_radius: REPEL_RADIUS,
            repel_damping: REPEL_DAMPING,
            connection_dist: CONNECTION_DIST,
            connection_width: CONNECTION_WIDTH,
            speed_span: PARTICLE_SPEED_SPAN,
            max_radius: PARTICLE_MAX_RADIUS,
            color: Rgba::rgb(PARTICLE_RGB),
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        require_positive("repel_radius", self.repel_radius)?;
        require_positive("connection_dist", self.connection_dist)?;
        require_positive("connection_width", self.connection_width)?;
        require_positive("max_radius", self.max_radius)?;
        if !(self.repel_damping.is_finite() && self.repel_damping >= 0.0) {
            return Err(ParamsError::NotFinite {
                name: "repel_damping",
                value: self.repel_damping,
            });
        }
        if !(self.speed_span.is_finite() && self.speed_span >= 0.0) {
            return Err(ParamsError::NotFinite {
                name: "speed_span",
                value: self.speed_span,
            });
        }
        Ok(())
    }
}

/// A proximity line between two particles (indices into the field).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    params: FieldParams,
}

impl ParticleField {
    /// Seed `count` particles uniformly inside `bounds`. Degenerate bounds
    /// (zero area) put every particle at the centre of the bounds.
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        bounds: Vec2,
        params: FieldParams,
        rng: &mut R,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        let bounds = sanitize_bounds(bounds);
        let degenerate = bounds.x * bounds.y <= 0.0;
        let particles = (0..count)
            .map(|_| {
                let pos = if degenerate {
                    bounds * 0.5
                } else {
                    Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y)
                };
                let vel = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * params.speed_span,
                    (rng.gen::<f32>() - 0.5) * params.speed_span,
                );
                Particle {
                    pos,
                    vel,
                    radius: rng.gen::<f32>() * params.max_radius,
                }
            })
            .collect::<Vec<_>>();
        if degenerate {
            log::warn!(
                "[particles] degenerate bounds {}x{}, seeded {} particles at one point",
                bounds.x,
                bounds.y,
                count
            );
        } else {
            log::info!("[particles] seeded {} particles", count);
        }
        Ok(Self {
            particles,
            bounds,
            params,
        })
    }

    /// Build a field from explicit particles.
    pub fn from_particles(
        particles: Vec<Particle>,
        bounds: Vec2,
        params: FieldParams,
    ) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            particles,
            bounds: sanitize_bounds(bounds),
            params,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// New bounds apply from the next step; particles are kept as they are.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = sanitize_bounds(bounds);
    }

    pub fn step(&mut self, pointer: &PointerState) {
        let radius = self.params.repel_radius;
        let damping = self.params.repel_damping;
        let bounds = self.bounds;
        let origin = pointer.position();
        for p in self.particles.iter_mut() {
            let away = p.pos - origin;
            let dist = away.length();
            if dist < radius {
                let force = (radius - dist) / radius;
                let dir = if dist > 0.0 { away / dist } else { Vec2::NEG_X };
                p.vel += dir * force * damping;
            }
            p.pos += p.vel;
            reflect_axis(p.pos.x, &mut p.vel.x, bounds.x);
            reflect_axis(p.pos.y, &mut p.vel.y, bounds.y);
        }
    }

    /// Unordered pairs closer than the connection distance, in index order.
    pub fn connections(&self) -> Vec<Connection> {
        let max = self.params.connection_dist;
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let dist = self.particles[i].pos.distance(self.particles[j].pos);
                if dist < max {
                    out.push(Connection {
                        a: i,
                        b: j,
                        alpha: 1.0 - dist / max,
                    });
                }
            }
        }
        out
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for p in &self.particles {
            surface.fill_disc(p.pos, p.radius, self.params.color);
        }
        for c in self.connections() {
            surface.stroke_line(
                self.particles[c.a].pos,
                self.particles[c.b].pos,
                self.params.connection_width,
                self.params.color.with_alpha(c.alpha),
            );
        }
    }
}

// Only an outward-pointing component flips: one flip per wall crossing.
#[inline]
fn reflect_axis(pos: f32, vel: &mut f32, bound: f32) {
    if pos < 0.0 {
        *vel = vel.abs();
    } else if pos > bound {
        *vel = -vel.abs();
    }
}

#[inline]
fn sanitize_bounds(bounds: Vec2) -> Vec2 {
    let fix = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Vec2::new(fix(bounds.x), fix(bounds.y))
}
