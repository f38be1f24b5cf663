use crate::core::constants::{
    NETWORK_LINK_ALPHA, NETWORK_LINK_DIST, NETWORK_LINK_RGB, NETWORK_NODE_SIZE, PARTICLE_SPEED_SPAN,
};
use crate::core::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

pub const NETWORK_SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JS",
    "React",
    "Django",
    "MySQL",
    "PostgreSQL",
    "REST API",
    "Git",
    "Firebase",
];

#[derive(Clone, Debug)]
pub struct SkillNode {
    pub label: String,
    /// Top-left corner of the node box.
    pub pos: Vec2,
    pub vel: Vec2,
}

impl SkillNode {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(NETWORK_NODE_SIZE * 0.5)
    }
}

/// Labelled nodes drifting inside a container, linked by faint lines when
/// close together.
pub struct SkillNetwork {
    nodes: Vec<SkillNode>,
    container: Vec2,
}

impl SkillNetwork {
    pub fn new<R: Rng + ?Sized>(labels: &[&str], container: Vec2, rng: &mut R) -> Self {
        let area = travel_area(container);
        let nodes = labels
            .iter()
            .map(|label| SkillNode {
                label: label.to_string(),
                pos: Vec2::new(rng.gen::<f32>() * area.x, rng.gen::<f32>() * area.y),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
                ),
            })
            .collect();
        Self { nodes, container }
    }

    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn resize(&mut self, container: Vec2) {
        self.container = container;
    }

    pub fn step(&mut self) {
        let area = travel_area(self.container);
        for n in self.nodes.iter_mut() {
            n.pos += n.vel;
            if n.pos.x <= 0.0 {
                n.vel.x = n.vel.x.abs();
            } else if n.pos.x >= area.x {
                n.vel.x = -n.vel.x.abs();
            }
            if n.pos.y <= 0.0 {
                n.vel.y = n.vel.y.abs();
            } else if n.pos.y >= area.y {
                n.vel.y = -n.vel.y.abs();
            }
        }
    }

    /// Index pairs of linked nodes.
    pub fn links(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                if self.nodes[i].pos.distance(self.nodes[j].pos) < NETWORK_LINK_DIST {
                    out.push((i, j));
                }
            }
        }
        out
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        let color = Rgba::rgb(NETWORK_LINK_RGB).with_alpha(NETWORK_LINK_ALPHA);
        for (i, j) in self.links() {
            surface.stroke_line(self.nodes[i].center(), self.nodes[j].center(), 1.0, color);
        }
    }
}

#[inline]
fn travel_area(container: Vec2) -> Vec2 {
    (container - Vec2::splat(NETWORK_NODE_SIZE)).max(Vec2::ZERO)
}
