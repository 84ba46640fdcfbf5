use std::time::{Duration, Instant};

use eframe::egui;
use rand::Rng;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use super::colors::particle_color;

pub const PARTICLES_PER_BURST: usize = 8;
pub const PARTICLE_LIFETIME: Duration = Duration::from_millis(500);
const PARTICLE_BUFFER_SIZE: usize = PARTICLES_PER_BURST * 8;
const PARTICLE_SPEED_PX: f32 = 60.0;

#[derive(Clone, Debug)]
struct Particle {
    origin: egui::Pos2,
    velocity: egui::Vec2,
    born: Instant,
}

impl Particle {
    fn age_fraction(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.born).as_secs_f32() / PARTICLE_LIFETIME.as_secs_f32()
    }

    fn position(&self, now: Instant) -> egui::Pos2 {
        let elapsed = now.saturating_duration_since(self.born).as_secs_f32();
        self.origin + self.velocity * elapsed
    }
}

/// Short bursts drawn where food was eaten. Positions are in board-local pixels.
pub struct ParticleSystem {
    particles: AllocRingBuffer<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self {
            particles: AllocRingBuffer::new(PARTICLE_BUFFER_SIZE),
        }
    }

    pub fn burst(&mut self, origin: egui::Pos2, now: Instant) {
        let mut rng = rand::rng();
        let base_angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        for i in 0..PARTICLES_PER_BURST {
            let angle = base_angle + i as f32 * std::f32::consts::TAU / PARTICLES_PER_BURST as f32;
            let speed = PARTICLE_SPEED_PX * rng.random_range(0.6..1.4);
            self.particles.enqueue(Particle {
                origin,
                velocity: egui::vec2(angle.cos(), angle.sin()) * speed,
                born: now,
            });
        }
    }

    /// Drops expired particles. Older ones always sit at the front.
    pub fn prune(&mut self, now: Instant) {
        while self
            .particles
            .peek()
            .is_some_and(|oldest| now.saturating_duration_since(oldest.born) >= PARTICLE_LIFETIME)
        {
            self.particles.dequeue();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn paint(&self, painter: &egui::Painter, board_origin: egui::Pos2, radius: f32, now: Instant) {
        for particle in self.particles.iter() {
            let center = board_origin + particle.position(now).to_vec2();
            painter.circle_filled(center, radius, particle_color(particle.age_fraction(now)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_emits_eight_particles() {
        let mut particles = ParticleSystem::new();
        assert!(particles.is_empty());
        particles.burst(egui::pos2(10.0, 10.0), Instant::now());
        assert_eq!(particles.len(), PARTICLES_PER_BURST);
    }

    #[test]
    fn test_particles_expire_after_lifetime() {
        let start = Instant::now();
        let mut particles = ParticleSystem::new();
        particles.burst(egui::pos2(0.0, 0.0), start);
        particles.burst(egui::pos2(5.0, 5.0), start + Duration::from_millis(300));

        particles.prune(start + Duration::from_millis(499));
        assert_eq!(particles.len(), 2 * PARTICLES_PER_BURST);

        particles.prune(start + Duration::from_millis(500));
        assert_eq!(particles.len(), PARTICLES_PER_BURST);

        particles.prune(start + Duration::from_millis(800));
        assert!(particles.is_empty());
    }

    #[test]
    fn test_buffer_is_bounded() {
        let now = Instant::now();
        let mut particles = ParticleSystem::new();
        for _ in 0..100 {
            particles.burst(egui::pos2(0.0, 0.0), now);
        }
        assert_eq!(particles.len(), PARTICLE_BUFFER_SIZE);
    }
}
