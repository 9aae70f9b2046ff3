// Simple particle struct to keep track of individual position, velocity, and radius

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Uniform position inside width x height, each velocity component in
    // [-max_speed, max_speed), radius in (min_radius, max_radius].
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        max_speed: f64,
        min_radius: f64,
        max_radius: f64,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * max_speed;
        // gen() is in [0, 1), so subtracting from the top keeps max_radius reachable
        let radius = max_radius - rng.gen::<f64>() * (max_radius - min_radius);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    // One frame of Euler integration, then flip the velocity on any axis
    // that ended up outside [0, bound]. Position is never clamped, so a
    // particle can sit past the edge for a single frame.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
