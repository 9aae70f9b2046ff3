// Particle field simulation. Owns the particle set, advances it one frame at a
// time, and draws particles plus proximity lines through a `Surface`.

use crate::color::Color;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub connection_distance: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub particle_color: Color,
    pub particle_opacity: f64,
    pub line_color: Color,
    pub max_line_opacity: f64,
    pub line_width: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: 80,
            connection_distance: 150.0,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            particle_color: Color::CYAN,
            particle_opacity: 0.6,
            line_color: Color::CYAN,
            max_line_opacity: 0.3,
            line_width: 0.5,
        }
    }
}

impl FieldConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_connection_distance(mut self, distance: f64) -> Self {
        self.connection_distance = distance;
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_colors(mut self, particle_color: Color, line_color: Color) -> Self {
        self.particle_color = particle_color;
        self.line_color = line_color;
        self
    }

    // Line opacity fades linearly from max_line_opacity at distance 0 down to
    // 0 at connection_distance. Anything at or past the threshold is 0.
    pub fn connection_opacity(&self, distance: f64) -> f64 {
        if distance >= self.connection_distance {
            return 0.0;
        }
        (1.0 - distance / self.connection_distance) * self.max_line_opacity
    }
}

// A line between particles `a` and `b` (indices into the field, a < b)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub opacity: f64,
}

// Walks every unordered pair (i, j), i < j, exactly once and yields the ones
// closer than the connection distance.
pub struct Connections<'a> {
    particles: &'a [Particle],
    config: &'a FieldConfig,
    i: usize,
    j: usize,
}

impl<'a> Iterator for Connections<'a> {
    type Item = Connection;

    fn next(&mut self) -> Option<Connection> {
        let len = self.particles.len();
        while self.i < len {
            if self.j >= len {
                self.i += 1;
                self.j = self.i + 1;
                continue;
            }
            let (i, j) = (self.i, self.j);
            self.j += 1;

            let p1 = &self.particles[i];
            let p2 = &self.particles[j];
            let distance = p1.distance_to(p2);
            if distance < self.config.connection_distance {
                return Some(Connection {
                    a: i,
                    b: j,
                    from: p1.pos,
                    to: p2.pos,
                    opacity: self.config.connection_opacity(distance),
                });
            }
        }
        None
    }
}

pub struct ParticleField<R = StdRng> {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
    rng: R,
}

impl ParticleField<StdRng> {
    // Field with the default look and an entropy-seeded generator
    pub fn new(width: f64, height: f64, count: usize) -> Self {
        let config = FieldConfig::default().with_count(count);
        ParticleField::with_rng(width, height, config, StdRng::from_entropy())
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn with_rng(width: f64, height: f64, config: FieldConfig, rng: R) -> Self {
        let mut field = ParticleField {
            width,
            height,
            config,
            particles: Vec::new(),
            rng,
        };
        field.seed();
        field
    }

    // The particle count becomes `particles.len()`; a later resize regenerates
    // that many random particles.
    pub fn from_particles(
        width: f64,
        height: f64,
        config: FieldConfig,
        particles: Vec<Particle>,
        rng: R,
    ) -> Self {
        ParticleField {
            width,
            height,
            config: config.with_count(particles.len()),
            particles,
            rng,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // New surface size means a whole new particle set, not a rescale of the old one
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.seed();
    }

    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    pub fn connections(&self) -> Connections<'_> {
        Connections {
            particles: &self.particles,
            config: &self.config,
            i: 0,
            j: 1,
        }
    }

    // Lines first so the particle fills end up on top
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear(self.width, self.height)?;

        for connection in self.connections() {
            surface.set_stroke(
                self.config.line_color,
                connection.opacity,
                self.config.line_width,
            )?;
            surface.line(connection.from, connection.to)?;
        }

        surface.set_fill(self.config.particle_color, self.config.particle_opacity)?;
        for particle in &self.particles {
            surface.fill_circle(particle.pos, particle.radius)?;
        }
        Ok(())
    }

    pub fn step<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        self.advance();
        self.draw(surface)
    }

    fn seed(&mut self) {
        let FieldConfig {
            count,
            max_speed,
            min_radius,
            max_radius,
            ..
        } = self.config;
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::random(&mut *rng, width, height, max_speed, min_radius, max_radius))
            .collect();
    }
}
