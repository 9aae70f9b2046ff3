//! Frame-level behaviour of the particle field, drawn onto a surface that
//! records every call instead of painting.

use particle_field_web::{Color, FieldConfig, Particle, ParticleField, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::Infallible;

#[derive(Debug, PartialEq)]
enum Op {
    Clear { width: f64, height: f64 },
    Stroke { color: Color, opacity: f64, line_width: f64 },
    Line { from: [f64; 2], to: [f64; 2] },
    Fill { color: Color, opacity: f64 },
    Circle { center: [f64; 2], radius: f64 },
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn lines(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
    }

    fn circles(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).collect()
    }

    fn stroke_opacities(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Stroke { opacity, .. } => Some(*opacity),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Clear { width, height });
        Ok(())
    }

    fn set_stroke(&mut self, color: Color, opacity: f64, line_width: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Stroke { color, opacity, line_width });
        Ok(())
    }

    fn line(&mut self, from: [f64; 2], to: [f64; 2]) -> Result<(), Infallible> {
        self.ops.push(Op::Line { from, to });
        Ok(())
    }

    fn set_fill(&mut self, color: Color, opacity: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Fill { color, opacity });
        Ok(())
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Circle { center, radius });
        Ok(())
    }
}

fn two_particle_field(b_x: f64) -> ParticleField {
    let particles = vec![
        Particle::new(0.0, 0.0, 0.0, 0.0, 2.0),
        Particle::new(b_x, 0.0, 0.0, 0.0, 1.5),
    ];
    ParticleField::from_particles(
        800.0,
        600.0,
        FieldConfig::default(),
        particles,
        StdRng::seed_from_u64(11),
    )
}

#[test]
fn close_pair_draws_one_faded_line_and_two_circles() {
    let field = two_particle_field(100.0);
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface).unwrap();

    assert_eq!(surface.ops[0], Op::Clear { width: 800.0, height: 600.0 });
    assert_eq!(
        surface.lines(),
        vec![&Op::Line { from: [0.0, 0.0], to: [100.0, 0.0] }]
    );
    let opacities = surface.stroke_opacities();
    assert_eq!(opacities.len(), 1);
    assert!((opacities[0] - 0.1).abs() < 1e-12, "opacity {}", opacities[0]);

    assert_eq!(
        surface.circles(),
        vec![
            &Op::Circle { center: [0.0, 0.0], radius: 2.0 },
            &Op::Circle { center: [100.0, 0.0], radius: 1.5 },
        ]
    );
}

#[test]
fn distant_pair_draws_no_lines() {
    let field = two_particle_field(200.0);
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface).unwrap();

    assert!(surface.lines().is_empty());
    assert!(surface.stroke_opacities().is_empty());
    assert_eq!(surface.circles().len(), 2);
}

#[test]
fn pair_at_threshold_is_not_drawn() {
    let field = two_particle_field(150.0);
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface).unwrap();
    assert!(surface.lines().is_empty());
}

#[test]
fn lines_are_drawn_before_particles() {
    let field = ParticleField::with_rng(
        300.0,
        300.0,
        FieldConfig::default().with_count(30),
        StdRng::seed_from_u64(5),
    );
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface).unwrap();

    let last_line = surface
        .ops
        .iter()
        .rposition(|op| matches!(op, Op::Line { .. }))
        .expect("a dense 300x300 field has connections");
    let first_circle = surface
        .ops
        .iter()
        .position(|op| matches!(op, Op::Circle { .. }))
        .unwrap();
    assert!(last_line < first_circle);
    assert_eq!(surface.circles().len(), 30);
}

#[test]
fn strokes_and_fills_use_configured_look() {
    let field = two_particle_field(30.0);
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface).unwrap();

    for op in &surface.ops {
        match op {
            Op::Stroke { color, line_width, .. } => {
                assert_eq!(*color, Color::CYAN);
                assert_eq!(*line_width, 0.5);
            }
            Op::Fill { color, opacity } => {
                assert_eq!(*color, Color::CYAN);
                assert_eq!(*opacity, 0.6);
            }
            _ => {}
        }
    }
}

#[test]
fn coincident_particles_get_full_opacity_for_every_pair() {
    let n = 10;
    let particles = (0..n).map(|_| Particle::new(50.0, 50.0, 0.0, 0.0, 2.0)).collect();
    let field = ParticleField::from_particles(
        100.0,
        100.0,
        FieldConfig::default(),
        particles,
        StdRng::seed_from_u64(2),
    );
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface).unwrap();

    let opacities = surface.stroke_opacities();
    assert_eq!(opacities.len(), n * (n - 1) / 2);
    assert!(opacities.iter().all(|o| (o - 0.3).abs() < 1e-12));
}

#[test]
fn step_advances_then_draws() {
    let particles = vec![Particle::new(799.9, 10.0, 0.2, 0.0, 2.0)];
    let mut field = ParticleField::from_particles(
        800.0,
        600.0,
        FieldConfig::default(),
        particles,
        StdRng::seed_from_u64(4),
    );
    let mut surface = RecordingSurface::default();
    field.step(&mut surface).unwrap();

    let p = field.particles()[0];
    assert!(p.vel[0] < 0.0);
    assert!(surface
        .circles()
        .iter()
        .any(|op| matches!(op, Op::Circle { center, .. } if center[0] > 800.0)));

    field.step(&mut surface).unwrap();
    assert!(field.particles()[0].pos[0] <= 800.0);
}

#[test]
fn resize_redraws_at_new_size() {
    let mut field = ParticleField::with_rng(
        800.0,
        600.0,
        FieldConfig::default(),
        StdRng::seed_from_u64(8),
    );
    field.resize(1024.0, 768.0);

    let mut surface = RecordingSurface::default();
    field.draw(&mut surface).unwrap();
    assert_eq!(surface.ops[0], Op::Clear { width: 1024.0, height: 768.0 });
    assert_eq!(surface.circles().len(), 80);
}
