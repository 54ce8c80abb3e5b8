/*
 * Simulation Module
 *
 * Owns the flock and advances it one tick at a time:
 * decide (steering + color) -> integrate -> wrap edges.
 *
 * With UpdateOrder::Snapshot every decision reads a copy of the flock taken
 * before the tick, so the result does not depend on iteration order and the
 * per-boid work can run in parallel. UpdateOrder::Sequential lets later boids
 * see earlier boids already moved in the same tick.
 *
 * The population is rebuilt from scratch whenever the agent count changes,
 * using rejection sampling to keep new boids apart.
 */

use nannou::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{info, trace, warn};

use crate::boid::{Boid, FlockDecision};
use crate::config::SimulationConfig;
use crate::params::{SimulationParams, UpdateOrder};
use crate::vector::Vector2Ext;

// Below this the separation requirement is dropped entirely
const MIN_RELAXED_SEPARATION: f32 = 0.01;

pub struct Simulation {
    boids: Vec<Boid>,
    width: f32,
    height: f32,
    min_separation: f32,
    max_placement_attempts: usize,
    // Separation actually achieved by the last rebuild
    placed_separation: f32,
    rng: SmallRng,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut simulation = Self::with_boids(config, Vec::new());
        simulation.rng = rng;
        simulation.resize(config.params.agent_count, &config.params);
        simulation
    }

    // Start from an explicit flock instead of random placement
    pub fn with_boids(config: &SimulationConfig, boids: Vec<Boid>) -> Self {
        Self {
            boids,
            width: config.width,
            height: config.height,
            min_separation: config.min_separation,
            max_placement_attempts: config.max_placement_attempts,
            placed_separation: config.min_separation,
            rng: SmallRng::seed_from_u64(config.seed.unwrap_or(0)),
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn placed_separation(&self) -> f32 {
        self.placed_separation
    }

    // Advance every boid by one frame
    pub fn tick(&mut self, params: &SimulationParams) {
        match params.update_order {
            UpdateOrder::Snapshot => self.tick_snapshot(params),
            UpdateOrder::Sequential => self.tick_sequential(params),
        }
        trace!(boids = self.boids.len(), order = ?params.update_order, "tick");
    }

    fn tick_snapshot(&mut self, params: &SimulationParams) {
        // Create a copy of boids for the calculations
        let snapshot = self.boids.clone();
        let (width, height) = (self.width, self.height);

        let step = |(i, boid): (usize, &mut Boid)| {
            boid.flock(i, &snapshot, params);
            boid.update(params.max_speed);
            boid.edges(width, height);
        };

        if params.enable_parallel {
            self.boids.par_iter_mut().enumerate().for_each(step);
        } else {
            self.boids.iter_mut().enumerate().for_each(step);
        }
    }

    fn tick_sequential(&mut self, params: &SimulationParams) {
        for i in 0..self.boids.len() {
            let decision = FlockDecision::decide(i, &self.boids, params);
            let boid = &mut self.boids[i];
            boid.apply_decision(decision);
            boid.update(params.max_speed);
            boid.edges(self.width, self.height);
        }
    }

    // Rebuild the flock if its size differs from `count`
    pub fn resize(&mut self, count: usize, params: &SimulationParams) {
        if self.boids.len() == count {
            return;
        }
        self.repopulate(count, params);
    }

    // Replace the whole flock with `count` freshly placed boids
    pub fn repopulate(&mut self, count: usize, params: &SimulationParams) {
        let mut separation = self.min_separation;
        let mut boids: Vec<Boid> = Vec::with_capacity(count);

        while boids.len() < count {
            match self.place_one(&boids, separation, params.max_speed) {
                Some(boid) => boids.push(boid),
                None => {
                    let relaxed = if separation / 2.0 < MIN_RELAXED_SEPARATION {
                        0.0
                    } else {
                        separation / 2.0
                    };
                    warn!(
                        placed = boids.len(),
                        requested = count,
                        from = separation,
                        to = relaxed,
                        "Domain too crowded, relaxing minimum separation"
                    );
                    separation = relaxed;
                }
            }
        }

        self.boids = boids;
        self.placed_separation = separation;
        info!(boids = count, separation, "Rebuilt flock");
    }

    // Try up to max_placement_attempts random positions
    fn place_one(&mut self, placed: &[Boid], separation: f32, speed: f32) -> Option<Boid> {
        for _ in 0..self.max_placement_attempts {
            let x = self.rng.gen_range(0.0..self.width);
            let y = self.rng.gen_range(0.0..self.height);
            let candidate = pt2(x, y);

            let clear = placed
                .iter()
                .all(|other| other.position.distance_to(candidate) >= separation);
            if clear {
                return Some(Boid::spawn(x, y, speed, &mut self.rng));
            }
        }
        None
    }
}
