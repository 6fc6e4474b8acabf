//! Falling particle field with a fixed particle count.
//!
//! Particles drift down one step per tick and are recycled to the top once
//! they pass the floor. Recycling redraws x/z, so a reset particle pops to a
//! new column instead of wrapping smoothly.

use crate::error::CardResult;
use crate::params::ParticleParams;
use glam::Vec3;
use rand::prelude::*;

pub struct ParticleField<R: Rng = StdRng> {
    positions: Vec<Vec3>,
    params: ParticleParams,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn seeded(params: ParticleParams, seed: u64) -> CardResult<Self> {
        Self::new(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Allocate `params.count` particles at random spawn positions.
    pub fn new(params: ParticleParams, mut rng: R) -> CardResult<Self> {
        params.validate()?;
        let positions = (0..params.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(params.spawn_x.0..params.spawn_x.1),
                    rng.gen_range(params.spawn_y.0..params.spawn_y.1),
                    rng.gen_range(params.spawn_z.0..params.spawn_z.1),
                )
            })
            .collect();
        Ok(Self {
            positions,
            params,
            rng,
        })
    }

    /// One nominal (60 Hz) tick.
    #[inline]
    pub fn tick(&mut self) -> usize {
        self.advance(1.0)
    }

    /// Move every particle down by `steps` nominal ticks and recycle the ones
    /// that crossed the floor. Returns how many were recycled.
    pub fn advance(&mut self, steps: f32) -> usize {
        let drop = self.params.fall_step * steps.max(0.0);
        let mut recycled = 0;
        for p in &mut self.positions {
            p.y -= drop;
            if p.y < self.params.floor_y {
                p.y = self.params.recycle_y;
                p.x = self
                    .rng
                    .gen_range(self.params.spawn_x.0..self.params.spawn_x.1);
                p.z = self
                    .rng
                    .gen_range(self.params.spawn_z.0..self.params.spawn_z.1);
                recycled += 1;
            }
        }
        recycled
    }

    /// Flat `[x0, y0, z0, x1, ...]` view in a stable particle order.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }
}
