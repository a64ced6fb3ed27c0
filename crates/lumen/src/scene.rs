//! # Hero Scene
//!
//! Owns one generation pass and steps it per animation frame.
//!
//! The node graph is fixed once generated; the frame loop only produces a
//! group orientation for it. Particles are the one piece of mutable state
//! and accumulate their drift tick by tick.

use lumen_procedural::{
    group_orientation, Generation, GenerationSeed, GeneratorConfig, NodeGraph, ParticleCloud,
    StarField,
};
use lumen_shared::{Euler, Vec3};

/// Per-frame transforms produced by [`HeroScene::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneFrame {
    /// Rotation applied to the whole node graph and particle cloud.
    pub graph_rotation: Euler,
    /// Rotation applied to the star field.
    pub star_rotation: Euler,
}

/// Decorative hero scene.
#[derive(Debug)]
pub struct HeroScene {
    config: GeneratorConfig,
    generation: Generation,
    /// Edge vertices, rebuilt only on regeneration.
    lines: Vec<Vec3>,
}

impl HeroScene {
    /// Generates a scene from `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let generation = Generation::from_config(&config);
        Self::from_generation(config, generation)
    }

    /// Generates a scene from `config` with an explicit seed.
    #[must_use]
    pub fn with_seed(config: GeneratorConfig, seed: GenerationSeed) -> Self {
        let generation = Generation::with_seed(&config, seed);
        Self::from_generation(config, generation)
    }

    fn from_generation(config: GeneratorConfig, generation: Generation) -> Self {
        let lines = generation.graph.line_list();
        tracing::debug!(
            seed = generation.seed.value(),
            nodes = generation.graph.node_count(),
            edges = generation.graph.edge_count(),
            particles = generation.particles.len(),
            stars = generation.stars.stars().len(),
            "hero scene ready"
        );
        Self {
            config,
            generation,
            lines,
        }
    }

    /// Replaces every layer with a fresh pass.
    ///
    /// The old graph is dropped whole; nothing is carried over, including
    /// accumulated particle drift.
    pub fn regenerate(&mut self, seed: Option<GenerationSeed>) {
        let seed = seed.unwrap_or_else(GenerationSeed::random);
        let generation = Generation::with_seed(&self.config, seed);
        *self = Self::from_generation(self.config, generation);
    }

    /// Advances one animation frame.
    ///
    /// `elapsed` is scene time in seconds and `pointer` the normalised
    /// pointer position. Calling this twice with the same `elapsed` moves
    /// the particles twice.
    pub fn tick(&mut self, elapsed: f32, pointer: (f32, f32)) -> SceneFrame {
        self.generation.particles.advance(elapsed);
        SceneFrame {
            graph_rotation: group_orientation(elapsed, pointer),
            star_rotation: StarField::rotation_at(elapsed),
        }
    }

    /// Seed of the current generation.
    #[must_use]
    pub fn seed(&self) -> GenerationSeed {
        self.generation.seed
    }

    /// Node graph.
    #[must_use]
    pub fn graph(&self) -> &NodeGraph {
        &self.generation.graph
    }

    /// Particle cloud.
    #[must_use]
    pub fn particles(&self) -> &ParticleCloud {
        &self.generation.particles
    }

    /// Background stars.
    #[must_use]
    pub fn stars(&self) -> &StarField {
        &self.generation.stars
    }

    /// Edge vertices, two per edge.
    #[must_use]
    pub fn line_vertices(&self) -> &[Vec3] {
        &self.lines
    }
}
