//! One-shot generation of every decorative layer.

use crate::config::GeneratorConfig;
use crate::graph::NodeGraph;
use crate::particles::ParticleCloud;
use crate::seed::GenerationSeed;
use crate::starfield::StarField;

/// Output of one generation pass.
///
/// Nothing here is updated in place except the particle positions, which the
/// frame loop nudges every tick.
#[derive(Clone, Debug)]
pub struct Generation {
    /// Seed the pass was drawn from; reuse it to reproduce the scene.
    pub seed: GenerationSeed,
    /// Node graph.
    pub graph: NodeGraph,
    /// Particle cloud.
    pub particles: ParticleCloud,
    /// Background star field.
    pub stars: StarField,
}

impl Generation {
    /// Generates all layers from `config`.
    ///
    /// Uses `config.seed` when set, otherwise a fresh random seed.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let seed = config
            .seed
            .map_or_else(GenerationSeed::random, GenerationSeed::new);
        Self::with_seed(config, seed)
    }

    /// Generates all layers from `config` with an explicit seed.
    #[must_use]
    pub fn with_seed(config: &GeneratorConfig, seed: GenerationSeed) -> Self {
        let graph = NodeGraph::generate(&config.graph, &mut seed.derive(GenerationSeed::GRAPH).rng());
        let particles = ParticleCloud::generate(
            &config.particles,
            &mut seed.derive(GenerationSeed::PARTICLES).rng(),
        );
        let stars = StarField::generate(&config.stars, &mut seed.derive(GenerationSeed::STARS).rng());

        tracing::debug!(seed = seed.value(), "generation pass complete");

        Self {
            seed,
            graph,
            particles,
            stars,
        }
    }
}
