//! Headless crowd playback.
//!
//! Drives the same per-tick / per-draw sequence a renderer would: advance
//! every instance, then pack one uniform block per instance and upload the
//! world matrix plus the palette the active skinning mode consumes. Set
//! `RUST_LOG=debug` for clip details.

mod wave;

use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use skinpose::{
    CharacterAsset, Crowd, CrowdLayout, PerDrawCallUniforms, SkeletonLayout, SkinningMode,
};

const INSTANCES: usize = 64;
const FRAMES: usize = 60;
const TIME_STEP: f32 = 1.0 / 30.0;
const TICK: f32 = 1.0 / 60.0;
const TICKS_PER_MODE: usize = 600;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clip = wave::wave_clip(SkeletonLayout::default(), FRAMES, TIME_STEP)?;
    log::info!(
        "Loaded clip '{}': {} frames, {} bones, {:.2}s",
        clip.name,
        clip.frame_count(),
        clip.bone_count(),
        clip.duration()
    );

    let asset = CharacterAsset::new("wave-rig", Arc::new(clip));
    let mut crowd = Crowd::new(asset, CrowdLayout::default());
    crowd.spawn_grid(INSTANCES, &mut StdRng::seed_from_u64(0x5eed));

    let mut block = PerDrawCallUniforms::default();
    for mode in SkinningMode::ALL {
        let start = Instant::now();
        let mut uploaded = 0usize;

        for _ in 0..TICKS_PER_MODE {
            crowd.tick(TICK);
            for index in 0..crowd.len() {
                if let Some(bones) = crowd.write_draw_call(index, &mut block) {
                    // The selected shader variant only reads one of the two palettes.
                    uploaded += std::mem::size_of_val(&block.world)
                        + block.palette_bytes(mode, bones).len();
                }
            }
        }

        let elapsed = start.elapsed();
        let draws = TICKS_PER_MODE * crowd.len();
        log::info!(
            "[{mode}] {draws} draw calls in {:.2?} ({:.2} us/draw, {:.1} MiB uploaded)",
            elapsed,
            elapsed.as_secs_f64() * 1e6 / draws as f64,
            uploaded as f64 / (1024.0 * 1024.0)
        );
    }

    Ok(())
}
