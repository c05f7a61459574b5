use crate::sprite::Vertex;

use super::{PipelineId, TextureId};

/// One quad queued for the current frame.
#[derive(Debug, Clone)]
pub struct Submission {
    pub pipeline: PipelineId,
    pub texture: TextureId,
    pub depth: f32,
    pub verts: [Vertex; 4],
}

/// A contiguous run of sorted quads sharing pipeline and texture, drawable as
/// a single indexed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub pipeline: PipelineId,
    pub texture: TextureId,
    pub first_quad: u32,
    pub quad_count: u32,
}

/// Sorts `subs` by depth (stable, so equal depths keep submission order) and
/// plans the minimal sequence of draw calls: a new batch starts exactly where
/// the pipeline or texture changes.
pub fn plan_batches(subs: &mut [Submission]) -> Vec<Batch> {
    subs.sort_by(|a, b| a.depth.partial_cmp(&b.depth).unwrap_or(std::cmp::Ordering::Equal));

    let mut batches: Vec<Batch> = Vec::new();
    for (i, sub) in subs.iter().enumerate() {
        match batches.last_mut() {
            Some(b) if b.pipeline == sub.pipeline && b.texture == sub.texture => {
                b.quad_count += 1;
            }
            _ => batches.push(Batch {
                pipeline: sub.pipeline,
                texture: sub.texture,
                first_quad: i as u32,
                quad_count: 1,
            }),
        }
    }
    batches
}

/// Index pattern for `count` quads: two CCW triangles per quad, offset by four
/// vertices each.
pub fn quad_indices(count: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity((count * 6) as usize);
    for q in 0..count {
        let base = q * 4;
        out.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    out
}
