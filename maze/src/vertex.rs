use glam::IVec2;
use std::collections::HashMap;

/// Deduplicated map vertexes, indexed in the order they were first asked for
#[derive(Debug, Default, Clone)]
pub struct VertexTable {
    index: HashMap<IVec2, usize>,
    vertexes: Vec<IVec2>,
}

impl VertexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the vertex at `v`, adding it if it is new. Grid corners that
    /// land on the same spot (zero width lines) share one vertex.
    pub fn get_vertex_index(&mut self, v: IVec2) -> usize {
        let Self { index, vertexes } = self;
        *index.entry(v).or_insert_with(|| {
            vertexes.push(v);
            vertexes.len() - 1
        })
    }

    pub fn vertexes(&self) -> &[IVec2] {
        &self.vertexes
    }

    pub fn len(&self) -> usize {
        self.vertexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertexes.is_empty()
    }
}
