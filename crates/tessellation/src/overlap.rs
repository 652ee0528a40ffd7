//! Growth of the merge groups around overlapping joins.

use crate::geom::OrientedRect;
use crate::graph::EdgeId;
use crate::stroke::ContourBuilder;
use crate::task_list::TaskList;

use core::mem;

impl<'l> ContourBuilder<'l> {
    /// Merges the edges of each overlap candidate, then walks the graph from
    /// the candidate's seed vertices and merges every edge whose stroke
    /// rectangle collides with the overlapping region.
    pub(crate) fn propagate_overlaps(&mut self) {
        if self.candidates.is_empty() {
            return;
        }

        stroke_log!(self, "{} overlap candidate(s)", self.candidates.len());

        let num_edges = self.graph.num_edges();
        let mut capsules: Vec<Option<OrientedRect<f32>>> = vec![None; num_edges];
        // Edges already tested for the current candidate hold its stamp.
        let mut visited: Vec<u32> = vec![0; num_edges];
        let mut tasks = TaskList::new(self.vertices.len());

        let candidates = mem::take(&mut self.candidates);
        for (idx, candidate) in candidates.iter().enumerate() {
            let stamp = idx as u32 + 1;
            let [e1, e2] = candidate.edges;
            let [r1, r2] = &candidate.rects;

            self.force_union(e1, e2);
            visited[e1.to_usize()] = stamp;
            visited[e2.to_usize()] = stamp;

            for seed in &candidate.seeds {
                tasks.push(seed.0);
            }

            while let Some(current) = tasks.pop() {
                let from = self.vertices[current as usize].position;
                for i in 0..self.vertices[current as usize].half_edges.len() {
                    let half_edge = self.vertices[current as usize].half_edges[i];
                    let edge: EdgeId = half_edge.edge;
                    if visited[edge.to_usize()] == stamp {
                        continue;
                    }
                    visited[edge.to_usize()] = stamp;

                    let to = self.vertices[half_edge.to.to_usize()].position;
                    let capsule = *capsules[edge.to_usize()]
                        .get_or_insert_with(|| OrientedRect::from_segment(from, to, half_edge.normal));

                    if capsule.intersects(r1) || capsule.intersects(r2) {
                        self.force_union(e1, edge);
                        tasks.push(half_edge.to.0);
                    }
                }
            }
        }

        self.candidates = candidates;
    }
}
