//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for efficient hit testing on the
//! canvas. This reduces hit testing from O(n) to O(log n) for point queries.

use crate::geometry::{Point, Rect, Size};
use crate::types::NodeId;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// A spatial entry representing a node's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub node_id: NodeId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(node_id: NodeId, position: Point, size: Size) -> Self {
        Self {
            node_id,
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + size.width,
            max_y: position.y + size.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

/// Spatial index for canvas nodes using an R-tree.
/// Provides O(log n) point queries and range queries for hit testing.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build a spatial index from an iterator of node bounds.
    pub fn from_nodes<I>(nodes: I) -> Self
    where
        I: Iterator<Item = (NodeId, Point, Size)>,
    {
        let entries: Vec<SpatialEntry> = nodes
            .map(|(id, pos, size)| SpatialEntry::new(id, pos, size))
            .collect();

        let entries_map: HashMap<NodeId, SpatialEntry> =
            entries.iter().map(|e| (e.node_id, *e)).collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, node_id: NodeId, position: Point, size: Size) {
        if let Some(old_entry) = self.entries.remove(&node_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(node_id, position, size);
        self.tree.insert(entry);
        self.entries.insert(node_id, entry);
    }

    pub fn remove(&mut self, node_id: NodeId) -> bool {
        if let Some(entry) = self.entries.remove(&node_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, node_id: NodeId, position: Point, size: Size) {
        self.insert(node_id, position, size);
    }

    /// Query all nodes whose bounds contain the given point (in graph
    /// coordinates).
    pub fn query_point(&self, p: Point) -> Vec<NodeId> {
        let point_envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.node_id)
            .collect()
    }

    /// Query all nodes whose bounds intersect a rectangular region.
    pub fn query_rect(&self, rect: Rect) -> Vec<NodeId> {
        let envelope = AABB::from_corners([rect.min.x, rect.min.y], [rect.max.x, rect.max.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.node_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
