use super::{contains, BooleanOptions, Edge, EdgeKey, Face, FaceKey, Inclusion, Orientation, PlanarSet};
use crate::core::{math::Vector2, traits::Real};
use crate::error::{RegionError, Result};
use crate::shape::Shape;
use slotmap::{SecondaryMap, SlotMap};
use static_aabb2d_index::AABB;

/// Planar multi-polygon: a set of closed faces (islands and holes) bounded by segments and arcs.
///
/// Edges and faces live in arenas addressed by [EdgeKey] and [FaceKey]. Counter clockwise faces
/// are islands and clockwise faces are holes (see [Polygon::orient_faces]).
///
/// # Examples
///
/// ```
/// # use planar_regions::region::*;
/// # use planar_regions::core::traits::*;
/// let mut polygon: Polygon = Polygon::new();
/// polygon
///     .add_vertex_loop([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 3.0, 0.0), (0.0, 3.0, 0.0)])
///     .unwrap();
/// assert_eq!(polygon.face_count(), 1);
/// assert_eq!(polygon.edge_count(), 4);
/// assert!(polygon.area().fuzzy_eq(12.0));
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<T = f64>
where
    T: Real,
{
    pub(crate) edges: SlotMap<EdgeKey, Edge<T>>,
    pub(crate) faces: SlotMap<FaceKey, Face>,
    pub(crate) index: PlanarSet<T>,
}

impl<T> Default for Polygon<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the edges of one face, see [Polygon::face_edges].
#[derive(Debug, Clone)]
pub struct FaceEdges<'a, T>
where
    T: Real,
{
    polygon: &'a Polygon<T>,
    current: Option<EdgeKey>,
    remaining: usize,
}

impl<'a, T> Iterator for FaceEdges<'a, T>
where
    T: Real,
{
    type Item = (EdgeKey, &'a Edge<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let key = self.current?;
        let edge = self.polygon.edges.get(key)?;
        self.remaining -= 1;
        self.current = edge.next;
        Some((key, edge))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            index: PlanarSet::new(),
        }
    }

    /// Add a closed face made of `shapes` (in loop order).
    ///
    /// Zero length shapes are skipped. Fails with [RegionError::IllegalParameters] if a coordinate
    /// is not finite, an arc is invalid, or consecutive shapes do not connect into a closed loop.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::region::*;
    /// # use planar_regions::shape::Shape;
    /// # use planar_regions::core::math::*;
    /// let mut polygon: Polygon = Polygon::new();
    /// let face = polygon
    ///     .add_face([
    ///         Shape::segment(vec2(0.0, 0.0), vec2(2.0, 0.0)),
    ///         Shape::arc(vec2(2.0, 0.0), vec2(0.0, 0.0), 1.0).unwrap(),
    ///     ])
    ///     .unwrap();
    /// assert_eq!(polygon.face(face).unwrap().size(), 2);
    ///
    /// // open loop
    /// assert!(polygon
    ///     .add_face([Shape::segment(vec2(0.0, 0.0), vec2(2.0, 0.0))])
    ///     .is_err());
    /// ```
    pub fn add_face<I>(&mut self, shapes: I) -> Result<FaceKey>
    where
        I: IntoIterator<Item = Shape<T>>,
    {
        let close_eps = BooleanOptions::<T>::new().pos_equal_eps;
        let mut loop_shapes = Vec::new();
        for shape in shapes {
            let shape = match shape {
                Shape::Segment { start, end } => {
                    if !(start.x.is_finite_value()
                        && start.y.is_finite_value()
                        && end.x.is_finite_value()
                        && end.y.is_finite_value())
                    {
                        return Err(RegionError::IllegalParameters(
                            "segment coordinates must be finite".to_string(),
                        ));
                    }
                    shape
                }
                Shape::Arc { start, end, bulge } => {
                    if start.fuzzy_eq(end) {
                        continue;
                    }
                    Shape::arc(start, end, bulge)?
                }
            };

            if shape.start().fuzzy_eq(shape.end()) {
                continue;
            }

            loop_shapes.push(shape);
        }

        if loop_shapes.len() < 2 {
            return Err(RegionError::IllegalParameters(format!(
                "face needs at least 2 non-degenerate shapes, got {}",
                loop_shapes.len()
            )));
        }

        let n = loop_shapes.len();
        for i in 0..n {
            let end = loop_shapes[i].end();
            let next_start = loop_shapes[(i + 1) % n].start();
            if !end.fuzzy_eq_eps(next_start, close_eps) {
                return Err(RegionError::IllegalParameters(format!(
                    "face loop is open between shape {} and shape {}",
                    i,
                    (i + 1) % n
                )));
            }
        }

        let keys: Vec<EdgeKey> = loop_shapes
            .into_iter()
            .map(|shape| self.insert_edge(shape))
            .collect();

        for i in 0..n {
            self.link(keys[i], keys[(i + 1) % n]);
        }

        Ok(self.create_face(keys[0], keys[n - 1], n))
    }

    /// Add a closed face from `(x, y, bulge)` vertexes, the bulge describes the shape from the
    /// vertex to the next one (the last vertex connects back to the first).
    pub fn add_vertex_loop<I>(&mut self, vertexes: I) -> Result<FaceKey>
    where
        I: IntoIterator<Item = (T, T, T)>,
    {
        let vertexes: Vec<(T, T, T)> = vertexes.into_iter().collect();
        let n = vertexes.len();
        let mut shapes = Vec::with_capacity(n);
        for i in 0..n {
            let (x1, y1, bulge) = vertexes[i];
            let (x2, y2, _) = vertexes[(i + 1) % n];
            let start = Vector2::new(x1, y1);
            let end = Vector2::new(x2, y2);
            if start.fuzzy_eq(end) {
                // repeated vertex
                continue;
            }
            shapes.push(Shape::arc(start, end, bulge)?);
        }

        self.add_face(shapes)
    }

    /// Add a circular face, counter clockwise if `ccw` (island) else clockwise (hole).
    pub fn add_circle(&mut self, center: Vector2<T>, radius: T, ccw: bool) -> Result<FaceKey> {
        self.add_face(Shape::circle(center, radius, ccw)?)
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn faces(&self) -> impl Iterator<Item = (FaceKey, &Face)> + '_ {
        self.faces.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &Edge<T>)> + '_ {
        self.edges.iter()
    }

    #[inline]
    pub fn face(&self, key: FaceKey) -> Option<&Face> {
        self.faces.get(key)
    }

    #[inline]
    pub fn edge(&self, key: EdgeKey) -> Option<&Edge<T>> {
        self.edges.get(key)
    }

    /// Edges of `face` in loop order starting at its first edge (empty for an unknown face).
    pub fn face_edges(&self, face: FaceKey) -> FaceEdges<'_, T> {
        let (current, remaining) = self
            .faces
            .get(face)
            .map_or((None, 0), |f| (Some(f.first), f.size));
        FaceEdges {
            polygon: self,
            current,
            remaining,
        }
    }

    /// Start points of the edges of `face` in loop order.
    pub fn face_vertexes(&self, face: FaceKey) -> Vec<Vector2<T>> {
        self.face_edges(face).map(|(_, e)| e.shape.start()).collect()
    }

    /// Start points of every edge, face by face.
    pub fn vertexes(&self) -> Vec<Vector2<T>> {
        self.faces
            .keys()
            .flat_map(|f| self.face_edges(f).map(|(_, e)| e.shape.start()))
            .collect()
    }

    /// Signed area of `face`, positive for counter clockwise loops.
    pub fn face_area(&self, face: FaceKey) -> T {
        self.face_edges(face)
            .fold(T::zero(), |acc, (_, e)| acc + e.shape.area_contribution())
    }

    /// Sum of the signed face areas (holes subtract when oriented clockwise).
    pub fn area(&self) -> T {
        self.faces
            .keys()
            .fold(T::zero(), |acc, f| acc + self.face_area(f))
    }

    pub fn face_orientation(&self, face: FaceKey) -> Orientation {
        let area = self.face_area(face);
        if area.fuzzy_eq_zero() {
            Orientation::NotOrientable
        } else if area > T::zero() {
            Orientation::Ccw
        } else {
            Orientation::Cw
        }
    }

    /// Merge of the bounding boxes of the edges of `face`.
    pub fn face_bounding_box(&self, face: FaceKey) -> Option<AABB<T>> {
        merge_boxes(self.face_edges(face).map(|(_, e)| e.shape.bounding_box()))
    }

    pub fn bounding_box(&self) -> Option<AABB<T>> {
        merge_boxes(self.edges.values().map(|e| e.shape.bounding_box()))
    }

    /// Winding number of `face` around `point`.
    pub fn face_winding_number(&self, face: FaceKey, point: Vector2<T>) -> i32 {
        self.face_edges(face)
            .map(|(_, e)| e.shape.winding_number(point))
            .sum()
    }

    /// Total winding number of all faces around `point`.
    pub fn winding_number(&self, point: Vector2<T>) -> i32 {
        self.faces
            .keys()
            .map(|f| self.face_winding_number(f, point))
            .sum()
    }

    /// Classify `point` as inside, outside or on the boundary of the polygon.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::region::*;
    /// # use planar_regions::core::math::*;
    /// let mut polygon: Polygon = Polygon::new();
    /// polygon.add_circle(vec2(0.0, 0.0), 2.0, true).unwrap();
    /// polygon.add_circle(vec2(0.0, 0.0), 1.0, false).unwrap();
    /// assert_eq!(polygon.classify(vec2(1.5, 0.0), 1e-5), Inclusion::Inside);
    /// assert_eq!(polygon.classify(vec2(0.5, 0.0), 1e-5), Inclusion::Outside);
    /// assert_eq!(polygon.classify(vec2(0.0, -2.0), 1e-5), Inclusion::Boundary);
    /// ```
    pub fn classify(&self, point: Vector2<T>, pos_equal_eps: T) -> Inclusion {
        contains::classify_point(self, point, pos_equal_eps)
    }

    /// Move every edge by `offset`.
    pub fn translate(&mut self, offset: Vector2<T>) {
        for (key, edge) in self.edges.iter_mut() {
            edge.shape = match edge.shape {
                Shape::Segment { start, end } => Shape::Segment {
                    start: start + offset,
                    end: end + offset,
                },
                Shape::Arc { start, end, bulge } => Shape::Arc {
                    start: start + offset,
                    end: end + offset,
                    bulge,
                },
            };
            self.index.add(key, edge.shape.bounding_box());
        }
    }

    /// Reverse the direction of every face.
    pub fn reverse(&mut self) {
        let keys: Vec<FaceKey> = self.faces.keys().collect();
        for face in keys {
            self.reverse_face(face);
        }
    }

    /// Reverse the direction of `face`, the first edge stays first.
    pub fn reverse_face(&mut self, face: FaceKey) {
        let Some(f) = self.faces.get(face).copied() else {
            return;
        };

        let keys: Vec<EdgeKey> = self.face_edges(face).map(|(k, _)| k).collect();
        for &key in &keys {
            if let Some(edge) = self.edges.get_mut(key) {
                std::mem::swap(&mut edge.next, &mut edge.prev);
                edge.shape = edge.shape.reversed();
            }
        }

        let new_last = self.edges.get(f.first).and_then(|e| e.prev).unwrap_or(f.first);
        if let Some(f) = self.faces.get_mut(face) {
            f.last = new_last;
        }

        self.refresh_face_arc_lengths(face);
    }

    /// Orient faces by nesting depth: faces nested inside an even number of other faces become
    /// counter clockwise, the others clockwise.
    pub fn orient_faces(&mut self) {
        let keys: Vec<FaceKey> = self.faces.keys().collect();
        let mut to_reverse = Vec::new();
        for &face in &keys {
            let Some(probe) = self
                .face_edges(face)
                .next()
                .map(|(_, e)| e.shape.midpoint())
            else {
                continue;
            };

            let depth = keys
                .iter()
                .filter(|&&other| other != face && self.face_winding_number(other, probe) != 0)
                .count();

            let wanted = if depth % 2 == 0 {
                Orientation::Ccw
            } else {
                Orientation::Cw
            };

            let current = self.face_orientation(face);
            if current != wanted && current != Orientation::NotOrientable {
                to_reverse.push(face);
            }
        }

        for face in to_reverse {
            self.reverse_face(face);
        }
    }

    /// Split `edge` at `point` (assumed on the edge), returns the edge ending at `point`.
    ///
    /// A new edge holding the first piece is inserted before `edge`, which keeps the second piece.
    /// If `edge` is the first edge of its face the new edge becomes the first edge. If `point` is
    /// within `pos_equal_eps` of an end point nothing is split.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_regions::region::*;
    /// # use planar_regions::core::math::*;
    /// let mut polygon: Polygon = Polygon::new();
    /// let face = polygon
    ///     .add_vertex_loop([(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 3.0, 0.0)])
    ///     .unwrap();
    /// let first = polygon.face(face).unwrap().first();
    /// let new_edge = polygon.add_vertex(first, vec2(1.0, 0.0), 1e-5).unwrap();
    /// assert_eq!(polygon.edge_count(), 4);
    /// assert_eq!(polygon.face(face).unwrap().first(), new_edge);
    /// assert!(polygon.edge(new_edge).unwrap().shape().end().fuzzy_eq(vec2(1.0, 0.0)));
    /// ```
    pub fn add_vertex(
        &mut self,
        edge: EdgeKey,
        point: Vector2<T>,
        pos_equal_eps: T,
    ) -> Result<EdgeKey> {
        let Some(current) = self.edges.get(edge) else {
            return Err(RegionError::IllegalParameters(
                "add_vertex on unknown edge".to_string(),
            ));
        };

        let prev = current.prev;
        let face = current.face;
        let arc_length = current.arc_length;
        let pieces = current.shape.split(point, pos_equal_eps);

        match pieces {
            [Some(first), Some(second)] => {
                let mut new_edge = Edge::new(first);
                new_edge.prev = prev;
                new_edge.next = Some(edge);
                new_edge.face = face;
                new_edge.arc_length = arc_length;
                let first_box = first.bounding_box();
                let new_key = self.edges.insert(new_edge);
                self.index.add(new_key, first_box);

                if let Some(p) = prev.and_then(|p| self.edges.get_mut(p)) {
                    p.next = Some(new_key);
                }

                if let Some(e) = self.edges.get_mut(edge) {
                    e.shape = second;
                    e.prev = Some(new_key);
                    e.arc_length = arc_length + first.length();
                }
                self.index.add(edge, second.bounding_box());

                if let Some(f) = face.and_then(|f| self.faces.get_mut(f)) {
                    if f.first == edge {
                        f.first = new_key;
                    }
                    f.size += 1;
                }

                Ok(new_key)
            }
            [None, _] => prev.ok_or_else(|| {
                RegionError::IllegalParameters("add_vertex at start of unlinked edge".to_string())
            }),
            [Some(_), None] => Ok(edge),
        }
    }

    pub(crate) fn insert_edge(&mut self, shape: Shape<T>) -> EdgeKey {
        let key = self.edges.insert(Edge::new(shape));
        self.index.add(key, shape.bounding_box());
        key
    }

    /// Create a face over the already linked loop from `first` to `last`.
    fn create_face(&mut self, first: EdgeKey, last: EdgeKey, size: usize) -> FaceKey {
        let face = self.faces.insert(Face { first, last, size });
        let keys: Vec<EdgeKey> = self.face_edges(face).map(|(k, _)| k).collect();
        for key in keys {
            if let Some(e) = self.edges.get_mut(key) {
                e.face = Some(face);
            }
        }
        self.refresh_face_arc_lengths(face);
        face
    }

    #[inline]
    pub(crate) fn link(&mut self, from: EdgeKey, to: EdgeKey) {
        if let Some(e) = self.edges.get_mut(from) {
            e.next = Some(to);
        }
        if let Some(e) = self.edges.get_mut(to) {
            e.prev = Some(from);
        }
    }

    /// Remove the edges from `from` to `to` (inclusive, following `next`), leaving the
    /// neighbouring edges with open links. Returns the number of removed edges.
    pub(crate) fn remove_chain(&mut self, from: EdgeKey, to: EdgeKey) -> usize {
        let Some(first) = self.edges.get(from) else {
            return 0;
        };
        let face = first.face;
        let before_chain = first.prev;

        let mut removed = Vec::new();
        let mut current = Some(from);
        let guard = self.edges.len();
        while let Some(key) = current {
            let Some(edge) = self.edges.get(key) else {
                break;
            };
            removed.push(key);
            if key == to || removed.len() >= guard {
                break;
            }
            current = edge.next;
            if current == Some(from) {
                break;
            }
        }

        let after_chain = removed
            .last()
            .and_then(|&k| self.edges.get(k))
            .and_then(|e| e.next);

        for &key in &removed {
            self.edges.remove(key);
            self.index.delete(key);
        }

        if let Some(e) = before_chain.and_then(|k| self.edges.get_mut(k)) {
            e.next = None;
        }
        if let Some(e) = after_chain.and_then(|k| self.edges.get_mut(k)) {
            e.prev = None;
        }

        if let Some(face) = face {
            let mut delete_face = false;
            if let Some(f) = self.faces.get_mut(face) {
                f.size = f.size.saturating_sub(removed.len());
                delete_face = f.size == 0;
                if !delete_face {
                    if let Some(k) = after_chain {
                        f.first = k;
                    }
                    if let Some(k) = before_chain {
                        f.last = k;
                    }
                }
            }
            if delete_face {
                self.faces.remove(face);
            }
        }

        removed.len()
    }

    /// Remove `face` together with its edges.
    pub(crate) fn delete_face(&mut self, face: FaceKey) {
        let keys: Vec<EdgeKey> = self.face_edges(face).map(|(k, _)| k).collect();
        for key in keys {
            self.edges.remove(key);
            self.index.delete(key);
        }
        self.faces.remove(face);
    }

    /// Move every edge and face of `other` into `self`, returning the handle remaps.
    pub(crate) fn absorb(
        &mut self,
        other: Polygon<T>,
    ) -> (SecondaryMap<EdgeKey, EdgeKey>, SecondaryMap<FaceKey, FaceKey>) {
        let mut edge_map = SecondaryMap::new();
        let mut face_map = SecondaryMap::new();

        for (old_key, edge) in other.edges.iter() {
            let new_key = self.edges.insert(edge.clone());
            self.index.add(new_key, edge.shape.bounding_box());
            edge_map.insert(old_key, new_key);
        }

        for (old_key, face) in other.faces.iter() {
            if let (Some(&first), Some(&last)) = (edge_map.get(face.first), edge_map.get(face.last))
            {
                let new_key = self.faces.insert(Face {
                    first,
                    last,
                    size: face.size,
                });
                face_map.insert(old_key, new_key);
            }
        }

        for (_, &new_key) in edge_map.iter() {
            if let Some(edge) = self.edges.get_mut(new_key) {
                edge.next = edge.next.and_then(|k| edge_map.get(k).copied());
                edge.prev = edge.prev.and_then(|k| edge_map.get(k).copied());
                edge.face = edge.face.and_then(|k| face_map.get(k).copied());
            }
        }

        (edge_map, face_map)
    }

    /// Walk `next` from `start` until the loop closes and create a face over it.
    pub(crate) fn build_face_loop(&mut self, start: EdgeKey) -> Result<FaceKey> {
        let guard = self.edges.len();
        let mut size = 0;
        let mut last;
        let mut current = start;
        loop {
            let Some(edge) = self.edges.get(current) else {
                return Err(RegionError::CannotCompleteBooleanOperation { unresolved: 1 });
            };
            size += 1;
            last = current;
            match edge.next {
                Some(next) if next == start => break,
                Some(next) if size < guard => current = next,
                _ => return Err(RegionError::CannotCompleteBooleanOperation { unresolved: 1 }),
            }
        }

        Ok(self.create_face(start, last, size))
    }

    pub(crate) fn refresh_face_arc_lengths(&mut self, face: FaceKey) {
        let keys: Vec<EdgeKey> = self.face_edges(face).map(|(k, _)| k).collect();
        let mut acc = T::zero();
        for key in keys {
            if let Some(edge) = self.edges.get_mut(key) {
                edge.arc_length = acc;
                acc = acc + edge.shape.length();
            }
        }
    }

    pub(crate) fn refresh_arc_lengths(&mut self) {
        let keys: Vec<FaceKey> = self.faces.keys().collect();
        for face in keys {
            self.refresh_face_arc_lengths(face);
        }
    }

    #[inline]
    pub(crate) fn refresh_index(&mut self) {
        self.index.rebuild();
    }

    /// `true` if `face` is a live face of this polygon.
    #[inline]
    pub(crate) fn has_face(&self, face: Option<FaceKey>) -> bool {
        face.map_or(false, |f| self.faces.contains_key(f))
    }
}

fn merge_boxes<T, I>(boxes: I) -> Option<AABB<T>>
where
    T: Real,
    I: IntoIterator<Item = AABB<T>>,
{
    boxes.into_iter().fold(None, |acc, b| {
        Some(match acc {
            None => b,
            Some(a) => AABB::new(
                num_traits::real::Real::min(a.min_x, b.min_x),
                num_traits::real::Real::min(a.min_y, b.min_y),
                num_traits::real::Real::max(a.max_x, b.max_x),
                num_traits::real::Real::max(a.max_y, b.max_y),
            ),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    fn square(size: f64) -> Polygon {
        let mut p = Polygon::new();
        p.add_vertex_loop([
            (0.0, 0.0, 0.0),
            (size, 0.0, 0.0),
            (size, size, 0.0),
            (0.0, size, 0.0),
        ])
        .unwrap();
        p
    }

    #[test]
    fn reverse_face_keeps_first_edge() {
        let mut p = square(2.0);
        let (face, f) = p.faces().next().map(|(k, f)| (k, *f)).unwrap();
        p.reverse_face(face);
        let reversed = p.face(face).unwrap();
        assert_eq!(reversed.first(), f.first());
        assert_eq!(p.face_orientation(face), Orientation::Cw);
        assert_fuzzy_eq!(p.area(), -4.0);
        let starts = p.face_vertexes(face);
        assert!(starts[0].fuzzy_eq(vec2(2.0, 0.0)));
        assert!(starts[1].fuzzy_eq(vec2(0.0, 0.0)));
        // loop closes through the last edge
        let last = p.edge(reversed.last()).unwrap();
        assert_eq!(last.next(), Some(f.first()));
    }

    #[test]
    fn remove_chain_leaves_open_links() {
        let mut p = square(2.0);
        let (face, f) = p.faces().next().map(|(k, f)| (k, *f)).unwrap();
        let second = p.edge(f.first()).unwrap().next().unwrap();
        let removed = p.remove_chain(second, second);
        assert_eq!(removed, 1);
        assert_eq!(p.edge_count(), 3);
        assert_eq!(p.edge(f.first()).unwrap().next(), None);
        assert_eq!(p.face(face).unwrap().size(), 3);
        assert_eq!(p.index.len(), 3);
    }

    #[test]
    fn remove_whole_loop_deletes_face() {
        let mut p = square(2.0);
        let f = *p.faces().next().unwrap().1;
        assert_eq!(p.remove_chain(f.first(), f.last()), 4);
        assert!(p.is_empty());
        assert_eq!(p.edge_count(), 0);
    }

    #[test]
    fn absorb_remaps_links() {
        let mut a = square(1.0);
        let mut b = square(1.0);
        b.translate(vec2(5.0, 0.0));
        let (edge_map, face_map) = a.absorb(b);
        assert_eq!(edge_map.len(), 4);
        assert_eq!(face_map.len(), 1);
        assert_eq!(a.face_count(), 2);
        for (key, _) in a.faces() {
            assert_eq!(a.face_edges(key).count(), 4);
        }
        assert_fuzzy_eq!(a.area(), 2.0);
    }

    #[test]
    fn orient_nested_faces() {
        let mut p = Polygon::new();
        p.add_circle(vec2(0.0, 0.0), 3.0, false).unwrap();
        p.add_circle(vec2(0.0, 0.0), 1.0, true).unwrap();
        p.orient_faces();
        assert_fuzzy_eq!(p.area(), std::f64::consts::PI * 8.0);
    }
}
