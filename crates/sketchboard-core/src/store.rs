//! Shape storage and selection.

use crate::shapes::Shape;
use kurbo::Point;

/// The committed shapes of a board, in z-order, plus the current selection.
///
/// Invariant: `selection` is either `None` or a valid index into `shapes`.
/// All mutation goes through the methods below so the invariant is kept here.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    /// Shapes in z-order (back to front).
    shapes: Vec<Shape>,
    /// Index of the selected shape.
    selection: Option<usize>,
}

impl ShapeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of all others. Returns its index.
    pub fn add(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Remove the shape at `index`.
    ///
    /// Out-of-range indices are ignored. Removing the selected shape clears the
    /// selection; removing a shape below it shifts the selection down so it keeps
    /// pointing at the same shape.
    pub fn remove_at(&mut self, index: usize) -> Option<Shape> {
        if index >= self.shapes.len() {
            log::warn!("remove_at: index {} out of range ({} shapes)", index, self.shapes.len());
            return None;
        }
        let removed = self.shapes.remove(index);
        self.selection = match self.selection {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };
        Some(removed)
    }

    /// Replace the shape at `index`, keeping its z-order position.
    pub fn replace_at(&mut self, index: usize, shape: Shape) {
        match self.shapes.get_mut(index) {
            Some(slot) => *slot = shape,
            None => log::warn!(
                "replace_at: index {} out of range ({} shapes)",
                index,
                self.shapes.len()
            ),
        }
    }

    /// Set the selection. An out-of-range index selects nothing.
    pub fn select(&mut self, index: Option<usize>) {
        self.selection = index.filter(|&i| i < self.shapes.len());
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Index of the selected shape.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.and_then(|i| self.shapes.get(i))
    }

    /// Check if the shape at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection == Some(index)
    }

    /// Find the topmost shape containing `point`.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> Option<usize> {
        // Reverse z-order so overlapping shapes resolve to the visible one.
        self.shapes
            .iter()
            .enumerate()
            .rev()
            .find(|(_, shape)| shape.hit_test(point, tolerance))
            .map(|(index, _)| index)
    }

    /// Get a shape by index.
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// All shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterate shapes in z-order with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.shapes.iter().enumerate()
    }

    /// Remove all shapes and the selection.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.selection = None;
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}
