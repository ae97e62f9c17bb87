/// Dense, fixed-size 2D store of `f32` values.
///
/// Elements live in one flat row-major buffer: `(col, row)` sits at offset
/// `row * width + col`. The shape is set at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Builds a `width x height` matrix with every element set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Matrix {
        Matrix {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads element `(col, row)`.
    ///
    /// # Panics
    /// Panics if `col >= width` or `row >= height`.
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.data[self.offset(col, row)]
    }

    /// Mutable access to element `(col, row)`.
    ///
    /// # Panics
    /// Panics if `col >= width` or `row >= height`.
    pub fn get_mut(&mut self, col: usize, row: usize) -> &mut f32 {
        let offset = self.offset(col, row);
        &mut self.data[offset]
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: f32) {
        for x in self.iter_mut() {
            *x = value;
        }
    }

    /// All elements in storage (row-major) order.
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, f32> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    fn offset(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.width && row < self.height,
            "({col}, {row}) out of range for a {}x{} matrix",
            self.width,
            self.height
        );
        row * self.width + col
    }
}
