use super::super::*;

impl Grid {
    // === Whole-grid views for rendering ===
    #[inline]
    pub fn kinds(&self) -> &[ElementKind] {
        &self.kinds
    }

    #[inline]
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    // === Raw pointers for JS interop ===
    pub fn kinds_ptr(&self) -> *const ElementKind {
        self.kinds.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }
}
