use crate::elements::ElementKind;
use crate::palette::to_rgba;

use super::WorldCore;

pub(super) fn get_grid(world: &WorldCore) -> &[ElementKind] {
    world.grid.kinds()
}

pub(super) fn get_color_buffer(world: &WorldCore) -> &[u32] {
    world.grid.colors()
}

pub(super) fn types_ptr(world: &WorldCore) -> *const u8 {
    // ElementKind is repr(u8): the kinds array reads as element ids.
    world.grid.kinds_ptr() as *const u8
}

pub(super) fn color_buffer_rgba(world: &WorldCore) -> Vec<u8> {
    let colors = world.grid.colors();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        colors.par_iter().flat_map_iter(|&c| to_rgba(c)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        colors.iter().flat_map(|&c| to_rgba(c)).collect()
    }
}
